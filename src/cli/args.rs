//! Command-line argument definitions and operand validation

use crate::error::{Error, Result};
use clap::{Parser, ValueEnum};

/// Compute the greatest common divisor of two integers
#[derive(Parser, Debug)]
#[command(name = "euclid", author, version, about, long_about = None)]
pub struct Cli {
    /// The two integers, in base 10 (a leading '-' marks a negative value)
    ///
    /// Options go before the operands. From the first operand on, every
    /// argument is an operand, so `-abc` is reported as an invalid integer
    /// rather than as an unknown flag.
    #[arg(value_name = "INTEGER", num_args = 0.., allow_hyphen_values = true)]
    pub operands: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Also print every reduction step of the algorithm
    #[arg(long)]
    pub steps: bool,

    /// When to use colors
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
}

/// Output format for the computed result
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Bare decimal result
    Human,
    /// One JSON object per line
    Jsonl,
}

/// Color output preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when writing to a terminal
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl ColorChoice {
    /// Resolves the preference for a stream, given whether it is a terminal
    ///
    /// termcolor's own `Auto` only inspects `TERM`/`NO_COLOR`, so piped output
    /// has to be switched off here.
    pub fn resolve(self, is_terminal: bool) -> termcolor::ColorChoice {
        match self {
            ColorChoice::Always => termcolor::ColorChoice::Always,
            ColorChoice::Never => termcolor::ColorChoice::Never,
            ColorChoice::Auto if is_terminal => termcolor::ColorChoice::Auto,
            ColorChoice::Auto => termcolor::ColorChoice::Never,
        }
    }
}

/// Validates the raw operand list and parses both integers
///
/// The count is checked before any parsing; operands are then parsed left to
/// right and the first failure is returned.
///
/// # Errors
///
/// - [`Error::ArgumentCount`] unless exactly two operands were given
/// - [`Error::ArgumentParse`] if an operand is not a base-10 `i32`
pub fn parse_operands<S: AsRef<str>>(operands: &[S]) -> Result<(i32, i32)> {
    let [a, b] = operands else {
        return Err(Error::ArgumentCount {
            given: operands.len(),
        });
    };

    Ok((parse_operand(a.as_ref())?, parse_operand(b.as_ref())?))
}

fn parse_operand(input: &str) -> Result<i32> {
    input.parse::<i32>().map_err(|source| Error::ArgumentParse {
        input: input.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_operands() {
        assert_eq!(parse_operands(&["48", "18"]).unwrap(), (48, 18));
        assert_eq!(parse_operands(&["-12", "+8"]).unwrap(), (-12, 8));
    }

    #[test]
    fn test_wrong_operand_count() {
        for operands in [vec![], vec!["1"], vec!["1", "2", "3"]] {
            match parse_operands(&operands) {
                Err(Error::ArgumentCount { given }) => assert_eq!(given, operands.len()),
                other => panic!("expected ArgumentCount, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_count_checked_before_parsing() {
        assert!(matches!(
            parse_operands(&["abc"]),
            Err(Error::ArgumentCount { given: 1 })
        ));
    }

    #[test]
    fn test_non_numeric_operand() {
        match parse_operands(&["12", "abc"]) {
            Err(Error::ArgumentParse { input, .. }) => assert_eq!(input, "abc"),
            other => panic!("expected ArgumentParse, got {:?}", other),
        }
    }

    #[test]
    fn test_first_invalid_operand_is_reported() {
        match parse_operands(&["x", "y"]) {
            Err(Error::ArgumentParse { input, .. }) => assert_eq!(input, "x"),
            other => panic!("expected ArgumentParse, got {:?}", other),
        }
    }

    #[test]
    fn test_rejected_integer_forms() {
        for text in ["", "1.5", " 7", "0x10", "2147483648", "-2147483649"] {
            assert!(
                matches!(
                    parse_operands(&[text, "1"]),
                    Err(Error::ArgumentParse { .. })
                ),
                "{:?} should not parse",
                text
            );
        }
    }

    #[test]
    fn test_i32_bounds_parse() {
        assert_eq!(
            parse_operands(&["-2147483648", "2147483647"]).unwrap(),
            (i32::MIN, i32::MAX)
        );
    }

    #[test]
    fn test_cli_accepts_negative_operands() {
        let cli = Cli::try_parse_from(["euclid", "-12", "8"]).unwrap();
        assert_eq!(cli.operands, vec!["-12", "8"]);
        assert_eq!(cli.format, OutputFormat::Human);
        assert_eq!(cli.color, ColorChoice::Auto);
        assert!(!cli.steps);
    }

    #[test]
    fn test_cli_collects_any_operand_count() {
        let cli = Cli::try_parse_from(["euclid"]).unwrap();
        assert!(cli.operands.is_empty());

        let cli = Cli::try_parse_from(["euclid", "1", "2", "3"]).unwrap();
        assert_eq!(cli.operands.len(), 3);
    }

    #[test]
    fn test_cli_options() {
        let cli = Cli::try_parse_from([
            "euclid", "--format", "jsonl", "--steps", "--color", "never", "48", "18",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Jsonl);
        assert_eq!(cli.color, ColorChoice::Never);
        assert!(cli.steps);
        assert_eq!(cli.operands, vec!["48", "18"]);
    }

    #[test]
    fn test_cli_hyphenated_words_are_operands() {
        let cli = Cli::try_parse_from(["euclid", "5", "-abc"]).unwrap();
        assert_eq!(cli.operands, vec!["5", "-abc"]);

        let cli = Cli::try_parse_from(["euclid", "-x", "5"]).unwrap();
        assert_eq!(cli.operands, vec!["-x", "5"]);

        let cli = Cli::try_parse_from(["euclid", "-h1", "2"]).unwrap();
        assert_eq!(cli.operands, vec!["-h1", "2"]);

        match parse_operands(&cli.operands) {
            Err(Error::ArgumentParse { input, .. }) => assert_eq!(input, "-h1"),
            other => panic!("expected ArgumentParse, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_options_after_first_operand_are_operands() {
        let cli = Cli::try_parse_from(["euclid", "48", "18", "--steps"]).unwrap();
        assert!(!cli.steps);
        assert_eq!(cli.operands, vec!["48", "18", "--steps"]);
    }

    #[test]
    fn test_color_resolution() {
        use termcolor::ColorChoice as Tc;
        assert_eq!(ColorChoice::Auto.resolve(false), Tc::Never);
        assert_eq!(ColorChoice::Auto.resolve(true), Tc::Auto);
        assert_eq!(ColorChoice::Always.resolve(false), Tc::Always);
        assert_eq!(ColorChoice::Never.resolve(true), Tc::Never);
    }
}
