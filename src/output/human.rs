#![forbid(unsafe_code)]

//! Human-readable output formatter with colorization support

use crate::euclid::Reduction;
use crate::output::GcdOutcome;
use std::io::{self, Write};
use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Human-readable output formatter
///
/// Prints the bare decimal result, optionally preceded by one line per
/// reduction.
pub struct HumanFormatter {
    color_choice: ColorChoice,
    show_steps: bool,
}

impl HumanFormatter {
    /// Creates a new HumanFormatter with the specified color choice
    pub fn new(color_choice: ColorChoice, show_steps: bool) -> Self {
        HumanFormatter {
            color_choice,
            show_steps,
        }
    }

    /// Format the outcome without colors
    pub fn format(&self, outcome: &GcdOutcome) -> String {
        let mut output = String::new();
        for line in self.step_lines(outcome) {
            output.push_str(&line);
            output.push('\n');
        }
        output.push_str(&format!("{}\n", outcome.gcd));
        output
    }

    /// Write the formatted output to stdout with colors
    pub fn write_to_stdout(&self, outcome: &GcdOutcome) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.color_choice);
        self.write_to(&mut stdout, outcome)?;
        stdout.flush()
    }

    /// Write the formatted output to any color-capable writer
    pub fn write_to<W: WriteColor>(&self, out: &mut W, outcome: &GcdOutcome) -> io::Result<()> {
        for line in self.step_lines(outcome) {
            writeln!(out, "{}", line)?;
        }

        out.set_color(ColorSpec::new().set_bold(true))?;
        write!(out, "{}", outcome.gcd)?;
        out.reset()?;
        writeln!(out)?;

        Ok(())
    }

    /// One `gcd(48, 18) = gcd(18, 12)` line per non-terminal reduction, if
    /// steps are enabled
    fn step_lines<'a>(&self, outcome: &'a GcdOutcome) -> impl Iterator<Item = String> + 'a {
        let steps: &'a [Reduction] = if self.show_steps { &outcome.steps } else { &[] };
        steps.iter().filter_map(|step| {
            step.next()
                .map(|next| format!("gcd({}, {}) = gcd({}, {})", step.a, step.b, next.a, next.b))
        })
    }
}
