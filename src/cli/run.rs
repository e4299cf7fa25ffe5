//! Command dispatch: validate operands, compute, print

use crate::cli::args::{Cli, OutputFormat, parse_operands};
use crate::error::Result;
use crate::output::{GcdOutcome, HumanFormatter, JsonlFormatter};
use std::io::{self, IsTerminal, Write};
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;

/// Run the program for parsed command-line arguments
///
/// Errors are reported on stderr.
///
/// # Returns
///
/// Exit code:
/// - 0: Success (result printed)
/// - 1: Error (wrong operand count, invalid integer or output failure)
pub fn run(cli: &Cli) -> i32 {
    match run_inner(cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            let color = cli.color.resolve(io::stderr().is_terminal());
            if report_error(color, &e).is_err() {
                eprintln!("error: {}", e);
            }
            EXIT_ERROR
        }
    }
}

fn run_inner(cli: &Cli) -> Result<()> {
    let (a, b) = parse_operands(&cli.operands)?;
    let outcome = GcdOutcome::compute(a, b);

    match cli.format {
        OutputFormat::Human => {
            let color = cli.color.resolve(io::stdout().is_terminal());
            HumanFormatter::new(color, cli.steps).write_to_stdout(&outcome)?;
        }
        OutputFormat::Jsonl => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(JsonlFormatter::new(cli.steps).format(&outcome).as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Print `error: <message>` to stderr, with the prefix in red when colored
fn report_error(color: termcolor::ColorChoice, err: &crate::error::Error) -> io::Result<()> {
    let mut stderr = StandardStream::stderr(color);
    stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(stderr, "error:")?;
    stderr.reset()?;
    writeln!(stderr, " {}", err)?;
    stderr.flush()
}
