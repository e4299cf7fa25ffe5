//! CLI argument parsing and command dispatch

pub mod args;
pub mod run;

// Re-export types for convenient access
pub use args::{Cli, ColorChoice, OutputFormat, parse_operands};
pub use run::{EXIT_ERROR, EXIT_SUCCESS, run};
