#![forbid(unsafe_code)]

use clap::Parser;
use euclid::cli::{Cli, run};
use std::process;

fn main() {
    let cli = Cli::parse();
    process::exit(run(&cli));
}
