//! Schematized Config CLI entry point.

use clap::Parser;
use std::process::ExitCode;

use schematized_config::cli::{self, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli::run(&cli)
}
