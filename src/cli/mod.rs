//! Command-line interface
//!
//! Thin layer over the service pipeline: argument parsing, settings and
//! logging setup, and exit-code mapping.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Action, Cli};

use anyhow::Result;
use clap::CommandFactory;
use std::process::ExitCode;

use crate::domain::models::Settings;
use crate::infrastructure::config::SettingsLoader;
use crate::infrastructure::logging::{self, LogConfig};

/// Load settings, honoring `--settings` when given.
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    match &cli.settings {
        Some(path) => SettingsLoader::load_from_file(path),
        None => SettingsLoader::load(),
    }
}

/// Run a parsed command line to completion.
///
/// Exit code 0 means success (or help), 1 means invalid configuration or
/// any load failure.
pub fn run(cli: &Cli) -> ExitCode {
    match try_run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            handle_error(&err, cli.json);
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: &Cli) -> Result<bool> {
    let settings = load_settings(cli)?;
    logging::init(&LogConfig::from(&settings.logging))?;

    match cli.action() {
        Action::Generate { schema } => {
            commands::generate::execute(&schema, &settings, cli.json)?;
            Ok(true)
        }
        Action::Validate { schema, dotenv } => {
            commands::validate::execute(&schema, &dotenv, &settings, cli.json)
        }
        Action::Help => {
            Cli::command().print_help()?;
            Ok(true)
        }
    }
}

/// Report a command failure on stderr (or stdout as JSON).
pub fn handle_error(err: &anyhow::Error, json_mode: bool) {
    if json_mode {
        let body = serde_json::json!({ "error": format!("{err:#}") });
        println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("Error: {err:#}");
    }
}
