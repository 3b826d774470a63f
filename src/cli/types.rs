//! CLI type definitions
//!
//! This module contains the clap structure that defines the CLI interface.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "schematized-config")]
#[command(about = "Friendly tools to work with schemas and dotenv", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a JSON schema; prints a sample dotenv for it
    #[arg(long, value_name = "SCHEMA")]
    pub generate: Option<PathBuf>,

    /// Path to the JSON schema used for validation
    #[arg(long, value_name = "SCHEMA")]
    pub schema: Option<PathBuf>,

    /// Dotenv file to validate; requires --schema
    #[arg(long, value_name = "DOTENV", default_value = "env")]
    pub validate: PathBuf,

    /// Output in JSON format
    #[arg(short, long)]
    pub json: bool,

    /// Settings file (defaults to .schematized-config.yaml when present)
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,
}

/// What a parsed command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Generate { schema: PathBuf },
    Validate { schema: PathBuf, dotenv: PathBuf },
    Help,
}

impl Cli {
    /// `--generate` takes precedence over validation.
    pub fn action(&self) -> Action {
        if let Some(schema) = &self.generate {
            return Action::Generate {
                schema: schema.clone(),
            };
        }
        match &self.schema {
            Some(schema) => Action::Validate {
                schema: schema.clone(),
                dotenv: self.validate.clone(),
            },
            None => Action::Help,
        }
    }
}
