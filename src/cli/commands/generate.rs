//! Implementation of `schematized-config --generate <schema>`.

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{ConfigMap, ConfigSchema, Settings};
use crate::infrastructure::dotenv::{find_dotenv, read_dotenv};
use crate::services::{generate_sample_dotenv, merge_layers, ValidatorContext};

#[derive(Debug, serde::Serialize)]
pub struct GenerateOutput {
    pub sample: String,
    pub dotenv: Option<String>,
}

impl CommandOutput for GenerateOutput {
    fn to_human(&self) -> String {
        self.sample.clone()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Print a sample dotenv for the schema at `schema`.
///
/// Values come from the process environment, overlaid by the nearest
/// `.env` file.
pub fn execute(schema: &Path, settings: &Settings, json_mode: bool) -> Result<()> {
    let context = ValidatorContext::from_settings(settings);
    let raw = context.schema_loader().load(&schema.into())?;
    let schema = ConfigSchema::from_value(raw)?;

    let environment: ConfigMap = context
        .env
        .vars()
        .into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect();

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dotenv_path = find_dotenv(context.storage.as_ref(), &cwd)
        .map(|path| path.to_string_lossy().into_owned());
    let dotenv = match &dotenv_path {
        Some(location) => {
            tracing::debug!(%location, "using detected dotenv path");
            read_dotenv(context.storage.as_ref(), location)?
        }
        None => ConfigMap::new(),
    };

    let merged = merge_layers([&environment, &dotenv]);
    let result = GenerateOutput {
        sample: generate_sample_dotenv(&schema, &merged),
        dotenv: dotenv_path,
    };
    if json_mode {
        output(&result, true);
    } else {
        // The sample is written as is, without a trailing newline.
        print!("{}", result.to_human());
    }
    Ok(())
}
