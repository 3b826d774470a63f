//! Implementation of `schematized-config --schema <path> --validate <dotenv>`.

use anyhow::Result;
use serde_json::Value;
use std::path::Path;

use crate::cli::output::{output, CommandOutput};
use crate::domain::errors::{ConfigError, ValidationError};
use crate::domain::models::Settings;
use crate::infrastructure::dotenv::read_dotenv_or_empty;
use crate::services::{ConfigValidator, ValidatorContext};

#[derive(Debug, serde::Serialize)]
pub struct ValidateOutput {
    pub valid: bool,
    pub dotenv: String,
    pub errors: Vec<ValidationError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
}

impl CommandOutput for ValidateOutput {
    fn to_human(&self) -> String {
        let mut lines = vec!["config failed to validate against JSON schema".to_string()];
        lines.extend(self.errors.iter().map(ToString::to_string));
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Validate the values of one dotenv file (no environment merge).
///
/// Returns whether the file is valid. A dotenv file that does not exist
/// contributes no values, so only schema defaults are checked. Schema load
/// failures and unreadable dotenv files are errors rather than invalid results.
pub fn execute(schema: &Path, dotenv: &Path, settings: &Settings, json_mode: bool) -> Result<bool> {
    let context = ValidatorContext::from_settings(settings);
    let validator = ConfigValidator::new(Some(schema.into()), context.clone())?;

    let dotenv_location = dotenv.to_string_lossy().into_owned();
    let raw = read_dotenv_or_empty(context.storage.as_ref(), &dotenv_location)?;

    let report = match validator.load_config(&raw) {
        Ok(config) => ValidateOutput {
            valid: true,
            dotenv: dotenv_location,
            errors: Vec::new(),
            config: Some(Value::Object(config)),
        },
        Err(ConfigError::Validation(errors)) => ValidateOutput {
            valid: false,
            dotenv: dotenv_location,
            errors,
            config: None,
        },
        Err(other) => return Err(other.into()),
    };

    if json_mode {
        output(&report, true);
    } else if !report.valid {
        eprintln!("{}", report.to_human());
    }

    Ok(report.valid)
}
