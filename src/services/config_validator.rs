//! Pipeline entry point tying schema resolution, extraction, coercion,
//! source merging and validation together.

use std::path::Path;
use std::sync::Arc;

use crate::adapters::{OsStorage, ProcessEnv};
use crate::domain::errors::ConfigResult;
use crate::domain::models::{ConfigMap, ConfigSchema, SchemaSource, Settings, DEFAULT_SCHEMA_ENV_VAR};
use crate::domain::ports::{EnvStore, Storage};
use crate::infrastructure::dotenv::{find_dotenv, read_dotenv};

use super::coercer::coerce;
use super::extractor::extract;
use super::merger::SourceMerger;
use super::schema_loader::SchemaLoader;
use super::validator::SchemaValidator;

/// Collaborators shared by every stage of a validation session.
#[derive(Clone)]
pub struct ValidatorContext {
    pub storage: Arc<dyn Storage>,
    pub env: Arc<dyn EnvStore>,
    pub schema_env_var: String,
}

impl ValidatorContext {
    pub fn new(storage: Arc<dyn Storage>, env: Arc<dyn EnvStore>) -> Self {
        Self {
            storage,
            env,
            schema_env_var: DEFAULT_SCHEMA_ENV_VAR.to_string(),
        }
    }

    /// Context bound to the real environment with storage rooted per `settings`.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            storage: Arc::new(OsStorage::new(&settings.storage_root)),
            env: Arc::new(ProcessEnv::new()),
            schema_env_var: settings.schema_env_var.clone(),
        }
    }

    pub fn schema_loader(&self) -> SchemaLoader {
        SchemaLoader::new(Arc::clone(&self.storage)).with_env_var(self.schema_env_var.clone())
    }
}

impl Default for ValidatorContext {
    fn default() -> Self {
        Self::new(Arc::new(OsStorage::default()), Arc::new(ProcessEnv::new()))
    }
}

/// Validates configuration maps against one resolved schema.
pub struct ConfigValidator {
    schema: ConfigSchema,
    validator: SchemaValidator,
    context: ValidatorContext,
}

impl ConfigValidator {
    /// Resolve and compile the schema.
    ///
    /// Without an explicit source the schema named by the context's fallback
    /// variable is used; if that is unset too, resolution fails with
    /// `SchemaNotFound`.
    pub fn new(schema: Option<SchemaSource>, context: ValidatorContext) -> ConfigResult<Self> {
        let schema = context
            .schema_loader()
            .resolve(schema.as_ref(), context.env.as_ref())?;
        let validator = SchemaValidator::compile(&schema)?;
        Ok(Self {
            schema,
            validator,
            context,
        })
    }

    pub const fn schema(&self) -> &ConfigSchema {
        &self.schema
    }

    /// Extract, coerce and validate `config`.
    pub fn load_config(&self, config: &ConfigMap) -> ConfigResult<ConfigMap> {
        let extracted = extract(&self.schema, config);
        let coerced = coerce(&self.schema, &extracted);
        self.validator.validate(coerced)
    }

    /// Validate the whole environment.
    pub fn load_environment(&self) -> ConfigResult<ConfigMap> {
        let config: ConfigMap = self
            .context
            .env
            .vars()
            .into_iter()
            .map(|(key, value)| (key, value.into()))
            .collect();
        self.load_config(&config)
    }

    /// Validate a dotenv file merged with the environment.
    ///
    /// `dotenv_path` defaults to the nearest `.env` above the working
    /// directory; when none exists the file layer is empty. Environment values
    /// win for declared keys. With `override_env`, validated values are
    /// written into the environment for keys it does not already hold.
    pub fn load_dotenv(
        &self,
        dotenv_path: Option<&Path>,
        override_env: bool,
    ) -> ConfigResult<ConfigMap> {
        let dotenv_path = dotenv_path.map(Path::to_path_buf).or_else(|| {
            let found = std::env::current_dir()
                .ok()
                .and_then(|cwd| find_dotenv(self.context.storage.as_ref(), &cwd));
            if let Some(path) = &found {
                tracing::debug!(path = %path.display(), "using detected dotenv path");
            }
            found
        });

        let file_config = match &dotenv_path {
            Some(path) => read_dotenv(self.context.storage.as_ref(), &path.to_string_lossy())?,
            None => ConfigMap::new(),
        };

        let merger = SourceMerger::new(self.context.env.as_ref());
        let merged = merger.merge(&file_config, &self.schema);
        let validated = self.load_config(&merged)?;

        if override_env {
            merger.write_back(&validated);
        }
        Ok(validated)
    }
}

/// Validate `config` against `schema` using the default context.
pub fn load_validated_config(
    schema: impl Into<SchemaSource>,
    config: &ConfigMap,
) -> ConfigResult<ConfigMap> {
    ConfigValidator::new(Some(schema.into()), ValidatorContext::default())?.load_config(config)
}

/// Validate the process environment, falling back to the schema variable
/// when `schema` is `None`.
pub fn load_validated_environment(schema: Option<SchemaSource>) -> ConfigResult<ConfigMap> {
    ConfigValidator::new(schema, ValidatorContext::default())?.load_environment()
}

/// Validate a dotenv file merged with the process environment.
pub fn load_dotenv(
    schema: Option<SchemaSource>,
    dotenv_path: Option<&Path>,
    override_env: bool,
) -> ConfigResult<ConfigMap> {
    ConfigValidator::new(schema, ValidatorContext::default())?.load_dotenv(dotenv_path, override_env)
}
