//! Service layer
//!
//! The configuration pipeline, leaves first:
//! - `schema_loader`: resolves inline, stored, or fallback schemas
//! - `extractor`: keeps declared keys and fills defaults
//! - `coercer`: converts strings to declared primitive types
//! - `validator`: Draft 4 validation collecting every violation
//! - `merger`: dotenv/environment precedence and write-back
//! - `config_validator`: the pipeline entry point
//! - `sample`: sample dotenv generation

pub mod coercer;
pub mod config_validator;
pub mod extractor;
pub mod merger;
pub mod sample;
pub mod schema_loader;
pub mod validator;

pub use coercer::{coerce, coerce_value, Coercion};
pub use config_validator::{
    load_dotenv, load_validated_config, load_validated_environment, ConfigValidator,
    ValidatorContext,
};
pub use extractor::extract;
pub use merger::SourceMerger;
pub use sample::{generate_sample_dotenv, merge_layers};
pub use schema_loader::SchemaLoader;
pub use validator::{validate, SchemaValidator};
