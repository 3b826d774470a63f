//! Dotenv discovery and parsing.

use serde_json::Value;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::errors::{ConfigError, ConfigResult};
use crate::domain::models::ConfigMap;
use crate::domain::ports::Storage;

/// File name searched for by [`find_dotenv`].
pub const DOTENV_FILE_NAME: &str = ".env";

/// Find the nearest `.env` in `start` or any of its ancestors known to `storage`.
pub fn find_dotenv(storage: &dyn Storage, start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(DOTENV_FILE_NAME))
        .find(|candidate| storage.exists(&candidate.to_string_lossy()))
}

/// Parse dotenv text into a configuration map of string values.
///
/// Later assignments of the same key replace earlier ones.
pub fn parse_dotenv(contents: &[u8], origin: &str) -> ConfigResult<ConfigMap> {
    let mut config = ConfigMap::new();
    for item in dotenvy::from_read_iter(contents) {
        let (key, value) = item.map_err(|e| ConfigError::DotenvLoad {
            path: origin.to_string(),
            reason: e.to_string(),
        })?;
        config.insert(key, Value::String(value));
    }
    Ok(config)
}

/// Read and parse the dotenv document at `location`.
pub fn read_dotenv(storage: &dyn Storage, location: &str) -> ConfigResult<ConfigMap> {
    let contents = storage.read(location).map_err(|e| ConfigError::DotenvLoad {
        path: location.to_string(),
        reason: e.to_string(),
    })?;
    parse_dotenv(&contents, location)
}

/// Like [`read_dotenv`], but a document that does not exist reads as empty.
///
/// Unreadable or malformed documents are still errors.
pub fn read_dotenv_or_empty(storage: &dyn Storage, location: &str) -> ConfigResult<ConfigMap> {
    match storage.read(location) {
        Ok(contents) => parse_dotenv(&contents, location),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(%location, "dotenv file not found, using no values");
            Ok(ConfigMap::new())
        }
        Err(e) => Err(ConfigError::DotenvLoad {
            path: location.to_string(),
            reason: e.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MemoryStorage, OsStorage};
    use tempfile::TempDir;

    #[test]
    fn test_parse_keeps_file_order_and_quotes() {
        let config = parse_dotenv(
            b"# comment\nPORT=8080\nNAME=\"my service\"\n\nDEBUG='yes'\n",
            "test.env",
        )
        .unwrap();

        let keys: Vec<&str> = config.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["PORT", "NAME", "DEBUG"]);
        assert_eq!(config["NAME"], "my service");
        assert_eq!(config["DEBUG"], "yes");
    }

    #[test]
    fn test_parse_error_names_origin() {
        let err = parse_dotenv(b"NOT VALID LINE\n", "bad.env").unwrap_err();
        match err {
            ConfigError::DotenvLoad { path, .. } => assert_eq!(path, "bad.env"),
            other => panic!("expected DotenvLoad, got {other:?}"),
        }
    }

    #[test]
    fn test_read_missing_file_fails() {
        let storage = MemoryStorage::new();
        assert!(matches!(
            read_dotenv(&storage, ".env"),
            Err(ConfigError::DotenvLoad { .. })
        ));
    }

    #[test]
    fn test_read_or_empty_treats_missing_file_as_empty() {
        let storage = MemoryStorage::new();
        assert!(read_dotenv_or_empty(&storage, "env").unwrap().is_empty());
    }

    #[test]
    fn test_read_or_empty_still_rejects_malformed_file() {
        let storage = MemoryStorage::new().with_file("env", "NOT VALID LINE\n");
        assert!(matches!(
            read_dotenv_or_empty(&storage, "env"),
            Err(ConfigError::DotenvLoad { .. })
        ));
    }

    #[test]
    fn test_read_or_empty_parses_existing_file() {
        let storage = MemoryStorage::new().with_file("env", "PORT=9000\n");
        assert_eq!(read_dotenv_or_empty(&storage, "env").unwrap()["PORT"], "9000");
    }

    #[test]
    fn test_find_dotenv_uses_storage() {
        let storage = MemoryStorage::new().with_file("/srv/.env", "A=1\n");
        assert_eq!(
            find_dotenv(&storage, Path::new("/srv/app/config")),
            Some(PathBuf::from("/srv/.env"))
        );
        assert_eq!(find_dotenv(&storage, Path::new("/opt/app")), None);
    }

    #[test]
    fn test_find_dotenv_walks_up() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.path().join(".env"), "A=1\n").unwrap();

        assert_eq!(
            find_dotenv(&OsStorage::default(), &nested),
            Some(root.path().join(".env"))
        );
    }

    #[test]
    fn test_find_dotenv_prefers_nearest() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("child");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(root.path().join(".env"), "A=1\n").unwrap();
        std::fs::write(nested.join(".env"), "A=2\n").unwrap();

        assert_eq!(
            find_dotenv(&OsStorage::default(), &nested),
            Some(nested.join(".env"))
        );
    }
}
