//! Application configuration
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `TRIPBOARD_*` environment variables, then command-line flags.

use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{ErrorCode, Result, TripError};
use crate::storage::config::ENV_STORAGE_DIR;
use crate::storage::{BackendType, StorageConfig};

/// Name of the config file looked up in the storage base directory
pub const CONFIG_FILE_NAME: &str = "tripboard.toml";

/// Environment variable overriding the tracing filter
pub const ENV_LOG: &str = "TRIPBOARD_LOG";

/// On-disk configuration file contents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub log_level: Option<String>,
    #[serde(default)]
    pub storage: Option<StorageConfig>,
}

impl ConfigFile {
    /// Parse a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            let code = if e.kind() == ErrorKind::NotFound {
                ErrorCode::CONFIG_NOT_FOUND
            } else {
                ErrorCode::CONFIG_GENERIC
            };
            TripError::config_with_code(
                code,
                format!("Failed to read config file {}", path.display()),
            )
            .with_source(e)
        })?;
        toml::from_str(&content).map_err(|e| {
            TripError::config_with_code(
                ErrorCode::CONFIG_PARSE_ERROR,
                format!("Failed to parse config file {}", path.display()),
            )
            .with_source(e)
        })
    }
}

/// Command-line overrides, applied last
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config_path: Option<PathBuf>,
    pub storage_dir: Option<PathBuf>,
    pub namespace: Option<String>,
    pub backend: Option<BackendType>,
}

/// Application configuration structure
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Explicit log filter from the config file
    pub log_level: Option<String>,
    /// Where trip data is persisted
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Resolve configuration from every layer
    pub fn load(verbose: u8, overrides: &CliOverrides) -> Result<Self> {
        let mut storage = StorageConfig::default();
        let mut log_level = None;

        let file_path = match &overrides.config_path {
            Some(path) => Some(path.clone()),
            None => {
                let base = overrides
                    .storage_dir
                    .clone()
                    .or_else(|| std::env::var_os(ENV_STORAGE_DIR).map(PathBuf::from))
                    .unwrap_or_else(|| storage.base_dir.clone());
                let candidate = base.join(CONFIG_FILE_NAME);
                candidate.is_file().then_some(candidate)
            }
        };

        if let Some(path) = file_path {
            let file = ConfigFile::load(&path)?;
            if let Some(file_storage) = file.storage {
                storage = file_storage;
            }
            log_level = file.log_level;
        }

        storage.merge_env_vars().map_err(|e| {
            TripError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                "Invalid storage environment",
            )
            .with_source(e)
        })?;

        if let Some(dir) = &overrides.storage_dir {
            storage.base_dir = dir.clone();
        }
        if let Some(namespace) = &overrides.namespace {
            storage.namespace = namespace.clone();
        }
        if let Some(backend) = overrides.backend {
            storage.backend = backend;
        }

        Ok(Self {
            verbose,
            log_level,
            storage,
        })
    }

    /// Get the log filter string based on environment, file and verbosity
    pub fn log_filter(&self) -> String {
        if let Ok(filter) = std::env::var(ENV_LOG) {
            return filter;
        }
        if self.verbose == 0 {
            if let Some(level) = &self.log_level {
                return level.clone();
            }
        }
        self.log_level_for_verbosity().to_string()
    }

    /// Get the log level string based on verbosity
    pub fn log_level_for_verbosity(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verbose: 0,
            log_level: None,
            storage: StorageConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::config::ENV_BACKEND;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_log_level_for_verbosity() {
        let levels: Vec<&str> = (0..4)
            .map(|verbose| {
                AppConfig {
                    verbose,
                    ..Default::default()
                }
                .log_level_for_verbosity()
            })
            .collect();
        assert_eq!(levels, vec!["warn", "info", "debug", "trace"]);
    }

    #[test]
    #[serial]
    fn test_file_then_cli_precedence() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            r#"
log_level = "debug"

[storage]
backend = "memory"
namespace = "from-file"
base_dir = "/from/file"
"#,
        )
        .unwrap();

        let overrides = CliOverrides {
            config_path: Some(path),
            namespace: Some("from-cli".to_string()),
            ..Default::default()
        };
        let config = AppConfig::load(0, &overrides).unwrap();

        assert_eq!(config.storage.backend, BackendType::Memory);
        assert_eq!(config.storage.base_dir, PathBuf::from("/from/file"));
        assert_eq!(config.storage.namespace, "from-cli");
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    #[serial]
    fn test_config_file_discovered_in_storage_dir() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[storage]\nnamespace = \"discovered\"\n",
        )
        .unwrap();

        let overrides = CliOverrides {
            storage_dir: Some(temp_dir.path().to_path_buf()),
            ..Default::default()
        };
        let config = AppConfig::load(0, &overrides).unwrap();

        assert_eq!(config.storage.namespace, "discovered");
        assert_eq!(config.storage.base_dir, temp_dir.path());
    }

    #[test]
    #[serial]
    fn test_malformed_config_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        std::fs::write(&path, "storage = [").unwrap();

        let overrides = CliOverrides {
            config_path: Some(path),
            ..Default::default()
        };
        let err = AppConfig::load(0, &overrides).unwrap_err();
        assert_eq!(err.code(), ErrorCode::CONFIG_PARSE_ERROR);
        assert_eq!(err.exit_code(), 2);
        assert!(err.user_message().contains("Failed to parse config file"));
        assert!(err.user_message().contains("bad.toml"));
    }

    #[test]
    #[serial]
    fn test_missing_explicit_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let overrides = CliOverrides {
            config_path: Some(temp_dir.path().join("absent.toml")),
            ..Default::default()
        };
        let err = AppConfig::load(0, &overrides).unwrap_err();
        assert_eq!(err.code(), ErrorCode::CONFIG_NOT_FOUND);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    #[serial]
    fn test_invalid_backend_env_names_the_value() {
        std::env::set_var(ENV_BACKEND, "s3");
        let result = AppConfig::load(0, &CliOverrides::default());
        std::env::remove_var(ENV_BACKEND);

        let err = result.unwrap_err();
        assert_eq!(err.code(), ErrorCode::CONFIG_INVALID_VALUE);
        assert_eq!(err.exit_code(), 2);
        assert!(err
            .user_message()
            .starts_with("Configuration problem: Invalid storage environment: "));
        assert!(err.user_message().contains("'s3'"));
    }
}
