//! Storage configuration types and utilities

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use super::error::{StorageError, StorageResult};

pub const ENV_STORAGE_DIR: &str = "TRIPBOARD_STORAGE_DIR";
pub const ENV_NAMESPACE: &str = "TRIPBOARD_NAMESPACE";
pub const ENV_BACKEND: &str = "TRIPBOARD_BACKEND";

/// Storage backend type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendType {
    /// File-based storage (default)
    #[default]
    File,
    /// Memory storage, lost when the process exits
    Memory,
}

impl FromStr for BackendType {
    type Err = StorageError;

    fn from_str(s: &str) -> StorageResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            other => Err(StorageError::configuration(format!(
                "unknown storage backend '{other}' (expected 'file' or 'memory')"
            ))),
        }
    }
}

/// Main storage configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage backend type
    #[serde(default)]
    pub backend: BackendType,

    /// Base directory for the file backend
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,

    /// Isolated key space inside the base directory
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

fn default_base_dir() -> PathBuf {
    ProjectDirs::from("com", "tripboard", "tripboard")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".tripboard"))
}

fn default_namespace() -> String {
    "default".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: BackendType::default(),
            base_dir: default_base_dir(),
            namespace: default_namespace(),
        }
    }
}

impl StorageConfig {
    /// Create configuration from defaults and environment variables
    pub fn from_env() -> StorageResult<Self> {
        let mut config = Self::default();
        config.merge_env_vars()?;
        Ok(config)
    }

    /// Apply `TRIPBOARD_*` environment overrides
    pub fn merge_env_vars(&mut self) -> StorageResult<()> {
        if let Ok(dir) = std::env::var(ENV_STORAGE_DIR) {
            self.base_dir = PathBuf::from(dir);
        }

        if let Ok(namespace) = std::env::var(ENV_NAMESPACE) {
            self.namespace = namespace;
        }

        if let Ok(backend) = std::env::var(ENV_BACKEND) {
            self.backend = backend.parse()?;
        }

        Ok(())
    }

    /// Use a specific base directory
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Use a specific namespace
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Use a specific backend
    pub fn with_backend(mut self, backend: BackendType) -> Self {
        self.backend = backend;
        self
    }

    /// Directory holding the values of the configured namespace
    pub fn namespace_dir(&self) -> PathBuf {
        self.base_dir.join(&self.namespace)
    }

    /// Reject namespaces that would escape the base directory
    pub fn validate(&self) -> StorageResult<()> {
        let ns = self.namespace.as_str();
        if ns.is_empty() {
            return Err(StorageError::configuration("namespace must not be empty"));
        }
        if ns == "." || ns == ".." || ns.contains(['/', '\\']) {
            return Err(StorageError::configuration(format!(
                "namespace '{ns}' must be a single path component"
            )));
        }
        Ok(())
    }
}
