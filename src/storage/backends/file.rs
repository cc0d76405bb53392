//! File-based storage backend implementation

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::trace;

use crate::storage::{
    config::StorageConfig,
    error::{StorageError, StorageResult},
    traits::KeyValueStore,
};

const VALUE_EXTENSION: &str = "value";

/// File-based storage backend.
///
/// Every key lives in its own file under `<base_dir>/<namespace>/`. Writes go
/// through a temporary file in the same directory and are renamed into place.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Create a new file backend from storage configuration
    pub fn new(config: &StorageConfig) -> StorageResult<Self> {
        Self::open(config.namespace_dir())
    }

    /// Open (creating if needed) a backend rooted at `dir`
    pub fn open(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Directory holding this namespace's values
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Get path for a specific key
    fn key_path(&self, key: &str) -> PathBuf {
        self.dir
            .join(format!("{}.{}", urlencoding::encode(key), VALUE_EXTENSION))
    }

    /// Recover a key from a value file name, skipping anything else in the dir
    fn key_from_file_name(name: &str) -> Option<String> {
        if name.starts_with('.') {
            return None;
        }
        let encoded = name.strip_suffix(VALUE_EXTENSION)?.strip_suffix('.')?;
        urlencoding::decode(encoded).ok().map(|k| k.into_owned())
    }
}

impl KeyValueStore for FileBackend {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.key_path(key);
        let mut tmp = tempfile::Builder::new()
            .prefix(".tripboard-")
            .tempfile_in(&self.dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.flush()?;
        persist(tmp, &path)?;
        trace!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    fn keys(&self) -> StorageResult<Vec<String>> {
        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(key) = entry
                .file_name()
                .to_str()
                .and_then(Self::key_from_file_name)
            {
                keys.push(key);
            }
        }
        Ok(keys)
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}

fn persist(tmp: NamedTempFile, path: &Path) -> StorageResult<()> {
    tmp.persist(path).map_err(|e| StorageError::Io(e.error))?;
    Ok(())
}
