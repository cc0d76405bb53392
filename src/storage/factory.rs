//! Storage factory for creating storage instances

use super::backends::{FileBackend, MemoryBackend};
use super::config::{BackendType, StorageConfig};
use super::error::StorageResult;
use super::traits::KeyValueStore;

/// Factory for creating storage instances
pub struct StorageFactory;

impl StorageFactory {
    /// Create storage from explicit configuration
    pub fn from_config(config: &StorageConfig) -> StorageResult<Box<dyn KeyValueStore>> {
        config.validate()?;
        match config.backend {
            BackendType::File => Ok(Box::new(FileBackend::new(config)?)),
            BackendType::Memory => Ok(Box::new(MemoryBackend::new())),
        }
    }
}
