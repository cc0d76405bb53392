//! Storage abstraction layer for tripboard
//!
//! This module provides the key-value persistence surface the itinerary store
//! writes through. Each configured namespace is an isolated key space, backed
//! either by files on disk or by process memory.

pub mod backends;
pub mod config;
pub mod error;
pub mod factory;
pub mod traits;


pub use backends::{FileBackend, MemoryBackend};
pub use config::{BackendType, StorageConfig};
pub use error::{StorageError, StorageResult};
pub use factory::StorageFactory;
pub use traits::KeyValueStore;
