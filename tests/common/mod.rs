//! Common test utilities and helpers

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tripboard::itinerary::{ItineraryStore, Seed};
use tripboard::storage::{FileBackend, KeyValueStore, MemoryBackend};

/// Namespace used by the CLI when none is configured
pub const DEFAULT_NAMESPACE: &str = "default";

/// Store over a fresh memory backend; the returned backend shares its state
pub fn memory_store() -> (ItineraryStore<MemoryBackend>, MemoryBackend) {
    let backend = MemoryBackend::new();
    (ItineraryStore::new(backend.clone()), backend)
}

/// Store over a file backend in the default namespace of `temp_dir`
pub fn file_store(temp_dir: &TempDir) -> ItineraryStore<FileBackend> {
    let backend = FileBackend::open(namespace_dir(temp_dir.path())).unwrap();
    ItineraryStore::new(backend)
}

pub fn namespace_dir(base: &Path) -> PathBuf {
    base.join(DEFAULT_NAMESPACE)
}

/// Ids of the built-in trip in display order
pub fn seed_item_ids() -> Vec<String> {
    Seed::warsaw()
        .itinerary
        .iter()
        .flat_map(|day| day.items.iter().map(|item| item.id.clone()))
        .collect()
}

/// Isolated environment for running the binary
pub struct TestContext {
    temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// `tripboard` command pointed at this context's storage directory
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("tripboard").unwrap();
        cmd.env_remove("TRIPBOARD_STORAGE_DIR")
            .env_remove("TRIPBOARD_NAMESPACE")
            .env_remove("TRIPBOARD_BACKEND")
            .env_remove("TRIPBOARD_LOG")
            .env_remove("RUST_LOG")
            .arg("--storage-dir")
            .arg(self.path());
        cmd
    }

    /// Raw value persisted under `key`, read through a separate backend handle
    pub fn stored(&self, key: &str) -> Option<String> {
        FileBackend::open(namespace_dir(self.path()))
            .unwrap()
            .get(key)
            .unwrap()
    }

    /// Write a raw value as if an earlier session had persisted it
    pub fn store_raw(&self, key: &str, value: &str) {
        FileBackend::open(namespace_dir(self.path()))
            .unwrap()
            .set(key, value)
            .unwrap();
    }
}
