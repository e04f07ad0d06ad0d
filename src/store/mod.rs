//! Key-value store behind the visitor state endpoints
//!
//! Values are opaque strings keyed by visitor identifier. Each call is
//! atomic per key and concurrent writers are last-write-wins.

mod file;
mod memory;

use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use crate::config::{StoreConfig, StoreDriver};

pub use file::FileStore;
pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access store file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store file is not a valid JSON object: {0}")]
    Json(#[from] serde_json::Error),
}

/// String-keyed persistence used by the scroll endpoints
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// The stored value, `None` when the key was never written
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite the value under `key`; resolves once the write is durable
    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
}

/// Open the driver selected in the site configuration.
///
/// Relative file paths are resolved against `base_dir`.
pub async fn open(
    config: &StoreConfig,
    base_dir: &Path,
) -> Result<Arc<dyn KeyValueStore>, StoreError> {
    match config.driver {
        StoreDriver::Memory => {
            tracing::info!("Using in-memory visitor store");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreDriver::File => {
            let path = base_dir.join(&config.path);
            tracing::info!("Using file visitor store at {:?}", path);
            Ok(Arc::new(FileStore::open(path).await?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_open_memory_driver() {
        let store = open(&StoreConfig::default(), Path::new(".")).await.unwrap();
        assert_eq!(store.get("anyone").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_open_file_driver_relative_to_base() {
        let tmp = TempDir::new().unwrap();
        let config = StoreConfig {
            driver: StoreDriver::File,
            path: PathBuf::from("state/kv.json"),
        };
        let store = open(&config, tmp.path()).await.unwrap();
        store.set("k", "v".to_string()).await.unwrap();
        assert!(tmp.path().join("state/kv.json").exists());
    }
}
