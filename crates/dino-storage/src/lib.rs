pub mod config;
pub mod file_store;
pub mod models;
pub mod schema;
pub mod sqlite_store;

use dino_config::DinoPaths;
use dino_core::ports::{KeyValueStore, StoreError};

pub use config::{StorageBackend, StorageConfig};
pub use file_store::FileKeyValueStore;
pub use sqlite_store::SqliteKeyValueStore;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("sqlite connection error: {0}")]
  Connection(#[from] diesel::ConnectionError),

  #[error("sqlite query error: {0}")]
  Query(#[from] diesel::result::Error),
}

impl From<StorageError> for StoreError {
  fn from(e: StorageError) -> Self {
    match e {
      StorageError::Io(e) => StoreError::Io(e.to_string()),
      other => StoreError::Backend(other.to_string()),
    }
  }
}

/// Abre el backend que indique la configuración.
pub fn open_store(cfg: &StorageConfig, paths: &DinoPaths) -> Result<Box<dyn KeyValueStore>, StorageError> {
  match cfg.backend {
    StorageBackend::File => {
      let dir = cfg.file_dir(paths);
      tracing::debug!(dir = %dir.display(), "opening file key-value store");
      Ok(Box::new(FileKeyValueStore::new(dir)?))
    }
    StorageBackend::Sqlite => {
      let db_path = cfg.db_path(paths);
      tracing::debug!(db = %db_path.display(), "opening sqlite key-value store");
      Ok(Box::new(SqliteKeyValueStore::new(&db_path.to_string_lossy())?))
    }
  }
}
