use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use dino_core::ports::{KeyValueStore, StoreError};

/// Backend clave-valor sobre el sistema de ficheros: `<dir>/<clave>.json`.
///
/// Cada escritura es atómica (tmp + rename), así que un corte a mitad nunca
/// deja el conjunto a medias.
pub struct FileKeyValueStore {
  dir: PathBuf,
}

impl FileKeyValueStore {
  pub fn new(dir: impl Into<PathBuf>) -> std::io::Result<Self> {
    let dir = dir.into();
    fs::create_dir_all(&dir)?;
    Ok(Self { dir })
  }

  fn path_for(&self, key: &str) -> PathBuf {
    let file_name: String =
      key.chars().map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' }).collect();
    self.dir.join(format!("{file_name}.json"))
  }
}

fn io_err(e: std::io::Error) -> StoreError {
  StoreError::Io(e.to_string())
}

impl KeyValueStore for FileKeyValueStore {
  fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
    dino_fs::read_optional(&self.path_for(key)).map_err(io_err)
  }

  fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
    dino_fs::atomic_write_str(&self.path_for(key), value).map_err(io_err)
  }

  fn remove(&self, key: &str) -> Result<(), StoreError> {
    match fs::remove_file(self.path_for(key)) {
      Ok(()) => Ok(()),
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
      Err(e) => Err(io_err(e)),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn get_set_remove() {
    let tmp = tempdir().unwrap();
    let store = FileKeyValueStore::new(tmp.path().join("store")).unwrap();

    assert_eq!(store.get("songs_admin_set_v1").unwrap(), None);
    store.set("songs_admin_set_v1", "[]").unwrap();
    assert_eq!(store.get("songs_admin_set_v1").unwrap().as_deref(), Some("[]"));
    assert!(tmp.path().join("store").join("songs_admin_set_v1.json").exists());

    store.remove("songs_admin_set_v1").unwrap();
    store.remove("songs_admin_set_v1").unwrap();
    assert_eq!(store.get("songs_admin_set_v1").unwrap(), None);
  }

  #[test]
  fn keys_cannot_escape_the_directory() {
    let tmp = tempdir().unwrap();
    let store = FileKeyValueStore::new(tmp.path()).unwrap();
    store.set("../evil/key", "x").unwrap();
    assert!(tmp.path().join("___evil_key.json").exists());
  }
}
