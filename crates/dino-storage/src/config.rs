use dino_config::{CONFIG_BACKEND, ConfigBackend, ConfigError, DinoPaths};
use dino_core::services::DEFAULT_SET_KEY;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
  /// Un fichero JSON por clave.
  #[default]
  File,
  Sqlite,
}

/// Sección `[storage]` de dino.toml.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
  pub backend: StorageBackend,
  /// Directorio del backend `file`. Por defecto `<data_dir>/store`.
  pub dir: Option<PathBuf>,
  /// Base de datos del backend `sqlite`. Por defecto `<data_dir>/dino.db`.
  pub db_path: Option<PathBuf>,
  /// Clave bajo la que se guarda el conjunto local.
  pub set_key: String,
}

impl Default for StorageConfig {
  fn default() -> Self {
    StorageConfig { backend: StorageBackend::default(), dir: None, db_path: None, set_key: DEFAULT_SET_KEY.to_string() }
  }
}

impl StorageConfig {
  pub fn load() -> Result<Self, ConfigError> {
    let cfg = CONFIG_BACKEND.load_section_with_default("storage")?;
    CONFIG_BACKEND.save_section("storage", &cfg)?;
    Ok(cfg)
  }

  /// Variante para tests: inyectar un backend distinto.
  pub fn load_from<B: ConfigBackend>(backend: &B) -> Result<Self, ConfigError> {
    backend.load_section_with_default("storage")
  }

  pub fn file_dir(&self, paths: &DinoPaths) -> PathBuf {
    self.dir.clone().unwrap_or_else(|| paths.data_dir.join("store"))
  }

  pub fn db_path(&self, paths: &DinoPaths) -> PathBuf {
    self.db_path.clone().unwrap_or_else(|| paths.data_dir.join("dino.db"))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use dino_config::TomlConfigBackend;
  use tempfile::tempdir;

  #[test]
  fn reads_storage_section() {
    let tmp = tempdir().unwrap();
    let paths = DinoPaths::at(tmp.path()).unwrap();
    std::fs::write(paths.config_file(), "[storage]\nbackend = \"sqlite\"\nset_key = \"lessons\"\n").unwrap();

    let cfg = StorageConfig::load_from(&TomlConfigBackend::new(paths.clone())).unwrap();
    assert_eq!(cfg.backend, StorageBackend::Sqlite);
    assert_eq!(cfg.set_key, "lessons");
    assert_eq!(cfg.db_path(&paths), paths.data_dir.join("dino.db"));
  }

  #[test]
  fn defaults_when_section_missing() {
    let tmp = tempdir().unwrap();
    let paths = DinoPaths::at(tmp.path()).unwrap();

    let cfg = StorageConfig::load_from(&TomlConfigBackend::new(paths.clone())).unwrap();
    assert_eq!(cfg, StorageConfig::default());
    assert_eq!(cfg.file_dir(&paths), paths.data_dir.join("store"));
  }
}
