use dino_config::{CONFIG_BACKEND, ConfigBackend, ConfigError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Sección `[export]` de dino.toml.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
  /// Where exported files go. Current directory when unset.
  pub out_dir: Option<PathBuf>,
  /// Published set merged into every set export.
  pub baseline: Option<PathBuf>,
}

impl ExportConfig {
  pub fn load() -> Result<Self, ConfigError> {
    Self::load_from(&*CONFIG_BACKEND)
  }

  pub fn load_from<B: ConfigBackend>(backend: &B) -> Result<Self, ConfigError> {
    backend.load_section_with_default("export")
  }

  pub fn out_dir(&self) -> PathBuf {
    self.out_dir.clone().unwrap_or_else(|| PathBuf::from("."))
  }
}
