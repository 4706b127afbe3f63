pub mod baseline;
pub mod csv;
pub mod files;
pub mod json;
pub mod module;

pub use baseline::load_baseline;
pub use files::{ExportFile, ExportFormat};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),

  #[error("module text has no `=` assignment")]
  MissingAssignment,
}
