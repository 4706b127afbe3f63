// crates/dino-core/src/errors.rs
use thiserror::Error;

use crate::ports::StoreError;

/// Error genérico del núcleo.
///
/// Los errores de validación NO pasan por aquí: se devuelven como lista de
/// [`crate::validation::ValidationIssue`]. Las capas superiores (CLI) deberían
/// mapear este error a un mensaje de usuario.
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("store error: {0}")]
  Store(#[from] StoreError),

  #[error("serialization error: {0}")]
  Serialization(String),
}

impl From<serde_json::Error> for CoreError {
  fn from(e: serde_json::Error) -> Self {
    CoreError::Serialization(e.to_string())
  }
}
