//! Texto de módulo JS (`songs-data.js`) que la web pública carga tal cual.

use dino_core::domain::Song;

use crate::ExportError;
use crate::json::songs_to_json;

pub const MODULE_HEADER: &str = "// Auto-generated by dino admin";
pub const MODULE_VARIABLE: &str = "songsDataFromExternal";

pub fn songs_to_module(songs: &[Song]) -> Result<String, ExportError> {
  Ok(format!("{MODULE_HEADER}\nconst {MODULE_VARIABLE} = {};\n", songs_to_json(songs)?))
}

/// Extrae el literal asignado en un texto de módulo generado (o escrito a
/// mano con la misma forma `const x = [...];`).
pub fn songs_from_module(text: &str) -> Result<Vec<Song>, ExportError> {
  let body: Vec<&str> = text.lines().filter(|l| !l.trim_start().starts_with("//")).collect();
  let body = body.join("\n");
  let (_, literal) = body.split_once('=').ok_or(ExportError::MissingAssignment)?;
  let literal = literal.trim().trim_end_matches(';').trim_end();
  Ok(serde_json::from_str(literal)?)
}
