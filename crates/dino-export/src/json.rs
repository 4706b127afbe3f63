use dino_core::domain::Song;

use crate::ExportError;

/// JSON con sangría de dos espacios.
pub fn song_to_json(song: &Song) -> Result<String, ExportError> {
  Ok(serde_json::to_string_pretty(song)?)
}

pub fn songs_to_json(songs: &[Song]) -> Result<String, ExportError> {
  Ok(serde_json::to_string_pretty(songs)?)
}

pub fn songs_from_json(text: &str) -> Result<Vec<Song>, ExportError> {
  Ok(serde_json::from_str(text)?)
}
