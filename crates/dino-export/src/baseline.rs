use std::path::Path;

use dino_core::domain::Song;

use crate::{ExportError, json, module};

/// Lee el conjunto base publicado: una lista JSON o un `songs-data.js`
/// generado por el propio export.
pub fn load_baseline(path: &Path) -> Result<Vec<Song>, ExportError> {
  let text = std::fs::read_to_string(path)?;
  let songs = parse_baseline(&text)?;
  tracing::debug!(path = %path.display(), count = songs.len(), "baseline loaded");
  Ok(songs)
}

pub fn parse_baseline(text: &str) -> Result<Vec<Song>, ExportError> {
  if text.trim_start().starts_with('[') { json::songs_from_json(text) } else { module::songs_from_module(text) }
}

#[cfg(test)]
mod tests {
  use super::*;
  use dino_core::domain::{SongId, TaskType};
  use tempfile::tempdir;

  #[test]
  fn accepts_json_and_module_text() {
    let songs = vec![Song { id: SongId::new(5), artist: "Base".into(), ..Default::default() }];

    assert_eq!(parse_baseline(&json::songs_to_json(&songs).unwrap()).unwrap(), songs);
    assert_eq!(parse_baseline(&module::songs_to_module(&songs).unwrap()).unwrap(), songs);
  }

  #[test]
  fn reads_from_file() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("songs-data.js");
    std::fs::write(&path, "const songsDataFromExternal = [{\"id\": 2}];\n").unwrap();

    let songs = load_baseline(&path).unwrap();
    assert_eq!(songs.len(), 1);
    assert_eq!(songs[0].id, SongId::new(2));
  }

  #[test]
  fn hand_written_entries_are_kept() {
    let text = r#"[
      {"id": 1, "artist": "A", "tasks": [{"type": "reading", "content": "x"}]},
      {"id": "x", "artist": "B"},
      {"artist": "C"}
    ]"#;

    let songs = parse_baseline(text).unwrap();
    assert_eq!(songs.len(), 3);
    assert_eq!(songs[0].tasks[0].kind, TaskType::Other("reading".into()));
    assert_eq!(songs[1].id.key(), "x");
    assert!(songs[2].id.is_missing());

    let back = json::songs_to_json(&songs).unwrap();
    assert!(back.contains("\"type\": \"reading\""));
    assert!(back.contains("\"id\": \"x\""));
  }

  #[test]
  fn missing_file_is_an_error() {
    let tmp = tempdir().unwrap();
    assert!(matches!(load_baseline(&tmp.path().join("nope.json")), Err(ExportError::Io(_))));
  }
}
