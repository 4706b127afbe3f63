//! Nombres, tipos MIME y escritura de los ficheros exportados.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use dino_core::domain::Song;

use crate::{ExportError, csv, json, module};

static NON_SLUG: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("valid regex"));

pub const MIME_JSON: &str = "application/json;charset=utf-8";
pub const MIME_JS: &str = "application/javascript;charset=utf-8";
pub const MIME_CSV: &str = "text/csv;charset=utf-8";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
  Json,
  /// Texto asignable `const songsDataFromExternal = [...]`.
  Module,
  /// Tres tablas: canciones, tareas y letras.
  Csv,
}

/// Un fichero listo para "descargar": nombre, tipo y contenido.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
  pub file_name: String,
  pub mime: &'static str,
  pub contents: String,
}

impl ExportFile {
  fn new(file_name: impl Into<String>, mime: &'static str, contents: String) -> Self {
    Self { file_name: file_name.into(), mime, contents }
  }

  /// Escribe el fichero dentro de `dir` y devuelve la ruta final.
  pub fn write_into(&self, dir: &Path) -> std::io::Result<PathBuf> {
    let path = dir.join(&self.file_name);
    dino_fs::atomic_write_str(&path, &self.contents)?;
    tracing::info!(path = %path.display(), mime = self.mime, "export written");
    Ok(path)
  }
}

/// Minúsculas, todo lo que no sea `[a-z0-9]` se vuelve `-`, sin guiones en
/// los extremos. Nunca vacío: `song` como último recurso.
pub fn slug(text: &str) -> String {
  let lowered = text.to_lowercase();
  let slug = NON_SLUG.replace_all(&lowered, "-");
  match slug.trim_matches('-') {
    "" => "song".to_string(),
    s => s.to_string(),
  }
}

/// `song_<id>_<slug>`, con el título en español o, si falta, en ruso.
pub fn song_base_name(song: &Song) -> String {
  format!("song_{}_{}", song.id, slug(song.title.preferred()))
}

/// Ficheros para una sola canción (botones "descargar" del formulario).
pub fn single_song_files(song: &Song, format: ExportFormat) -> Result<Vec<ExportFile>, ExportError> {
  let base = song_base_name(song);
  let songs = std::slice::from_ref(song);

  let files = match format {
    ExportFormat::Json => vec![ExportFile::new(format!("{base}.json"), MIME_JSON, json::song_to_json(song)?)],
    ExportFormat::Module => vec![ExportFile::new(format!("{base}.js"), MIME_JS, module::songs_to_module(songs)?)],
    ExportFormat::Csv => {
      let t = csv::tables(songs);
      vec![
        ExportFile::new(format!("{base}_songs.csv"), MIME_CSV, t.songs),
        ExportFile::new(format!("{base}_tasks.csv"), MIME_CSV, t.tasks),
        ExportFile::new(format!("{base}_lyrics.csv"), MIME_CSV, t.lyrics),
      ]
    }
  };

  Ok(files)
}

/// Ficheros para el conjunto ya combinado con la base.
pub fn set_files(songs: &[Song], format: ExportFormat) -> Result<Vec<ExportFile>, ExportError> {
  let files = match format {
    ExportFormat::Json => vec![ExportFile::new("songs.json", MIME_JSON, json::songs_to_json(songs)?)],
    ExportFormat::Module => vec![ExportFile::new("songs-data.js", MIME_JS, module::songs_to_module(songs)?)],
    ExportFormat::Csv => {
      let t = csv::tables(songs);
      vec![
        ExportFile::new("songs_all.csv", MIME_CSV, t.songs),
        ExportFile::new("tasks_all.csv", MIME_CSV, t.tasks),
        ExportFile::new("lyrics_all.csv", MIME_CSV, t.lyrics),
      ]
    }
  };

  Ok(files)
}
