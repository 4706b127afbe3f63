//! Construcción de un [`Song`] a partir de los valores crudos del formulario.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::{Bilingual, Culture, LyricLine, Restrictions, Song, SongId, Task, TaskContent, TaskType};
use crate::youtube;

/// Valores del formulario tal como llegan: texto sin normalizar.
///
/// Los campos multilínea (`vocabulary`, `lyrics`...) se guardan como un único
/// string; los de lista separada por comas (`grammar`, `themes`) también.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SongForm {
  pub id: String,
  pub youtube: String,
  pub title_ru: String,
  pub title_es: String,
  pub artist: String,
  pub level: String,
  pub age: String,
  pub other_languages: bool,
  pub profanity: String,
  pub restriction_note: String,
  pub culture_tags: Vec<String>,
  pub culture_items: String,
  pub vocabulary: String,
  pub grammar: String,
  pub themes: String,
  pub pdf: String,
  pub lyrics: String,
  pub tasks: Vec<TaskForm>,
}

impl Default for SongForm {
  fn default() -> Self {
    Self {
      id: String::new(),
      youtube: String::new(),
      title_ru: String::new(),
      title_es: String::new(),
      artist: String::new(),
      level: String::new(),
      age: "16+".to_string(),
      other_languages: false,
      profanity: "none".to_string(),
      restriction_note: String::new(),
      culture_tags: Vec::new(),
      culture_items: String::new(),
      vocabulary: String::new(),
      grammar: String::new(),
      themes: String::new(),
      pdf: String::new(),
      lyrics: String::new(),
      tasks: Vec::new(),
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskForm {
  pub title_ru: String,
  pub title_es: String,
  #[serde(rename = "type")]
  pub kind: String,
  pub instruction_ru: String,
  pub instruction_es: String,
  pub content: String,
  pub answer: String,
  pub word_bank: String,
}

/// Líneas recortadas y no vacías.
pub fn lines(text: &str) -> Vec<String> {
  text.split('\n').map(str::trim).filter(|s| !s.is_empty()).map(String::from).collect()
}

/// Elementos separados por comas, recortados y no vacíos.
pub fn comma_list(text: &str) -> Vec<String> {
  text.split(',').map(str::trim).filter(|s| !s.is_empty()).map(String::from).collect()
}

/// Filas `time | text`. Solo el primer `|` separa; una fila sin separador es
/// todo texto.
pub fn parse_lyrics(text: &str) -> Vec<LyricLine> {
  lines(text)
    .into_iter()
    .map(|row| match row.split_once('|') {
      Some((time, rest)) => LyricLine { time: time.trim().to_string(), text: rest.trim().to_string() },
      None => LyricLine { time: String::new(), text: row },
    })
    .collect()
}

/// `id` escrito en el formulario, si es un número válido.
pub fn explicit_id(form: &SongForm) -> Option<SongId> {
  let raw = form.id.trim();
  if raw.is_empty() {
    return None;
  }
  match raw.parse::<SongId>() {
    Ok(id) => Some(id),
    Err(_) => {
      tracing::warn!(id = raw, "ignoring non-numeric song id, falling back to the next free one");
      None
    }
  }
}

fn build_task(form: &TaskForm) -> Task {
  let kind = match form.kind.trim() {
    "" => TaskType::default(),
    other => other.parse().unwrap_or_else(|e| {
      tracing::warn!(error = %e, "unknown task type, using warm-up");
      TaskType::default()
    }),
  };

  let answer = form.answer.trim();
  let word_bank = lines(&form.word_bank);

  Task {
    title: Bilingual::new(form.title_ru.trim(), form.title_es.trim()),
    kind,
    instruction: Bilingual::new(form.instruction_ru.trim(), form.instruction_es.trim()),
    content: TaskContent::from_lines(lines(&form.content)),
    answer: (!answer.is_empty()).then(|| answer.to_string()),
    word_bank: (!word_bank.is_empty()).then_some(word_bank),
  }
}

/// Ensambla la canción. `next_id` se usa cuando el formulario no trae un id
/// numérico propio.
pub fn build_song(form: &SongForm, next_id: SongId) -> Song {
  let youtube_id = youtube::resolve(&form.youtube);
  let cover = youtube::cover_url(&youtube_id);

  let level = form.level.trim();
  let pdf = form.pdf.trim();

  let mut seen = HashSet::new();
  let tags = form
    .culture_tags
    .iter()
    .map(|t| t.trim().to_string())
    .filter(|t| !t.is_empty() && seen.insert(t.clone()))
    .collect();

  let tasks = form.tasks.iter().map(build_task).filter(|t| !t.is_blank()).collect();

  Song {
    id: explicit_id(form).unwrap_or(next_id),
    title: Bilingual::new(form.title_ru.trim(), form.title_es.trim()),
    artist: form.artist.trim().to_string(),
    youtube_id,
    cover,
    level: if level.is_empty() { Vec::new() } else { vec![level.to_string()] },
    themes: comma_list(&form.themes),
    grammar: comma_list(&form.grammar),
    vocabulary: lines(&form.vocabulary),
    culture: Culture { tags, items: lines(&form.culture_items) },
    restrictions: Restrictions {
      age: form.age.trim().to_string(),
      contains_other_languages: form.other_languages,
      profanity: form.profanity.trim().to_string(),
      sensitive_topics: Vec::new(),
      note: form.restriction_note.trim().to_string(),
    },
    lyrics: parse_lyrics(&form.lyrics),
    pdf: (!pdf.is_empty()).then(|| pdf.to_string()),
    analysis: Vec::new(),
    tasks,
  }
}
