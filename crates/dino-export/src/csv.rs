//! Exportación a tres tablas CSV relacionadas por `id` / `song_id`.

use std::borrow::Cow;

use dino_core::domain::Song;

pub const SONG_HEADERS: [&str; 16] = [
  "id",
  "title_ru",
  "title_es",
  "artist",
  "youtubeId",
  "cover",
  "level",
  "themes",
  "grammar",
  "vocabulary",
  "culture_tags",
  "culture_items",
  "age",
  "containsOtherLanguages",
  "profanity",
  "restriction_note",
];

pub const TASK_HEADERS: [&str; 10] = [
  "song_id",
  "task_index",
  "type",
  "title_ru",
  "title_es",
  "instruction_ru",
  "instruction_es",
  "content",
  "answer",
  "wordBank",
];

pub const LYRIC_HEADERS: [&str; 4] = ["song_id", "line_index", "time", "text"];

/// Separador de los campos que son listas.
const LIST_SEP: &str = "|";

/// Comillas al estilo RFC 4180: si el valor contiene `"`, `,`, `;` o un salto
/// de línea va entre comillas y las comillas internas se duplican.
pub fn escape(value: &str) -> Cow<'_, str> {
  if value.contains(['"', ',', ';', '\n', '\r']) {
    Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
  } else {
    Cow::Borrowed(value)
  }
}

/// Cabecera + filas; cada línea termina en `\n`.
pub fn to_csv<R, F>(headers: &[&str], rows: R) -> String
where
  R: IntoIterator<Item = Vec<F>>,
  F: AsRef<str>,
{
  let mut out = String::new();
  push_line(&mut out, headers);
  for row in rows {
    push_line(&mut out, &row);
  }
  out
}

fn push_line<F: AsRef<str>>(out: &mut String, fields: &[F]) {
  for (i, field) in fields.iter().enumerate() {
    if i > 0 {
      out.push(',');
    }
    out.push_str(&escape(field.as_ref()));
  }
  out.push('\n');
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
  if value.is_empty() { fallback } else { value }
}

fn song_row(song: &Song) -> Vec<String> {
  let r = &song.restrictions;
  vec![
    song.id.to_string(),
    song.title.ru.clone(),
    song.title.es.clone(),
    song.artist.clone(),
    song.youtube_id.clone(),
    song.cover.clone(),
    song.level.join(LIST_SEP),
    song.themes.join(LIST_SEP),
    song.grammar.join(LIST_SEP),
    song.vocabulary.join(LIST_SEP),
    song.culture.tags.join(LIST_SEP),
    song.culture.items.join(LIST_SEP),
    or_default(&r.age, "all").to_string(),
    r.contains_other_languages.to_string(),
    or_default(&r.profanity, "none").to_string(),
    r.note.clone(),
  ]
}

pub fn songs_table(songs: &[Song]) -> String {
  to_csv(&SONG_HEADERS, songs.iter().map(song_row))
}

pub fn tasks_table(songs: &[Song]) -> String {
  let rows = songs.iter().flat_map(|song| {
    song.tasks.iter().enumerate().map(move |(idx, t)| {
      vec![
        song.id.to_string(),
        (idx + 1).to_string(),
        t.kind.to_string(),
        t.title.ru.clone(),
        t.title.es.clone(),
        t.instruction.ru.clone(),
        t.instruction.es.clone(),
        t.content.joined(),
        t.answer.clone().unwrap_or_default(),
        t.word_bank.as_ref().map(|wb| wb.join(LIST_SEP)).unwrap_or_default(),
      ]
    })
  });
  to_csv(&TASK_HEADERS, rows)
}

pub fn lyrics_table(songs: &[Song]) -> String {
  let rows = songs.iter().flat_map(|song| {
    song
      .lyrics
      .iter()
      .enumerate()
      .map(move |(idx, l)| vec![song.id.to_string(), (idx + 1).to_string(), l.time.clone(), l.text.clone()])
  });
  to_csv(&LYRIC_HEADERS, rows)
}

/// Las tres tablas de un conjunto.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTables {
  pub songs: String,
  pub tasks: String,
  pub lyrics: String,
}

pub fn tables(songs: &[Song]) -> CsvTables {
  CsvTables { songs: songs_table(songs), tasks: tasks_table(songs), lyrics: lyrics_table(songs) }
}
