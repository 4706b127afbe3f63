use crate::domain::ids::SongId;
use crate::domain::task::Task;
use serde::{Deserialize, Serialize};

/// Par de textos ruso / español.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bilingual {
  pub ru: String,
  pub es: String,
}

impl Bilingual {
  pub fn new(ru: impl Into<String>, es: impl Into<String>) -> Self {
    Self { ru: ru.into(), es: es.into() }
  }

  /// `true` si ninguno de los dos idiomas tiene texto (tras `trim`).
  pub fn is_blank(&self) -> bool {
    self.ru.trim().is_empty() && self.es.trim().is_empty()
  }

  /// Texto preferido para mostrar: español primero, luego ruso.
  pub fn preferred(&self) -> &str {
    if !self.es.is_empty() { &self.es } else { &self.ru }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Culture {
  pub tags: Vec<String>,
  pub items: Vec<String>,
}

/// Restricciones de contenido de la lección.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Restrictions {
  pub age: String,
  pub contains_other_languages: bool,
  pub profanity: String,
  pub sensitive_topics: Vec<String>,
  pub note: String,
}

/// Una línea de letra: `time | text`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LyricLine {
  pub time: String,
  pub text: String,
}

/// La lección de una canción: el registro que se guarda y exporta.
///
/// Todos los campos tienen valor por defecto para poder leer conjuntos base
/// escritos a mano a los que les falten claves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Song {
  /// Único dentro de un conjunto. Sin id en la entrada, tampoco se escribe.
  #[serde(skip_serializing_if = "SongId::is_missing")]
  pub id: SongId,
  pub title: Bilingual,
  pub artist: String,
  pub youtube_id: String,
  /// Derivado de `youtube_id`, ver [`crate::youtube::cover_url`].
  pub cover: String,
  /// Cero o un nivel (`A2`, `B1`...).
  pub level: Vec<String>,
  pub themes: Vec<String>,
  pub grammar: Vec<String>,
  pub vocabulary: Vec<String>,
  pub culture: Culture,
  pub restrictions: Restrictions,
  pub lyrics: Vec<LyricLine>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub pdf: Option<String>,
  /// Contenido libre que se conserva tal cual.
  pub analysis: Vec<serde_json::Value>,
  pub tasks: Vec<Task>,
}

impl Song {
  /// Título para listados: español, ruso o un guion.
  pub fn display_title(&self) -> &str {
    match self.title.preferred() {
      "" => "—",
      t => t,
    }
  }
}
