use crate::domain::song::Bilingual;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

/// Categoría pedagógica de una tarea.
///
/// Los conjuntos base pueden traer tipos que esta herramienta no ofrece; esos
/// se guardan en [`TaskType::Other`] y se vuelven a escribir tal cual.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum TaskType {
  #[default]
  WarmUp,
  GapFill,
  Grammar,
  Speaking,
  Listening,
  Writing,
  Vocabulary,
  Culture,
  Other(String),
}

impl TaskType {
  /// Los tipos que ofrece el formulario.
  pub const ALL: [TaskType; 8] = [
    TaskType::WarmUp,
    TaskType::GapFill,
    TaskType::Grammar,
    TaskType::Speaking,
    TaskType::Listening,
    TaskType::Writing,
    TaskType::Vocabulary,
    TaskType::Culture,
  ];

  pub fn as_str(&self) -> &str {
    match self {
      TaskType::WarmUp => "warm-up",
      TaskType::GapFill => "gap-fill",
      TaskType::Grammar => "grammar",
      TaskType::Speaking => "speaking",
      TaskType::Listening => "listening",
      TaskType::Writing => "writing",
      TaskType::Vocabulary => "vocabulary",
      TaskType::Culture => "culture",
      TaskType::Other(raw) => raw,
    }
  }

  fn known(s: &str) -> Option<TaskType> {
    TaskType::ALL.into_iter().find(|t| t.as_str() == s)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown task type: {0}")]
pub struct UnknownTaskType(pub String);

/// Solo acepta los tipos conocidos; es lo que usa el formulario.
impl FromStr for TaskType {
  type Err = UnknownTaskType;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    TaskType::known(&s.trim().to_lowercase()).ok_or_else(|| UnknownTaskType(s.to_string()))
  }
}

impl fmt::Display for TaskType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl Serialize for TaskType {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    serializer.serialize_str(self.as_str())
  }
}

impl<'de> Deserialize<'de> for TaskType {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let raw = String::deserialize(deserializer)?;
    Ok(TaskType::known(&raw).unwrap_or(TaskType::Other(raw)))
  }
}

/// Contenido de una tarea: una sola cadena o varias líneas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskContent {
  Text(String),
  Lines(Vec<String>),
}

impl Default for TaskContent {
  fn default() -> Self {
    TaskContent::Text(String::new())
  }
}

impl TaskContent {
  /// Colapsa a `Text` cuando hay como mucho una línea.
  pub fn from_lines(mut lines: Vec<String>) -> Self {
    if lines.len() <= 1 { TaskContent::Text(lines.pop().unwrap_or_default()) } else { TaskContent::Lines(lines) }
  }

  pub fn is_empty(&self) -> bool {
    match self {
      TaskContent::Text(s) => s.is_empty(),
      TaskContent::Lines(lines) => lines.iter().all(|l| l.is_empty()),
    }
  }

  /// Las líneas unidas con `\n` (formato de la tabla CSV de tareas).
  pub fn joined(&self) -> String {
    match self {
      TaskContent::Text(s) => s.clone(),
      TaskContent::Lines(lines) => lines.join("\n"),
    }
  }
}

/// Un ejercicio que pertenece a una canción.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Task {
  pub title: Bilingual,
  #[serde(rename = "type")]
  pub kind: TaskType,
  pub instruction: Bilingual,
  pub content: TaskContent,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub answer: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub word_bank: Option<Vec<String>>,
}

impl Task {
  /// Una tarea sin texto en ningún campo no aporta nada y se descarta.
  pub fn is_blank(&self) -> bool {
    self.title.is_blank()
      && self.instruction.is_blank()
      && self.content.is_empty()
      && self.answer.as_deref().is_none_or(|a| a.trim().is_empty())
      && self.word_bank.as_ref().is_none_or(|wb| wb.is_empty())
  }
}
