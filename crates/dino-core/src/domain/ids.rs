use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::{fmt, str::FromStr};

/// Identificador de una canción dentro de un conjunto.
///
/// Las canciones creadas aquí siempre llevan un id numérico, pero los
/// conjuntos base escritos a mano pueden traer cualquier cosa (`"12"`, `1.5`,
/// `"x"`, o nada). Ese valor se conserva tal cual y se vuelve a escribir sin
/// cambios.
///
/// La igualdad compara la forma textual ([`SongId::key`]), así `12` y `"12"`
/// son la misma canción.
#[derive(Debug, Clone, Default)]
pub enum SongId {
  Number(u64),
  /// Valor no canónico tal como venía en el JSON.
  Raw(Value),
  /// La canción no tenía clave `id`.
  #[default]
  Missing,
}

/// Mayor entero que un `f64` representa sin pérdida.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl SongId {
  pub const fn new(value: u64) -> Self {
    SongId::Number(value)
  }

  /// El id como entero si es canónico.
  pub fn number(&self) -> Option<u64> {
    match self {
      SongId::Number(n) => Some(*n),
      _ => None,
    }
  }

  pub fn is_missing(&self) -> bool {
    matches!(self, SongId::Missing)
  }

  /// Forma textual del id; dos canciones con la misma clave son la misma.
  pub fn key(&self) -> String {
    match self {
      SongId::Number(n) => n.to_string(),
      SongId::Raw(Value::String(s)) => s.clone(),
      SongId::Raw(Value::Number(n)) => match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER => format!("{f:.0}"),
        _ => n.to_string(),
      },
      SongId::Raw(other) => other.to_string(),
      SongId::Missing => "undefined".to_string(),
    }
  }

  /// Valor numérico del id, si lo tiene: cadenas numéricas cuentan, `null`
  /// y `false` valen 0, `true` vale 1. Sin id o con texto no numérico, `None`.
  pub fn numeric(&self) -> Option<f64> {
    let value = match self {
      SongId::Number(n) => *n as f64,
      SongId::Raw(Value::Number(n)) => n.as_f64()?,
      SongId::Raw(Value::String(s)) => match s.trim() {
        "" => 0.0,
        t => t.parse::<f64>().ok()?,
      },
      SongId::Raw(Value::Bool(b)) => f64::from(u8::from(*b)),
      SongId::Raw(Value::Null) => 0.0,
      SongId::Raw(_) | SongId::Missing => return None,
    };
    value.is_finite().then_some(value)
  }

  /// Clave de orden tras un merge: lo no numérico cuenta como 0.
  pub fn sort_value(&self) -> f64 {
    self.numeric().unwrap_or(0.0)
  }
}

impl PartialEq for SongId {
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (SongId::Number(a), SongId::Number(b)) => a == b,
      _ => self.key() == other.key(),
    }
  }
}

impl Eq for SongId {}

impl From<u64> for SongId {
  fn from(v: u64) -> Self {
    SongId::Number(v)
  }
}

impl fmt::Display for SongId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      SongId::Number(n) => n.fmt(f),
      other => f.pad(&other.key()),
    }
  }
}

impl FromStr for SongId {
  type Err = std::num::ParseIntError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    s.trim().parse::<u64>().map(SongId::Number)
  }
}

impl Serialize for SongId {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    match self {
      SongId::Number(n) => serializer.serialize_u64(*n),
      SongId::Raw(v) => v.serialize(serializer),
      SongId::Missing => serializer.serialize_unit(),
    }
  }
}

impl<'de> Deserialize<'de> for SongId {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let raw = Value::deserialize(deserializer)?;
    let canonical = match &raw {
      Value::Number(n) => match (n.as_u64(), n.as_f64()) {
        (Some(u), _) => Some(u),
        (None, Some(f)) if f.fract() == 0.0 && (0.0..=MAX_SAFE_INTEGER).contains(&f) => Some(f as u64),
        _ => None,
      },
      _ => None,
    };
    let id = match canonical {
      Some(n) => SongId::Number(n),
      None => SongId::Raw(raw),
    };
    Ok(id)
  }
}
