use crate::paths::{ConfigError, DinoPaths};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use toml_edit::{DocumentMut, Item};

/// Lectura/escritura por secciones (`[storage]`, `[export]`...) de `dino.toml`.
pub trait ConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError>;
  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;

  /// Como `load_section`, pero un fichero o sección ausente devuelve `T::default()`.
  fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default;
}

pub struct TomlConfigBackend {
  paths: DinoPaths,
}

impl TomlConfigBackend {
  pub fn new(paths: DinoPaths) -> Self {
    Self { paths }
  }

  pub fn paths(&self) -> &DinoPaths {
    &self.paths
  }

  fn decode<T: DeserializeOwned>(section: &str, table: &toml::Value) -> Result<T, ConfigError> {
    table.clone().try_into().map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))
  }
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    let path = self.paths.config_file();
    let content = fs::read_to_string(&path)?;
    let toml_val: toml::Value = toml::from_str(&content)?;

    let table = toml_val
      .get(section)
      .ok_or_else(|| ConfigError::Other(format!("missing section [{section}] in {:?}", path)))?;

    Self::decode(section, table)
  }

  fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default,
  {
    let Some(content) = dino_fs::read_optional(&self.paths.config_file())? else {
      return Ok(T::default());
    };

    let toml_val: toml::Value = toml::from_str(&content)?;
    let Some(table) = toml_val.get(section) else {
      return Ok(T::default());
    };

    Self::decode(section, table)
  }

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    let path = self.paths.config_file();

    // Se parte del documento actual para conservar comentarios y formato.
    let mut doc: DocumentMut = match fs::read_to_string(&path) {
      Ok(content) => content
        .parse::<DocumentMut>()
        .map_err(|e| ConfigError::Other(format!("parse toml_edit doc: {e}")))?,
      Err(e) if e.kind() == ErrorKind::NotFound => DocumentMut::new(),
      Err(e) => return Err(e.into()),
    };

    let section_str = toml::to_string(value)
      .map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;

    let section_item: Item = section_str
      .parse::<DocumentMut>()
      .map_err(|e| ConfigError::Other(format!("parse section as doc: {e}")))?
      .into_item();

    doc[section] = section_item;

    dino_fs::atomic_write_str(&path, &doc.to_string())?;

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde::Deserialize;
  use tempfile::tempdir;

  #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
  #[serde(default)]
  struct Sample {
    name: String,
    count: u32,
  }

  #[test]
  fn missing_file_yields_default() {
    let tmp = tempdir().unwrap();
    let backend = TomlConfigBackend::new(DinoPaths::at(tmp.path()).unwrap());

    let sample: Sample = backend.load_section_with_default("sample").unwrap();
    assert_eq!(sample, Sample::default());
    assert!(backend.load_section::<Sample>("sample").is_err());
  }

  #[test]
  fn save_keeps_comments_and_other_sections() {
    let tmp = tempdir().unwrap();
    let paths = DinoPaths::at(tmp.path()).unwrap();
    fs::write(paths.config_file(), "# mis ajustes\n[other]\nkeep = true\n").unwrap();

    let backend = TomlConfigBackend::new(paths.clone());
    backend.save_section("sample", &Sample { name: "x".into(), count: 3 }).unwrap();

    let loaded: Sample = backend.load_section("sample").unwrap();
    assert_eq!(loaded, Sample { name: "x".into(), count: 3 });

    let text = fs::read_to_string(paths.config_file()).unwrap();
    assert!(text.contains("# mis ajustes"));
    assert!(text.contains("keep = true"));
  }
}
