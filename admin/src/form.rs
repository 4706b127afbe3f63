//! The form layer: a TOML file stands in for the admin page's input fields.

use std::path::Path;

use anyhow::Context;
use dino_core::builder::{SongForm, TaskForm};

pub fn load_form(path: &Path) -> anyhow::Result<SongForm> {
  let text = std::fs::read_to_string(path).with_context(|| format!("reading form {}", path.display()))?;
  parse_form(&text).with_context(|| format!("parsing form {}", path.display()))
}

pub fn parse_form(text: &str) -> anyhow::Result<SongForm> {
  Ok(toml::from_str(text)?)
}

/// An empty form with one task block, as TOML.
pub fn template() -> anyhow::Result<String> {
  let form = SongForm { tasks: vec![TaskForm { kind: "warm-up".into(), ..Default::default() }], ..Default::default() };
  Ok(toml::to_string(&form)?)
}
