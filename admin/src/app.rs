use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use dino_config::DinoPaths;
use dino_core::domain::{Song, SongId};
use dino_core::ports::KeyValueStore;
use dino_core::services::{AdminService, LocalSongStore, Submission};
use dino_core::youtube;
use dino_export::{ExportFormat, files, json, load_baseline};
use dino_storage::StorageConfig;

use crate::cli::Commands;
use crate::config::ExportConfig;
use crate::form;
use crate::infrastructure::output::Delivery;
use crate::infrastructure::presenter;

/// How a command ended. A rejected form is not an error, but the shell still
/// gets a distinct exit status for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
  Done,
  Invalid,
}

impl From<Outcome> for std::process::ExitCode {
  fn from(outcome: Outcome) -> Self {
    match outcome {
      Outcome::Done => std::process::ExitCode::SUCCESS,
      Outcome::Invalid => std::process::ExitCode::from(2),
    }
  }
}

pub struct App<K: KeyValueStore> {
  service: AdminService<K>,
  export: ExportConfig,
}

impl App<Box<dyn KeyValueStore>> {
  /// Wires config → storage backend → local store → admin service.
  ///
  /// The baseline file is only read when `with_baseline` is set, so commands
  /// that never look at it keep working when it is broken.
  pub fn bootstrap(baseline_override: Option<PathBuf>, with_baseline: bool) -> anyhow::Result<Self> {
    let paths = DinoPaths::detect().context("resolving data directories")?;
    let storage = StorageConfig::load().context("loading [storage] config")?;
    let mut export = ExportConfig::load().context("loading [export] config")?;
    if baseline_override.is_some() {
      export.baseline = baseline_override;
    }

    let backend = dino_storage::open_store(&storage, &paths).context("opening the local store")?;
    let store = LocalSongStore::with_key(backend, storage.set_key.clone());
    let baseline = read_baseline(export.baseline.as_deref(), with_baseline)?;

    tracing::debug!(backend = ?storage.backend, baseline = baseline.len(), "admin service ready");
    Ok(Self::new(AdminService::new(store, baseline), export))
  }
}

fn read_baseline(path: Option<&Path>, needed: bool) -> anyhow::Result<Vec<Song>> {
  match path {
    Some(path) if needed => load_baseline(path).with_context(|| format!("loading baseline {}", path.display())),
    Some(path) => {
      tracing::debug!(path = %path.display(), "baseline not needed for this command, skipping");
      Ok(Vec::new())
    }
    None => Ok(Vec::new()),
  }
}

impl<K: KeyValueStore> App<K> {
  pub fn new(service: AdminService<K>, export: ExportConfig) -> Self {
    Self { service, export }
  }

  pub fn run<W: Write>(&self, command: Commands, out: &mut W) -> anyhow::Result<Outcome> {
    match command {
      Commands::Resolve { input } => {
        let id = youtube::resolve(&input);
        writeln!(out, "id:    {id}")?;
        writeln!(out, "watch: {}", youtube::watch_url(&id))?;
        writeln!(out, "embed: {}", youtube::embed_url(&id))?;
        writeln!(out, "cover: {}", youtube::cover_url(&id))?;
      }

      Commands::Generate { form } => match self.service.generate(&form::load_form(&form)?) {
        Submission::Accepted(song) => writeln!(out, "{}", json::song_to_json(&song)?)?,
        Submission::Rejected(issues) => {
          presenter::render_issues(&issues, out)?;
          return Ok(Outcome::Invalid);
        }
      },

      Commands::Add { form } => match self.service.add_to_set(&form::load_form(&form)?)? {
        Submission::Accepted(song) => {
          let total = self.service.store().load().len();
          writeln!(out, "{}", json::song_to_json(&song)?)?;
          writeln!(out, "Added song {} to the local set. Songs now: {total}", song.id)?;
        }
        Submission::Rejected(issues) => {
          presenter::render_issues(&issues, out)?;
          return Ok(Outcome::Invalid);
        }
      },

      Commands::List => presenter::render_listing(&self.service.listing(), out)?,

      Commands::Show { id } => match self.service.store().find(SongId::new(id)) {
        Some(song) => writeln!(out, "{}", json::song_to_json(&song)?)?,
        None => writeln!(out, "No song with id {id} in the local set.")?,
      },

      Commands::Remove { id } => {
        let before = self.service.store().load().len();
        let remaining = self.service.remove(SongId::new(id))?;
        if remaining.len() == before {
          writeln!(out, "No song with id {id} in the local set; nothing removed.")?;
        } else {
          writeln!(out, "Removed song {id}. Songs now: {}", remaining.len())?;
        }
      }

      Commands::Clear { yes } => {
        if !yes {
          writeln!(out, "This deletes every song in the local set. Re-run with --yes to confirm.")?;
        } else {
          self.service.clear()?;
          writeln!(out, "The local set was cleared.")?;
        }
      }

      Commands::NextId => writeln!(out, "{}", self.service.next_id())?,

      Commands::Export { format, form, out: out_dir, stdout } => {
        let delivery =
          if stdout { Delivery::Stdout } else { Delivery::Directory(out_dir.unwrap_or_else(|| self.export.out_dir())) };
        return self.export(format.into(), form.as_deref(), &delivery, out);
      }

      Commands::FormTemplate => write!(out, "{}", form::template()?)?,

      Commands::Config => {
        let paths = DinoPaths::detect()?;
        writeln!(out, "config file: {}", paths.config_file().display())?;
        writeln!(out, "data dir:    {}", paths.data_dir.display())?;
        writeln!(out, "set key:     {}", self.service.store().key())?;
        writeln!(out, "out dir:     {}", self.export.out_dir().display())?;
        match &self.export.baseline {
          Some(path) => writeln!(out, "baseline:    {}", path.display())?,
          None => writeln!(out, "baseline:    none")?,
        }
      }
    }

    Ok(Outcome::Done)
  }

  fn export<W: Write>(
    &self,
    format: ExportFormat,
    form: Option<&Path>,
    delivery: &Delivery,
    out: &mut W,
  ) -> anyhow::Result<Outcome> {
    let exported = match form {
      Some(path) => match self.service.generate(&form::load_form(path)?) {
        Submission::Accepted(song) => files::single_song_files(&song, format)?,
        Submission::Rejected(issues) => {
          presenter::render_issues(&issues, out)?;
          return Ok(Outcome::Invalid);
        }
      },
      None => {
        let Some(merged) = self.service.export_set() else {
          writeln!(out, "The local set is empty; nothing to export.")?;
          return Ok(Outcome::Done);
        };
        let files = files::set_files(&merged, format)?;
        tracing::info!(songs = merged.len(), "exporting merged set");
        files
      }
    };

    delivery.deliver(&exported, out)?;
    Ok(Outcome::Done)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use dino_core::domain::TaskType;
  use dino_core::ports::MemoryKeyValueStore;
  use tempfile::tempdir;

  const FORM: &str = r#"
    youtube = "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
    title_es = "Vivir Mi Vida"
    artist = "Marc Anthony"
    level = "A2"
    lyrics = "0:05 | Voy a reír, voy a bailar"
  "#;

  fn app(baseline: Vec<Song>) -> App<MemoryKeyValueStore> {
    App::new(
      AdminService::new(LocalSongStore::new(MemoryKeyValueStore::new()), baseline),
      ExportConfig::default(),
    )
  }

  fn run(app: &App<MemoryKeyValueStore>, command: Commands) -> (Outcome, String) {
    let mut buf = Vec::new();
    let code = app.run(command, &mut buf).unwrap();
    (code, String::from_utf8(buf).unwrap())
  }

  fn write_form(dir: &Path, text: &str) -> PathBuf {
    let path = dir.join("form.toml");
    std::fs::write(&path, text).unwrap();
    path
  }

  #[test]
  fn invalid_form_is_reported_not_stored() {
    let tmp = tempdir().unwrap();
    let app = app(vec![]);
    let (code, text) = run(&app, Commands::Add { form: write_form(tmp.path(), "artist = \"X\"") });

    assert_eq!(code, Outcome::Invalid);
    assert!(text.contains("YouTube reference required."));
    assert!(text.contains("Title required (ru or es)."));
    assert!(app.service.store().load().is_empty());
  }

  #[test]
  fn add_then_export_merged_set() {
    let tmp = tempdir().unwrap();
    let base = vec![Song { id: SongId::new(1), artist: "Base".into(), ..Default::default() }];
    let app = app(base);

    let (code, text) = run(&app, Commands::Add { form: write_form(tmp.path(), FORM) });
    assert_eq!(code, Outcome::Done);
    assert!(text.contains("Added song 2 to the local set. Songs now: 1"));

    let out_dir = tmp.path().join("out");
    let mut buf = Vec::new();
    app.export(ExportFormat::Json, None, &Delivery::Directory(out_dir.clone()), &mut buf).unwrap();

    let written = std::fs::read_to_string(out_dir.join("songs.json")).unwrap();
    let songs = json::songs_from_json(&written).unwrap();
    let ids: Vec<Option<u64>> = songs.iter().map(|s| s.id.number()).collect();
    assert_eq!(ids, vec![Some(1), Some(2)]);
  }

  #[test]
  fn empty_set_export_is_a_notice() {
    let app = app(vec![]);
    let mut buf = Vec::new();
    let code = app.export(ExportFormat::Csv, None, &Delivery::Stdout, &mut buf).unwrap();

    assert_eq!(code, Outcome::Done);
    assert_eq!(String::from_utf8(buf).unwrap(), "The local set is empty; nothing to export.\n");
  }

  #[test]
  fn single_form_export_names_files_after_the_song() {
    let tmp = tempdir().unwrap();
    let app = app(vec![]);
    let form = write_form(tmp.path(), FORM);

    let mut buf = Vec::new();
    app.export(ExportFormat::Csv, Some(&form), &Delivery::Directory(tmp.path().to_path_buf()), &mut buf).unwrap();

    let lyrics = std::fs::read_to_string(tmp.path().join("song_1_vivir-mi-vida_lyrics.csv")).unwrap();
    assert_eq!(lyrics, "song_id,line_index,time,text\n1,1,0:05,\"Voy a reír, voy a bailar\"\n");
  }

  #[test]
  fn remove_and_clear() {
    let tmp = tempdir().unwrap();
    let app = app(vec![]);
    run(&app, Commands::Add { form: write_form(tmp.path(), FORM) });

    let (_, text) = run(&app, Commands::Remove { id: 42 });
    assert!(text.contains("nothing removed"));

    let (_, text) = run(&app, Commands::Clear { yes: false });
    assert!(text.contains("--yes"));
    assert_eq!(app.service.store().load().len(), 1);

    run(&app, Commands::Clear { yes: true });
    assert!(app.service.store().load().is_empty());
    let (_, text) = run(&app, Commands::NextId);
    assert_eq!(text, "1\n");
  }

  #[test]
  fn resolve_prints_links() {
    let (_, text) = run(&app(vec![]), Commands::Resolve { input: "https://youtu.be/abc123".into() });
    assert!(text.starts_with("id:    abc123\n"));
    assert!(text.contains("cover: https://img.youtube.com/vi/abc123/mqdefault.jpg"));
  }

  #[test]
  fn baseline_is_read_only_when_needed() {
    let tmp = tempdir().unwrap();
    let broken = tmp.path().join("songs.json");
    std::fs::write(&broken, "[{\"id\": 1,").unwrap();

    assert!(read_baseline(Some(&broken), false).unwrap().is_empty());
    assert!(read_baseline(Some(&broken), true).is_err());
    assert!(read_baseline(None, true).unwrap().is_empty());
  }

  #[test]
  fn unknown_baseline_task_type_is_exported_unchanged() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("songs.json");
    std::fs::write(&path, r#"[{"id": 1, "artist": "Base", "tasks": [{"type": "reading", "content": "x"}]}]"#).unwrap();
    let app = app(read_baseline(Some(&path), true).unwrap());
    run(&app, Commands::Add { form: write_form(tmp.path(), FORM) });

    let mut buf = Vec::new();
    app.export(ExportFormat::Json, None, &Delivery::Stdout, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let start = text.find('[').unwrap();
    let end = text.rfind(']').unwrap();
    let songs = json::songs_from_json(&text[start..=end]).unwrap();
    assert_eq!(songs[0].tasks[0].kind, TaskType::Other("reading".into()));
    assert!(text.contains("\"type\": \"reading\""));
  }
}
