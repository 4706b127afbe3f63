use crate::builder::{self, SongForm};
use crate::domain::{Song, SongId};
use crate::errors::CoreError;
use crate::merge;
use crate::ports::KeyValueStore;
use crate::services::song_set::LocalSongStore;
use crate::validation::{self, ValidationIssue};

/// Resultado de construir y validar una canción desde el formulario.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
  Accepted(Song),
  Rejected(Vec<ValidationIssue>),
}

/// Orquesta formulario → canción → validación → conjunto local → export.
///
/// El conjunto base (canciones ya publicadas) se inyecta explícitamente y es
/// de solo lectura: se consulta para el siguiente id y para el merge.
pub struct AdminService<K: KeyValueStore> {
  store: LocalSongStore<K>,
  baseline: Vec<Song>,
}

impl<K: KeyValueStore> AdminService<K> {
  pub fn new(store: LocalSongStore<K>, baseline: Vec<Song>) -> Self {
    Self { store, baseline }
  }

  pub fn store(&self) -> &LocalSongStore<K> {
    &self.store
  }

  pub fn next_id(&self) -> SongId {
    self.store.next_id(&self.baseline)
  }

  /// Construye y valida sin tocar el conjunto local.
  pub fn generate(&self, form: &SongForm) -> Submission {
    let song = builder::build_song(form, self.next_id());
    let issues = validation::validate(&song);
    if issues.is_empty() { Submission::Accepted(song) } else { Submission::Rejected(issues) }
  }

  /// Como [`Self::generate`], y si es válida la guarda (upsert) en el conjunto.
  pub fn add_to_set(&self, form: &SongForm) -> Result<Submission, CoreError> {
    let submission = self.generate(form);
    if let Submission::Accepted(song) = &submission {
      let set = self.store.upsert(song.clone())?;
      tracing::info!(id = %song.id, total = set.len(), "song added to local set");
    }
    Ok(submission)
  }

  pub fn remove(&self, id: SongId) -> Result<Vec<Song>, CoreError> {
    self.store.remove(id)
  }

  pub fn clear(&self) -> Result<(), CoreError> {
    self.store.clear().map(|_| ())
  }

  /// Conjunto listo para exportar: base + locales, ordenado por id.
  ///
  /// Devuelve `None` si el conjunto local está vacío; exportar solo la base no
  /// tiene sentido desde la herramienta de administración.
  pub fn export_set(&self) -> Option<Vec<Song>> {
    let local = self.store.load();
    if local.is_empty() {
      return None;
    }
    Some(merge::merge(&self.baseline, &local))
  }

  /// Conjunto local ordenado por artista para mostrarlo; no altera el orden
  /// guardado.
  pub fn listing(&self) -> Vec<Song> {
    let mut songs = self.store.load();
    songs.sort_by_cached_key(|s| s.artist.to_lowercase());
    songs
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::builder::SongForm;
  use crate::ports::MemoryKeyValueStore;

  fn form(title: &str, artist: &str) -> SongForm {
    SongForm {
      youtube: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".into(),
      title_es: title.into(),
      artist: artist.into(),
      ..Default::default()
    }
  }

  fn baseline() -> Vec<Song> {
    vec![Song { id: SongId::new(10), artist: "Base".into(), ..Default::default() }]
  }

  #[test]
  fn rejected_forms_never_reach_the_store() {
    let service = AdminService::new(LocalSongStore::new(MemoryKeyValueStore::new()), vec![]);
    let outcome = service.add_to_set(&form("", "")).unwrap();
    assert_eq!(
      outcome,
      Submission::Rejected(vec![ValidationIssue::MissingArtist, ValidationIssue::MissingTitle])
    );
    assert!(service.store().load().is_empty());
  }

  #[test]
  fn ids_continue_after_baseline_and_local_set() {
    let service = AdminService::new(LocalSongStore::new(MemoryKeyValueStore::new()), baseline());

    let Submission::Accepted(first) = service.add_to_set(&form("Uno", "Zoe")).unwrap() else {
      panic!("expected accepted submission");
    };
    assert_eq!(first.id, SongId::new(11));

    let Submission::Accepted(second) = service.add_to_set(&form("Dos", "ana")).unwrap() else {
      panic!("expected accepted submission");
    };
    assert_eq!(second.id, SongId::new(12));

    let artists: Vec<String> = service.listing().into_iter().map(|s| s.artist).collect();
    assert_eq!(artists, vec!["ana", "Zoe"]);
  }

  #[test]
  fn export_requires_local_songs() {
    let service = AdminService::new(LocalSongStore::new(MemoryKeyValueStore::new()), baseline());
    assert_eq!(service.export_set(), None);

    service.add_to_set(&form("Uno", "Zoe")).unwrap();
    let ids: Vec<Option<u64>> = service.export_set().unwrap().iter().map(|s| s.id.number()).collect();
    assert_eq!(ids, vec![Some(10), Some(11)]);
  }

  #[test]
  fn explicit_id_overrides_baseline_entry_on_export() {
    let service = AdminService::new(LocalSongStore::new(MemoryKeyValueStore::new()), baseline());
    let edited = SongForm { id: "10".into(), ..form("Editada", "Nuevo") };
    service.add_to_set(&edited).unwrap();

    let merged = service.export_set().unwrap();
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].artist, "Nuevo");
  }
}
