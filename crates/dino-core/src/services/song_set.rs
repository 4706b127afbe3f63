use crate::domain::{Song, SongId};
use crate::errors::CoreError;
use crate::merge;
use crate::ports::KeyValueStore;

/// Clave histórica bajo la que se guarda el conjunto local.
pub const DEFAULT_SET_KEY: &str = "songs_admin_set_v1";

/// Conjunto local de canciones, guardado como una sola lista JSON bajo una
/// clave del backend.
///
/// El orden guardado es el de inserción. No hay bloqueo: se asume un único
/// escritor síncrono.
pub struct LocalSongStore<K: KeyValueStore> {
  backend: K,
  key: String,
}

impl<K: KeyValueStore> LocalSongStore<K> {
  pub fn new(backend: K) -> Self {
    Self::with_key(backend, DEFAULT_SET_KEY)
  }

  pub fn with_key(backend: K, key: impl Into<String>) -> Self {
    Self { backend, key: key.into() }
  }

  pub fn key(&self) -> &str {
    &self.key
  }

  /// Lee el conjunto. Datos ausentes, ilegibles o corruptos cuentan como
  /// conjunto vacío.
  pub fn load(&self) -> Vec<Song> {
    let raw = match self.backend.get(&self.key) {
      Ok(Some(raw)) => raw,
      Ok(None) => return Vec::new(),
      Err(e) => {
        tracing::warn!(key = %self.key, error = %e, "could not read song set, treating as empty");
        return Vec::new();
      }
    };

    match serde_json::from_str::<Vec<Song>>(&raw) {
      Ok(songs) => songs,
      Err(e) => {
        tracing::warn!(key = %self.key, error = %e, "stored song set is corrupt, treating as empty");
        Vec::new()
      }
    }
  }

  pub fn save(&self, songs: &[Song]) -> Result<(), CoreError> {
    let raw = serde_json::to_string(songs)?;
    self.backend.set(&self.key, &raw)?;
    tracing::debug!(key = %self.key, count = songs.len(), "song set saved");
    Ok(())
  }

  /// Sustituye en su sitio la canción con el mismo id o la añade al final.
  pub fn upsert(&self, song: Song) -> Result<Vec<Song>, CoreError> {
    let mut songs = self.load();
    match songs.iter().position(|s| s.id == song.id) {
      Some(idx) => songs[idx] = song,
      None => songs.push(song),
    }
    self.save(&songs)?;
    Ok(songs)
  }

  /// Quita la canción con ese id; si no existe el conjunto queda igual.
  pub fn remove(&self, id: SongId) -> Result<Vec<Song>, CoreError> {
    let mut songs = self.load();
    songs.retain(|s| s.id != id);
    self.save(&songs)?;
    Ok(songs)
  }

  pub fn clear(&self) -> Result<Vec<Song>, CoreError> {
    self.save(&[])?;
    Ok(Vec::new())
  }

  pub fn find(&self, id: SongId) -> Option<Song> {
    self.load().into_iter().find(|s| s.id == id)
  }

  pub fn next_id(&self, baseline: &[Song]) -> SongId {
    merge::next_id(&self.load(), baseline)
  }
}
