use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::domain::{Song, SongId};

/// Combina el conjunto base con las altas locales.
///
/// Las canciones se identifican por la forma textual del id: las de
/// `additions` sustituyen a las de `baseline` con la misma clave y ocupan su
/// posición. El resultado sale ordenado por valor numérico del id (estable; lo
/// no numérico cuenta como 0).
pub fn merge(baseline: &[Song], additions: &[Song]) -> Vec<Song> {
  let mut merged: Vec<&Song> = Vec::with_capacity(baseline.len() + additions.len());
  let mut slots: HashMap<String, usize> = HashMap::new();
  for song in baseline.iter().chain(additions) {
    match slots.entry(song.id.key()) {
      Entry::Occupied(slot) => merged[*slot.get()] = song,
      Entry::Vacant(slot) => {
        slot.insert(merged.len());
        merged.push(song);
      }
    }
  }
  merged.sort_by(|a, b| a.id.sort_value().total_cmp(&b.id.sort_value()));
  merged.into_iter().cloned().collect()
}

/// Mayor id numérico presente (parte entera), `0` si no hay ninguno.
pub fn max_id<'a>(songs: impl IntoIterator<Item = &'a Song>) -> u64 {
  let max = songs.into_iter().filter_map(|s| s.id.numeric()).fold(0.0_f64, f64::max);
  max.floor() as u64
}

/// Id que recibirá la próxima canción sin id explícito.
pub fn next_id(local: &[Song], baseline: &[Song]) -> SongId {
  SongId::new(max_id(local.iter().chain(baseline)).saturating_add(1))
}
