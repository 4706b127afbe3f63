pub mod admin_service;
pub mod song_set;

pub use admin_service::{AdminService, Submission};
pub use song_set::{DEFAULT_SET_KEY, LocalSongStore};
