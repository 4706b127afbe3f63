pub mod ids;
pub mod song;
pub mod task;

pub use ids::SongId;
pub use song::{Bilingual, Culture, LyricLine, Restrictions, Song};
pub use task::{Task, TaskContent, TaskType};
