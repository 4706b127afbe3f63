mod backend;
mod paths;

pub use backend::{ConfigBackend, TomlConfigBackend};
pub use paths::{ConfigError, DinoPaths};

use once_cell::sync::Lazy;

// Singleton de paths
pub static PATHS: Lazy<DinoPaths> = Lazy::new(|| DinoPaths::detect().expect("failed to init DinoPaths"));

// Singleton del backend de config
pub static CONFIG_BACKEND: Lazy<TomlConfigBackend> = Lazy::new(|| TomlConfigBackend::new(PATHS.clone()));
