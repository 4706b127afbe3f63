pub mod builder;
pub mod domain;
pub mod errors;
pub mod merge;
pub mod ports;
pub mod services;
pub mod validation;
pub mod youtube;

pub use errors::CoreError;
