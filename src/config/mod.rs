//! Configuration file handling.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{AppConfig, Config, SourceConfig};
