//! Configuration model and loader for the shared handler config.
//!
//! This crate owns locating `config.json`, parsing it into an untyped
//! key-value `Config`, and the error taxonomy surfaced to handlers.

mod error;
mod loader;
mod model;

/// Public error type returned by config loading and key lookups.
pub use error::ConfigError;
/// Locator for the config artifact on disk.
pub use loader::{CONFIG_FILE_NAME, ConfigFile};
/// Untyped configuration model.
pub use model::{Config, LOG_LEVEL_KEY, VERSION_KEY};
