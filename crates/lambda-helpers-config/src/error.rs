//! Error types for config loading and key lookups.

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned while loading config or reading required keys.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config artifact does not exist at the expected path.
    #[error("config not found: {}", path.display())]
    NotFound { path: PathBuf },
    /// The config artifact exists but could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The config contents are not a JSON object.
    #[error("failed to parse {label}: {source}")]
    ParseFailed {
        label: String,
        #[source]
        source: serde_json::Error,
    },
    /// A required key is absent.
    #[error("missing config key: {0}")]
    KeyMissing(String),
    /// A required key holds a value of the wrong type.
    #[error("invalid config at {path}: {message}")]
    InvalidField { path: String, message: String },
    /// The directory of the running executable could not be resolved.
    #[error("failed to locate config: {0}")]
    LocateFailed(#[source] std::io::Error),
}
