//! Error types for the helper surface.

use lambda_helpers_config::ConfigError;

/// Errors returned by response formatting and log output.
#[derive(Debug, thiserror::Error)]
pub enum HelperError {
    /// Loading config or reading a required key failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The response body could not be serialized.
    #[error("failed to encode response body: {0}")]
    EncodeFailed(#[from] serde_json::Error),
    /// Writing the log line failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
