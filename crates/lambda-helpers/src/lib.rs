//! Shared helpers for serverless request handlers.
//!
//! Handlers load the shared `config.json`, read settings from it, wrap
//! their results in a uniform [`ResponseEnvelope`], and print log lines
//! labelled with the configured level. The free functions here read the
//! config beside the running executable; [`Helpers`] does the same for an
//! explicit [`ConfigFile`].

mod error;
pub mod handler;
mod helpers;
mod logging;
mod response;
pub mod version;

/// Re-export for convenience.
pub use lambda_helpers_config as config;
pub use lambda_helpers_config::{Config, ConfigError, ConfigFile};

pub use error::HelperError;
pub use helpers::Helpers;
pub use logging::write_log_line;
pub use response::{
    CONTENT_TYPE_HEADER, JSON_CONTENT_TYPE, ResponseEnvelope, VERSION_HEADER, build_response,
};

use serde::Serialize;
use serde_json::Value;

/// Load `config.json` from beside the running executable.
pub fn load_config() -> Result<Config, ConfigError> {
    Helpers::beside_executable()?.load_config()
}

/// Top-level setting `key`, or `default` when the key is absent.
pub fn get_setting(key: &str, default: Value) -> Result<Value, ConfigError> {
    Helpers::beside_executable()?.get_setting(key, default)
}

/// Wrap `body` in a response envelope stamped with the configured version.
pub fn format_response<T>(status_code: i64, body: &T) -> Result<ResponseEnvelope, HelperError>
where
    T: Serialize + ?Sized,
{
    Helpers::beside_executable()?.format_response(status_code, body)
}

/// Print `[<log_level>] <message>` to stdout.
pub fn log_info(message: &str) -> Result<(), HelperError> {
    Helpers::beside_executable()?.log_info(message)
}

/// Initialize diagnostic logging with env_logger.
///
/// Verbosity follows `RUST_LOG`. Output goes to stderr and never mixes
/// with `log_info` lines on stdout. Returns `false` when a logger was
/// already installed.
pub fn init_logging() -> bool {
    env_logger::builder()
        .format_timestamp_millis()
        .parse_default_env()
        .try_init()
        .is_ok()
}
