//! Config-backed helpers bound to one config location.

use crate::HelperError;
use crate::logging::write_log_line;
use crate::response::{ResponseEnvelope, build_response};
use lambda_helpers_config::{Config, ConfigError, ConfigFile};
use log::debug;
use serde::Serialize;
use serde_json::Value;
use std::io::Write;
use std::path::Path;

/// Helper operations reading a specific `config.json`.
///
/// Each operation re-reads the file, so edits are picked up by the next
/// call without rebuilding the value.
#[derive(Debug, Clone)]
pub struct Helpers {
    file: ConfigFile,
}

impl Helpers {
    /// Bind the helpers to a config location.
    pub fn new(file: ConfigFile) -> Self {
        Self { file }
    }

    /// Bind the helpers to an explicit config file path.
    pub fn at(path: impl AsRef<Path>) -> Self {
        Self::new(ConfigFile::new(path))
    }

    /// Bind the helpers to `config.json` beside the running executable.
    pub fn beside_executable() -> Result<Self, ConfigError> {
        Ok(Self::new(ConfigFile::beside_executable()?))
    }

    /// Config location these helpers read.
    pub fn config_file(&self) -> &ConfigFile {
        &self.file
    }

    /// Read and parse the config.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        self.file.load()
    }

    /// Top-level setting `key`, or `default` when the key is absent.
    pub fn get_setting(&self, key: &str, default: Value) -> Result<Value, ConfigError> {
        let config = self.load_config()?;
        let value = config.get_or(key, default);
        debug!("resolved setting (key={key})");
        Ok(value)
    }

    /// Wrap `body` in an envelope stamped with the configured `version`.
    pub fn format_response<T>(
        &self,
        status_code: i64,
        body: &T,
    ) -> Result<ResponseEnvelope, HelperError>
    where
        T: Serialize + ?Sized,
    {
        let config = self.load_config()?;
        let version = config.version()?;
        let envelope = build_response(status_code, version, body)?;
        debug!(
            "formatted response (status={}, version={}, body_len={})",
            envelope.status_code,
            version,
            envelope.body.len()
        );
        Ok(envelope)
    }

    /// Print `[<log_level>] <message>` to stdout.
    pub fn log_info(&self, message: &str) -> Result<(), HelperError> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.log_info_to(&mut lock, message)
    }

    /// Write `[<log_level>] <message>` to `out`.
    pub fn log_info_to<W: Write + ?Sized>(
        &self,
        out: &mut W,
        message: &str,
    ) -> Result<(), HelperError> {
        let config = self.load_config()?;
        let level = config.log_level()?;
        write_log_line(out, level, message)?;
        Ok(())
    }
}
