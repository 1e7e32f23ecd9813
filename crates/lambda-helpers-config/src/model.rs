//! Untyped configuration model.

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Dotted path of the version string embedded in response headers.
pub const VERSION_KEY: &str = "version";
/// Dotted path of the label prefixed to `log_info` lines.
pub const LOG_LEVEL_KEY: &str = "common_settings.log_level";

/// Parsed contents of `config.json`.
///
/// Kept as a string-keyed map of JSON values so deployments can carry
/// arbitrary extra keys; required keys are checked where they are read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config(Map<String, Value>);

impl Config {
    /// Wrap an already-parsed JSON object.
    pub fn from_map(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Borrow the underlying top-level mapping.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume the config and return the top-level mapping.
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Top-level value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Top-level value for `key`, or `default` when the key is absent.
    ///
    /// A key that is present with a `null` value returns `null`.
    pub fn get_or(&self, key: &str, default: Value) -> Value {
        self.0.get(key).cloned().unwrap_or(default)
    }

    /// Resolve a dotted key path such as `common_settings.log_level`.
    ///
    /// Fails with [`ConfigError::KeyMissing`] naming the full path when any
    /// segment is absent or an intermediate value is not an object.
    pub fn lookup(&self, path: &str) -> Result<&Value, ConfigError> {
        let mut segments = path.split('.');
        let first = segments.next().unwrap_or_default();
        let mut current = self
            .0
            .get(first)
            .ok_or_else(|| ConfigError::KeyMissing(path.to_string()))?;
        for segment in segments {
            current = current
                .as_object()
                .and_then(|map| map.get(segment))
                .ok_or_else(|| ConfigError::KeyMissing(path.to_string()))?;
        }
        Ok(current)
    }

    /// Resolve a dotted key path that must hold a string.
    pub fn require_str(&self, path: &str) -> Result<&str, ConfigError> {
        match self.lookup(path)? {
            Value::String(value) => Ok(value),
            other => Err(ConfigError::InvalidField {
                path: path.to_string(),
                message: format!("expected a string, found {}", json_type(other)),
            }),
        }
    }

    /// The `version` string.
    pub fn version(&self) -> Result<&str, ConfigError> {
        self.require_str(VERSION_KEY)
    }

    /// The `common_settings.log_level` string.
    pub fn log_level(&self) -> Result<&str, ConfigError> {
        self.require_str(LOG_LEVEL_KEY)
    }
}

impl From<Map<String, Value>> for Config {
    fn from(map: Map<String, Value>) -> Self {
        Self::from_map(map)
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
