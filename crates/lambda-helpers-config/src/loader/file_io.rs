//! IO helpers for reading the config artifact from disk.

use crate::{Config, ConfigError};
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read the raw config bytes, distinguishing a missing file from other IO failures.
///
/// Decoding is left to the JSON parser so bad encodings surface as parse errors.
pub(super) fn read_config(path: &Path) -> Result<Vec<u8>, ConfigError> {
    fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ConfigError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Parse config contents that must be a UTF-8 JSON object.
pub(super) fn parse_config(contents: &[u8], label: &str) -> Result<Config, ConfigError> {
    let map: Map<String, Value> =
        serde_json::from_slice(contents).map_err(|source| ConfigError::ParseFailed {
            label: label.to_string(),
            source,
        })?;
    Ok(Config::from_map(map))
}
