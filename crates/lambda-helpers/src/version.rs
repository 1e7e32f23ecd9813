//! Version information for the helper crate.

use serde::{Deserialize, Serialize};

/// Helper crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Release date of [`VERSION`].
pub const UPDATED: &str = "2025-11-11";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub version: String,
    pub updated: String,
    pub description: String,
}

pub fn get_version_info() -> VersionInfo {
    VersionInfo {
        version: VERSION.to_string(),
        updated: UPDATED.to_string(),
        description: env!("CARGO_PKG_DESCRIPTION").to_string(),
    }
}
