//! Helper utilities for config path resolution.

use crate::ConfigError;
use std::path::PathBuf;

/// Directory holding the running executable, with symlinks resolved when possible.
pub(super) fn executable_dir() -> Result<PathBuf, ConfigError> {
    let exe = std::env::current_exe().map_err(ConfigError::LocateFailed)?;
    let exe = exe.canonicalize().unwrap_or(exe);
    exe.parent().map(|dir| dir.to_path_buf()).ok_or_else(|| {
        ConfigError::LocateFailed(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("executable has no parent directory: {}", exe.display()),
        ))
    })
}
