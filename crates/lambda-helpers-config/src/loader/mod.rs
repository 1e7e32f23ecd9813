//! Locating and loading the shared `config.json`.
//!
//! Every load re-reads and re-parses the file; nothing is cached, so a
//! handler picks up config edits without a restart.

mod file_io;
mod utils;


use crate::{Config, ConfigError};
use log::debug;
use std::path::{Path, PathBuf};

/// File name of the config artifact.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Location of a config artifact on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    /// Use an explicit path to a config file.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Use `config.json` inside the provided directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(CONFIG_FILE_NAME))
    }

    /// Use `config.json` beside the running executable.
    pub fn beside_executable() -> Result<Self, ConfigError> {
        let dir = utils::executable_dir()?;
        debug!("resolved config dir beside executable: {}", dir.display());
        Ok(Self::in_dir(dir))
    }

    /// Path the config is read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the config from disk.
    pub fn load(&self) -> Result<Config, ConfigError> {
        debug!("loading config from path: {}", self.path.display());
        let contents = file_io::read_config(&self.path)?;
        file_io::parse_config(&contents, &self.path.display().to_string())
    }
}

impl Config {
    /// Load a config from a path.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        ConfigFile::new(path).load()
    }

    /// Parse a config from raw JSON contents.
    pub fn load_from_str(contents: &str) -> Result<Self, ConfigError> {
        debug!("loading config from raw contents (len={})", contents.len());
        file_io::parse_config(contents.as_bytes(), "config")
    }
}
