use lambda_helpers_config::ConfigFile;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Temporary directory holding a `config.json` for a single test.
pub struct ConfigFixture {
    dir: TempDir,
    file: ConfigFile,
}

impl ConfigFixture {
    /// Directory with no config file written yet.
    pub fn empty() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let file = ConfigFile::in_dir(dir.path());
        Self { dir, file }
    }

    pub fn with_json(value: &Value) -> Self {
        let fixture = Self::empty();
        fixture.write_json(value);
        fixture
    }

    pub fn with_raw(contents: &str) -> Self {
        let fixture = Self::empty();
        fixture.write_raw(contents);
        fixture
    }

    pub fn write_json(&self, value: &Value) {
        let contents = serde_json::to_string_pretty(value).expect("serialize config");
        self.write_raw(&contents);
    }

    pub fn write_raw(&self, contents: &str) {
        fs::write(self.file.path(), contents).expect("write config");
    }

    pub fn file(&self) -> &ConfigFile {
        &self.file
    }

    pub fn dir(&self) -> &std::path::Path {
        self.dir.path()
    }
}
