//! Shared fixture for binary-level tests.
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".streamify");

        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    pub fn write_config(&self, content: &str) {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        std::fs::write(self.config_path(), content).expect("Failed to write config");
    }

    /// `streamify` pointed at this fixture with reproducible mock data
    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("streamify").expect("Failed to find streamify binary");
        cmd.env_remove("RUST_LOG")
            .env_remove("STREAMIFY_PATH")
            .arg("--data-dir")
            .arg(self.data_dir())
            .arg("--seed")
            .arg("7");
        cmd
    }

    pub fn json(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .command()
            .args(args)
            .arg("--format")
            .arg("json")
            .output()
            .expect("Failed to run streamify");
        assert!(
            output.status.success(),
            "streamify {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
    }
}
