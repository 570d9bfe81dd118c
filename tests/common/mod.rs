//! Shared testing utilities for slider-view CLI tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI runs.
pub struct TestContext {
    root: TempDir,
}

impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Directory used as the working directory for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `slider-view` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("slider-view").expect("Failed to locate slider-view binary");
        cmd.current_dir(self.work_dir())
            .env_remove("RUST_LOG")
            .env_remove("AMBARI_USERNAME")
            .env_remove("AMBARI_PASSWORD");
        cmd
    }

    /// Write `slider-view.toml` into the working directory.
    pub fn write_settings(&self, content: &str) -> PathBuf {
        let path = self.work_dir().join("slider-view.toml");
        fs::write(&path, content).expect("Failed to write settings");
        path
    }
}

/// Settings pointing at a mock Ambari server, with an explicit record list.
pub fn settings_for(server_url: &str, configs: &str) -> String {
    format!(
        r#"[ambari]
api_url = "{server_url}/api/v1/"
timeout_secs = 2

{configs}"#
    )
}

pub const INSTANCE_PATH: &str = "/api/v1/views/SLIDER/versions/1.0.0/instances/SLIDER_1";

pub const FOO_REQUIRED: &str = r#"[[configs]]
id = 1
view_config_name = "foo"
required = true
"#;
