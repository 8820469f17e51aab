#![allow(dead_code)]


use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated HOME and XDG dirs so runs never touch the user's config or logs.
pub struct TestEnv {
    tmp: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            tmp: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.tmp.path()
    }

    pub fn config_home(&self) -> PathBuf {
        self.root().join("config")
    }

    pub fn state_home(&self) -> PathBuf {
        self.root().join("state")
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("descfetch");
        cmd.env("HOME", self.root())
            .env("XDG_CONFIG_HOME", self.config_home())
            .env("XDG_STATE_HOME", self.state_home())
            .env_remove("XDG_CONFIG_DIRS")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write `$XDG_CONFIG_HOME/descfetch/config.toml`.
    pub fn write_config(&self, contents: &str) {
        let dir = self.config_home().join("descfetch");
        std::fs::create_dir_all(&dir).expect("create config dir");
        std::fs::write(dir.join("config.toml"), contents).expect("write config");
    }
}
