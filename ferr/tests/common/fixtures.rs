use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

const FERR_VARS: &[&str] = &[
    "FERR_LOG_LEVEL",
    "FERR_LOG_FORMAT",
    "FERR_LOG_FILE",
    "FERR_DISPLAY_FORMAT",
    "FERR_WRAP_WIDTH",
];

/// Isolated config home so the user's own `ferr/config.toml` never leaks in.
pub struct TestHome {
    pub dir: TempDir,
}

impl TestHome {
    pub fn new() -> Self {
        crate::test_log!("FIXTURE: Creating isolated config home");
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Write `contents` to a config file inside the home and return its path.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        let path = self.dir.path().join("custom.toml");
        fs::write(&path, contents).expect("Failed to write config file");
        path
    }

    /// `ferr` with a clean environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_ferr"));
        cmd.env("XDG_CONFIG_HOME", self.dir.path())
            .env("HOME", self.dir.path())
            .env_remove("RUST_LOG");
        for var in FERR_VARS {
            cmd.env_remove(var);
        }
        cmd
    }
}
