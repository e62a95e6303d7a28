use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Get a Command for psicat
pub fn psicat() -> Command {
    cargo_bin_cmd!("psicat")
}

/// Path of a file under tests/fixtures
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// An isolated config directory plus a sublist state file inside it
pub struct Catalog {
    pub dir: TempDir,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn state_path(&self) -> PathBuf {
        self.dir.path().join("pins.json")
    }

    /// psicat with the fixture dataset and this catalog's state file
    pub fn cmd(&self) -> Command {
        let mut cmd = self.bare();
        cmd.arg("--data")
            .arg(fixture("psionics.json"))
            .arg("--state")
            .arg(self.state_path());
        cmd
    }

    /// psicat with only the config directory isolated
    pub fn bare(&self) -> Command {
        let mut cmd = psicat();
        cmd.env("PSICAT_CONFIG_DIR", self.dir.path())
            .env_remove("PSICAT_DATA")
            .env_remove("PSICAT_LOG")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Write `config.toml` into the config directory
    #[allow(dead_code)]
    pub fn write_config(&self, contents: &str) -> PathBuf {
        let path = self.dir.path().join("config.toml");
        std::fs::write(&path, contents).unwrap();
        path
    }
}

/// Parse stdout as JSON
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
