//! Harness configuration
//!
//! Loaded from `.cpcheck.toml` in the working directory by default. Every
//! field has a default matching the shipped contract, so running with no
//! config file at all targets `http://localhost:9001` with 30-second
//! timeouts.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Harness configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the service under test.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connect and read timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Root of the SUT source tree for the structural checks.
    #[serde(default = "default_sut_root")]
    pub sut_root: PathBuf,

    /// Source file extension expected in the SUT tree.
    #[serde(default = "default_source_ext")]
    pub source_ext: String,
}

fn default_base_url() -> String {
    "http://localhost:9001".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_sut_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_source_ext() -> String {
    "java".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            sut_root: default_sut_root(),
            source_ext: default_source_ext(),
        }
    }
}

impl Config {
    /// Load config from file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e.to_string()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
        }
    }

    /// Load from the default locations, falling back to defaults when no
    /// config file is present.
    ///
    /// # Errors
    ///
    /// Returns an error if a candidate file exists but cannot be parsed.
    pub fn load_default() -> Result<Self, ConfigError> {
        let candidates = [".cpcheck.toml", ".cpcheck.json", "cpcheck.toml"];

        for name in candidates {
            let path = Path::new(name);
            if path.exists() {
                return Self::load(path);
            }
        }

        Ok(Self::default())
    }

    /// Example config file content, written by `cpcheck init`.
    #[must_use]
    pub fn example() -> &'static str {
        r#"# cpcheck configuration

# Base URL of the complaint service under test
base_url = "http://localhost:9001"

# Connect and read timeout in seconds
timeout_secs = 30

# Root of the service source tree (structural checks run against it)
sut_root = "."

# Source file extension expected in the tree
source_ext = "java"
"#
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read {0}: {1}")]
    Io(PathBuf, String),
    #[error("Parse error: {0}")]
    Parse(String),
}
