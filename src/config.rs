//! Configuration for rubylens.
//!
//! Settings come from an optional YAML file discovered in the working
//! directory; CLI flags override file values, and built-in defaults apply
//! below both. A missing config file is not an error.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file names to search for.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &["rubylens.yaml", ".rubylens.yaml"];

/// Analysis endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://ruby-code-analyzer-backand.onrender.com/analyze";

/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Output format used when none is configured.
pub const DEFAULT_FORMAT: &str = "pretty";

/// Top-level configuration. All fields are optional in the file.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub timeout_ms: Option<u64>,
    #[serde(default)]
    pub format: Option<String>,
}

impl Config {
    /// Parse a config from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load config: an explicit path must exist; otherwise discover one of
    /// the default names, falling back to defaults when none is present.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Config::parse_file(path),
            None => match discover_config() {
                Some(path) => Config::parse_file(path),
                None => Ok(Config::default()),
            },
        }
    }

    /// Returns the analysis endpoint (defaults to the public service).
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    /// Returns the per-request timeout in milliseconds.
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS)
    }

    /// Returns the output format (defaults to "pretty").
    pub fn format(&self) -> &str {
        self.format.as_deref().unwrap_or(DEFAULT_FORMAT)
    }
}

/// Discover a config file in the current directory.
fn discover_config() -> Option<PathBuf> {
    for name in DEFAULT_CONFIG_NAMES {
        let path = PathBuf::from(name);
        if path.exists() {
            return Some(path);
        }
    }
    None
}
