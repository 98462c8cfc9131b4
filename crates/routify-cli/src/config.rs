//! Optional `routify.toml` configuration.
//!
//! Provides defaults for the generate command; command-line flags always take
//! precedence over config values.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

const CONFIG_FILE: &str = "routify.toml";

#[derive(Debug, Default, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generate: GenerateConfig,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct GenerateConfig {
    pub output: Option<String>,
    pub filename: Option<String>,
    pub prettier_config: Option<String>,
}

impl Config {
    /// Parse a config from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load `routify.toml` from the current directory, falling back to the
    /// defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }
}
