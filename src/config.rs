//! Configuration Management
//!
//! Persistent settings for the `pbi` command line tool. Values resolve as
//! CLI flag > environment > config file > built-in default.

use crate::api::client::DEFAULT_BASE_URL;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable holding the bearer token
pub const TOKEN_ENV: &str = "POWERBI_ACCESS_TOKEN";
/// Environment variable overriding the API root
pub const BASE_URL_ENV: &str = "POWERBI_API_URL";

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// API root, for sovereign clouds
    #[serde(default)]
    pub base_url: Option<String>,
    /// Access token. Tokens are short-lived; prefer the environment variable.
    #[serde(default)]
    pub access_token: Option<String>,
    /// Workspace used when a command takes an optional group
    #[serde(default)]
    pub default_group: Option<String>,
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pbi").join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load configuration from a file. Missing or unreadable files yield the default.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed config {:?}: {}", path, e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save configuration to the default location, returning the file written
    pub fn save(&self) -> Result<PathBuf> {
        self.save_at(Self::config_path())
    }

    fn save_at(&self, path: Option<PathBuf>) -> Result<PathBuf> {
        let path = path.context("No config directory found for this platform")?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).with_context(|| format!("Failed to write {:?}", path))?;

        Ok(())
    }

    /// Get effective token (CLI > env > config)
    pub fn effective_token(&self, cli: Option<&str>) -> Option<String> {
        first_set([
            cli.map(str::to_string),
            std::env::var(TOKEN_ENV).ok(),
            self.access_token.clone(),
        ])
    }

    /// Get effective API root (CLI > env > config > public cloud)
    pub fn effective_base_url(&self, cli: Option<&str>) -> String {
        first_set([
            cli.map(str::to_string),
            std::env::var(BASE_URL_ENV).ok(),
            self.base_url.clone(),
        ])
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// Get effective workspace (CLI > config)
    pub fn effective_group(&self, cli: Option<&str>) -> Option<String> {
        first_set([cli.map(str::to_string), self.default_group.clone()])
    }
}

/// First candidate that is present and not blank
fn first_set<const N: usize>(candidates: [Option<String>; N]) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .find(|v| !v.trim().is_empty())
}
