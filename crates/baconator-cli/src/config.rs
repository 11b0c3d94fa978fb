//! CLI configuration

use std::path::{Path, PathBuf};

use anyhow::Context;
use baconator_core::limits::MAX_BODY_SIZE;
use baconator_core::DEFAULT_REFERENCE_ACTOR;
use baconator_server::server::default_cors_origins;
use baconator_server::ServerConfig;
use serde::{Deserialize, Serialize};

/// Get default config file path
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("baconator")
        .join("config.toml")
}

/// Configuration for the service
///
/// Missing keys in the file fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub addr: String,
    pub reference_actor: String,
    pub max_body_size: usize,
    pub cors_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        let server = ServerConfig::default();
        Self {
            addr: server.addr,
            reference_actor: DEFAULT_REFERENCE_ACTOR.to_string(),
            max_body_size: MAX_BODY_SIZE,
            cors_origins: default_cors_origins(),
        }
    }
}

impl Config {
    /// Load from `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)
            .with_context(|| format!("Failed to write config file {}", path.display()))
    }

    pub fn keys() -> &'static [&'static str] {
        &["addr", "reference_actor", "max_body_size", "cors_origins"]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "addr" => Some(self.addr.clone()),
            "reference_actor" => Some(self.reference_actor.clone()),
            "max_body_size" => Some(self.max_body_size.to_string()),
            "cors_origins" => Some(self.cors_origins.join(",")),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "addr" => self.addr = value.to_string(),
            "reference_actor" => {
                baconator_core::limits::validate_id("reference_actor", value)?;
                self.reference_actor = value.to_string();
            }
            "max_body_size" => {
                self.max_body_size = value
                    .parse()
                    .with_context(|| format!("max_body_size must be a byte count, got {}", value))?;
            }
            "cors_origins" => {
                self.cors_origins = value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect();
            }
            _ => return Err(Self::unknown_key(key)),
        }
        Ok(())
    }

    /// Error for a key outside [`Config::keys`]
    pub fn unknown_key(key: &str) -> anyhow::Error {
        anyhow::anyhow!(
            "Unknown config key: {} (available: {})",
            key,
            Self::keys().join(", ")
        )
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            addr: self.addr.clone(),
            max_body_size: self.max_body_size,
            cors_origins: self.cors_origins.clone(),
        }
    }
}
