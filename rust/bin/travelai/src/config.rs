//! Client configuration.
//!
//! Reads/writes `~/.travelai/config.toml`. The saved session lives here too,
//! so a login survives between invocations.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use travelai_bff::SessionSnapshot;
use travelai_client::Variant;

pub const DEFAULT_SERVER: &str = "http://localhost:5000";

/// Client configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend base URL.
    #[serde(default = "default_server")]
    pub server: String,

    /// Which backend API `server` speaks.
    #[serde(default)]
    pub variant: Variant,

    /// Delay before serving fixture data; the variant's default when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_delay_ms: Option<u64>,

    /// Set by `travelai login`, cleared by `travelai logout`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionSnapshot>,
}

fn default_server() -> String {
    DEFAULT_SERVER.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            variant: Variant::default(),
            fallback_delay_ms: None,
            session: None,
        }
    }
}

impl ClientConfig {
    /// Default config file path: ~/.travelai/config.toml.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }

    /// Load config from disk, or return default if file doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: ClientConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("invalid config {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// Save config to disk.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn fallback_delay(&self) -> Duration {
        self.fallback_delay_ms
            .map(Duration::from_millis)
            .unwrap_or_else(|| self.variant.default_fallback_delay())
    }

    /// Set a scalar key from `config set`.
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "server" => {
                if value.trim().is_empty() {
                    anyhow::bail!("server cannot be empty");
                }
                self.server = value.trim().to_string();
            }
            "variant" => {
                self.variant = value.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            }
            "fallback_delay_ms" | "fallback-delay-ms" => {
                self.fallback_delay_ms = if value.is_empty() || value == "default" {
                    None
                } else {
                    Some(value.parse().map_err(|_| anyhow::anyhow!("not a number: {}", value))?)
                };
            }
            other => anyhow::bail!(
                "unknown key: {} (expected server, variant or fallback_delay_ms)",
                other
            ),
        }
        Ok(())
    }
}

/// Return the TravelAI config directory (~/.travelai).
fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".travelai")
}
