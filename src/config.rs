use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API key for the model endpoint. The ANTHROPIC_API_KEY environment
    /// variable takes precedence over this field.
    pub api_key: Option<String>,

    /// Model identifier sent with every request
    pub model: String,

    /// Base URL of the model endpoint
    pub base_url: String,

    /// Maximum output tokens per reply
    pub max_tokens: u32,

    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,

    /// When set, only the most recent N turns are sent per request. The
    /// transcript itself is never truncated. Off by default: bounding the
    /// window changes what context the model sees, so it is opt-in.
    pub history_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: None,
            model: "claude-sonnet-4-20250514".to_string(),
            base_url: "https://api.anthropic.com".to_string(),
            max_tokens: 1000,
            request_timeout_secs: 60,
            history_limit: None,
        }
    }
}

impl Config {
    /// ClearLoop home directory (~/.clearloop)
    pub fn home_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".clearloop"))
    }

    /// Path to the config file
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::home_dir()?.join("config.toml"))
    }

    /// Load configuration from file, creating defaults when absent
    pub fn load() -> Result<Self> {
        let home = Self::home_dir()?;
        fs::create_dir_all(&home).context("Failed to create .clearloop directory")?;

        let config_path = home.join("config.toml");
        let config = if config_path.exists() {
            let content =
                fs::read_to_string(&config_path).context("Failed to read config file")?;
            toml::from_str(&content).context("Failed to parse config file")?
        } else {
            let config = Config::default();
            config.save()?;
            config
        };

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&config_path, content).context("Failed to write config file")?;
        Ok(())
    }

    /// Get API key from environment or config
    pub fn get_api_key(&self) -> Option<String> {
        std::env::var("ANTHROPIC_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| self.api_key.clone())
    }
}
