//! Configuration file loading

use super::ConfigValidator;
use crate::github::ClientConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Settings read from `ghdigest.yaml`
///
/// Every key is optional; unset keys keep the client defaults. Tokens are
/// never read from the file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pages: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_concurrency: Option<usize>,
}

impl Config {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a file
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path))?;

        let config: Config = if content.trim().is_empty() {
            Config::new()
        } else {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse config file '{}'", path))?
        };

        config.validate()?;
        debug!(path, ?config, "loaded configuration");
        Ok(config)
    }

    /// Load `path` if it exists
    ///
    /// A missing file is only an error when the user named it explicitly;
    /// the default file name falls back to an empty configuration.
    pub fn load_or_default(path: &str, explicit: bool) -> Result<Self> {
        if !explicit && !Path::new(path).exists() {
            debug!(path, "no config file, using defaults");
            return Ok(Config::new());
        }
        Self::load(path)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        ConfigValidator::validate(self)
    }

    /// Client settings with this file's overrides applied
    pub fn client_config(&self) -> ClientConfig {
        let mut client_config = ClientConfig::default();

        if let Some(api_base) = &self.api_base {
            client_config = client_config.with_api_base(api_base.clone());
        }
        if let Some(user_agent) = &self.user_agent {
            client_config = client_config.with_user_agent(user_agent.clone());
        }
        if let Some(max_pages) = self.max_pages {
            client_config = client_config.with_max_pages(max_pages);
        }
        if let Some(topic_concurrency) = self.topic_concurrency {
            client_config = client_config.with_topic_concurrency(topic_concurrency);
        }

        client_config
    }
}
