//! Configuration validation utilities

use super::Config;
use anyhow::{Result, anyhow};

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a configuration, reporting every problem at once
    pub fn validate(config: &Config) -> Result<()> {
        let mut errors = Vec::new();

        if let Some(api_base) = &config.api_base
            && !(api_base.starts_with("http://") || api_base.starts_with("https://"))
        {
            errors.push(format!(
                "api_base must start with http:// or https://, got '{}'",
                api_base
            ));
        }

        if let Some(user_agent) = &config.user_agent
            && user_agent.trim().is_empty()
        {
            errors.push("user_agent cannot be empty".to_string());
        }

        if config.max_pages == Some(0) {
            errors.push("max_pages must be at least 1".to_string());
        }

        if config.topic_concurrency == Some(0) {
            errors.push("topic_concurrency must be at least 1".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(anyhow!("Invalid configuration:\n  - {}", errors.join("\n  - ")))
        }
    }
}
