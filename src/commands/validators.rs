//! Command argument validation utilities
//!
//! Validation that goes beyond what clap checks while parsing. Pull request
//! states are left to the client, which rejects them before any request.

use crate::github::parse_repo_slug;
use anyhow::{Result, anyhow};

/// Validation errors for command arguments
#[derive(Debug, PartialEq)]
pub enum CommandValidationError {
    /// Invalid argument value
    InvalidValue {
        argument: String,
        value: String,
        reason: String,
    },
}

impl std::fmt::Display for CommandValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandValidationError::InvalidValue {
                argument,
                value,
                reason,
            } => {
                write!(f, "Invalid value '{}' for {}: {}", value, argument, reason)
            }
        }
    }
}

impl std::error::Error for CommandValidationError {}

/// Convert validation error to anyhow::Error
pub fn validation_error_to_anyhow(error: CommandValidationError) -> anyhow::Error {
    anyhow!(error.to_string())
}

/// Validate a repository argument and normalize it to `owner/name`
///
/// URLs are accepted so a clone URL can be pasted as-is.
pub fn validate_repository(repo: &str) -> Result<String> {
    parse_repo_slug(repo).map_err(|err| {
        validation_error_to_anyhow(CommandValidationError::InvalidValue {
            argument: "repository".to_string(),
            value: repo.to_string(),
            reason: err.to_string(),
        })
    })
}

/// Validate a user or organization login
///
/// GitHub logins are alphanumeric with single inner hyphens. Enterprise
/// managed users carry an `_shortcode` suffix, so underscores are allowed.
pub fn validate_login(argument: &str, login: &str) -> Result<()> {
    let valid = !login.is_empty()
        && login.len() <= 39
        && !login.starts_with('-')
        && !login.ends_with('-')
        && !login.contains("--")
        && login
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'));

    if valid {
        Ok(())
    } else {
        Err(validation_error_to_anyhow(
            CommandValidationError::InvalidValue {
                argument: argument.to_string(),
                value: login.to_string(),
                reason: "not a valid GitHub login".to_string(),
            },
        ))
    }
}

/// Validate topic filters
pub fn validate_topics(topics: &[String]) -> Result<()> {
    for topic in topics {
        if topic.trim().is_empty() {
            return Err(validation_error_to_anyhow(
                CommandValidationError::InvalidValue {
                    argument: "topic".to_string(),
                    value: topic.clone(),
                    reason: "topic cannot be empty or whitespace only".to_string(),
                },
            ));
        }
        if topic.chars().any(char::is_whitespace) {
            return Err(validation_error_to_anyhow(
                CommandValidationError::InvalidValue {
                    argument: "topic".to_string(),
                    value: topic.clone(),
                    reason: "topics cannot contain whitespace".to_string(),
                },
            ));
        }
    }
    Ok(())
}
