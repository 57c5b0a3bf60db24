//! ghdigest - summaries of GitHub pull requests, users and repositories

pub mod commands;
pub mod config;
pub mod constants;

pub use ghdigest_github as github;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext};
pub use config::Config;

/// Pick the token to authenticate with: an explicit value wins over `GITHUB_TOKEN`
pub fn resolve_token(explicit: Option<String>) -> Option<String> {
    explicit
        .or_else(|| std::env::var(constants::env::GITHUB_TOKEN).ok())
        .filter(|token| !token.trim().is_empty())
}
