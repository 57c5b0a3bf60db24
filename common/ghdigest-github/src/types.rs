//! Public record types returned by the client

use crate::error::GitHubError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Client-wide constants
pub mod constants {
    /// GitHub API base URL
    pub const GITHUB_API_BASE: &str = "https://api.github.com";

    /// Default User-Agent header for API requests
    pub const DEFAULT_USER_AGENT: &str = concat!("ghdigest/", env!("CARGO_PKG_VERSION"));

    /// Media type for v3 REST responses
    pub const ACCEPT_V3: &str = "application/vnd.github.v3+json";

    /// Media type the topics endpoint expects
    pub const ACCEPT_TOPICS: &str = "application/vnd.github.mercy-preview+json";

    /// Page size used when listing repositories (the API maximum)
    pub const REPOS_PER_PAGE: u32 = 100;

    /// Default upper bound on pages fetched by one listing
    pub const DEFAULT_MAX_PAGES: u32 = 1000;
}

/// Pull request state filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PullState {
    #[default]
    All,
    Open,
    Closed,
}

impl PullState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PullState::All => "all",
            PullState::Open => "open",
            PullState::Closed => "closed",
        }
    }
}

impl fmt::Display for PullState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PullState {
    type Err = GitHubError;

    /// Case-insensitive: `"OPEN"` and `"open"` are the same state.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(PullState::All),
            "open" => Ok(PullState::Open),
            "closed" => Ok(PullState::Closed),
            _ => Err(GitHubError::InvalidArgument(format!(
                "state must be one of 'all', 'open' or 'closed', got '{}'",
                s
            ))),
        }
    }
}

/// A pull request reduced to author, labels and creation time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PullRequestSummary {
    pub username: String,
    pub labels: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// A user profile reduced to the fields a report needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub username: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub url: String,
}

/// A repository reduced to its identity and links
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositorySummary {
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub url: String,
    pub clone_url: String,
}
