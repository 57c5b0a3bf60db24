//! GitHub API client library
//!
//! A small read-only client for the parts of the GitHub REST API a reporting
//! tool needs, returning simplified records instead of raw JSON.
//!
//! ## Modules
//!
//! - [`client`]: Core client, settings and request dispatch
//! - [`pull_requests`]: Pull request listing
//! - [`users`]: User profiles
//! - [`repositories`]: Repository details, topics and topic-filtered listing
//! - [`pagination`]: Bounded page-by-page repository listing
//! - [`util`]: Repository reference parsing

mod auth;
mod client;
mod error;
mod pagination;
mod pull_requests;
mod repositories;
mod types;
mod users;
mod util;

// Re-export public API
pub use auth::GitHubAuth;
pub use client::{ClientConfig, GitHubClient};
pub use error::{GitHubError, Result};
pub use pagination::{RepoListing, RepoPages};
pub use pull_requests::parse_created_at;
pub use types::{PullRequestSummary, PullState, RepositorySummary, UserSummary, constants};
pub use util::parse_repo_slug;
