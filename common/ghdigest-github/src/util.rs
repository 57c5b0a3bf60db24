//! Utility functions for GitHub operations

use crate::error::{GitHubError, Result};

/// Normalize a repository reference to `owner/name`
///
/// Supports:
/// - Slug: `owner/repo`
/// - SSH: `git@github.com:owner/repo.git`
/// - HTTPS: `https://github.com/owner/repo.git` (any host, so GitHub Enterprise works)
/// - Legacy: `github.com/owner/repo`
///
/// # Errors
/// Returns [`GitHubError::InvalidArgument`] if no owner and name can be found
pub fn parse_repo_slug(input: &str) -> Result<String> {
    let trimmed = input.trim().trim_end_matches('/').trim_end_matches(".git");

    let path = if let Some(rest) = trimmed.strip_prefix("git@") {
        rest.split_once(':').map(|(_, path)| path)
    } else if let Some(rest) = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
    {
        rest.split_once('/').map(|(_, path)| path)
    } else if let Some(rest) = trimmed
        .strip_prefix("github.com/")
        .or_else(|| trimmed.strip_prefix("github.com:"))
    {
        Some(rest)
    } else {
        Some(trimmed)
    };

    let parts: Vec<&str> = path.map(|p| p.split('/').collect()).unwrap_or_default();
    match parts.as_slice() {
        [owner, name] if is_segment(owner) && is_segment(name) => {
            Ok(format!("{}/{}", owner, name))
        }
        _ => Err(GitHubError::InvalidArgument(format!(
            "expected a repository as owner/name or a GitHub URL, got '{}'",
            input
        ))),
    }
}

fn is_segment(part: &str) -> bool {
    !part.is_empty()
        && part
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}
