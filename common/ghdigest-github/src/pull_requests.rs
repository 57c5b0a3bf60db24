//! Pull request operations

use crate::client::GitHubClient;
use crate::error::{GitHubError, Result};
use crate::types::{PullRequestSummary, PullState, constants};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

#[derive(Deserialize)]
struct PullRequestPayload {
    user: Login,
    #[serde(default)]
    labels: Vec<Label>,
    created_at: String,
}

#[derive(Deserialize)]
struct Login {
    login: String,
}

#[derive(Deserialize)]
struct Label {
    name: String,
}

impl TryFrom<PullRequestPayload> for PullRequestSummary {
    type Error = GitHubError;

    fn try_from(payload: PullRequestPayload) -> Result<Self> {
        Ok(Self {
            username: payload.user.login,
            labels: payload.labels.into_iter().map(|label| label.name).collect(),
            created_at: parse_created_at(&payload.created_at)?,
        })
    }
}

/// Parse an API timestamp such as `2023-01-01T12:00:00Z` as UTC
///
/// A trailing `Z` is rewritten to `+00:00` before RFC 3339 parsing; strings
/// that already carry an offset are converted to UTC.
pub fn parse_created_at(value: &str) -> Result<DateTime<Utc>> {
    let normalized = match value.strip_suffix('Z') {
        Some(stripped) => format!("{}+00:00", stripped),
        None => value.to_string(),
    };

    DateTime::parse_from_rfc3339(&normalized)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|source| GitHubError::Timestamp {
            value: value.to_string(),
            source,
        })
}

impl GitHubClient {
    /// List pull requests of `repo` (`owner/name`) in the given state
    ///
    /// `state` is one of `all`, `open`, `closed` in any case. Anything else
    /// fails with [`GitHubError::InvalidArgument`] before a request is sent.
    ///
    /// ```rust,no_run
    /// use ghdigest_github::GitHubClient;
    ///
    /// # async fn example() -> ghdigest_github::Result<()> {
    /// let client = GitHubClient::new(None);
    /// for pr in client.pulls("rust-lang/rust", "open").await? {
    ///     println!("{} {:?}", pr.username, pr.labels);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn pulls(&self, repo: &str, state: &str) -> Result<Vec<PullRequestSummary>> {
        let state: PullState = state.parse()?;
        self.pulls_with_state(repo, state).await
    }

    /// Typed variant of [`GitHubClient::pulls`]
    ///
    /// Results keep the order the API returned them in.
    pub async fn pulls_with_state(
        &self,
        repo: &str,
        state: PullState,
    ) -> Result<Vec<PullRequestSummary>> {
        let path = format!("repos/{}/pulls?state={}", repo, state);
        let payload: Vec<PullRequestPayload> = self.get_json(&path, constants::ACCEPT_V3).await?;
        debug!(repo, %state, count = payload.len(), "fetched pull requests");

        payload.into_iter().map(PullRequestSummary::try_from).collect()
    }
}
