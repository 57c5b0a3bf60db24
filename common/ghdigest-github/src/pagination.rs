//! Page-by-page listing of an owner's repositories
//!
//! The listing endpoint has no total count we rely on: pages are requested
//! until one comes back empty. `RepoPages` bounds that loop with the
//! client's `max_pages` so a misbehaving server cannot keep it going forever.

use crate::client::GitHubClient;
use crate::error::{GitHubError, Result};
use crate::types::constants;
use serde::Deserialize;
use tracing::debug;

/// One entry of a repository listing page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepoListing {
    pub name: String,
    pub full_name: String,
}

/// Lazy, restartable pager over `GET /users/{owner}/repos`
///
/// Created by [`GitHubClient::org_repositories`]. Page 1 is assumed to exist.
#[derive(Debug)]
pub struct RepoPages<'a> {
    client: &'a GitHubClient,
    owner: String,
    next_page: u32,
    exhausted: bool,
}

impl<'a> RepoPages<'a> {
    pub(crate) fn new(client: &'a GitHubClient, owner: &str) -> Self {
        Self {
            client,
            owner: owner.to_string(),
            next_page: 1,
            exhausted: false,
        }
    }

    /// Fetch the next page
    ///
    /// Returns `Ok(None)` once an empty page has been seen, and keeps doing so
    /// without further requests until [`RepoPages::restart`] is called.
    pub async fn next_page(&mut self) -> Result<Option<Vec<RepoListing>>> {
        if self.exhausted {
            return Ok(None);
        }

        let limit = self.client.config.max_pages;
        if self.next_page > limit {
            return Err(GitHubError::PageLimitExceeded { limit });
        }

        let path = format!(
            "users/{}/repos?per_page={}&page={}",
            self.owner,
            constants::REPOS_PER_PAGE,
            self.next_page
        );
        let page: Vec<RepoListing> = self.client.get_json(&path, constants::ACCEPT_V3).await?;
        debug!(
            owner = %self.owner,
            page = self.next_page,
            count = page.len(),
            "fetched repository page"
        );

        if page.is_empty() {
            self.exhausted = true;
            return Ok(None);
        }

        self.next_page += 1;
        Ok(Some(page))
    }

    /// Number of non-empty pages returned so far
    pub fn pages_fetched(&self) -> u32 {
        self.next_page - 1
    }

    /// Start over from page 1
    pub fn restart(&mut self) {
        self.next_page = 1;
        self.exhausted = false;
    }
}

impl GitHubClient {
    /// Page through the repositories owned by `owner` (a user or organization)
    pub fn org_repositories(&self, owner: &str) -> RepoPages<'_> {
        RepoPages::new(self, owner)
    }
}
