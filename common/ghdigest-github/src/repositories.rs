//! Repository operations

use crate::client::GitHubClient;
use crate::error::Result;
use crate::types::{RepositorySummary, constants};
use futures::{StreamExt, TryStreamExt, stream};
use serde::Deserialize;
use std::collections::HashSet;
use tracing::{debug, trace};

#[derive(Deserialize)]
struct RepositoryPayload {
    name: String,
    full_name: String,
    description: Option<String>,
    html_url: String,
    clone_url: String,
}

impl From<RepositoryPayload> for RepositorySummary {
    fn from(payload: RepositoryPayload) -> Self {
        Self {
            name: payload.name,
            full_name: payload.full_name,
            description: payload.description,
            url: payload.html_url,
            clone_url: payload.clone_url,
        }
    }
}

#[derive(Deserialize)]
struct TopicsPayload {
    #[serde(default)]
    names: Vec<String>,
}

impl GitHubClient {
    /// Fetch details of `repo` (`owner/name`)
    pub async fn repo(&self, repo: &str) -> Result<RepositorySummary> {
        let path = format!("repos/{}", repo);
        let payload: RepositoryPayload = self.get_json(&path, constants::ACCEPT_V3).await?;
        Ok(payload.into())
    }

    /// Topic names attached to `repo` (`owner/name`)
    pub async fn topics(&self, repo: &str) -> Result<Vec<String>> {
        let path = format!("repos/{}/topics", repo);
        let payload: TopicsPayload = self.get_json(&path, constants::ACCEPT_TOPICS).await?;
        Ok(payload.names)
    }

    /// Full names of `org`'s repositories that carry every topic in `topics`
    ///
    /// Every repository costs one extra request for its topics. An empty
    /// `topics` slice matches all repositories. The result keeps listing
    /// order even when lookups run concurrently
    /// ([`ClientConfig::topic_concurrency`](crate::ClientConfig)).
    ///
    /// ```rust,no_run
    /// use ghdigest_github::GitHubClient;
    ///
    /// # async fn example() -> ghdigest_github::Result<()> {
    /// let client = GitHubClient::new(None);
    /// let cli_repos = client.repo_list("rust-lang", &["cli"]).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn repo_list<S: AsRef<str>>(&self, org: &str, topics: &[S]) -> Result<Vec<String>> {
        let wanted: HashSet<&str> = topics.iter().map(|topic| topic.as_ref()).collect();
        let mut pages = self.org_repositories(org);
        let mut matched = Vec::new();

        while let Some(page) = pages.next_page().await? {
            let lookups: Vec<_> = page
                .iter()
                .map(|listing| self.topics(&listing.full_name))
                .collect();
            let repo_topics: Vec<Vec<String>> = stream::iter(lookups)
                .buffered(self.config.topic_concurrency)
                .try_collect()
                .await?;

            for (listing, names) in page.into_iter().zip(repo_topics) {
                let have: HashSet<&str> = names.iter().map(String::as_str).collect();
                let keep = wanted.is_subset(&have);
                trace!(repo = %listing.full_name, keep, "topic filter");
                if keep {
                    matched.push(listing.full_name);
                }
            }
        }

        debug!(
            org,
            pages = pages.pages_fetched(),
            matched = matched.len(),
            "listed repositories by topic"
        );
        Ok(matched)
    }
}
