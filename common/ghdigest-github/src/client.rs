//! GitHub client implementation
//!
//! `GitHubClient` owns the HTTP client and the read-only settings shared by
//! every operation. The operations themselves live in `pull_requests.rs`,
//! `users.rs` and `repositories.rs`, each extending the client with an
//! `impl` block.

use crate::auth::GitHubAuth;
use crate::error::{GitHubError, Result};
use crate::types::constants;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Settings shared by every request a client makes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub user_agent: String,
    pub max_pages: u32,
    pub topic_concurrency: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: constants::GITHUB_API_BASE.to_string(),
            user_agent: constants::DEFAULT_USER_AGENT.to_string(),
            max_pages: constants::DEFAULT_MAX_PAGES,
            topic_concurrency: 1,
        }
    }
}

impl ClientConfig {
    /// Point the client at another API root (GitHub Enterprise, a mock server)
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Upper bound on non-empty pages one listing may return
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    /// How many topic lookups `repo_list` keeps in flight (1 = sequential)
    pub fn with_topic_concurrency(mut self, topic_concurrency: usize) -> Self {
        self.topic_concurrency = topic_concurrency.max(1);
        self
    }
}

/// Client for the read-only subset of the GitHub REST API
///
/// The client holds no per-call state, so a single instance can be shared
/// by reference across tasks.
///
/// ```rust,no_run
/// use ghdigest_github::GitHubClient;
///
/// # async fn example() -> ghdigest_github::Result<()> {
/// let client = GitHubClient::new(Some("your_token".to_string()));
/// let repo = client.repo("rust-lang/rust").await?;
/// println!("{} -> {}", repo.full_name, repo.clone_url);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct GitHubClient {
    pub(crate) client: Client,
    pub(crate) auth: Option<GitHubAuth>,
    pub(crate) config: ClientConfig,
}

impl GitHubClient {
    /// Create a client against api.github.com
    ///
    /// Without a token requests are sent unauthenticated, which works for
    /// public data at a lower rate limit.
    pub fn new(token: Option<String>) -> Self {
        Self::with_config(token, ClientConfig::default())
    }

    /// Create a client with explicit settings
    pub fn with_config(token: Option<String>, config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            auth: token.and_then(GitHubAuth::new),
            config,
        }
    }

    /// Check if the client has authentication configured
    pub fn is_authenticated(&self) -> bool {
        self.auth.is_some()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Absolute URL for an API path such as `repos/owner/name`
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Issue a GET and decode a success body as `T`
    ///
    /// Non-success statuses become [`GitHubError::Request`]; the body is read
    /// in full before decoding so error bodies can be inspected.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        accept: &str,
    ) -> Result<T> {
        let url = self.endpoint(path);
        debug!(url = %url, authenticated = self.auth.is_some(), "GET");

        let mut request = self
            .client
            .get(&url)
            .header(USER_AGENT, &self.config.user_agent)
            .header(ACCEPT, accept);

        if let Some(auth) = &self.auth {
            request = request.header(AUTHORIZATION, auth.header_value());
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            debug!(url = %url, status = status.as_u16(), "request failed");
            return Err(GitHubError::from_response(status, &body));
        }

        serde_json::from_slice(&body).map_err(|source| GitHubError::Decode { url, source })
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new(None)
    }
}
