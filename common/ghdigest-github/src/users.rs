//! User profile operations

use crate::client::GitHubClient;
use crate::error::Result;
use crate::types::{UserSummary, constants};
use serde::Deserialize;

#[derive(Deserialize)]
struct UserPayload {
    login: String,
    name: Option<String>,
    avatar_url: String,
    html_url: String,
}

impl From<UserPayload> for UserSummary {
    fn from(payload: UserPayload) -> Self {
        Self {
            username: payload.login,
            name: payload.name,
            avatar_url: payload.avatar_url,
            url: payload.html_url,
        }
    }
}

impl GitHubClient {
    /// Fetch the public profile of `username`
    pub async fn user(&self, username: &str) -> Result<UserSummary> {
        let path = format!("users/{}", username);
        let payload: UserPayload = self.get_json(&path, constants::ACCEPT_V3).await?;
        Ok(payload.into())
    }
}
