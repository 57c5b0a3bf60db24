//! Common test support utilities and fixtures
//!
//! Builders for mock GitHub payloads and clients pointed at a wiremock server.

#![allow(dead_code)]

use ghdigest::github::{ClientConfig, GitHubClient};
use serde_json::{Value, json};
use wiremock::MockServer;

/// A client talking to `server` with default limits
pub fn client_for(server: &MockServer, token: Option<&str>) -> GitHubClient {
    client_with(server, token, ClientConfig::default())
}

/// A client talking to `server` with custom settings
pub fn client_with(
    server: &MockServer,
    token: Option<&str>,
    config: ClientConfig,
) -> GitHubClient {
    GitHubClient::with_config(
        token.map(str::to_string),
        config.with_api_base(server.uri()),
    )
}

/// A pull request item as returned by `GET /repos/{repo}/pulls`
pub fn pull_request_json(login: &str, labels: &[&str], created_at: &str) -> Value {
    json!({
        "number": 1,
        "state": "open",
        "title": "Some change",
        "user": { "login": login, "id": 1 },
        "labels": labels
            .iter()
            .map(|name| json!({ "name": name, "color": "ededed" }))
            .collect::<Vec<_>>(),
        "created_at": created_at,
        "updated_at": created_at
    })
}

/// A repository listing page for `owner` with the given repository names
pub fn repo_page_json(owner: &str, names: &[&str]) -> Value {
    Value::Array(
        names
            .iter()
            .map(|name| {
                json!({
                    "name": name,
                    "full_name": format!("{}/{}", owner, name),
                    "private": false
                })
            })
            .collect(),
    )
}

/// A topics response
pub fn topics_json(names: &[&str]) -> Value {
    json!({ "names": names })
}

/// A GitHub error body
pub fn error_json(message: &str) -> Value {
    json!({
        "message": message,
        "documentation_url": "https://docs.github.com/rest"
    })
}
