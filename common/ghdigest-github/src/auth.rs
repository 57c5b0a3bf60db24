//! Token authentication for GitHub API requests

use std::fmt;

/// A GitHub personal access token
///
/// Requests made with it carry `Authorization: token <value>`.
#[derive(Clone)]
pub struct GitHubAuth {
    token: String,
}

impl GitHubAuth {
    /// Wrap a token. Empty or whitespace-only tokens are treated as no token.
    pub fn new(token: String) -> Option<Self> {
        if token.trim().is_empty() {
            None
        } else {
            Some(Self { token })
        }
    }

    /// The raw token
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Value for the `Authorization` header
    pub fn header_value(&self) -> String {
        format!("token {}", self.token)
    }
}

impl fmt::Debug for GitHubAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubAuth")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_value_uses_token_scheme() {
        let auth = GitHubAuth::new("ghp_abc123".to_string()).unwrap();
        assert_eq!(auth.header_value(), "token ghp_abc123");
        assert_eq!(auth.token(), "ghp_abc123");
    }

    #[test]
    fn test_empty_token_is_no_auth() {
        assert!(GitHubAuth::new(String::new()).is_none());
        assert!(GitHubAuth::new("   ".to_string()).is_none());
    }

    #[test]
    fn test_debug_redacts_token() {
        let auth = GitHubAuth::new("ghp_secret".to_string()).unwrap();
        let debug = format!("{auth:?}");
        assert!(!debug.contains("ghp_secret"));
        assert!(debug.contains("redacted"));
    }
}
