//! Base types and traits for the command pattern

use crate::github::GitHubClient;
use anyhow::Result;
use serde::Serialize;

/// Context passed to all commands containing the shared client and options
pub struct CommandContext {
    /// Client configured from flags, environment and config file
    pub client: GitHubClient,
    /// Print machine-readable JSON instead of coloured text
    pub json: bool,
}

impl CommandContext {
    pub fn new(client: GitHubClient, json: bool) -> Self {
        Self { client, json }
    }
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext) -> Result<()>;
}

/// Print `value` as pretty JSON on stdout
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
