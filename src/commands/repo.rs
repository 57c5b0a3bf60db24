//! Repository details command

use super::base::print_json;
use super::{Command, CommandContext};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

/// Shows a repository's summary
pub struct RepoCommand {
    /// Repository as `owner/name`
    pub repo: String,
}

#[async_trait]
impl Command for RepoCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let repo = context.client.repo(&self.repo).await?;

        if context.json {
            return print_json(&repo);
        }

        println!("{} {}", "•".blue(), repo.full_name.bold());
        if let Some(description) = &repo.description {
            println!("  {}", description);
        }
        println!("  URL: {}", repo.url);
        println!("  Clone: {}", repo.clone_url.cyan());

        Ok(())
    }
}
