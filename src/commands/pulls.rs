//! Pull request listing command

use super::base::print_json;
use super::{Command, CommandContext};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

/// Lists pull requests of one repository
pub struct PullsCommand {
    /// Repository as `owner/name`
    pub repo: String,
    /// `all`, `open` or `closed`, any case
    pub state: String,
}

#[async_trait]
impl Command for PullsCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let pulls = context.client.pulls(&self.repo, &self.state).await?;

        if context.json {
            return print_json(&pulls);
        }

        if pulls.is_empty() {
            println!(
                "{}",
                format!(
                    "No {} pull requests found in {}",
                    self.state.to_lowercase(),
                    self.repo
                )
                .yellow()
            );
            return Ok(());
        }

        for pr in &pulls {
            let created = pr.created_at.format("%Y-%m-%d %H:%M UTC");
            print!("{} {} {}", "•".blue(), pr.username.bold(), created);
            if !pr.labels.is_empty() {
                print!("  {}", pr.labels.join(", ").cyan());
            }
            println!();
        }

        println!();
        println!(
            "{}",
            format!("Total: {} pull requests", pulls.len()).green()
        );

        Ok(())
    }
}
