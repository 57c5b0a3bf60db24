//! Topic-filtered repository listing command

use super::base::print_json;
use super::{Command, CommandContext};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

/// Lists an owner's repositories that carry all of the given topics
pub struct RepoListCommand {
    /// User or organization login
    pub org: String,
    /// Required topics; empty lists every repository
    pub topics: Vec<String>,
}

#[async_trait]
impl Command for RepoListCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let repos = context.client.repo_list(&self.org, &self.topics).await?;

        if context.json {
            return print_json(&repos);
        }

        if repos.is_empty() {
            let filter_desc = if self.topics.is_empty() {
                String::new()
            } else {
                format!(" with topics {:?}", self.topics)
            };
            println!(
                "{}",
                format!("No repositories found for {}{}", self.org, filter_desc).yellow()
            );
            return Ok(());
        }

        for full_name in &repos {
            println!("{} {}", "•".blue(), full_name.bold());
        }

        println!();
        println!(
            "{}",
            format!("Total: {} repositories", repos.len()).green()
        );

        Ok(())
    }
}
