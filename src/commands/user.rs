//! User profile command

use super::base::print_json;
use super::{Command, CommandContext};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

/// Shows a user's profile summary
pub struct UserCommand {
    pub username: String,
}

#[async_trait]
impl Command for UserCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let user = context.client.user(&self.username).await?;

        if context.json {
            return print_json(&user);
        }

        match &user.name {
            Some(name) => println!("{} ({})", user.username.bold(), name),
            None => println!("{}", user.username.bold()),
        }
        println!("  URL: {}", user.url);
        println!("  Avatar: {}", user.avatar_url);

        Ok(())
    }
}
