//! Command implementations, one per CLI subcommand

pub mod base;
pub mod pulls;
pub mod repo;
pub mod repos;
pub mod user;
pub mod validators;

pub use base::{Command, CommandContext};
pub use pulls::PullsCommand;
pub use repo::RepoCommand;
pub use repos::RepoListCommand;
pub use user::UserCommand;
