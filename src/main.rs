use anyhow::Result;
use clap::{Parser, Subcommand};
use ghdigest::commands::*;
use ghdigest::github::GitHubClient;
use ghdigest::{config::Config, constants, resolve_token};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ghdigest")]
#[command(about = "Summaries of GitHub pull requests, users and repositories")]
#[command(version)]
struct Cli {
    /// GitHub token (falls back to the GITHUB_TOKEN environment variable)
    #[arg(long, global = true)]
    token: Option<String>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Output in JSON format for machine consumption
    #[arg(long, global = true)]
    json: bool,

    /// Log requests to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List pull requests of a repository
    Pulls {
        /// Repository as owner/name or a GitHub URL
        repo: String,

        /// Pull request state: all, open or closed
        #[arg(short, long, default_value = "all")]
        state: String,
    },

    /// Show a user's profile
    User {
        /// GitHub login
        username: String,
    },

    /// Show repository details
    Repo {
        /// Repository as owner/name or a GitHub URL
        repo: String,
    },

    /// List an owner's repositories carrying all given topics
    Repos {
        /// User or organization login
        org: String,

        /// Required topic (can be specified multiple times)
        #[arg(short, long)]
        topic: Vec<String>,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(constants::logging::VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(constants::logging::DEFAULT_FILTER))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_or_default(path, true)?,
        None => Config::load_or_default(constants::config::DEFAULT_CONFIG_FILE, false)?,
    };

    let client = GitHubClient::with_config(resolve_token(cli.token), config.client_config());
    let context = CommandContext::new(client, cli.json);

    match cli.command {
        Commands::Pulls { repo, state } => {
            let repo = validators::validate_repository(&repo)?;
            PullsCommand { repo, state }.execute(&context).await?;
        }
        Commands::User { username } => {
            validators::validate_login("username", &username)?;
            UserCommand { username }.execute(&context).await?;
        }
        Commands::Repo { repo } => {
            let repo = validators::validate_repository(&repo)?;
            RepoCommand { repo }.execute(&context).await?;
        }
        Commands::Repos { org, topic } => {
            validators::validate_login("org", &org)?;
            validators::validate_topics(&topic)?;
            RepoListCommand { org, topics: topic }
                .execute(&context)
                .await?;
        }
    }

    Ok(())
}
