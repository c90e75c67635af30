//! gitai - GitHub automation CLI
//!
//! Issues authenticated calls to the GitHub REST API to list and create
//! repositories, branches, commits, and issues.
//!
//! Available as the `gitai` command.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use gitai::cli::commands::{Cli, Commands};
use gitai::cli::{auth, branch, commit, issue, repo};
use gitai::error::Result;

#[tokio::main]
async fn main() {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Auth { token } => auth::handle_auth(token).await,
        Commands::Repos { public_only } => repo::handle_repos(public_only).await,
        Commands::Repo { path } => repo::handle_repo(path).await,
        Commands::Create {
            name,
            private,
            description,
        } => repo::handle_create(name, private, description).await,
        Commands::Branches { path } => branch::handle_branches(path).await,
        Commands::Commits {
            path,
            branch,
            limit,
        } => commit::handle_commits(path, branch, limit).await,
        Commands::Issues { path, state } => issue::handle_issues(path, state).await,
        Commands::CreateIssue {
            path,
            title,
            body,
            labels,
        } => issue::handle_create_issue(path, title, body, labels).await,
    }
}
