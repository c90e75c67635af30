//! Commit CLI command handler

use crate::cli::commands::RepoPath;
use crate::core::config::Config;
use crate::core::credentials::resolve_token;
use crate::error::Result;
use crate::github::{CommitHandler, GitHubClient};

/// Handle the commits command
pub async fn handle_commits(path: RepoPath, branch: String, limit: u8) -> Result<()> {
    let token = resolve_token(None)?;
    let config = Config::load()?;
    let client = GitHubClient::new(&token, &config.api_base_url)?;
    let handler = CommitHandler::new(&client);

    let commits = handler.list(&path.owner, &path.name, &branch, limit).await?;

    if commits.is_empty() {
        println!("No commits found on '{}'.", branch);
        return Ok(());
    }

    println!("Recent commits for {} ({} branch):\n", path, branch);

    for commit in &commits {
        println!("  {} {}", commit.short_sha(), commit.summary());
        if let Some(author) = &commit.commit.author {
            println!("     by {} on {}", author.name, author.date.format("%Y-%m-%d"));
        }
        println!();
    }

    Ok(())
}
