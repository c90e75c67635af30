//! Branch CLI command handler

use crate::cli::commands::RepoPath;
use crate::core::config::Config;
use crate::core::credentials::resolve_token;
use crate::error::Result;
use crate::github::{BranchHandler, GitHubClient};

/// Handle the branches command
pub async fn handle_branches(path: RepoPath) -> Result<()> {
    let token = resolve_token(None)?;
    let config = Config::load()?;
    let client = GitHubClient::new(&token, &config.api_base_url)?;
    let handler = BranchHandler::new(&client);

    let branches = handler.list(&path.owner, &path.name).await?;

    if branches.is_empty() {
        println!("No branches found.");
        return Ok(());
    }

    println!("Branches for {}:\n", path);

    for branch in branches {
        let protected_marker = if branch.protected { " 🔒" } else { "" };

        println!("  {}{}", branch.name, protected_marker);
        println!("     latest commit {}", branch.short_sha());
        println!();
    }

    Ok(())
}
