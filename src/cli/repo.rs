//! Repository CLI command handlers

use crate::cli::commands::RepoPath;
use crate::core::config::Config;
use crate::core::credentials::resolve_token;
use crate::error::{GitaiError, Result};
use crate::github::repository::{CreateRepoParams, RepositoryHandler};
use crate::github::GitHubClient;

/// Handle the repos command
pub async fn handle_repos(public_only: bool) -> Result<()> {
    let token = resolve_token(None)?;
    let config = Config::load()?;
    let client = GitHubClient::new(&token, &config.api_base_url)?;
    let handler = RepositoryHandler::new(&client);

    let repos = handler.list(public_only).await?;

    if repos.is_empty() {
        println!("No repositories found.");
        return Ok(());
    }

    println!("Your GitHub repositories:\n");

    for repo in repos {
        let visibility = if repo.private { "private" } else { "public" };

        println!(
            "  {} [{}] ⭐ {}",
            repo.full_name, visibility, repo.stargazers_count
        );
        if let Some(updated) = repo.updated_at {
            println!("     updated {}", updated.format("%Y-%m-%d"));
        }
        if let Some(description) = &repo.description {
            println!("     {}", description);
        }
        println!("     {}", repo.html_url);
        println!();
    }

    Ok(())
}

/// Handle the repo command
pub async fn handle_repo(path: RepoPath) -> Result<()> {
    let token = resolve_token(None)?;
    let config = Config::load()?;
    let client = GitHubClient::new(&token, &config.api_base_url)?;
    let handler = RepositoryHandler::new(&client);

    let repo = handler.get(&path.owner, &path.name).await?;

    println!("Repository: {}", repo.full_name);
    println!(
        "  Description: {}",
        repo.description.as_deref().unwrap_or("No description")
    );
    println!(
        "  Visibility:  {}",
        if repo.private { "private" } else { "public" }
    );
    println!("  Stars:       {}", repo.stargazers_count);
    println!("  Forks:       {}", repo.forks_count);
    println!("  Watchers:    {}", repo.watchers_count);
    println!("  Open issues: {}", repo.open_issues_count);
    println!(
        "  Language:    {}",
        repo.language.as_deref().unwrap_or("Not specified")
    );
    if let Some(created) = repo.created_at {
        println!("  Created:     {}", created.format("%Y-%m-%d"));
    }
    if let Some(updated) = repo.updated_at {
        println!("  Updated:     {}", updated.format("%Y-%m-%d"));
    }
    println!("  URL:         {}", repo.html_url);
    if let Some(homepage) = repo.homepage.as_deref().filter(|h| !h.is_empty()) {
        println!("  Homepage:    {}", homepage);
    }

    Ok(())
}

/// Handle the create command
pub async fn handle_create(
    name: String,
    private: bool,
    description: Option<String>,
) -> Result<()> {
    if name.trim().is_empty() {
        return Err(GitaiError::InvalidArguments(
            "Repository name cannot be empty".to_string(),
        ));
    }

    let token = resolve_token(None)?;
    let config = Config::load()?;
    let client = GitHubClient::new(&token, &config.api_base_url)?;
    let handler = RepositoryHandler::new(&client);

    let params = CreateRepoParams::new(name, description, private);
    let repo = handler.create(&params).await?;

    println!("✓ Repository created: {}", repo.full_name);
    println!("  URL:       {}", repo.html_url);
    if let Some(clone_url) = &repo.clone_url {
        println!("  Clone URL: {}", clone_url);
    }

    Ok(())
}
