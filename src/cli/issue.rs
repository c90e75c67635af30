//! Issue CLI command handlers

use crate::cli::commands::{IssueStateArg, RepoPath};
use crate::core::config::Config;
use crate::core::credentials::resolve_token;
use crate::error::{GitaiError, Result};
use crate::github::issue::{CreateIssueParams, IssueHandler, IssueState};
use crate::github::GitHubClient;

/// Convert the CLI state flag to the API filter
fn convert_state(state: IssueStateArg) -> IssueState {
    match state {
        IssueStateArg::Open => IssueState::Open,
        IssueStateArg::Closed => IssueState::Closed,
        IssueStateArg::All => IssueState::All,
    }
}

/// Handle the issues command
pub async fn handle_issues(path: RepoPath, state: IssueStateArg) -> Result<()> {
    let token = resolve_token(None)?;
    let config = Config::load()?;
    let client = GitHubClient::new(&token, &config.api_base_url)?;
    let handler = IssueHandler::new(&client);

    let api_state = convert_state(state);
    let issues = handler.list(&path.owner, &path.name, api_state).await?;

    if issues.is_empty() {
        println!("No {} issues found.", api_state.as_query());
        return Ok(());
    }

    println!("Issues for {} ({}):\n", path, api_state.as_query());

    for issue in issues {
        let state_marker = if issue.state == "open" { "●" } else { "○" };
        let author = issue
            .user
            .as_ref()
            .map(|u| u.login.as_str())
            .unwrap_or("unknown");

        println!("{} #{} {}", state_marker, issue.number, issue.title);

        match issue.created_at {
            Some(created) => println!("   by @{} on {}", author, created.format("%Y-%m-%d")),
            None => println!("   by @{}", author),
        }
        if !issue.labels.is_empty() {
            let labels: Vec<&str> = issue.labels.iter().map(|l| l.name.as_str()).collect();
            println!("   labels: {}", labels.join(", "));
        }
        println!("   {}", issue.html_url);
        println!();
    }

    Ok(())
}

/// Handle the create-issue command
pub async fn handle_create_issue(
    path: RepoPath,
    title: String,
    body: Option<String>,
    labels: Vec<String>,
) -> Result<()> {
    if title.trim().is_empty() {
        return Err(GitaiError::InvalidArguments(
            "Issue title cannot be empty".to_string(),
        ));
    }

    let token = resolve_token(None)?;
    let config = Config::load()?;
    let client = GitHubClient::new(&token, &config.api_base_url)?;
    let handler = IssueHandler::new(&client);

    let params = CreateIssueParams {
        title,
        body,
        labels,
    };
    let issue = handler.create(&path.owner, &path.name, &params).await?;

    println!("✓ Created issue #{}: {}", issue.number, issue.title);
    println!("  URL: {}", issue.html_url);

    Ok(())
}
