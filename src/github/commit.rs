//! Commit listing

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::github::client::GitHubClient;

/// A commit as listed by the API
#[derive(Debug, Clone, Deserialize)]
pub struct Commit {
    /// Full commit SHA
    pub sha: String,
    /// Git-level commit data
    pub commit: CommitDetail,
}

/// Git-level data nested under a listed commit
#[derive(Debug, Clone, Deserialize)]
pub struct CommitDetail {
    /// Full commit message
    pub message: String,
    /// Author signature; absent for some imported commits
    pub author: Option<CommitSignature>,
}

/// Author name and date of a commit
#[derive(Debug, Clone, Deserialize)]
pub struct CommitSignature {
    pub name: String,
    pub date: DateTime<Utc>,
}

impl Commit {
    /// Abbreviated SHA for display
    pub fn short_sha(&self) -> &str {
        &self.sha[..self.sha.len().min(8)]
    }

    /// First line of the commit message
    pub fn summary(&self) -> &str {
        self.commit.message.lines().next().unwrap_or("")
    }
}

/// Query parameters for listing commits
#[derive(Debug, Serialize)]
struct ListCommitsParams<'a> {
    sha: &'a str,
    per_page: u8,
}

/// Commit operations handler
pub struct CommitHandler<'a> {
    client: &'a GitHubClient,
}

impl<'a> CommitHandler<'a> {
    /// Create a new handler
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    /// List the most recent commits on a branch
    ///
    /// Requests exactly `limit` commits from the given branch; the API
    /// returns fewer when the history is shorter.
    pub async fn list(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        limit: u8,
    ) -> Result<Vec<Commit>> {
        let route = format!("/repos/{}/{}/commits", owner, repo);
        let params = ListCommitsParams {
            sha: branch,
            per_page: limit,
        };

        let commits: Vec<Commit> = self.client.octocrab().get(&route, Some(&params)).await?;
        Ok(commits)
    }
}
