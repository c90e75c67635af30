//! Branch operations

use serde::Deserialize;

use crate::error::Result;
use crate::github::client::GitHubClient;

/// A branch as listed by the API
#[derive(Debug, Clone, Deserialize)]
pub struct Branch {
    /// Branch name
    pub name: String,
    /// Whether this is a protected branch
    #[serde(default)]
    pub protected: bool,
    /// Tip commit of the branch
    pub commit: BranchCommit,
}

/// Tip commit reference inside a branch listing
#[derive(Debug, Clone, Deserialize)]
pub struct BranchCommit {
    /// Full commit SHA
    pub sha: String,
}

impl Branch {
    /// Abbreviated tip SHA for display
    pub fn short_sha(&self) -> &str {
        let sha = &self.commit.sha;
        &sha[..sha.len().min(8)]
    }
}

/// Branch operations handler
pub struct BranchHandler<'a> {
    client: &'a GitHubClient,
}

impl<'a> BranchHandler<'a> {
    /// Create a new handler
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    /// List branches of a repository
    pub async fn list(&self, owner: &str, repo: &str) -> Result<Vec<Branch>> {
        let route = format!("/repos/{}/{}/branches", owner, repo);
        let branches: Vec<Branch> = self.client.octocrab().get(&route, None::<&()>).await?;
        Ok(branches)
    }
}
