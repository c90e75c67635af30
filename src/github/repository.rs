//! Repository operations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::github::client::GitHubClient;

/// Page size used when walking the repository list
const REPOS_PER_PAGE: u32 = 100;

/// Display-oriented projection of a GitHub repository
#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    /// Short name, e.g. `hello-world`
    pub name: String,
    /// Qualified name, e.g. `octocat/hello-world`
    pub full_name: String,
    /// Repository description, if any
    pub description: Option<String>,
    /// Whether the repository is private
    pub private: bool,
    /// Web URL
    pub html_url: String,
    /// HTTPS clone URL
    pub clone_url: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub watchers_count: u64,
    #[serde(default)]
    pub open_issues_count: u64,
    /// Primary language, if detected
    pub language: Option<String>,
    /// Project homepage, if set
    pub homepage: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Query parameters for listing the authenticated user's repositories
#[derive(Debug, Serialize)]
struct ListReposParams {
    page: u32,
    per_page: u32,
    sort: &'static str,
    direction: &'static str,
    visibility: &'static str,
}

/// Map the `--public-only` flag onto the API's visibility filter
fn visibility_param(public_only: bool) -> &'static str {
    if public_only {
        "public"
    } else {
        "all"
    }
}

/// Parameters for creating a repository
#[derive(Debug, Clone, Serialize)]
pub struct CreateRepoParams {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    private: bool,
    auto_init: bool,
}

impl CreateRepoParams {
    /// Build creation parameters
    ///
    /// `auto_init` is always set; the new repository starts with an
    /// initial commit.
    pub fn new(name: String, description: Option<String>, private: bool) -> Self {
        Self {
            name,
            description,
            private,
            auto_init: true,
        }
    }
}

/// Repository operations handler
pub struct RepositoryHandler<'a> {
    client: &'a GitHubClient,
}

impl<'a> RepositoryHandler<'a> {
    /// Create a new handler
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    /// List the authenticated user's repositories, most recently updated first
    ///
    /// Walks the API's pagination until a short or empty page is returned.
    pub async fn list(&self, public_only: bool) -> Result<Vec<Repository>> {
        let mut repos = Vec::new();
        let mut page: u32 = 1;

        loop {
            let params = ListReposParams {
                page,
                per_page: REPOS_PER_PAGE,
                sort: "updated",
                direction: "desc",
                visibility: visibility_param(public_only),
            };

            tracing::debug!(page, "fetching repository page");
            let batch: Vec<Repository> = self
                .client
                .octocrab()
                .get("/user/repos", Some(&params))
                .await?;

            let last_page = (batch.len() as u32) < REPOS_PER_PAGE;
            repos.extend(batch);

            if last_page {
                break;
            }
            page += 1;
        }

        Ok(repos)
    }

    /// Get a single repository by owner and name
    pub async fn get(&self, owner: &str, repo: &str) -> Result<Repository> {
        let route = format!("/repos/{}/{}", owner, repo);
        let repo: Repository = self.client.octocrab().get(&route, None::<&()>).await?;
        Ok(repo)
    }

    /// Create a repository for the authenticated user
    pub async fn create(&self, params: &CreateRepoParams) -> Result<Repository> {
        let repo: Repository = self
            .client
            .octocrab()
            .post("/user/repos", Some(params))
            .await?;
        Ok(repo)
    }
}
