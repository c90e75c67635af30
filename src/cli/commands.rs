//! CLI command definitions using clap
//!
//! Defines the command structure for the `gitai` CLI tool.

use clap::{Parser, Subcommand, ValueEnum};

/// gitai - GitHub automation CLI
///
/// Issues authenticated calls to the GitHub REST API: list and create
/// repositories, browse branches and commits, manage issues.
#[derive(Parser, Debug)]
#[command(name = "gitai", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Authenticate with GitHub and save your preferences
    Auth {
        /// GitHub Personal Access Token (falls back to $GITHUB_TOKEN, then a prompt)
        #[arg(long)]
        token: Option<String>,
    },

    /// List your repositories
    Repos {
        /// Show only public repositories
        #[arg(long)]
        public_only: bool,
    },

    /// Show detailed information about a repository
    Repo {
        /// Repository path (owner/name)
        #[arg(value_parser = parse_repo_path)]
        path: RepoPath,
    },

    /// Create a new repository
    Create {
        /// Repository name
        name: String,

        /// Make the repository private
        #[arg(long)]
        private: bool,

        /// Repository description
        #[arg(long, short)]
        description: Option<String>,
    },

    /// List repository branches
    Branches {
        /// Repository path (owner/name)
        #[arg(value_parser = parse_repo_path)]
        path: RepoPath,
    },

    /// List recent commits
    Commits {
        /// Repository path (owner/name)
        #[arg(value_parser = parse_repo_path)]
        path: RepoPath,

        /// Branch name
        #[arg(default_value = "main")]
        branch: String,

        /// Number of commits to show
        #[arg(short = 'n', long, default_value_t = 10,
              value_parser = clap::value_parser!(u8).range(1..=100))]
        limit: u8,
    },

    /// List repository issues
    Issues {
        /// Repository path (owner/name)
        #[arg(value_parser = parse_repo_path)]
        path: RepoPath,

        /// Filter by state
        #[arg(long, value_enum, default_value = "open")]
        state: IssueStateArg,
    },

    /// Create a new issue
    CreateIssue {
        /// Repository path (owner/name)
        #[arg(value_parser = parse_repo_path)]
        path: RepoPath,

        /// Issue title
        title: String,

        /// Issue body/description
        body: Option<String>,

        /// Label to apply (repeatable)
        #[arg(long = "label")]
        labels: Vec<String>,
    },
}

/// Issue state filter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum IssueStateArg {
    #[default]
    Open,
    Closed,
    All,
}

/// An `owner/name` repository argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoPath {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub name: String,
}

impl std::fmt::Display for RepoPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Parse an `OWNER/NAME` argument
fn parse_repo_path(s: &str) -> Result<RepoPath, String> {
    match s.split_once('/') {
        Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
            Ok(RepoPath {
                owner: owner.to_string(),
                name: name.to_string(),
            })
        }
        _ => Err(format!(
            "invalid repository path '{}': expected OWNER/NAME",
            s
        )),
    }
}
