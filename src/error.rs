//! Custom error types for gitai
//!
//! User-friendly error messages for all failure scenarios.

use thiserror::Error;

/// Main error type for the gitai application
#[derive(Error, Debug)]
pub enum GitaiError {
    /// No token could be resolved from flag, environment, or prompt
    #[error("No GitHub token provided.\n\n  → Pass one with --token, or set the GITHUB_TOKEN environment variable.\n  → Create a token at https://github.com/settings/tokens (scope: 'repo').")]
    MissingCredential,

    /// Semantically invalid command arguments
    #[error("{0}")]
    InvalidArguments(String),

    /// GitHub API request failed with an HTTP status
    #[error("GitHub API request failed ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API
        status: u16,
        /// Message from the API response, possibly with added guidance
        message: String,
    },

    /// GitHub request failed without reaching an HTTP status
    #[error("GitHub request failed: {0}\n\n  → Check your internet connection.")]
    GitHub(String),

    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<octocrab::Error> for GitaiError {
    fn from(err: octocrab::Error) -> Self {
        // Use the error handler to classify and provide actionable guidance
        crate::github::error_handler::classify_github_error(err)
    }
}

/// Result type alias using GitaiError
pub type Result<T> = std::result::Result<T, GitaiError>;
