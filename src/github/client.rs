//! GitHub API client wrapper using octocrab

use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::error::Result;

/// The authenticated user, as returned by `GET /user`
#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticatedUser {
    /// Login name of the token's owner
    pub login: String,
}

/// GitHub API client wrapper
///
/// Binds the bearer token and API base URL for one invocation. All
/// resource handlers borrow this client.
pub struct GitHubClient {
    /// The octocrab instance
    inner: Octocrab,
}

impl GitHubClient {
    /// Create a new client from a resolved token and base URL
    pub fn new(token: &SecretString, api_base_url: &str) -> Result<Self> {
        let inner = Octocrab::builder()
            .base_uri(api_base_url)?
            .personal_token(token.expose_secret().to_string())
            .build()?;

        Ok(Self { inner })
    }

    /// Get the inner octocrab instance
    pub fn octocrab(&self) -> &Octocrab {
        &self.inner
    }

    /// Fetch the authenticated user, validating the token in the process
    pub async fn current_user(&self) -> Result<AuthenticatedUser> {
        let user: AuthenticatedUser = self.inner.get("/user", None::<&()>).await?;
        Ok(user)
    }
}
