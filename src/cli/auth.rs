//! Authentication CLI command handler

use crate::core::config::Config;
use crate::core::credentials::{self, mask_token};
use crate::error::Result;
use crate::github::GitHubClient;

/// Handle the auth command
///
/// Resolves the token (flag, environment, or prompt), validates it
/// against the API, and records the username and API base URL in the
/// config file. The token itself is never saved.
pub async fn handle_auth(token: Option<String>) -> Result<()> {
    let token = credentials::resolve_token(token.as_deref())?;
    let mut config = Config::load()?;

    println!("Validating token...");
    let client = GitHubClient::new(&token, &config.api_base_url)?;
    let user = client.current_user().await?;

    println!("✓ Successfully authenticated as @{}", user.login);
    println!("  Using token {}", mask_token(&token));

    config.username = Some(user.login);
    config.save()?;
    println!("  Preferences saved to {}", Config::path()?.display());

    Ok(())
}
