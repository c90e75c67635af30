//! Access token resolution
//!
//! The token is resolved from, in priority order:
//! 1. An explicit `--token` argument
//! 2. The `GITHUB_TOKEN` environment variable
//! 3. An interactive prompt (only when stdin is a terminal)
//!
//! The token lives in process memory only. It is never written to disk;
//! the config file has no field for it.

use std::io::{self, IsTerminal, Write};

use secrecy::{ExposeSecret, SecretString};

use crate::error::{GitaiError, Result};

/// Environment variable consulted when no explicit token is given
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Resolve the access token from flag, environment, or interactive prompt
///
/// Fails with `MissingCredential` when no source yields a token and the
/// session is non-interactive. No retries; a single deterministic chain.
pub fn resolve_token(explicit: Option<&str>) -> Result<SecretString> {
    let env_token = std::env::var(GITHUB_TOKEN_ENV).ok();

    if let Some(token) = resolve_from(explicit, env_token.as_deref()) {
        return Ok(token);
    }

    if io::stdin().is_terminal() {
        return prompt_for_token();
    }

    Err(GitaiError::MissingCredential)
}

/// Pick between the explicit argument and the environment value
///
/// Empty strings are treated as absent. The explicit argument wins.
fn resolve_from(explicit: Option<&str>, env_token: Option<&str>) -> Option<SecretString> {
    [explicit, env_token]
        .into_iter()
        .flatten()
        .find(|candidate| !candidate.is_empty())
        .map(|token| SecretString::from(token.to_string()))
}

/// Ask the user to paste a token at the terminal
fn prompt_for_token() -> Result<SecretString> {
    print!("Enter your GitHub Personal Access Token: ");
    io::stdout().flush()?;

    let mut token = String::new();
    io::stdin().read_line(&mut token)?;
    let token = token.trim();

    if token.is_empty() {
        return Err(GitaiError::MissingCredential);
    }

    Ok(SecretString::from(token.to_string()))
}

/// Get a masked version of a token for display (shows first 4 and last 4 chars)
pub fn mask_token(token: &SecretString) -> String {
    let exposed = token.expose_secret();
    if exposed.len() <= 8 {
        "*".repeat(exposed.len())
    } else {
        format!("{}...{}", &exposed[..4], &exposed[exposed.len() - 4..])
    }
}
