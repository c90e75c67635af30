//! GitHub API error detection and classification
//!
//! Translates octocrab errors into gitai errors, keeping the HTTP status
//! and attaching actionable guidance for the common failure cases.

use crate::error::GitaiError;

/// Classifies an octocrab error into a GitaiError
///
/// Errors that carry an HTTP status become `Api { status, message }`;
/// everything else (network, serialization) becomes a generic GitHub
/// request error.
pub fn classify_github_error(err: octocrab::Error) -> GitaiError {
    match err {
        octocrab::Error::GitHub { source, .. } => {
            let status = source.status_code.as_u16();
            GitaiError::Api {
                status,
                message: guidance_for(status, &source.message),
            }
        }
        other => GitaiError::GitHub(other.to_string()),
    }
}

/// Attach guidance to the API's message for well-known status codes
fn guidance_for(status: u16, message: &str) -> String {
    match status {
        401 => format!(
            "{}. Your token is invalid or expired; run 'gitai auth' with a fresh token.",
            message
        ),
        403 if is_rate_limit_message(message) => format!(
            "{}. API rate limit exceeded; wait a few minutes and try again.",
            message
        ),
        404 => format!(
            "{}. The repository may not exist, or your token may lack access to it.",
            message
        ),
        _ => message.to_string(),
    }
}

/// Check if a 403 message is the rate limiter talking
fn is_rate_limit_message(message: &str) -> bool {
    message.contains("rate limit") || message.contains("limit exceeded")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_gets_token_guidance() {
        let message = guidance_for(401, "Bad credentials");
        assert!(message.starts_with("Bad credentials"));
        assert!(message.contains("gitai auth"));
    }

    #[test]
    fn test_rate_limit_detection() {
        assert!(is_rate_limit_message("API rate limit exceeded for user"));
        assert!(is_rate_limit_message("secondary limit exceeded"));
        assert!(!is_rate_limit_message("Resource not accessible"));
    }

    #[test]
    fn test_forbidden_without_rate_limit_keeps_message() {
        assert_eq!(
            guidance_for(403, "Resource not accessible by integration"),
            "Resource not accessible by integration"
        );
    }

    #[test]
    fn test_not_found_gets_access_guidance() {
        let message = guidance_for(404, "Not Found");
        assert!(message.contains("may not exist"));
    }

    #[test]
    fn test_other_statuses_pass_through() {
        assert_eq!(guidance_for(422, "Validation Failed"), "Validation Failed");
    }
}
