//! Error types for GitHub data access.

use std::path::PathBuf;

/// Error from fetching or loading profile data.
#[derive(Debug, thiserror::Error)]
pub enum GitHubError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] ureq::Error),

    /// HTTP response error (server returned error status).
    #[error("HTTP error: {status} - {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// Response or profile file is not valid JSON of the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// GraphQL error reported by the API.
    #[error("GitHub API error: {0}")]
    Api(String),

    /// The API returned no user for the login.
    #[error("GitHub user not found: {0}")]
    UserNotFound(String),

    /// Profile file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
