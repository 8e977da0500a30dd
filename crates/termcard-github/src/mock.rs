//! Offline profile data for previews and tests.

use std::path::Path;

use crate::error::GitHubError;
use crate::types::{Language, Repository, RepositoryConnection, TotalCount, UserProfile};

/// Username the mock profile belongs to.
pub const MOCK_USERNAME: &str = "testuser";

/// A fixed profile with five owned repositories.
pub fn mock_user() -> UserProfile {
    let repo = |name: &str, stars: u64, description: &str, language: &str, color: &str| Repository {
        name: name.to_owned(),
        stargazer_count: stars,
        description: Some(description.to_owned()),
        primary_language: Some(Language {
            name: language.to_owned(),
            color: Some(color.to_owned()),
        }),
        is_fork: false,
    };

    UserProfile {
        name: Some("Test User".to_owned()),
        repositories: RepositoryConnection {
            total_count: 42,
            nodes: vec![
                repo(
                    "awesome-project",
                    128,
                    "An awesome project that does cool things",
                    "Python",
                    "#3572A5",
                ),
                repo(
                    "terminal-widget-profile",
                    89,
                    "Terminal-style GitHub profile widget",
                    "Python",
                    "#3572A5",
                ),
                repo(
                    "cool-app",
                    45,
                    "A really cool application built with Rust",
                    "Rust",
                    "#dea584",
                ),
                repo(
                    "dotfiles",
                    23,
                    "My personal dotfiles for Arch Linux",
                    "Shell",
                    "#89e051",
                ),
                repo(
                    "web-project",
                    12,
                    "A modern web application",
                    "TypeScript",
                    "#3178c6",
                ),
            ],
        },
        followers: TotalCount { total_count: 256 },
        following: TotalCount { total_count: 128 },
    }
}

/// Load a user profile from a JSON file.
///
/// Accepts either the bare user object or a full GraphQL response
/// (`{"data": {"user": ...}}`).
pub fn load_profile(path: &Path) -> Result<UserProfile, GitHubError> {
    let text = std::fs::read_to_string(path).map_err(|source| GitHubError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let value: serde_json::Value = serde_json::from_str(&text)?;
    if value.get("data").is_some() || value.get("errors").is_some() {
        return crate::client::parse_response(MOCK_USERNAME, &text);
    }
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_load_bare_profile() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        std::fs::write(&path, serde_json::to_string(&mock_user()).unwrap()).unwrap();

        assert_eq!(load_profile(&path).unwrap(), mock_user());
    }

    #[test]
    fn test_load_graphql_response() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("response.json");
        let body = serde_json::json!({ "data": { "user": mock_user() } });
        std::fs::write(&path, body.to_string()).unwrap();

        assert_eq!(load_profile(&path).unwrap(), mock_user());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_profile(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, GitHubError::Read { .. }));
    }

    #[test]
    fn test_load_wrong_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        std::fs::write(&path, r#"{"name": "x"}"#).unwrap();

        let err = load_profile(&path).unwrap_err();
        assert!(matches!(err, GitHubError::Json(_)));
    }
}
