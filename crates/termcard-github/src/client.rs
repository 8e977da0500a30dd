//! GitHub GraphQL API client.
//!
//! A single blocking POST per run with a fixed global timeout and no retries.

use std::time::Duration;

use serde_json::json;
use tracing::info;
use ureq::Agent;

use crate::error::GitHubError;
use crate::types::{GraphQlResponse, UserProfile};

/// Default GraphQL endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com/graphql";

/// Default HTTP timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Profile query: name, followers/following and up to 100 owned public
/// repositories ordered by stars.
const PROFILE_QUERY: &str = r"
query($username: String!) {
  user(login: $username) {
    name
    repositories(first: 100, orderBy: {field: STARGAZERS, direction: DESC}, privacy: PUBLIC, ownerAffiliations: OWNER) {
      totalCount
      nodes {
        name
        stargazerCount
        description
        primaryLanguage {
          name
          color
        }
        isFork
      }
    }
    followers {
      totalCount
    }
    following {
      totalCount
    }
  }
}
";

/// GitHub GraphQL client.
pub struct GitHubClient {
    agent: Agent,
    api_url: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Create a client for the given GraphQL endpoint.
    #[must_use]
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            api_url: api_url.into(),
            token: None,
        }
    }

    /// Authenticate requests with a personal access token.
    #[must_use]
    pub fn token(mut self, token: Option<&str>) -> Self {
        self.token = token.map(str::to_owned);
        self
    }

    /// Whether requests are authenticated.
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Fetch the profile of `username`.
    pub fn fetch_user(&self, username: &str) -> Result<UserProfile, GitHubError> {
        let payload = json!({
            "query": PROFILE_QUERY,
            "variables": { "username": username },
        });
        let payload_bytes = serde_json::to_vec(&payload)?;

        info!(username, url = %self.api_url, "Fetching GitHub profile");

        let mut request = self
            .agent
            .post(&self.api_url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .header("User-Agent", concat!("termcard/", env!("CARGO_PKG_VERSION")));
        if let Some(token) = &self.token {
            request = request.header("Authorization", &format!("Bearer {token}"));
        }

        let response = request.send(&payload_bytes[..])?;

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();

        if status >= 400 {
            let error_body = body_reader
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(GitHubError::Http {
                status,
                body: error_body,
            });
        }

        let body = body_reader.read_to_string()?;
        parse_response(username, &body)
    }
}

/// Extract the user from a GraphQL response body.
pub(crate) fn parse_response(username: &str, body: &str) -> Result<UserProfile, GitHubError> {
    let response: GraphQlResponse = serde_json::from_str(body)?;

    if let Some(error) = response.errors.into_iter().next() {
        return Err(GitHubError::Api(
            error.message.unwrap_or_else(|| "Unknown error".to_owned()),
        ));
    }

    response
        .data
        .and_then(|data| data.user)
        .ok_or_else(|| GitHubError::UserNotFound(username.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_response_user() {
        let body = r##"{"data":{"user":{
            "name":"The Octocat",
            "repositories":{"totalCount":2,"nodes":[
                {"name":"hello-world","stargazerCount":10,"description":null,"primaryLanguage":{"name":"Rust","color":"#dea584"},"isFork":false},
                {"name":"fork","stargazerCount":3,"description":"x","primaryLanguage":null,"isFork":true}
            ]},
            "followers":{"totalCount":5},
            "following":{"totalCount":1}
        }}}"##;

        let user = parse_response("octocat", body).unwrap();
        assert_eq!(user.name.as_deref(), Some("The Octocat"));
        assert_eq!(user.repositories.total_count, 2);
        assert_eq!(user.repositories.nodes.len(), 2);
        assert_eq!(user.repositories.nodes[0].stargazer_count, 10);
        assert_eq!(
            user.repositories.nodes[0]
                .primary_language
                .as_ref()
                .map(|l| l.name.as_str()),
            Some("Rust")
        );
        assert!(user.repositories.nodes[1].is_fork);
        assert_eq!(user.followers.total_count, 5);
        assert_eq!(user.following.total_count, 1);
    }

    #[test]
    fn test_parse_response_graphql_error() {
        let body = r#"{"data":{"user":null},"errors":[{"type":"NOT_FOUND","message":"Could not resolve to a User with the login of 'nobody'."}]}"#;
        let err = parse_response("nobody", body).unwrap_err();
        assert!(matches!(err, GitHubError::Api(_)));
        assert!(err.to_string().contains("Could not resolve"));
    }

    #[test]
    fn test_parse_response_error_without_message() {
        let err = parse_response("x", r#"{"errors":[{}]}"#).unwrap_err();
        assert_eq!(err.to_string(), "GitHub API error: Unknown error");
    }

    #[test]
    fn test_parse_response_null_user() {
        let err = parse_response("ghost", r#"{"data":{"user":null}}"#).unwrap_err();
        assert!(matches!(err, GitHubError::UserNotFound(ref login) if login == "ghost"));
    }

    #[test]
    fn test_parse_response_invalid_json() {
        let err = parse_response("x", "<html>").unwrap_err();
        assert!(matches!(err, GitHubError::Json(_)));
    }

    #[test]
    fn test_client_token() {
        let client = GitHubClient::new(DEFAULT_API_URL, DEFAULT_TIMEOUT);
        assert!(!client.has_token());
        let client = client.token(Some("ghp_test"));
        assert!(client.has_token());
    }
}
