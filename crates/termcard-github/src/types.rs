//! GitHub GraphQL response types.
//!
//! Only includes fields that are actually used.
//! Serde ignores unknown fields from the API response.

use serde::{Deserialize, Serialize};

/// A user as returned by the profile query.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Profile name (may be unset).
    pub name: Option<String>,
    /// Owned public repositories, most starred first.
    pub repositories: RepositoryConnection,
    pub followers: TotalCount,
    pub following: TotalCount,
}

/// Paged repository list.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryConnection {
    /// Total number of matching repositories (not just this page).
    pub total_count: u64,
    #[serde(default)]
    pub nodes: Vec<Repository>,
}

/// Connection of which only the size is queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalCount {
    pub total_count: u64,
}

/// Repository summary.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub stargazer_count: u64,
    pub description: Option<String>,
    pub primary_language: Option<Language>,
    #[serde(default)]
    pub is_fork: bool,
}

/// Primary language of a repository.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Language {
    pub name: String,
    pub color: Option<String>,
}

/// GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse {
    pub data: Option<UserData>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserData {
    pub user: Option<UserProfile>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlError {
    #[serde(default)]
    pub message: Option<String>,
}
