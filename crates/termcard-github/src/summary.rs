//! Profile statistics and top projects.

use serde::Serialize;

use crate::types::{Repository, UserProfile};

/// Descriptions longer than this many characters are truncated.
const MAX_DESCRIPTION_CHARS: usize = 50;

const NO_DESCRIPTION: &str = "No description";
const UNKNOWN_LANGUAGE: &str = "Unknown";
const DEFAULT_LANGUAGE_COLOR: &str = "#888888";

/// A repository as listed in the terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub name: String,
    pub stars: u64,
    pub description: String,
    pub language: String,
    pub language_color: String,
}

impl Project {
    fn from_repository(repo: &Repository) -> Self {
        let description = repo
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .map_or_else(|| NO_DESCRIPTION.to_owned(), truncate_description);
        let (language, language_color) = match &repo.primary_language {
            Some(lang) => (
                lang.name.clone(),
                lang.color
                    .clone()
                    .unwrap_or_else(|| DEFAULT_LANGUAGE_COLOR.to_owned()),
            ),
            None => (
                UNKNOWN_LANGUAGE.to_owned(),
                DEFAULT_LANGUAGE_COLOR.to_owned(),
            ),
        };

        Self {
            name: repo.name.clone(),
            stars: repo.stargazer_count,
            description,
            language,
            language_color,
        }
    }
}

/// Numbers and projects shown in the terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileSummary {
    /// Profile name, or the username when the profile has none.
    pub display_name: String,
    pub repos_count: u64,
    /// Stars summed over non-fork repositories.
    pub total_stars: u64,
    pub followers: u64,
    pub following: u64,
    /// First `max_projects` non-fork repositories in API order (most starred).
    pub top_projects: Vec<Project>,
}

impl ProfileSummary {
    /// Summarize a fetched profile.
    pub fn from_user(user: &UserProfile, username: &str, max_projects: usize) -> Self {
        let own_repos: Vec<&Repository> = user
            .repositories
            .nodes
            .iter()
            .filter(|repo| !repo.is_fork)
            .collect();

        let total_stars = own_repos.iter().map(|repo| repo.stargazer_count).sum();
        let top_projects = own_repos
            .iter()
            .take(max_projects)
            .map(|repo| Project::from_repository(repo))
            .collect();

        let display_name = user
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(username)
            .to_owned();

        Self {
            display_name,
            repos_count: user.repositories.total_count,
            total_stars,
            followers: user.followers.total_count,
            following: user.following.total_count,
            top_projects,
        }
    }
}

/// Cut descriptions longer than 50 characters to 47 characters plus `...`.
fn truncate_description(description: &str) -> String {
    if description.chars().count() <= MAX_DESCRIPTION_CHARS {
        return description.to_owned();
    }
    let mut truncated: String = description
        .chars()
        .take(MAX_DESCRIPTION_CHARS - 3)
        .collect();
    truncated.push_str("...");
    truncated
}
