//! GitHub profile data for termcard.
//!
//! - [`GitHubClient`]: one GraphQL request for the user's profile
//! - [`ProfileSummary`]: star totals and top projects (forks excluded)
//! - [`mock_user`] / [`load_profile`]: offline data for previews

mod client;
mod error;
mod mock;
mod summary;
mod types;

pub use client::{DEFAULT_API_URL, DEFAULT_TIMEOUT, GitHubClient};
pub use error::GitHubError;
pub use mock::{MOCK_USERNAME, load_profile, mock_user};
pub use summary::{ProfileSummary, Project};
pub use types::{Language, Repository, RepositoryConnection, TotalCount, UserProfile};
