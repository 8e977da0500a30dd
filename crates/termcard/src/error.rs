//! CLI error types.

use termcard_config::ConfigError;
use termcard_github::GitHubError;
use termcard_render::RenderError;
use termcard_snake::SnakeError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    GitHub(#[from] GitHubError),

    #[error("{0}")]
    Snake(#[from] SnakeError),

    #[error("{0}")]
    Render(#[from] RenderError),

    #[error("{0}")]
    Validation(String),
}
