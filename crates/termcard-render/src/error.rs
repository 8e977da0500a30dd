//! Error types for terminal rendering.

/// Error returned when the terminal template fails to load or render.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}
