//! Error types for snake embedding.

use std::path::PathBuf;

/// Error returned when a snake SVG exists but cannot be read.
///
/// A missing file is not an error: loaders return `Ok(None)` instead.
#[derive(Debug, thiserror::Error)]
pub enum SnakeError {
    /// The file exists but reading it failed (permissions, invalid UTF-8).
    #[error("failed to read snake SVG {}: {source}", path.display())]
    Read {
        /// Path of the snake SVG.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
