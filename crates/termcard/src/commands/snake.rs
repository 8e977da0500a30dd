//! `termcard snake` command implementation.

use std::path::PathBuf;

use clap::Args;
use termcard_config::validate_prefix;
use termcard_snake::{
    DEFAULT_PREFIX, DEFAULT_TARGET_WIDTH, EmbedOptions, Theme, prepare_embedded_snake,
};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the snake command.
#[derive(Args)]
pub(crate) struct SnakeArgs {
    /// Snake SVG produced by the contribution snake generator.
    path: PathBuf,

    /// Theme whose palette replaces the snake colors.
    #[arg(short, long, default_value = "catppuccin")]
    theme: String,

    /// Class prefix for the embedded stylesheet.
    #[arg(long, default_value = DEFAULT_PREFIX)]
    prefix: String,

    /// Display width of the fragment in pixels.
    #[arg(long, default_value_t = DEFAULT_TARGET_WIDTH)]
    width: f64,
}

impl SnakeArgs {
    /// Execute the snake command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(CliError::Validation(format!(
                "--width must be a positive number, got {}",
                self.width
            )));
        }
        validate_prefix(&self.prefix, "--prefix")?;

        let options = EmbedOptions::default()
            .theme(Theme::resolve(&self.theme))
            .prefix(self.prefix)
            .target_width(self.width);
        let snake = prepare_embedded_snake(&self.path, &options)?.ok_or_else(|| {
            CliError::Validation(format!("Snake SVG not found: {}", self.path.display()))
        })?;

        output.markup(&snake.markup)?;
        output.info(&format!(
            "{}x{} (viewBox {})",
            snake.dimensions.width, snake.dimensions.height, snake.dimensions.view_box
        ));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(prefix: &str, width: f64) -> SnakeArgs {
        SnakeArgs {
            path: PathBuf::from("does-not-exist/snake.svg"),
            theme: "catppuccin".to_owned(),
            prefix: prefix.to_owned(),
            width,
        }
    }

    #[test]
    fn test_rejects_prefix_with_selector_chars() {
        let err = args("s.", DEFAULT_TARGET_WIDTH).execute().unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.to_string().contains("--prefix"));
    }

    #[test]
    fn test_rejects_non_positive_width() {
        let err = args(DEFAULT_PREFIX, 0.0).execute().unwrap_err();
        assert!(matches!(err, CliError::Validation(_)));
    }

    #[test]
    fn test_valid_prefix_reaches_file_lookup() {
        let err = args("card_", DEFAULT_TARGET_WIDTH).execute().unwrap_err();
        assert!(matches!(err, CliError::Validation(ref msg) if msg.contains("not found")));
    }
}
