//! CLI command implementations.

pub(crate) mod generate;
pub(crate) mod preview;
pub(crate) mod snake;

pub(crate) use generate::GenerateArgs;
pub(crate) use preview::PreviewArgs;
pub(crate) use snake::SnakeArgs;

use std::fs;
use std::path::Path;

use termcard_config::Config;
use termcard_github::ProfileSummary;
use termcard_render::{TerminalPage, TerminalRenderer};
use termcard_snake::{EmbedOptions, Theme, prepare_embedded_snake};

use crate::error::CliError;
use crate::output::Output;

/// Render the terminal SVG for `profile`, embedding the snake when enabled.
///
/// A missing snake file is reported as a warning and the card is rendered
/// without the animation.
pub(crate) fn render_card(
    config: &Config,
    username: &str,
    theme: Theme,
    profile: &ProfileSummary,
    output: &Output,
) -> Result<String, CliError> {
    let snake_config = &config.snake_resolved;
    let snake = if config.display.show_snake {
        let options = EmbedOptions::default()
            .theme(theme)
            .prefix(snake_config.prefix.clone())
            .target_width(snake_config.target_width);
        let snake = prepare_embedded_snake(&snake_config.path, &options)?;
        if snake.is_none() {
            output.warning(&format!(
                "Snake SVG not found at {}, rendering without animation",
                snake_config.path.display()
            ));
        }
        snake
    } else {
        None
    };

    let renderer = TerminalRenderer::new()?;
    let svg = renderer.render(&TerminalPage {
        username,
        theme,
        bio: &config.bio,
        display: &config.display,
        terminal: &config.terminal,
        profile,
        snake: snake.as_ref(),
        snake_target_width: snake_config.target_width,
    })?;
    Ok(svg)
}

/// Write `contents` to `path`, creating parent directories.
pub(crate) fn write_svg(path: &Path, contents: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_svg_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("out/nested/terminal.svg");

        write_svg(&path, "<svg/>").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<svg/>");
    }
}
