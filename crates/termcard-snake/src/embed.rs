//! Scaling and assembly of the embeddable snake fragment.

use std::fmt::Write;
use std::path::Path;

use tracing::debug;

use crate::consts::{DEFAULT_PREFIX, DEFAULT_TARGET_WIDTH, FALLBACK_HEIGHT};
use crate::error::SnakeError;
use crate::parser::{SnakeGraphic, ViewBox};
use crate::scope::{scope_content, scope_css};
use crate::theme::{Theme, adapt_colors};

/// Options for embedding a snake SVG.
///
/// The same `prefix` is used for the stylesheet and the markup. It must not
/// collide with classes of the host document; this is not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbedOptions {
    /// Theme whose palette replaces the snake colors.
    pub theme: Theme,
    /// Class prefix (default: `"snk-"`).
    pub prefix: String,
    /// Display width in pixels; must be positive (default: 740).
    pub target_width: f64,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            prefix: DEFAULT_PREFIX.to_owned(),
            target_width: DEFAULT_TARGET_WIDTH,
        }
    }
}

impl EmbedOptions {
    /// Set the theme.
    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the class prefix.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the display width.
    #[must_use]
    pub fn target_width(mut self, target_width: f64) -> Self {
        self.target_width = target_width;
        self
    }
}

/// Display size of the embedded snake.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnakeDimensions {
    /// Display width in pixels.
    pub width: f64,
    /// Display height in pixels.
    pub height: f64,
    /// Unscaled coordinate frame of the source.
    pub view_box: ViewBox,
}

impl SnakeDimensions {
    /// Scale a frame to `target_width`, keeping its aspect ratio.
    pub fn scaled(view_box: ViewBox, target_width: f64) -> Self {
        let scale = target_width / view_box.width;
        Self {
            width: target_width,
            height: view_box.height * scale,
            view_box,
        }
    }

    /// Dimensions reported when no snake is available.
    pub fn fallback(target_width: f64) -> Self {
        Self {
            width: target_width,
            height: FALLBACK_HEIGHT,
            view_box: ViewBox::DEFAULT,
        }
    }

    /// Ratio between display width and source width.
    pub fn scale(&self) -> f64 {
        self.width / self.view_box.width
    }
}

/// A namespaced, themed and scaled snake ready to be inlined in another SVG.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedSnake {
    /// Nested `<svg>` element.
    pub markup: String,
    /// Display size of `markup`.
    pub dimensions: SnakeDimensions,
}

/// Embed a parsed snake.
///
/// The nested `<svg>` keeps the source `viewBox` and only its outer
/// `width`/`height` are scaled, so inner coordinates are untouched. The
/// `xMidYMid meet` policy scales uniformly and the nested viewport clips
/// anything outside the frame. No `xmlns` is declared: it is inherited from
/// the host document.
pub fn embed(graphic: &SnakeGraphic, options: &EmbedOptions) -> EmbeddedSnake {
    let prefix = options.prefix.as_str();
    let style = adapt_colors(&scope_css(graphic.style(), prefix), options.theme);
    let content = scope_content(graphic.content(), prefix);
    let dimensions = SnakeDimensions::scaled(graphic.view_box(), options.target_width);

    debug!(
        theme = %options.theme,
        width = dimensions.width,
        height = dimensions.height,
        "Embedding snake"
    );

    let mut markup = String::with_capacity(style.len() + content.len() + 256);
    let _ = writeln!(
        markup,
        r#"<svg width="{}" height="{}" viewBox="{}" preserveAspectRatio="xMidYMid meet">"#,
        dimensions.width, dimensions.height, dimensions.view_box
    );
    markup.push_str("  <defs>\n");
    let _ = writeln!(markup, r#"    <style type="text/css">{style}</style>"#);
    markup.push_str("  </defs>\n");
    let _ = writeln!(markup, r#"  <g class="{prefix}container">"#);
    let _ = writeln!(markup, "    {content}");
    markup.push_str("  </g>\n</svg>");

    EmbeddedSnake { markup, dimensions }
}

/// Load and embed the snake SVG at `path`.
///
/// Returns `Ok(None)` if the file does not exist, so callers can render
/// without the animation.
pub fn prepare_embedded_snake(
    path: &Path,
    options: &EmbedOptions,
) -> Result<Option<EmbeddedSnake>, SnakeError> {
    Ok(SnakeGraphic::load(path)?.map(|graphic| embed(&graphic, options)))
}

/// Display size of the snake SVG at `path` when scaled to `target_width`.
///
/// Returns [`SnakeDimensions::fallback`] if the file does not exist.
pub fn snake_dimensions(path: &Path, target_width: f64) -> Result<SnakeDimensions, SnakeError> {
    Ok(match SnakeGraphic::load(path)? {
        Some(graphic) => SnakeDimensions::scaled(graphic.view_box(), target_width),
        None => SnakeDimensions::fallback(target_width),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SOURCE: &str = r#"<svg viewBox="0 0 100 50" xmlns="http://www.w3.org/2000/svg"><style>:root{--cs:#000;--c4:#111;}.c{fill:var(--cs)}.s0{fill:var(--c4)}</style><g class="c s0"></g></svg>"#;

    fn nord_options() -> EmbedOptions {
        EmbedOptions::default()
            .theme(Theme::Nord)
            .prefix("x-")
            .target_width(200.0)
    }

    #[test]
    fn test_embed_end_to_end() {
        let snake = embed(&SnakeGraphic::parse(SOURCE), &nord_options());

        assert_eq!(
            snake.markup,
            r#"<svg width="200" height="100" viewBox="0 0 100 50" preserveAspectRatio="xMidYMid meet">
  <defs>
    <style type="text/css">:root{--cs:#88c0d0;--c4:#88c0d0;}
.x-c{fill:var(--cs)}
.x-s0{fill:var(--c4)}</style>
  </defs>
  <g class="x-container">
    <g class="x-c x-s0"></g>
  </g>
</svg>"#
        );
        assert_eq!(snake.dimensions.width, 200.0);
        assert_eq!(snake.dimensions.height, 100.0);
    }

    #[test]
    fn test_embed_has_no_namespace_declaration() {
        let snake = embed(&SnakeGraphic::parse(SOURCE), &EmbedOptions::default());
        assert!(!snake.markup.contains("xmlns"));
        assert!(snake.markup.contains(r#"<g class="snk-container">"#));
    }

    #[test]
    fn test_scaled_dimensions() {
        let dims = SnakeDimensions::scaled(ViewBox::DEFAULT, 740.0);
        assert_eq!(dims.width, 740.0);
        assert!((dims.height - 192.0 * (740.0 / 880.0)).abs() < 1e-9);
        assert!((dims.height - 161.454_545).abs() < 1e-5);
        assert!((dims.scale() - 740.0 / 880.0).abs() < 1e-12);
    }

    #[test]
    fn test_default_view_box_scales() {
        let graphic = SnakeGraphic::parse("<svg><style></style><rect/></svg>");
        let snake = embed(&graphic, &EmbedOptions::default());
        assert!(snake.markup.contains(r#"viewBox="-16 -32 880 192""#));
        assert!(snake.dimensions.height.is_finite());
    }

    #[test]
    fn test_prepare_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snake.svg");

        let snake = prepare_embedded_snake(&path, &EmbedOptions::default()).unwrap();
        assert!(snake.is_none());

        let dims = snake_dimensions(&path, 740.0).unwrap();
        assert_eq!(dims, SnakeDimensions::fallback(740.0));
        assert_eq!(dims.height, 160.0);
        assert_eq!(dims.view_box.to_string(), "-16 -32 880 192");
    }

    #[test]
    fn test_prepare_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snake.svg");
        std::fs::write(&path, SOURCE).unwrap();

        let snake = prepare_embedded_snake(&path, &nord_options())
            .unwrap()
            .unwrap();
        assert_eq!(snake, embed(&SnakeGraphic::parse(SOURCE), &nord_options()));

        let dims = snake_dimensions(&path, 200.0).unwrap();
        assert_eq!(dims, snake.dimensions);
    }
}
