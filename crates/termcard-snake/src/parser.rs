//! Parsing of generated snake SVG documents.
//!
//! The snake SVG is produced by an external generator, so parsing is lenient:
//! a missing `<style>` block yields an empty stylesheet and empty content (the
//! body is anchored on the end of the stylesheet) and a missing or malformed
//! `viewBox` falls back to [`ViewBox::DEFAULT`].

use std::fmt;
use std::io;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::SnakeError;

/// Regex to match the first `<style>` block (non-greedy, across lines).
static STYLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<style[^>]*>(.*?)</style>").unwrap());

/// Regex to match the `viewBox` attribute value.
static VIEWBOX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"viewBox="([^"]+)""#).unwrap());

/// Closing tag of the root element.
const ROOT_CLOSE: &str = "</svg>";

/// Coordinate frame of an SVG image (`x y width height`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    /// Frame substituted when the source has no usable `viewBox`.
    pub const DEFAULT: Self = Self {
        x: -16.0,
        y: -32.0,
        width: 880.0,
        height: 192.0,
    };

    /// Parse a `viewBox` attribute value.
    ///
    /// Only the first four tokens (separated by whitespace or commas) are
    /// read. Returns `None` when there are fewer than four, when one of them
    /// is not a finite number or when the width or height is not positive.
    pub fn parse(value: &str) -> Option<Self> {
        let mut numbers = value
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(str::parse::<f64>);

        let x = numbers.next()?.ok()?;
        let y = numbers.next()?.ok()?;
        let width = numbers.next()?.ok()?;
        let height = numbers.next()?.ok()?;

        let finite = [x, y, width, height].iter().all(|v| v.is_finite());
        if !finite || width <= 0.0 || height <= 0.0 {
            return None;
        }

        Some(Self {
            x,
            y,
            width,
            height,
        })
    }
}

impl Default for ViewBox {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for ViewBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x, self.y, self.width, self.height)
    }
}

/// A snake SVG split into the parts needed for embedding.
///
/// Immutable once parsed; embedding reads it and produces new strings.
#[derive(Debug, Clone, PartialEq)]
pub struct SnakeGraphic {
    style: String,
    content: String,
    view_box: ViewBox,
}

impl SnakeGraphic {
    /// Parse the raw text of a snake SVG.
    pub fn parse(svg: &str) -> Self {
        let style_match = STYLE_RE.captures(svg);
        let style = style_match
            .as_ref()
            .and_then(|caps| caps.get(1))
            .map(|m| break_after_rules(m.as_str()))
            .unwrap_or_default();

        let body_start = style_match
            .as_ref()
            .and_then(|caps| caps.get(0))
            .map(|m| m.end());
        let content = body_start
            .map(|start| extract_body(svg, start))
            .unwrap_or_default()
            .to_owned();

        let raw_view_box = VIEWBOX_RE
            .captures(svg)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str());
        let view_box = match raw_view_box.and_then(ViewBox::parse) {
            Some(view_box) => view_box,
            None => {
                debug!(
                    view_box = raw_view_box.unwrap_or("<missing>"),
                    "Using default snake viewBox"
                );
                ViewBox::DEFAULT
            }
        };

        Self {
            style,
            content,
            view_box,
        }
    }

    /// Read and parse a snake SVG from disk.
    ///
    /// Returns `Ok(None)` if the file does not exist.
    pub fn load(path: &Path) -> Result<Option<Self>, SnakeError> {
        match std::fs::read_to_string(path) {
            Ok(svg) => Ok(Some(Self::parse(&svg))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Snake SVG not found");
                Ok(None)
            }
            Err(source) => Err(SnakeError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Stylesheet text (empty if the source had no `<style>` block).
    pub fn style(&self) -> &str {
        &self.style
    }

    /// Markup between the stylesheet and the closing root tag, trimmed.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Coordinate frame of the source image.
    pub fn view_box(&self) -> ViewBox {
        self.view_box
    }
}

/// Slice the body from `start` to the closing root tag.
fn extract_body(svg: &str, start: usize) -> &str {
    match svg.rfind(ROOT_CLOSE) {
        Some(end) if end >= start => svg[start..end].trim(),
        _ => "",
    }
}

/// Insert a line break after every `}` that is followed by something other
/// than another `}`.
///
/// Generated stylesheets are a single line of tens of kilobytes, which some
/// renderers refuse. Rendering is unaffected.
fn break_after_rules(style: &str) -> String {
    let mut out = String::with_capacity(style.len() + style.len() / 16);
    let mut chars = style.chars().peekable();
    while let Some(c) = chars.next() {
        out.push(c);
        if c == '}' && chars.peek().is_some_and(|&next| next != '}') {
            out.push('\n');
        }
    }
    out
}
