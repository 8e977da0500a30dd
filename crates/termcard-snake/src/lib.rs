//! Contribution snake embedding for termcard.
//!
//! Turns a standalone snake SVG (as produced by `Platane/snk`) into a fragment
//! that can be inlined into the terminal SVG:
//! - [`parser`]: split the source into stylesheet, body and `viewBox`
//! - [`scope`]: prefix the generator's short class names in CSS and markup
//! - [`theme`]: rebind the snake color properties to a theme palette
//! - [`embed`]: scale to the target width and assemble the nested `<svg>`
//!
//! Every degradation is silent: a missing file yields `None`, a bad `viewBox`
//! uses [`ViewBox::DEFAULT`] and an unknown theme uses [`Theme::default`].
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use termcard_snake::{EmbedOptions, Theme, prepare_embedded_snake};
//!
//! let options = EmbedOptions::default().theme(Theme::resolve("nord"));
//! if let Some(snake) = prepare_embedded_snake(Path::new("snake.svg"), &options)? {
//!     println!("{} ({}x{})", snake.markup, snake.dimensions.width, snake.dimensions.height);
//! }
//! ```

mod consts;
mod embed;
mod error;
mod parser;
mod scope;
mod theme;

pub use consts::{DEFAULT_PREFIX, DEFAULT_TARGET_WIDTH, FALLBACK_HEIGHT};
pub use embed::{
    EmbedOptions, EmbeddedSnake, SnakeDimensions, embed, prepare_embedded_snake, snake_dimensions,
};
pub use error::SnakeError;
pub use parser::{SnakeGraphic, ViewBox};
pub use scope::{scope_content, scope_css};
pub use theme::{PROPERTY_NAMES, Palette, Theme, adapt_colors};
