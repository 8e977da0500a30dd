//! Terminal window SVG rendering for termcard.
//!
//! Combines the profile summary, the bio and display settings and an optional
//! embedded snake into one standalone SVG. The window keeps the configured
//! width and grows taller when the enabled sections do not fit.

mod colors;
mod error;
mod layout;
mod renderer;

pub use colors::{TerminalColors, terminal_colors};
pub use error::RenderError;
pub use renderer::{TerminalPage, TerminalRenderer};
