//! Internal constants for snake embedding.

/// Default class prefix used to namespace the embedded stylesheet.
pub const DEFAULT_PREFIX: &str = "snk-";

/// Default display width of the embedded snake (fits an 800px terminal).
pub const DEFAULT_TARGET_WIDTH: f64 = 740.0;

/// Height reported when no snake SVG is available.
pub const FALLBACK_HEIGHT: f64 = 160.0;
