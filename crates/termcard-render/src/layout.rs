//! Vertical layout of the terminal sections.
//!
//! Each enabled section starts with a prompt line followed by its output
//! lines. Positions are text baselines in pixels.

use serde::Serialize;

const TITLE_BAR_HEIGHT: f64 = 36.0;
const CONTENT_TOP: f64 = 72.0;
const LINE_HEIGHT: f64 = 22.0;
const SECTION_GAP: f64 = 16.0;
const PADDING_X: f64 = 30.0;
const BOTTOM_PADDING: f64 = 24.0;

/// Number of lines a section occupies, prompt included.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct SectionLines {
    pub bio: Option<usize>,
    pub stats: Option<usize>,
    pub projects: Option<usize>,
    /// Pixel height of the snake, drawn below its prompt.
    pub snake_height: Option<f64>,
}

/// Computed positions passed to the template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Layout {
    pub width: f64,
    pub height: f64,
    pub title_bar_height: f64,
    pub padding_x: f64,
    pub line_height: f64,
    pub bio_y: Option<f64>,
    pub stats_y: Option<f64>,
    pub projects_y: Option<f64>,
    /// Baseline of the snake prompt.
    pub snake_y: Option<f64>,
    /// Top-left corner of the snake frame.
    pub snake_x: f64,
    pub snake_top: f64,
    pub cursor_y: f64,
}

impl Layout {
    /// Stack the sections; the window grows when `min_height` is too small.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn compute(
        width: f64,
        min_height: f64,
        snake_width: f64,
        lines: SectionLines,
    ) -> Self {
        let mut y = CONTENT_TOP;
        let mut place = |count: Option<usize>| {
            count.map(|n| {
                let start = y;
                y += n as f64 * LINE_HEIGHT + SECTION_GAP;
                start
            })
        };

        let bio_y = place(lines.bio);
        let stats_y = place(lines.stats);
        let projects_y = place(lines.projects);

        let mut snake_top = 0.0;
        let snake_y = lines.snake_height.map(|height| {
            let start = y;
            snake_top = y + LINE_HEIGHT / 2.0;
            y = snake_top + height + SECTION_GAP + LINE_HEIGHT / 2.0;
            start
        });

        let cursor_y = y;
        let needed = cursor_y + BOTTOM_PADDING;

        Self {
            width,
            height: min_height.max(needed),
            title_bar_height: TITLE_BAR_HEIGHT,
            padding_x: PADDING_X,
            line_height: LINE_HEIGHT,
            bio_y,
            stats_y,
            projects_y,
            snake_y,
            snake_x: ((width - snake_width) / 2.0).max(0.0),
            snake_top,
            cursor_y,
        }
    }
}
