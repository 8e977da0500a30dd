//! Terminal window colors per theme.

use serde::Serialize;
use termcard_snake::Theme;

/// Colors of the terminal chrome and text.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct TerminalColors {
    pub background: &'static str,
    pub title_bar: &'static str,
    pub border: &'static str,
    pub foreground: &'static str,
    pub muted: &'static str,
    pub accent: &'static str,
    pub prompt: &'static str,
    pub red: &'static str,
    pub yellow: &'static str,
    pub green: &'static str,
}

static CATPPUCCIN: TerminalColors = TerminalColors {
    background: "#1e1e2e",
    title_bar: "#181825",
    border: "#313244",
    foreground: "#cdd6f4",
    muted: "#6c7086",
    accent: "#cba6f7",
    prompt: "#89b4fa",
    red: "#f38ba8",
    yellow: "#f9e2af",
    green: "#a6e3a1",
};

static NORD: TerminalColors = TerminalColors {
    background: "#2e3440",
    title_bar: "#3b4252",
    border: "#4c566a",
    foreground: "#d8dee9",
    muted: "#616e88",
    accent: "#88c0d0",
    prompt: "#81a1c1",
    red: "#bf616a",
    yellow: "#ebcb8b",
    green: "#a3be8c",
};

static GRUVBOX: TerminalColors = TerminalColors {
    background: "#282828",
    title_bar: "#3c3836",
    border: "#504945",
    foreground: "#ebdbb2",
    muted: "#928374",
    accent: "#b8bb26",
    prompt: "#83a598",
    red: "#fb4934",
    yellow: "#fabd2f",
    green: "#b8bb26",
};

static TOKYO_NIGHT: TerminalColors = TerminalColors {
    background: "#1a1b26",
    title_bar: "#16161e",
    border: "#414868",
    foreground: "#c0caf5",
    muted: "#565f89",
    accent: "#7aa2f7",
    prompt: "#bb9af7",
    red: "#f7768e",
    yellow: "#e0af68",
    green: "#9ece6a",
};

/// Terminal colors of a theme.
pub fn terminal_colors(theme: Theme) -> &'static TerminalColors {
    match theme {
        Theme::Catppuccin => &CATPPUCCIN,
        Theme::Nord => &NORD,
        Theme::Gruvbox => &GRUVBOX,
        Theme::TokyoNight => &TOKYO_NIGHT,
    }
}
