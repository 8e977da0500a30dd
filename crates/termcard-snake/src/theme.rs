//! Built-in themes and snake palette adaptation.

use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::warn;

/// Custom properties the snake stylesheet binds its colors to, in palette order.
pub const PROPERTY_NAMES: [&str; 8] = [
    "--cb", "--cs", "--ce", "--c0", "--c1", "--c2", "--c3", "--c4",
];

/// Regex to match a custom property definition (`--name: value;`).
///
/// The value stops at the first `;` or `}`, so a declaration without a
/// terminating semicolon never matches.
static CUSTOM_PROPERTY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(--[A-Za-z0-9_]+):\s*[^;}]+;").unwrap());

/// Visual theme applied to the generated terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Catppuccin,
    Nord,
    Gruvbox,
    TokyoNight,
}

impl Theme {
    /// All built-in themes.
    pub const ALL: [Self; 4] = [Self::Catppuccin, Self::Nord, Self::Gruvbox, Self::TokyoNight];

    /// Identifier used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Catppuccin => "catppuccin",
            Self::Nord => "nord",
            Self::Gruvbox => "gruvbox",
            Self::TokyoNight => "tokyo_night",
        }
    }

    /// Look up a theme by identifier.
    ///
    /// Matching ignores ASCII case and treats `-` like `_`.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|theme| theme.name() == normalized)
    }

    /// Look up a theme by identifier, falling back to the default theme.
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            let fallback = Self::default();
            warn!(
                theme = name,
                fallback = fallback.name(),
                "Unknown theme, using default"
            );
            fallback
        })
    }

    /// Snake palette of this theme.
    pub fn palette(self) -> &'static Palette {
        match self {
            Self::Catppuccin => &CATPPUCCIN,
            Self::Nord => &NORD,
            Self::Gruvbox => &GRUVBOX,
            Self::TokyoNight => &TOKYO_NIGHT,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Colors of the contribution snake for one theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Cell border (`--cb`).
    pub border: &'static str,
    /// Snake body (`--cs`).
    pub snake: &'static str,
    /// Empty cell (`--ce`).
    pub empty: &'static str,
    /// Contribution levels 0 to 4 (`--c0` .. `--c4`).
    pub levels: [&'static str; 5],
}

impl Palette {
    /// Property/value pairs in [`PROPERTY_NAMES`] order.
    pub fn bindings(&self) -> [(&'static str, &'static str); 8] {
        let [l0, l1, l2, l3, l4] = self.levels;
        let values = [self.border, self.snake, self.empty, l0, l1, l2, l3, l4];
        std::array::from_fn(|i| (PROPERTY_NAMES[i], values[i]))
    }

    /// Color bound to a custom property, if it is one of [`PROPERTY_NAMES`].
    pub fn get(&self, property: &str) -> Option<&'static str> {
        self.bindings()
            .into_iter()
            .find_map(|(name, value)| (name == property).then_some(value))
    }
}

static CATPPUCCIN: Palette = Palette {
    border: "#45475a0a",
    snake: "#cba6f7",
    empty: "#1e1e2e",
    levels: ["#1e1e2e", "#313244", "#45475a", "#585b70", "#cba6f7"],
};

static NORD: Palette = Palette {
    border: "#4c566a0a",
    snake: "#88c0d0",
    empty: "#2e3440",
    levels: ["#2e3440", "#3b4252", "#434c5e", "#4c566a", "#88c0d0"],
};

static GRUVBOX: Palette = Palette {
    border: "#3c38360a",
    snake: "#b8bb26",
    empty: "#282828",
    levels: ["#282828", "#3c3836", "#504945", "#665c54", "#b8bb26"],
};

static TOKYO_NIGHT: Palette = Palette {
    border: "#414868aa",
    snake: "#7aa2f7",
    empty: "#1a1b26",
    levels: ["#1a1b26", "#24283b", "#414868", "#565f89", "#7aa2f7"],
};

/// Rebind the snake color properties of a stylesheet to a theme's palette.
///
/// Only existing definitions are rewritten; missing properties are not added.
/// The property name and the `;` terminator are kept, surrounding text is
/// untouched.
pub fn adapt_colors(style: &str, theme: Theme) -> String {
    let palette = theme.palette();
    CUSTOM_PROPERTY_RE
        .replace_all(style, |caps: &Captures| {
            let name = &caps[1];
            match palette.get(name) {
                Some(value) => format!("{name}:{value};"),
                None => caps[0].to_owned(),
            }
        })
        .into_owned()
}
