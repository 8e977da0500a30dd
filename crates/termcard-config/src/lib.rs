//! Configuration management for termcard.
//!
//! Parses `termcard.toml` with serde and provides auto-discovery of the
//! config file in parent directories. CLI settings are applied during load
//! via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String values support `${VAR}` and `${VAR:-default}`:
//! - `username`
//! - `github.token`
//! - `github.api_url`

mod expand;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override GitHub username.
    pub username: Option<String>,
    /// Override theme name.
    pub theme: Option<String>,
    /// Override output file.
    pub output: Option<PathBuf>,
    /// Override snake SVG path.
    pub snake_path: Option<PathBuf>,
    /// Override GitHub token.
    pub token: Option<String>,
}

/// Configuration filename to search for.
pub const CONFIG_FILENAME: &str = "termcard.toml";

/// Default theme name.
const DEFAULT_THEME: &str = "catppuccin";

/// Upper bound of `display.max_projects` (the API query fetches 100 repos).
const MAX_PROJECTS_LIMIT: usize = 100;

/// Characters allowed in the snake class prefix.
fn is_prefix_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GitHub username (required).
    pub username: String,
    /// Theme name; unknown names fall back to the default theme at render time.
    pub theme: String,
    /// Output file (relative string from TOML).
    output: Option<String>,
    /// Bio shown under the `whoami` prompt.
    pub bio: BioConfig,
    /// Section toggles.
    pub display: DisplayConfig,
    /// Terminal window size.
    pub terminal: TerminalConfig,
    /// Snake embedding (paths are relative strings from TOML).
    snake: SnakeConfigRaw,
    /// GitHub API access.
    pub github: GitHubConfig,

    /// Resolved output path (set after loading).
    #[serde(skip)]
    pub output_resolved: PathBuf,
    /// Resolved snake configuration (set after loading).
    #[serde(skip)]
    pub snake_resolved: SnakeConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Personal information block.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct BioConfig {
    /// Display name (falls back to the GitHub profile name).
    pub name: Option<String>,
    /// One-line description.
    pub tagline: Option<String>,
    /// Personal website URL.
    pub website: Option<String>,
    /// Additional links.
    pub links: Vec<LinkConfig>,
}

/// A titled link in the bio block.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LinkConfig {
    pub title: String,
    pub url: String,
}

/// Section toggles.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub show_bio: bool,
    pub show_stats: bool,
    pub show_projects: bool,
    pub show_snake: bool,
    /// Number of top projects to list.
    pub max_projects: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_bio: true,
            show_stats: true,
            show_projects: true,
            show_snake: true,
            max_projects: 4,
        }
    }
}

/// Terminal window size in pixels.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TerminalConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 500,
        }
    }
}

/// Raw snake configuration as parsed from TOML (path as string).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SnakeConfigRaw {
    path: Option<String>,
    prefix: Option<String>,
    target_width: Option<f64>,
}

/// Resolved snake embedding configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SnakeConfig {
    /// Snake SVG produced by the contribution snake generator.
    pub path: PathBuf,
    /// Class prefix for the embedded stylesheet.
    pub prefix: String,
    /// Display width of the embedded snake.
    pub target_width: f64,
}

impl SnakeConfig {
    fn default_with_base(base: &Path) -> Self {
        Self {
            path: base.join("snake.svg"),
            prefix: "snk-".to_owned(),
            target_width: 740.0,
        }
    }
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// GitHub API configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Personal access token (optional, raises the rate limit).
    pub token: Option<String>,
    /// GraphQL endpoint.
    pub api_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            token: None,
            api_url: "https://api.github.com/graphql".to_owned(),
            timeout_secs: 10,
        }
    }
}

impl GitHubConfig {
    /// Token to authenticate with, ignoring empty values.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|token| !token.is_empty())
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`github.token`").
        field: String,
        /// Error message (e.g., "${`GITHUB_TOKEN`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Check a snake class prefix.
///
/// The prefix must be non-empty and made of ASCII letters, digits, `-` or
/// `_`, so that prefixed class names stay plain CSS identifiers.
pub fn validate_prefix(prefix: &str, field: &str) -> Result<(), ConfigError> {
    require_non_empty(prefix, field)?;
    if !prefix.chars().all(is_prefix_char) {
        return Err(ConfigError::Validation(format!(
            "{field} may only contain ASCII letters, digits, '-' and '_'"
        )));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `termcard.toml` in the current directory and parents, and falls
    /// back to defaults relative to the current directory.
    ///
    /// CLI settings are applied after path resolution and before validation,
    /// so a username given on the command line satisfies the requirement.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(username) = &settings.username {
            self.username.clone_from(username);
        }
        if let Some(theme) = &settings.theme {
            self.theme.clone_from(theme);
        }
        if let Some(output) = &settings.output {
            self.output_resolved.clone_from(output);
        }
        if let Some(snake_path) = &settings.snake_path {
            self.snake_resolved.path.clone_from(snake_path);
        }
        if let Some(token) = &settings.token {
            self.github.token = Some(token.clone());
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.username, "username")?;
        self.validate_display()?;
        self.validate_terminal()?;
        self.validate_snake()?;
        require_http_url(&self.github.api_url, "github.api_url")?;
        if self.github.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "github.timeout_secs must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_display(&self) -> Result<(), ConfigError> {
        if self.display.max_projects > MAX_PROJECTS_LIMIT {
            return Err(ConfigError::Validation(format!(
                "display.max_projects cannot exceed {MAX_PROJECTS_LIMIT}"
            )));
        }
        Ok(())
    }

    fn validate_terminal(&self) -> Result<(), ConfigError> {
        if self.terminal.width == 0 || self.terminal.height == 0 {
            return Err(ConfigError::Validation(
                "terminal.width and terminal.height must be greater than 0".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_snake(&self) -> Result<(), ConfigError> {
        let snake = &self.snake_resolved;
        if !snake.target_width.is_finite() || snake.target_width <= 0.0 {
            return Err(ConfigError::Validation(
                "snake.target_width must be a positive number".to_owned(),
            ));
        }
        validate_prefix(&snake.prefix, "snake.prefix")
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            username: String::new(),
            theme: DEFAULT_THEME.to_owned(),
            output: None,
            bio: BioConfig::default(),
            display: DisplayConfig::default(),
            terminal: TerminalConfig::default(),
            snake: SnakeConfigRaw::default(),
            github: GitHubConfig::default(),
            output_resolved: base.join("terminal.svg"),
            snake_resolved: SnakeConfig::default_with_base(base),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.username = expand::expand_env(&self.username, "username")?;
        self.github.api_url = expand::expand_env(&self.github.api_url, "github.api_url")?;
        expand::expand_optional(&mut self.github.token, "github.token")?;
        Ok(())
    }

    /// Resolve relative paths against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let defaults = SnakeConfig::default_with_base(config_dir);

        self.output_resolved = config_dir.join(self.output.as_deref().unwrap_or("terminal.svg"));
        self.snake_resolved = SnakeConfig {
            path: self
                .snake
                .path
                .as_deref()
                .map_or(defaults.path, |p| config_dir.join(p)),
            prefix: self.snake.prefix.clone().unwrap_or(defaults.prefix),
            target_width: self.snake.target_width.unwrap_or(defaults.target_width),
        };
    }
}
