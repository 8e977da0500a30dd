//! `termcard generate` command implementation.

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use termcard_config::{CliSettings, Config};
use termcard_github::{GitHubClient, ProfileSummary};
use termcard_snake::Theme;
use tracing::info;

use super::{render_card, write_svg};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the generate command.
#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// Path to configuration file (default: auto-discover termcard.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// GitHub username (overrides config).
    #[arg(short, long)]
    username: Option<String>,

    /// Theme name (overrides config).
    #[arg(short, long)]
    theme: Option<String>,

    /// Output SVG file (overrides config).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Snake SVG to embed (overrides config).
    #[arg(long)]
    snake: Option<PathBuf>,

    /// GitHub personal access token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl GenerateArgs {
    /// Execute the generate command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            username: self.username,
            theme: self.theme,
            output: self.output,
            snake_path: self.snake,
            token: self.token,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            info!(path = %path.display(), "Loaded configuration");
        }

        let theme = Theme::resolve(&config.theme);
        let client = GitHubClient::new(
            config.github.api_url.as_str(),
            Duration::from_secs(config.github.timeout_secs),
        )
        .token(config.github.token());
        if !client.has_token() {
            output.warning("No GitHub token set (GITHUB_TOKEN), requests are rate limited");
        }

        output.info(&format!("Fetching profile for {}", config.username));
        let user = client.fetch_user(&config.username)?;
        let profile =
            ProfileSummary::from_user(&user, &config.username, config.display.max_projects);

        let svg = render_card(&config, &config.username, theme, &profile, &output)?;
        write_svg(&config.output_resolved, &svg)?;

        output.success(&format!(
            "Generated {} ({theme} theme)",
            config.output_resolved.display()
        ));
        Ok(())
    }
}
