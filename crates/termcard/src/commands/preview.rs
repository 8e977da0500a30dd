//! `termcard preview` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use termcard_config::{CliSettings, Config};
use termcard_github::{MOCK_USERNAME, ProfileSummary, load_profile, mock_user};
use termcard_snake::Theme;

use super::{render_card, write_svg};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the preview command.
#[derive(Args)]
pub(crate) struct PreviewArgs {
    /// Path to configuration file (default: auto-discover termcard.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Theme to preview (overrides config).
    #[arg(short, long)]
    theme: Option<String>,

    /// Render one preview per theme.
    #[arg(long, conflicts_with = "theme")]
    all_themes: bool,

    /// Profile JSON to use instead of the built-in mock data.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Snake SVG to embed (overrides config).
    #[arg(long)]
    snake: Option<PathBuf>,

    /// Directory for the preview files.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl PreviewArgs {
    /// Execute the preview command.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            username: Some(MOCK_USERNAME.to_owned()),
            snake_path: self.snake,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let themes = if self.all_themes {
            Theme::ALL.to_vec()
        } else {
            vec![Theme::resolve(self.theme.as_deref().unwrap_or(&config.theme))]
        };

        let user = match &self.data {
            Some(path) => load_profile(path)?,
            None => mock_user(),
        };
        let profile = ProfileSummary::from_user(&user, MOCK_USERNAME, config.display.max_projects);

        for theme in themes {
            let path = preview_path(&self.out_dir, theme);
            output.highlight(&format!("Rendering {theme}"));
            let svg = render_card(&config, MOCK_USERNAME, theme, &profile, &output)?;
            write_svg(&path, &svg)?;
            output.success(&format!("  Wrote {}", path.display()));
        }
        Ok(())
    }
}

/// Preview file for `theme` in `out_dir`.
fn preview_path(out_dir: &Path, theme: Theme) -> PathBuf {
    out_dir.join(format!("terminal-test-{}.svg", theme.name()))
}
