//! Terminal SVG template rendering.

use minijinja::{AutoEscape, Environment};
use serde::Serialize;
use termcard_config::{BioConfig, DisplayConfig, TerminalConfig};
use termcard_github::ProfileSummary;
use termcard_snake::{EmbeddedSnake, SnakeDimensions, Theme};
use tracing::debug;

use crate::colors::{TerminalColors, terminal_colors};
use crate::error::RenderError;
use crate::layout::{Layout, SectionLines};

const TEMPLATE_NAME: &str = "terminal.svg.j2";
const TEMPLATE: &str = include_str!("../templates/terminal.svg.j2");

/// Everything shown in one terminal window.
#[derive(Debug, Clone, Copy)]
pub struct TerminalPage<'a> {
    pub username: &'a str,
    pub theme: Theme,
    pub bio: &'a BioConfig,
    pub display: &'a DisplayConfig,
    pub terminal: &'a TerminalConfig,
    pub profile: &'a ProfileSummary,
    /// Prepared snake fragment, `None` when the snake file is missing.
    pub snake: Option<&'a EmbeddedSnake>,
    /// Width reserved for the snake when none is available.
    pub snake_target_width: f64,
}

/// One output line of the `whoami` section.
#[derive(Debug, Serialize)]
struct BioLine {
    text: String,
    class: &'static str,
}

#[derive(Debug, Serialize)]
struct SnakeFrame {
    width: f64,
    height: f64,
    view_box: String,
}

impl From<SnakeDimensions> for SnakeFrame {
    fn from(dims: SnakeDimensions) -> Self {
        Self {
            width: dims.width,
            height: dims.height,
            view_box: dims.view_box.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct TemplateContext<'a> {
    username: &'a str,
    display_name: &'a str,
    theme: &'static str,
    colors: &'static TerminalColors,
    bio: &'a BioConfig,
    bio_lines: Vec<BioLine>,
    display: &'a DisplayConfig,
    terminal: &'a TerminalConfig,
    profile: &'a ProfileSummary,
    layout: Layout,
    snake_content: Option<&'a str>,
    snake_dims: SnakeFrame,
}

/// Renders terminal pages from the bundled template.
pub struct TerminalRenderer {
    env: Environment<'static>,
}

impl TerminalRenderer {
    /// Create a renderer with the terminal template loaded.
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.add_template(TEMPLATE_NAME, TEMPLATE)?;
        Ok(Self { env })
    }

    /// Render a complete standalone SVG document.
    pub fn render(&self, page: &TerminalPage<'_>) -> Result<String, RenderError> {
        let context = build_context(page);
        debug!(
            theme = context.theme,
            height = context.layout.height,
            snake = context.snake_content.is_some(),
            "Rendering terminal"
        );
        let template = self.env.get_template(TEMPLATE_NAME)?;
        Ok(template.render(&context)?)
    }
}

fn build_context<'a>(page: &TerminalPage<'a>) -> TemplateContext<'a> {
    let display = page.display;
    let display_name = page
        .bio
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or(&page.profile.display_name);

    let bio_lines = if display.show_bio {
        bio_lines(page.bio, display_name)
    } else {
        Vec::new()
    };

    let snake = page.snake.filter(|_| display.show_snake);
    let dims = snake.map_or_else(
        || SnakeDimensions::fallback(page.snake_target_width),
        |snake| snake.dimensions,
    );

    let lines = SectionLines {
        bio: display.show_bio.then_some(bio_lines.len() + 1),
        stats: display.show_stats.then_some(4),
        projects: (display.show_projects && !page.profile.top_projects.is_empty())
            .then_some(page.profile.top_projects.len() * 2 + 1),
        snake_height: snake.map(|_| dims.height),
    };
    let layout = Layout::compute(
        f64::from(page.terminal.width),
        f64::from(page.terminal.height),
        dims.width,
        lines,
    );

    TemplateContext {
        username: page.username,
        display_name,
        theme: page.theme.name(),
        colors: terminal_colors(page.theme),
        bio: page.bio,
        bio_lines,
        display,
        terminal: page.terminal,
        profile: page.profile,
        layout,
        snake_content: snake.map(|snake| snake.markup.as_str()),
        snake_dims: dims.into(),
    }
}

fn bio_lines(bio: &BioConfig, display_name: &str) -> Vec<BioLine> {
    let mut lines = vec![BioLine {
        text: display_name.to_owned(),
        class: "term-accent",
    }];
    if let Some(tagline) = bio.tagline.as_deref().filter(|t| !t.is_empty()) {
        lines.push(BioLine {
            text: tagline.to_owned(),
            class: "",
        });
    }
    if let Some(website) = bio.website.as_deref().filter(|w| !w.is_empty()) {
        lines.push(BioLine {
            text: format!("web: {website}"),
            class: "term-muted",
        });
    }
    for link in &bio.links {
        lines.push(BioLine {
            text: format!("{}: {}", link.title, link.url),
            class: "term-muted",
        });
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use termcard_config::LinkConfig;
    use termcard_github::mock_user;
    use termcard_snake::{EmbedOptions, SnakeGraphic, embed};

    const SNAKE_SVG: &str = r#"<svg viewBox="0 0 400 100" xmlns="http://www.w3.org/2000/svg"><style>:root{--cb:#1b1f230a}.c{fill:var(--cb)}</style><rect class="c"/></svg>"#;

    struct Fixture {
        bio: BioConfig,
        display: DisplayConfig,
        terminal: TerminalConfig,
        profile: ProfileSummary,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                bio: BioConfig::default(),
                display: DisplayConfig::default(),
                terminal: TerminalConfig::default(),
                profile: ProfileSummary::from_user(&mock_user(), "testuser", 4),
            }
        }

        fn page<'a>(&'a self, snake: Option<&'a EmbeddedSnake>) -> TerminalPage<'a> {
            TerminalPage {
                username: "testuser",
                theme: Theme::Catppuccin,
                bio: &self.bio,
                display: &self.display,
                terminal: &self.terminal,
                profile: &self.profile,
                snake,
                snake_target_width: 740.0,
            }
        }
    }

    fn embedded(theme: Theme) -> EmbeddedSnake {
        let graphic = SnakeGraphic::parse(SNAKE_SVG);
        embed(&graphic, &EmbedOptions::default().theme(theme))
    }

    fn render(page: &TerminalPage<'_>) -> String {
        TerminalRenderer::new().unwrap().render(page).unwrap()
    }

    #[test]
    fn render_contains_window_and_sections() {
        let fixture = Fixture::new();
        let svg = render(&fixture.page(None));

        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("testuser@github: ~"));
        assert!(svg.contains("whoami"));
        assert!(svg.contains("Test User"));
        assert!(svg.contains("gh stats testuser"));
        assert!(svg.contains("</tspan>42</text>"));
        assert!(svg.contains("★</tspan> 297</text>"));
        assert!(svg.contains("awesome-project"));
        assert!(svg.contains("term-cursor"));
    }

    #[test]
    fn render_uses_theme_colors() {
        let fixture = Fixture::new();
        let mut page = fixture.page(None);
        page.theme = Theme::Gruvbox;
        let svg = render(&page);
        assert!(svg.contains(r#"data-theme="gruvbox""#));
        assert!(svg.contains(terminal_colors(Theme::Gruvbox).background));
        assert!(!svg.contains(terminal_colors(Theme::Catppuccin).background));
    }

    #[test]
    fn render_inlines_snake_fragment() {
        let fixture = Fixture::new();
        let snake = embedded(Theme::Catppuccin);
        let svg = render(&fixture.page(Some(&snake)));

        assert!(svg.contains("snake --contributions"));
        assert!(svg.contains(&snake.markup));
        assert!(svg.contains("snk-container"));
    }

    #[test]
    fn render_without_snake_omits_section() {
        let fixture = Fixture::new();
        let svg = render(&fixture.page(None));
        assert!(!svg.contains("snake --contributions"));
        assert!(!svg.contains("snk-"));
    }

    #[test]
    fn render_hidden_snake_ignores_fragment() {
        let mut fixture = Fixture::new();
        fixture.display.show_snake = false;
        let snake = embedded(Theme::Catppuccin);
        let svg = render(&fixture.page(Some(&snake)));
        assert!(!svg.contains("snk-container"));
    }

    #[test]
    fn render_escapes_user_text() {
        let mut fixture = Fixture::new();
        fixture.bio.tagline = Some("<script>alert(1)</script> & more".to_owned());
        let svg = render(&fixture.page(None));
        assert!(!svg.contains("<script>"));
        assert!(svg.contains("&lt;script&gt;"));
        assert!(svg.contains("&amp; more"));
    }

    #[test]
    fn render_respects_display_toggles() {
        let mut fixture = Fixture::new();
        fixture.display.show_bio = false;
        fixture.display.show_stats = false;
        fixture.display.show_projects = false;
        let svg = render(&fixture.page(None));
        assert!(!svg.contains("whoami"));
        assert!(!svg.contains("gh stats"));
        assert!(!svg.contains("awesome-project"));
    }

    #[test]
    fn bio_name_overrides_profile_name() {
        let mut fixture = Fixture::new();
        fixture.bio.name = Some("Octo Cat".to_owned());
        let context = build_context(&fixture.page(None));
        assert_eq!(context.display_name, "Octo Cat");
        assert_eq!(context.bio_lines[0].text, "Octo Cat");
    }

    #[test]
    fn bio_lines_include_links() {
        let bio = BioConfig {
            name: None,
            tagline: Some("Rustacean".to_owned()),
            website: Some("https://example.com".to_owned()),
            links: vec![LinkConfig {
                title: "mastodon".to_owned(),
                url: "https://mastodon.social/@octo".to_owned(),
            }],
        };
        let texts: Vec<_> = bio_lines(&bio, "Octo")
            .into_iter()
            .map(|line| line.text)
            .collect();
        assert_eq!(
            texts,
            [
                "Octo",
                "Rustacean",
                "web: https://example.com",
                "mastodon: https://mastodon.social/@octo",
            ]
        );
    }

    #[test]
    fn window_grows_for_tall_content() {
        let mut fixture = Fixture::new();
        fixture.terminal.height = 100;
        let snake = embedded(Theme::Nord);
        let context = build_context(&fixture.page(Some(&snake)));
        assert!(context.layout.height > 100.0);
        assert!(context.layout.snake_y.is_some());
        assert_eq!(context.snake_dims.view_box, "0 0 400 100");
    }

    #[test]
    fn missing_snake_reports_fallback_dims() {
        let fixture = Fixture::new();
        let context = build_context(&fixture.page(None));
        assert!((context.snake_dims.width - 740.0).abs() < f64::EPSILON);
        assert!((context.snake_dims.height - 160.0).abs() < f64::EPSILON);
        assert!(context.layout.snake_y.is_none());
    }
}
