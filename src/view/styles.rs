//! Color and text styling.
//!
//! Every style the view uses comes from a [`Palette`], so `NO_COLOR` or
//! `--no-color` can strip color in one place while keeping modifiers like
//! bold and reverse video that remain legible on monochrome terminals.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Explicit setting, bypassing the environment.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::new(true)
    }
}

// ===== Palette =====

/// Resolved styles for each visual role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Focused borders and titles.
    pub accent: Style,
    /// Secondary text: hints, metadata.
    pub muted: Style,
    /// Error messages.
    pub error: Style,
    /// Highlighted result row.
    pub selected: Style,
    /// Pagination hint that cannot be used right now.
    pub disabled: Style,
    /// Key names in hints and the help overlay.
    pub key: Style,
    /// Ratings.
    pub rating: Style,
    /// Input cursor cell.
    pub cursor: Style,
}

impl Palette {
    /// Build the palette for a color configuration.
    pub fn new(colors: ColorConfig) -> Self {
        if colors.colors_enabled() {
            Self {
                accent: Style::default().fg(Color::Cyan),
                muted: Style::default().fg(Color::Gray),
                error: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                selected: Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
                disabled: Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::DIM),
                key: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                rating: Style::default().fg(Color::Yellow),
                cursor: Style::default()
                    .bg(Color::White)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            }
        } else {
            Self {
                accent: Style::default(),
                muted: Style::default(),
                error: Style::default().add_modifier(Modifier::BOLD),
                selected: Style::default().add_modifier(Modifier::REVERSED),
                disabled: Style::default().add_modifier(Modifier::DIM),
                key: Style::default().add_modifier(Modifier::BOLD),
                rating: Style::default(),
                cursor: Style::default().add_modifier(Modifier::REVERSED),
            }
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(ColorConfig::default())
    }
}

// ===== Tests =====
