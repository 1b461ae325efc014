//! Carousel styling configuration.

use ratatui::style::{Color, Modifier, Style};

/// Configuration for color output.
///
/// Colors are disabled when the `--no-color` flag was passed or the
/// `NO_COLOR` environment variable is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

/// Styles for the card strip and its indicators.
pub struct CarouselStyles {
    card_border: Style,
    active_card_border: Style,
    card_title: Style,
    card_body: Style,
    active_dot: Style,
    inactive_dot: Style,
    ring: Style,
    status_bar: Style,
}

impl CarouselStyles {
    /// Default color scheme.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }

    /// Color scheme honoring the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                card_border: Style::default().fg(Color::DarkGray),
                active_card_border: Style::default().fg(Color::Cyan),
                card_title: Style::default().add_modifier(Modifier::BOLD),
                card_body: Style::default(),
                active_dot: Style::default().fg(Color::Cyan),
                inactive_dot: Style::default().fg(Color::DarkGray),
                ring: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                status_bar: Style::default().fg(Color::DarkGray),
            }
        } else {
            Self {
                card_border: Style::default(),
                active_card_border: Style::default().add_modifier(Modifier::BOLD),
                card_title: Style::default().add_modifier(Modifier::BOLD),
                card_body: Style::default(),
                active_dot: Style::default().add_modifier(Modifier::BOLD),
                inactive_dot: Style::default(),
                ring: Style::default().add_modifier(Modifier::BOLD),
                status_bar: Style::default(),
            }
        }
    }

    /// Border style for a card; the active card gets the accent color.
    pub fn card_border(&self, active: bool) -> Style {
        if active {
            self.active_card_border
        } else {
            self.card_border
        }
    }

    /// Style for a card's title line.
    pub fn card_title(&self) -> Style {
        self.card_title
    }

    /// Style for a card's body text.
    pub fn card_body(&self) -> Style {
        self.card_body
    }

    /// Style for a dot indicator.
    pub fn dot(&self, active: bool) -> Style {
        if active {
            self.active_dot
        } else {
            self.inactive_dot
        }
    }

    /// Style for the ring marker around the highlighted dot.
    pub fn ring(&self) -> Style {
        self.ring
    }

    /// Style for the status bar.
    pub fn status_bar(&self) -> Style {
        self.status_bar
    }
}

impl Default for CarouselStyles {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_color_flag_disables_colors() {
        let config = ColorConfig::from_env_and_args(true);
        assert!(!config.colors_enabled());
    }

    #[test]
    fn active_border_differs_from_inactive() {
        let styles = CarouselStyles::with_color_config(ColorConfig::from_env_and_args(true));
        assert_ne!(styles.card_border(true), styles.card_border(false));
    }
}
