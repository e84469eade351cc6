//! Centralized theme module for TUI color constants and styles

use ratatui::prelude::*;

use crate::config::ThemeConfig;
use crate::engine::StrengthLevel;

/// Luma above this is treated as a light terminal background.
const LIGHT_LUMA_THRESHOLD: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn colors(self) -> ThemeColors {
        match self {
            Theme::Dark => ThemeColors::dark(),
            Theme::Light => ThemeColors::light(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }
}

/// Pick the starting theme. `Auto` asks the terminal for its background
/// and falls back to dark when the terminal doesn't answer.
pub fn resolve_theme(config: ThemeConfig) -> Theme {
    match config {
        ThemeConfig::Dark => Theme::Dark,
        ThemeConfig::Light => Theme::Light,
        ThemeConfig::Auto => match terminal_light::luma() {
            Ok(luma) if luma > LIGHT_LUMA_THRESHOLD => Theme::Light,
            Ok(_) => Theme::Dark,
            Err(e) => {
                log::debug!("Background detection failed, using dark theme: {}", e);
                Theme::Dark
            }
        },
    }
}

/// Complete color palette for the TUI
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Strength colors (traffic light pattern)
    pub strength_weak: Color,
    pub strength_moderate: Color,
    pub strength_strong: Color,
    pub bar_empty: Color,

    // Form colors
    pub password_fg: Color,
    pub password_border: Color,
    pub field_focused: Style,
    pub field_label: Color,
    pub toggle_on: Color,
    pub toggle_off: Color,
    pub slider_filled: Color,

    // General colors
    pub base_bg: Color,
    pub base_fg: Color,
    pub muted: Color,
    pub title_color: Color,

    // Status bar colors
    pub status_bar_bg: Color,
    pub status_key_color: Color,
    pub flash_success: Color,
    pub flash_error: Color,

    // Popup overlay colors
    pub popup_border: Color,
    pub popup_title: Style,
    pub popup_bg: Color,
}

impl ThemeColors {
    /// Dark theme palette
    pub fn dark() -> Self {
        Self {
            strength_weak: Color::Red,
            strength_moderate: Color::Yellow,
            strength_strong: Color::Green,
            bar_empty: Color::DarkGray,
            password_fg: Color::White,
            password_border: Color::Magenta,
            field_focused: Style::new().fg(Color::Cyan).bold().reversed(),
            field_label: Color::Gray,
            toggle_on: Color::Green,
            toggle_off: Color::DarkGray,
            slider_filled: Color::Cyan,
            base_bg: Color::Reset,
            base_fg: Color::Reset,
            muted: Color::Gray,
            title_color: Color::Cyan,
            status_bar_bg: Color::Indexed(236),
            status_key_color: Color::Cyan,
            flash_success: Color::Green,
            flash_error: Color::Red,
            popup_border: Color::Cyan,
            popup_title: Style::new().fg(Color::Cyan).bold(),
            popup_bg: Color::Indexed(234),
        }
    }

    /// Light theme palette, darker accents for contrast on white
    pub fn light() -> Self {
        Self {
            strength_weak: Color::Rgb(200, 30, 30),
            strength_moderate: Color::Rgb(180, 120, 0),
            strength_strong: Color::Rgb(20, 140, 60),
            bar_empty: Color::Indexed(250),
            password_fg: Color::Black,
            password_border: Color::Rgb(219, 39, 119),
            field_focused: Style::new().fg(Color::Blue).bold().reversed(),
            field_label: Color::Indexed(238),
            toggle_on: Color::Rgb(20, 140, 60),
            toggle_off: Color::Indexed(248),
            slider_filled: Color::Blue,
            base_bg: Color::White,
            base_fg: Color::Black,
            muted: Color::Indexed(242),
            title_color: Color::Rgb(79, 70, 229),
            status_bar_bg: Color::Indexed(254),
            status_key_color: Color::Blue,
            flash_success: Color::Rgb(20, 140, 60),
            flash_error: Color::Rgb(200, 30, 30),
            popup_border: Color::Blue,
            popup_title: Style::new().fg(Color::Blue).bold(),
            popup_bg: Color::Indexed(255),
        }
    }

    pub fn strength_color(&self, level: StrengthLevel) -> Color {
        match level {
            StrengthLevel::Weak => self.strength_weak,
            StrengthLevel::Moderate => self.strength_moderate,
            StrengthLevel::Strong => self.strength_strong,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_theme_not_detected() {
        assert_eq!(resolve_theme(ThemeConfig::Dark), Theme::Dark);
        assert_eq!(resolve_theme(ThemeConfig::Light), Theme::Light);
    }

    #[test]
    fn test_toggle_roundtrip() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_strength_colors_follow_traffic_light() {
        let colors = ThemeColors::dark();
        assert_eq!(colors.strength_color(StrengthLevel::Weak), Color::Red);
        assert_eq!(colors.strength_color(StrengthLevel::Moderate), Color::Yellow);
        assert_eq!(colors.strength_color(StrengthLevel::Strong), Color::Green);
    }
}
