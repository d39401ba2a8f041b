//! Theming and color definitions.
//!
//! Uses ANSI colors that adapt to the terminal's color palette; the
//! light variant swaps in darker indexed colors for readability.

use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeMode;

/// Theme configuration for the entire application.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Border of the focused pane
    pub border_focused: Style,
    /// Border of the unfocused pane
    pub border: Style,
    /// Pane titles
    pub title: Style,
    /// Line-number gutter in the editor pane
    pub gutter: Style,
    /// Cursor cell in the editor pane
    pub cursor: Style,
    /// Markdown output text
    pub preview_text: Style,
    /// Status bar
    pub status: Style,
    /// The "copied" badge in the markdown pane title
    pub copied_badge: Style,
    /// Section headers in the help overlay
    pub help_section: Style,
    /// Dimmed hint text
    pub hint: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a theme optimized for dark terminals.
    pub fn dark() -> Self {
        Self {
            border_focused: Style::default().fg(Color::Yellow),
            border: Style::default().fg(Color::Indexed(240)),
            title: Style::default().add_modifier(Modifier::BOLD),
            gutter: Style::default().fg(Color::DarkGray),
            cursor: Style::default().bg(Color::White).fg(Color::Black),
            preview_text: Style::default(),
            status: Style::default().bg(Color::Indexed(236)).fg(Color::Indexed(252)),
            copied_badge: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            help_section: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            hint: Style::default().fg(Color::Indexed(245)),
        }
    }

    /// Create a theme optimized for light terminals.
    pub fn light() -> Self {
        Self {
            border_focused: Style::default().fg(Color::Indexed(136)),
            border: Style::default().fg(Color::Indexed(250)),
            title: Style::default().add_modifier(Modifier::BOLD),
            gutter: Style::default().fg(Color::Indexed(247)),
            cursor: Style::default().bg(Color::Black).fg(Color::White),
            preview_text: Style::default(),
            status: Style::default().bg(Color::Indexed(252)).fg(Color::Indexed(235)),
            copied_badge: Style::default()
                .fg(Color::Indexed(28))
                .add_modifier(Modifier::BOLD),
            help_section: Style::default()
                .fg(Color::Indexed(136))
                .add_modifier(Modifier::BOLD),
            hint: Style::default().fg(Color::Indexed(243)),
        }
    }

    /// Resolve a configured theme mode to a palette.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Auto => {
                if light_background_from_env(std::env::var("COLORFGBG").ok().as_deref()) {
                    Self::light()
                } else {
                    Self::dark()
                }
            }
        }
    }
}

/// Best-effort background detection from `COLORFGBG` ("fg;bg", bg 0-15).
fn light_background_from_env(colorfgbg: Option<&str>) -> bool {
    let Some(value) = colorfgbg else {
        return false;
    };
    let Some(bg) = value.rsplit(';').next() else {
        return false;
    };
    matches!(bg.parse::<u8>(), Ok(n) if n == 7 || n == 15)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_dark() {
        let theme = Theme::default();
        assert_eq!(theme.cursor.bg, Some(Color::White));
    }

    #[test]
    fn test_focused_border_differs_from_unfocused() {
        for theme in [Theme::dark(), Theme::light()] {
            assert_ne!(theme.border_focused.fg, theme.border.fg);
        }
    }

    #[test]
    fn test_mode_resolution() {
        assert_eq!(
            Theme::for_mode(ThemeMode::Light).cursor.bg,
            Some(Color::Black)
        );
        assert_eq!(
            Theme::for_mode(ThemeMode::Dark).cursor.bg,
            Some(Color::White)
        );
    }

    #[test]
    fn test_colorfgbg_detection() {
        assert!(light_background_from_env(Some("0;15")));
        assert!(light_background_from_env(Some("0;7")));
        assert!(!light_background_from_env(Some("15;0")));
        assert!(!light_background_from_env(Some("garbage")));
        assert!(!light_background_from_env(None));
    }
}
