//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

/// Color palette.
pub struct Theme;

impl Theme {
    pub const HEADER_BG: Color = Color::Blue;
    pub const HEADER_FG: Color = Color::White;

    pub const BAR: Color = Color::Green;
    pub const BAR_LABEL: Color = Color::White;
    pub const BAR_VALUE: Color = Color::Black;

    pub const FG_DIM: Color = Color::DarkGray;
    pub const POPUP_BORDER: Color = Color::Cyan;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Header bar style.
    pub fn header() -> Style {
        Style::default()
            .fg(Theme::HEADER_FG)
            .bg(Theme::HEADER_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Chart bar fill style.
    pub fn bar() -> Style {
        Style::default().fg(Theme::BAR)
    }

    /// Chart axis label style.
    pub fn bar_label() -> Style {
        Style::default()
            .fg(Theme::BAR_LABEL)
            .add_modifier(Modifier::BOLD)
    }

    /// Value text drawn inside each bar.
    pub fn bar_value() -> Style {
        Style::default()
            .fg(Theme::BAR_VALUE)
            .add_modifier(Modifier::BOLD)
    }

    /// Dimmed text style (hints, footers).
    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Help key style (highlighted keys in help lines).
    pub fn help_key() -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }

    /// Popup border style.
    pub fn popup_border() -> Style {
        Style::default().fg(Theme::POPUP_BORDER)
    }
}
