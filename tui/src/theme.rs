//! Color palette and glyphs for the Sift TUI.
//!
//! A cut of the Kanagawa Wave palette, sized to the handful of roles this
//! UI actually has.

use ratatui::style::{Color, Modifier, Style};

mod colors {
    use super::Color;

    pub const BG_DARK: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_HIGHLIGHT: Color = Color::Rgb(42, 42, 55); // sumiInk4
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray
    pub const ACCENT: Color = Color::Rgb(127, 180, 202); // springBlue
    pub const EMPHASIS: Color = Color::Rgb(230, 195, 132); // carpYellow
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_highlight: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub emphasis: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_highlight: colors::BG_HIGHLIGHT,
            text_primary: colors::TEXT_PRIMARY,
            text_muted: colors::TEXT_MUTED,
            accent: colors::ACCENT,
            emphasis: colors::EMPHASIS,
        }
    }

    /// Style for the body text; emphasized when the toggle is on.
    #[must_use]
    pub fn body(&self, emphasized: bool) -> Style {
        if emphasized {
            Style::default()
                .fg(self.emphasis)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(self.text_primary)
        }
    }
}

/// Glyph set, selectable for terminals without good Unicode coverage.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub separator: &'static str,
    pub up_arrow: &'static str,
    pub pointer: &'static str,
}

#[must_use]
pub fn glyphs(ascii_only: bool) -> Glyphs {
    if ascii_only {
        Glyphs {
            separator: " | ",
            up_arrow: "Up",
            pointer: "*",
        }
    } else {
        Glyphs {
            separator: " · ",
            up_arrow: "↑",
            pointer: "●",
        }
    }
}
