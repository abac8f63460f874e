//! Color theme and glyphs for the onboarding screen.
//!
//! The standard palette is a muted gray backdrop with white text and a green
//! highlight for the current page marker. High contrast swaps to the basic
//! 16-color set.

use ratatui::style::{Color, Modifier, Style};

use onboard_types::ui::UiOptions;

/// Standard palette constants.
mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_SCREEN: Color = Color::Rgb(66, 66, 74); // gray200
    pub const BG_TOAST: Color = Color::Rgb(40, 40, 46);
    pub const BG_BUTTON: Color = Color::Rgb(245, 245, 245);

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(255, 255, 255);
    pub const TEXT_SECONDARY: Color = Color::Rgb(220, 220, 224);
    pub const TEXT_MUTED: Color = Color::Rgb(150, 150, 158);
    pub const TEXT_ON_BUTTON: Color = Color::Rgb(0, 0, 0);

    // === Accents ===
    pub const GREEN: Color = Color::Rgb(76, 209, 55);
    pub const MARKER_IDLE: Color = Color::Rgb(128, 128, 136); // gray at half alpha over bg
    pub const ART: Color = Color::Rgb(126, 180, 202);
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_screen: Color,
    pub bg_toast: Color,
    pub bg_button: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_on_button: Color,
    pub marker_selected: Color,
    pub marker_idle: Color,
    pub art: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_screen: colors::BG_SCREEN,
            bg_toast: colors::BG_TOAST,
            bg_button: colors::BG_BUTTON,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            text_on_button: colors::TEXT_ON_BUTTON,
            marker_selected: colors::GREEN,
            marker_idle: colors::MARKER_IDLE,
            art: colors::ART,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_screen: Color::Black,
            bg_toast: Color::Black,
            bg_button: Color::White,
            text_primary: Color::White,
            text_secondary: Color::White,
            text_muted: Color::Gray,
            text_on_button: Color::Black,
            marker_selected: Color::LightGreen,
            marker_idle: Color::Gray,
            art: Color::Cyan,
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// ASCII/Unicode glyphs for markers and hints.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub marker_selected: &'static str,
    pub marker_idle: &'static str,
    pub arrow_left: &'static str,
    pub arrow_right: &'static str,
    pub separator: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            marker_selected: "=",
            marker_idle: "o",
            arrow_left: "<-",
            arrow_right: "->",
            separator: "|",
        }
    } else {
        Glyphs {
            marker_selected: "━",
            marker_idle: "•",
            arrow_left: "←",
            arrow_right: "→",
            separator: "·",
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn screen(palette: &Palette) -> Style {
        Style::default().bg(palette.bg_screen).fg(palette.text_primary)
    }

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn description(palette: &Palette) -> Style {
        Style::default().fg(palette.text_secondary)
    }

    #[must_use]
    pub fn text_control(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn button(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_on_button)
            .bg(palette.bg_button)
    }

    #[must_use]
    pub fn marker(palette: &Palette, selected: bool) -> Style {
        let color = if selected {
            palette.marker_selected
        } else {
            palette.marker_idle
        };
        Style::default().fg(color)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_secondary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn toast(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .bg(palette.bg_toast)
    }
}
