//! Light and dark display themes.
//!
//! Each theme maps to a fixed set of anstyle styles used by the painter.
//! Heading accents use a blue tuned per theme so they stay readable on both
//! light and dark terminals.

use anstyle::{AnsiColor, Color, Effects, RgbColor, Style};
use serde::{Deserialize, Serialize};

/// Display theme, persisted as a user preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn styles(self) -> ThemeStyles {
        match self {
            Theme::Light => ThemeStyles::light(),
            Theme::Dark => ThemeStyles::dark(),
        }
    }
}

/// Styles computed for a theme.
#[derive(Clone, Debug)]
pub struct ThemeStyles {
    pub heading: Style,
    pub section: Style,
    pub divider: Style,
    pub text: Style,
    pub strong: Style,
    pub error: Style,
    pub success: Style,
    pub info: Style,
}

const LIGHT_ACCENT: RgbColor = RgbColor(0x1E, 0x3A, 0x8A);
const DARK_ACCENT: RgbColor = RgbColor(0x93, 0xC5, 0xFD);

impl ThemeStyles {
    fn light() -> Self {
        Self::from_accent(LIGHT_ACCENT)
    }

    fn dark() -> Self {
        Self::from_accent(DARK_ACCENT)
    }

    fn from_accent(accent: RgbColor) -> Self {
        let accent = Color::Rgb(accent);
        Self {
            heading: Style::new().fg_color(Some(accent)).effects(Effects::BOLD),
            section: Style::new().fg_color(Some(accent)).effects(Effects::BOLD),
            divider: Style::new().effects(Effects::DIMMED),
            text: Style::new(),
            strong: Style::new().effects(Effects::BOLD),
            error: Style::new()
                .fg_color(Some(Color::Ansi(AnsiColor::Red)))
                .effects(Effects::BOLD),
            success: Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))),
            info: Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))),
        }
    }
}
