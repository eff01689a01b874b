//! Console color palettes.
//!
//! Two palettes (light and dark) that integrate with Iced's theme system via
//! the `Palette` type.

use iced::Color;
use iced::theme::Palette;
use serde::{Deserialize, Serialize};

/// Theme mode for light/dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Human-readable label for UI display.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Palette for the given mode.
pub fn console_palette(mode: ThemeMode) -> Palette {
    match mode {
        ThemeMode::Light => light(),
        ThemeMode::Dark => dark(),
    }
}

fn light() -> Palette {
    Palette {
        background: Color::from_rgb(0.97, 0.97, 0.98), // GRAY_50
        text: Color::from_rgb(0.11, 0.11, 0.14),       // GRAY_900
        primary: Color::from_rgb(0.27, 0.38, 0.87),    // Indigo
        success: Color::from_rgb(0.18, 0.66, 0.38),    // Green
        warning: Color::from_rgb(0.93, 0.62, 0.08),    // Amber
        danger: Color::from_rgb(0.86, 0.24, 0.26),     // Red
    }
}

fn dark() -> Palette {
    Palette {
        background: Color::from_rgb(0.09, 0.09, 0.11),
        text: Color::from_rgb(0.92, 0.92, 0.95),
        primary: Color::from_rgb(0.45, 0.55, 0.98),
        success: Color::from_rgb(0.30, 0.78, 0.50),
        warning: Color::from_rgb(0.98, 0.72, 0.22),
        danger: Color::from_rgb(0.95, 0.40, 0.40),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
        assert!(ThemeMode::Dark.is_dark());
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(
            console_palette(ThemeMode::Light).background,
            console_palette(ThemeMode::Dark).background
        );
    }
}
