//! Console color extension trait.
//!
//! Adds the colors Iced's `ExtendedPalette` does not cover (status tints,
//! muted text, elevated surfaces) to `Theme`.
//!
//! ```rust,ignore
//! use crate::theme::ConsoleColors;
//!
//! .style(|theme: &Theme| container::Style {
//!     background: Some(theme.console().background_secondary.into()),
//!     ..Default::default()
//! })
//! ```

use iced::{Color, Theme};

use dash_model::StatusTone;

// =============================================================================
// COLOR SET
// =============================================================================

/// Console-specific colors derived from the active palette.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleColorSet {
    // === Danger Button States ===
    pub danger_hover: Color,
    pub danger_pressed: Color,

    // === Accent Tints ===
    /// Light tint of the primary accent (hover backgrounds, active chips)
    pub accent_primary_light: Color,
    /// Medium tint of the primary accent (selections)
    pub accent_primary_medium: Color,

    // === Status Colors ===
    pub info: Color,
    pub status_success_light: Color,
    pub status_warning_light: Color,
    pub status_error_light: Color,
    pub status_info_light: Color,
    pub status_neutral: Color,
    pub status_neutral_light: Color,

    // === Borders ===
    pub border_default: Color,
    pub border_subtle: Color,
    pub border_focused: Color,
    pub border_error: Color,

    // === Backgrounds ===
    /// Secondary background (table headers, surfaces)
    pub background_secondary: Color,
    /// Elevated surface (cards, drawer, modals)
    pub background_elevated: Color,
    /// Highlighted row
    pub background_selected: Color,

    // === Text ===
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_disabled: Color,
    pub text_on_accent: Color,

    // === Interactive ===
    pub accent_hover: Color,
    pub accent_pressed: Color,
    pub accent_disabled: Color,

    // === Special ===
    pub shadow: Color,
    pub shadow_strong: Color,
    /// Modal backdrop overlay
    pub backdrop: Color,
}

impl ConsoleColorSet {
    /// Foreground color for a status tone.
    pub fn tone(&self, theme: &Theme, tone: StatusTone) -> Color {
        let palette = theme.extended_palette();
        match tone {
            StatusTone::Success => palette.success.base.color,
            StatusTone::Warning => palette.warning.base.color,
            StatusTone::Error => palette.danger.base.color,
            StatusTone::Info => self.info,
            StatusTone::Neutral => self.status_neutral,
        }
    }

    /// Background tint for a status tone.
    pub fn tone_light(&self, tone: StatusTone) -> Color {
        match tone {
            StatusTone::Success => self.status_success_light,
            StatusTone::Warning => self.status_warning_light,
            StatusTone::Error => self.status_error_light,
            StatusTone::Info => self.status_info_light,
            StatusTone::Neutral => self.status_neutral_light,
        }
    }
}

// =============================================================================
// EXTENSION TRAIT
// =============================================================================

/// Extension trait giving style closures access to [`ConsoleColorSet`].
pub trait ConsoleColors {
    fn console(&self) -> ConsoleColorSet;
}

impl ConsoleColors for Theme {
    fn console(&self) -> ConsoleColorSet {
        let palette = self.extended_palette();
        let is_dark = palette.is_dark;
        let primary = palette.primary.base.color;

        ConsoleColorSet {
            danger_hover: if is_dark {
                blend_color(palette.danger.base.color, Color::WHITE, 0.15)
            } else {
                blend_color(palette.danger.base.color, Color::BLACK, 0.12)
            },
            danger_pressed: if is_dark {
                blend_color(palette.danger.base.color, Color::BLACK, 0.15)
            } else {
                blend_color(palette.danger.base.color, Color::BLACK, 0.25)
            },

            accent_primary_light: tint(primary, is_dark, 0.15, 0.88),
            accent_primary_medium: tint(primary, is_dark, 0.25, 0.70),

            info: Color::from_rgb(0.25, 0.55, 0.85),
            status_success_light: tint(palette.success.base.color, is_dark, 0.15, 0.85),
            status_warning_light: tint(palette.warning.base.color, is_dark, 0.15, 0.85),
            status_error_light: tint(palette.danger.base.color, is_dark, 0.15, 0.85),
            status_info_light: if is_dark {
                Color::from_rgba(0.25, 0.55, 0.85, 0.15)
            } else {
                Color::from_rgb(0.90, 0.95, 0.99)
            },
            status_neutral: if is_dark {
                Color::from_rgb(0.60, 0.60, 0.65)
            } else {
                Color::from_rgb(0.45, 0.45, 0.50)
            },
            status_neutral_light: if is_dark {
                Color::from_rgb(0.20, 0.20, 0.23)
            } else {
                Color::from_rgb(0.92, 0.92, 0.94)
            },

            border_default: palette.background.strong.color,
            border_subtle: if is_dark {
                Color::from_rgb(0.20, 0.20, 0.22)
            } else {
                Color::from_rgb(0.90, 0.90, 0.93)
            },
            border_focused: primary,
            border_error: palette.danger.base.color,

            background_secondary: palette.background.weak.color,
            background_elevated: if is_dark {
                Color::from_rgb(0.15, 0.15, 0.18)
            } else {
                Color::WHITE
            },
            background_selected: tint(primary, is_dark, 0.10, 0.93),

            text_secondary: if is_dark {
                Color::from_rgb(0.80, 0.80, 0.85)
            } else {
                Color::from_rgb(0.30, 0.30, 0.35)
            },
            text_muted: if is_dark {
                Color::from_rgb(0.60, 0.60, 0.65)
            } else {
                Color::from_rgb(0.50, 0.50, 0.55)
            },
            text_disabled: if is_dark {
                Color::from_rgb(0.40, 0.40, 0.45)
            } else {
                Color::from_rgb(0.65, 0.65, 0.70)
            },
            text_on_accent: Color::WHITE,

            accent_hover: palette.primary.strong.color,
            accent_pressed: blend_color(primary, Color::BLACK, if is_dark { 0.20 } else { 0.15 }),
            accent_disabled: if is_dark {
                Color::from_rgb(0.30, 0.30, 0.35)
            } else {
                Color::from_rgb(0.82, 0.82, 0.86)
            },

            shadow: Color::from_rgba(0.0, 0.0, 0.0, if is_dark { 0.25 } else { 0.08 }),
            shadow_strong: Color::from_rgba(0.0, 0.0, 0.0, if is_dark { 0.40 } else { 0.16 }),
            backdrop: Color::from_rgba(0.0, 0.0, 0.0, if is_dark { 0.70 } else { 0.50 }),
        }
    }
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Blend two colors together.
///
/// `factor` of 0.0 returns `base`, 1.0 returns `blend`.
fn blend_color(base: Color, blend: Color, factor: f32) -> Color {
    Color::from_rgb(
        base.r + (blend.r - base.r) * factor,
        base.g + (blend.g - base.g) * factor,
        base.b + (blend.b - base.b) * factor,
    )
}

/// Translucent tint in dark mode, blend towards white in light mode.
fn tint(color: Color, is_dark: bool, dark_alpha: f32, light_factor: f32) -> Color {
    if is_dark {
        Color::from_rgba(color.r, color.g, color.b, dark_alpha)
    } else {
        blend_color(color, Color::WHITE, light_factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        let base = Color::from_rgb(0.2, 0.4, 0.6);
        assert_eq!(blend_color(base, Color::WHITE, 0.0), base);
        let white = blend_color(base, Color::WHITE, 1.0);
        for channel in [white.r, white.g, white.b] {
            assert!((channel - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_dark_tint_is_translucent() {
        let tinted = tint(Color::from_rgb(1.0, 0.0, 0.0), true, 0.15, 0.85);
        assert!((tinted.a - 0.15).abs() < f32::EPSILON);
        let light = tint(Color::from_rgb(1.0, 0.0, 0.0), false, 0.15, 0.85);
        assert!((light.a - 1.0).abs() < f32::EPSILON);
    }
}
