//! Console theme and widget style functions.
//!
//! Style functions receive `&Theme` and read colors from the extended
//! palette and [`ConsoleColors`]:
//!
//! ```rust,ignore
//! button(text("Save")).style(button_primary)
//! ```

use iced::widget::{button, container, progress_bar, text_input};
use iced::{Border, Color, Shadow, Theme, Vector};

use super::colors::ConsoleColors;
use super::palette::{ThemeMode, console_palette};
use super::spacing;

// =============================================================================
// THEME CREATION
// =============================================================================

/// Creates the console theme for the given mode.
pub fn console_theme(mode: ThemeMode) -> Theme {
    Theme::custom(format!("Console {}", mode.label()), console_palette(mode))
}

fn flat_border(radius: f32) -> Border {
    Border {
        radius: radius.into(),
        width: 0.0,
        color: Color::TRANSPARENT,
    }
}

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button style - main actions.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let console = theme.console();

    let (background, text_color, shadow) = match status {
        button::Status::Active => (
            palette.primary.base.color,
            console.text_on_accent,
            Shadow {
                color: console.shadow,
                offset: Vector::new(0.0, 1.0),
                blur_radius: 2.0,
            },
        ),
        button::Status::Hovered => (
            console.accent_hover,
            console.text_on_accent,
            Shadow {
                color: console.shadow_strong,
                offset: Vector::new(0.0, 2.0),
                blur_radius: 4.0,
            },
        ),
        button::Status::Pressed => (
            console.accent_pressed,
            console.text_on_accent,
            Shadow::default(),
        ),
        button::Status::Disabled => (
            console.accent_disabled,
            console.text_muted,
            Shadow::default(),
        ),
    };

    button::Style {
        background: Some(background.into()),
        text_color,
        border: flat_border(spacing::BORDER_RADIUS_SM),
        shadow,
        ..Default::default()
    }
}

/// Secondary button style - alternative actions.
pub fn button_secondary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let console = theme.console();

    let (background, text_color, border_color) = match status {
        button::Status::Active => (
            console.background_elevated,
            console.text_secondary,
            console.border_default,
        ),
        button::Status::Hovered => (
            palette.background.base.color,
            console.text_secondary,
            console.text_disabled,
        ),
        button::Status::Pressed => (
            console.background_secondary,
            console.text_secondary,
            console.border_default,
        ),
        button::Status::Disabled => (
            console.background_secondary,
            console.text_disabled,
            console.border_subtle,
        ),
    };

    button::Style {
        background: Some(background.into()),
        text_color,
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: border_color,
        },
        shadow: Shadow::default(),
        ..Default::default()
    }
}

/// Danger button style - destructive actions.
pub fn button_danger(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let console = theme.console();

    let (background, text_color) = match status {
        button::Status::Active => (palette.danger.base.color, console.text_on_accent),
        button::Status::Hovered => (console.danger_hover, console.text_on_accent),
        button::Status::Pressed => (console.danger_pressed, console.text_on_accent),
        button::Status::Disabled => (console.accent_disabled, console.text_muted),
    };

    button::Style {
        background: Some(background.into()),
        text_color,
        border: flat_border(spacing::BORDER_RADIUS_SM),
        shadow: Shadow::default(),
        ..Default::default()
    }
}

/// Ghost button style - minimal visual weight.
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let console = theme.console();

    let (background, text_color) = match status {
        button::Status::Active => (None, palette.primary.base.color),
        button::Status::Hovered => (
            Some(console.accent_primary_light),
            palette.primary.base.color,
        ),
        button::Status::Pressed => (Some(console.accent_primary_medium), console.accent_pressed),
        button::Status::Disabled => (None, console.text_disabled),
    };

    button::Style {
        background: background.map(Into::into),
        text_color,
        border: flat_border(spacing::BORDER_RADIUS_SM),
        shadow: Shadow::default(),
        ..Default::default()
    }
}

/// Navigation tab style; `active` marks the current screen.
pub fn button_nav(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        if active {
            let console = theme.console();
            button::Style {
                background: Some(console.accent_primary_light.into()),
                text_color: theme.extended_palette().primary.base.color,
                border: flat_border(spacing::BORDER_RADIUS_SM),
                ..Default::default()
            }
        } else {
            let mut style = button_ghost(theme, status);
            if matches!(status, button::Status::Active) {
                style.text_color = theme.console().text_secondary;
            }
            style
        }
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Card container style - elevated surface.
pub fn container_card(theme: &Theme) -> container::Style {
    let console = theme.console();

    container::Style {
        background: Some(console.background_elevated.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_MD.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: console.border_subtle,
        },
        shadow: Shadow {
            color: console.shadow,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

/// Modal container style - dialog overlay.
pub fn container_modal(theme: &Theme) -> container::Style {
    let console = theme.console();

    container::Style {
        background: Some(console.background_elevated.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_LG.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: console.border_default,
        },
        shadow: Shadow {
            color: console.shadow_strong,
            offset: Vector::new(0.0, 4.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

/// Drawer container style - side panel over the page.
pub fn container_drawer(theme: &Theme) -> container::Style {
    let console = theme.console();

    container::Style {
        background: Some(console.background_elevated.into()),
        border: Border {
            radius: 0.0.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: console.border_default,
        },
        shadow: Shadow {
            color: console.shadow_strong,
            offset: Vector::new(-4.0, 0.0),
            blur_radius: 16.0,
        },
        ..Default::default()
    }
}

/// Surface container style - subtle elevation.
pub fn container_surface(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(theme.console().background_secondary.into()),
        border: flat_border(spacing::BORDER_RADIUS_SM),
        ..Default::default()
    }
}

/// Navigation bar style.
pub fn container_nav(theme: &Theme) -> container::Style {
    let console = theme.console();

    container::Style {
        background: Some(console.background_elevated.into()),
        shadow: Shadow {
            color: console.shadow,
            offset: Vector::new(0.0, 1.0),
            blur_radius: 4.0,
        },
        ..Default::default()
    }
}

// =============================================================================
// TEXT INPUT STYLES
// =============================================================================

/// Default text input style.
pub fn text_input_default(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let palette = theme.extended_palette();
    let console = theme.console();

    let (border_width, border_color) = match status {
        text_input::Status::Active => (spacing::BORDER_WIDTH_THIN, console.border_default),
        text_input::Status::Hovered => (spacing::BORDER_WIDTH_THIN, console.text_disabled),
        text_input::Status::Focused { .. } => {
            (spacing::BORDER_WIDTH_MEDIUM, console.border_focused)
        }
        text_input::Status::Disabled => (spacing::BORDER_WIDTH_THIN, console.border_default),
    };
    let disabled = matches!(status, text_input::Status::Disabled);

    text_input::Style {
        background: if disabled {
            console.background_secondary.into()
        } else {
            console.background_elevated.into()
        },
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: border_width,
            color: border_color,
        },
        icon: if disabled {
            console.text_disabled
        } else {
            console.text_muted
        },
        placeholder: console.text_disabled,
        value: if disabled {
            console.text_muted
        } else {
            palette.background.base.text
        },
        selection: console.accent_primary_medium,
    }
}

/// Text input style for a field with a validation error.
pub fn text_input_error(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let console = theme.console();
    let mut style = text_input_default(theme, status);
    style.border.color = console.border_error;
    if matches!(status, text_input::Status::Focused { .. }) {
        style.border.width = spacing::BORDER_WIDTH_MEDIUM;
    }
    style
}

// =============================================================================
// PROGRESS BAR STYLES
// =============================================================================

/// Primary progress bar style.
pub fn progress_bar_primary(theme: &Theme) -> progress_bar::Style {
    progress_bar::Style {
        background: theme.console().border_subtle.into(),
        bar: theme.extended_palette().primary.base.color.into(),
        border: flat_border(spacing::BORDER_RADIUS_FULL),
    }
}

/// Success progress bar style.
pub fn progress_bar_success(theme: &Theme) -> progress_bar::Style {
    progress_bar::Style {
        background: theme.console().border_subtle.into(),
        bar: theme.extended_palette().success.base.color.into(),
        border: flat_border(spacing::BORDER_RADIUS_FULL),
    }
}
