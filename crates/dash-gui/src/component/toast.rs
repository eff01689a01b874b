//! Toast notification component.
//!
//! Shows the latest notification at the bottom-right of the window. The
//! toast subscription dismisses it after a timeout that restarts whenever a
//! new toast replaces the current one.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Border, Element, Length, Shadow, Theme, Vector};
use iced_fonts::lucide;

use dash_model::{Notification, NotificationSink, Severity};

use crate::message::{Message, ToastMessage};
use crate::theme::{BORDER_RADIUS_LG, ConsoleColors, SPACING_MD, SPACING_SM, SPACING_XS, button_ghost};

/// Toast notification state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastState {
    pub title: String,
    pub message: String,
    /// Toast type determines the icon and accent color.
    pub toast_type: ToastType,
}

/// Type of toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastType {
    /// Success notification (green check icon).
    Success,
    /// Information notification (blue info icon).
    Info,
    /// Warning notification (amber warning icon).
    Warning,
    /// Error notification (red X icon).
    Error,
}

impl From<Severity> for ToastType {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Success => Self::Success,
            Severity::Info => Self::Info,
            Severity::Warning => Self::Warning,
            Severity::Error => Self::Error,
        }
    }
}

impl From<Notification> for ToastState {
    fn from(notification: Notification) -> Self {
        Self {
            title: notification.title,
            message: notification.message,
            toast_type: notification.severity.into(),
        }
    }
}

impl ToastState {
    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notification::warning(title, message).into()
    }
}

/// The single toast on screen.
///
/// Every toast shown gets a new generation. The dismiss timer is keyed on it,
/// so replacing a toast restarts the timeout and a tick meant for an older
/// toast never dismisses a newer one.
#[derive(Debug, Clone, Default)]
pub struct ToastSlot {
    current: Option<ToastState>,
    generation: u64,
}

impl ToastSlot {
    /// Show a toast, replacing the current one.
    pub fn show(&mut self, toast: ToastState) {
        self.generation = self.generation.wrapping_add(1);
        self.current = Some(toast);
    }

    pub fn current(&self) -> Option<&ToastState> {
        self.current.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Close the toast at once (dismiss button).
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Timeout for the toast of `generation`. Ignored if another toast has
    /// been shown since.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }
}

/// Notification sink backed by the toast slot. A new notification replaces
/// the one on screen.
pub struct ToastSink<'a>(pub &'a mut ToastSlot);

impl NotificationSink for ToastSink<'_> {
    fn notify(&mut self, notification: Notification) {
        tracing::debug!(title = %notification.title, severity = ?notification.severity, "Toast");
        self.0.show(notification.into());
    }
}

/// Renders a toast notification.
pub fn view_toast(state: &ToastState) -> Element<'_, Message> {
    let toast_type = state.toast_type;
    let icon_color = move |theme: &Theme| {
        let palette = theme.extended_palette();
        match toast_type {
            ToastType::Success => palette.success.base.color,
            ToastType::Info => theme.console().info,
            ToastType::Warning => palette.warning.base.color,
            ToastType::Error => palette.danger.base.color,
        }
    };

    let icon = match toast_type {
        ToastType::Success => lucide::circle_check(),
        ToastType::Info => lucide::info(),
        ToastType::Warning => lucide::triangle_alert(),
        ToastType::Error => lucide::circle_x(),
    }
    .size(18)
    .style(move |theme: &Theme| text::Style {
        color: Some(icon_color(theme)),
    });

    let mut body = column![text(&state.title).size(14)].spacing(2.0);
    if !state.message.is_empty() {
        body = body.push(text(&state.message).size(13).style(|theme: &Theme| text::Style {
            color: Some(theme.console().text_secondary),
        }));
    }

    let dismiss_btn = button(lucide::x().size(14))
        .on_press(Message::Toast(ToastMessage::Dismiss))
        .padding(SPACING_XS)
        .style(button_ghost);

    let content = row![
        icon,
        Space::new().width(SPACING_SM),
        body,
        Space::new().width(SPACING_MD),
        dismiss_btn,
    ]
    .align_y(Alignment::Center)
    .spacing(SPACING_XS);

    container(content)
        .padding([SPACING_SM, SPACING_MD])
        .width(Length::Shrink)
        .max_width(420.0)
        .style(|theme: &Theme| {
            let console = theme.console();
            container::Style {
                background: Some(console.background_elevated.into()),
                border: Border {
                    color: console.border_default,
                    width: 1.0,
                    radius: BORDER_RADIUS_LG.into(),
                },
                shadow: Shadow {
                    color: console.shadow_strong,
                    offset: Vector::new(0.0, 2.0),
                    blur_radius: 8.0,
                },
                ..Default::default()
            }
        })
        .into()
}
