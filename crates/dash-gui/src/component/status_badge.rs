//! Status badge component.
//!
//! Pill-shaped label colored by a [`StatusTone`].

use iced::widget::{container, text};
use iced::{Border, Element, Theme};

use dash_model::StatusTone;

use crate::theme::{BORDER_RADIUS_FULL, ConsoleColors};

/// Creates a status badge.
///
/// ```rust,ignore
/// let badge = status_badge(row.status_label(), row.status_tone());
/// ```
pub fn status_badge<'a, M: 'a>(label: impl Into<String>, tone: StatusTone) -> Element<'a, M> {
    container(
        text(label.into())
            .size(12)
            .style(move |theme: &Theme| text::Style {
                color: Some(theme.console().tone(theme, tone)),
            }),
    )
    .padding([4.0, 10.0])
    .style(move |theme: &Theme| container::Style {
        background: Some(theme.console().tone_light(tone).into()),
        border: Border {
            radius: BORDER_RADIUS_FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}
