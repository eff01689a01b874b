//! Form field components.
//!
//! Labelled inputs with inline validation messages.

use std::fmt::Display;

use iced::widget::{column, container, pick_list, text, text_input};
use iced::{Element, Length, Theme};

use crate::theme::{ConsoleColors, SPACING_XS, text_input_default, text_input_error};

/// Creates a text field with label and optional error message.
///
/// Passing `None` for `on_change` renders the input read-only.
///
/// ```rust,ignore
/// let field = form_field(
///     "Title",
///     &form.title,
///     "Product title",
///     editable.then_some(|v| Message::FieldChanged(FormField::Title, v)),
///     error.as_deref(),
/// );
/// ```
pub fn form_field<'a, M: Clone + 'a>(
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    on_change: Option<impl Fn(String) -> M + 'a>,
    error: Option<String>,
) -> Element<'a, M> {
    let has_error = error.is_some();

    let mut input = text_input(placeholder, value)
        .padding(10.0)
        .width(Length::Fill)
        .style(if has_error {
            text_input_error
        } else {
            text_input_default
        });
    if let Some(on_change) = on_change {
        input = input.on_input(on_change);
    }

    labelled(label, input.into(), error)
}

/// Creates a select field with label and optional error message.
///
/// `hint` replaces the picker when there is nothing to pick from (e.g.
/// options still loading or unavailable).
pub fn select_field<'a, T, M>(
    label: &'a str,
    options: &'a [T],
    selected: Option<T>,
    placeholder: &'a str,
    on_select: Option<impl Fn(T) -> M + 'a>,
    error: Option<String>,
) -> Element<'a, M>
where
    T: Display + PartialEq + Clone + 'a,
    M: Clone + 'a,
{
    let input: Element<'a, M> = match on_select {
        Some(on_select) if !options.is_empty() => pick_list(options, selected, on_select)
            .placeholder(placeholder)
            .padding(10.0)
            .width(Length::Fill)
            .into(),
        _ => container(
            text(
                selected
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| placeholder.to_string()),
            )
            .size(14)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.console().text_disabled),
            }),
        )
        .padding(10.0)
        .width(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.console().background_secondary.into()),
            border: iced::Border {
                radius: crate::theme::BORDER_RADIUS_SM.into(),
                width: 1.0,
                color: theme.console().border_default,
            },
            ..Default::default()
        })
        .into(),
    };

    labelled(label, input, error)
}

fn labelled<'a, M: 'a>(
    label: &'a str,
    input: Element<'a, M>,
    error: Option<String>,
) -> Element<'a, M> {
    let label_text = text(label).size(13).style(|theme: &Theme| text::Style {
        color: Some(theme.console().text_muted),
    });

    let mut content = column![label_text, input].spacing(SPACING_XS);

    if let Some(err) = error {
        let error_text = text(err).size(12).style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().danger.base.color),
        });
        content = content.push(error_text);
    }

    container(content).width(Length::Fill).into()
}
