//! Modal dialog overlay component.

use iced::widget::{button, center, column, container, opaque, row, space, stack, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use crate::theme::{
    ConsoleColors, MODAL_WIDTH_MD, SPACING_LG, SPACING_MD, SPACING_SM, button_danger,
    button_ghost, button_secondary, container_modal,
};

/// Creates a modal dialog overlay.
///
/// The modal appears centered on top of `base` with a backdrop. Clicking
/// the backdrop does not close it; use the close button or an action.
pub fn modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    title: &'a str,
    content: Element<'a, M>,
    on_close: Option<M>,
    actions: Vec<Element<'a, M>>,
) -> Element<'a, M> {
    let backdrop = container(column![])
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|theme: &Theme| container::Style {
            background: Some(theme.console().backdrop.into()),
            ..Default::default()
        });

    let header = row![
        text(title).size(18),
        space::horizontal(),
        button(lucide::x().size(20))
            .on_press_maybe(on_close)
            .padding([4.0, 8.0])
            .style(button_ghost),
    ]
    .align_y(Alignment::Center);

    let mut action_row = row![space::horizontal()].spacing(SPACING_SM);
    for action in actions {
        action_row = action_row.push(action);
    }

    let dialog = container(
        column![
            header,
            container(content).padding([SPACING_MD, 0.0]),
            action_row,
        ]
        .spacing(SPACING_MD),
    )
    .width(Length::Fixed(MODAL_WIDTH_MD))
    .padding(SPACING_LG)
    .style(container_modal);

    // Stack layers: base -> backdrop -> dialog
    stack![base, opaque(backdrop), center(dialog)].into()
}

/// Creates a destructive confirmation modal.
///
/// While `busy`, both buttons are inert.
pub fn confirm_modal<'a, M: Clone + 'a>(
    base: Element<'a, M>,
    title: &'a str,
    message: String,
    confirm_label: &'a str,
    on_confirm: M,
    on_cancel: M,
    busy: bool,
) -> Element<'a, M> {
    let cancel_btn: Element<'a, M> = button(text("Cancel"))
        .on_press_maybe((!busy).then(|| on_cancel.clone()))
        .padding([10.0, 20.0])
        .style(button_secondary)
        .into();

    let confirm_btn: Element<'a, M> = button(text(confirm_label))
        .on_press_maybe((!busy).then_some(on_confirm))
        .padding([10.0, 20.0])
        .style(button_danger)
        .into();

    modal(
        base,
        title,
        text(message).into(),
        (!busy).then_some(on_cancel),
        vec![cancel_btn, confirm_btn],
    )
}
