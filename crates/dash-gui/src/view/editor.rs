//! Product editor drawer.

use iced::widget::{button, column, container, row, rule, scrollable, space, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use dash_editor::{CategoryOptions, EditorSession, Phase};
use dash_model::FormField;

use crate::component::{confirm_modal, form_field, select_field};
use crate::message::{EditorMessage, Message};
use crate::theme::{
    ConsoleColors, DRAWER_WIDTH, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, button_danger,
    button_ghost, button_primary, container_drawer, container_surface,
};

/// Drawer panel for the open session.
pub fn view_editor_drawer(session: &EditorSession) -> Element<'_, Message> {
    let header = row![
        column![
            text("Edit product").size(18),
            text(session.product().title.clone())
                .size(12)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.console().text_muted),
                }),
        ]
        .spacing(2.0),
        space::horizontal(),
        button(lucide::x().size(18))
            .on_press(Message::editor(EditorMessage::Close))
            .padding([4.0, 8.0])
            .style(button_ghost),
    ]
    .align_y(Alignment::Center);

    let mut form = column![].spacing(SPACING_MD);

    if let Some(denial) = session.submit_denial() {
        form = form.push(
            container(
                row![lucide::lock().size(14), text(denial.message()).size(13)]
                    .spacing(SPACING_SM)
                    .align_y(Alignment::Center),
            )
            .width(Length::Fill)
            .padding(SPACING_SM)
            .style(container_surface),
        );
    }

    let editable = session.is_editable() && session.submit_denial().is_none();
    for field in FormField::ALL {
        let error = session.field_error(field).map(ToString::to_string);
        let input = if field == FormField::Category {
            view_category_field(session, editable, error)
        } else {
            form_field(
                field.label(),
                session.form().value(field),
                placeholder(field),
                editable.then_some(move |value| {
                    Message::editor(EditorMessage::FieldChanged(field, value))
                }),
                error,
            )
        };
        form = form.push(input);
    }

    container(
        column![
            header,
            rule::horizontal(1),
            scrollable(form).height(Length::Fill),
            view_actions(session),
        ]
        .spacing(SPACING_MD),
    )
    .width(Length::Fixed(DRAWER_WIDTH))
    .height(Length::Fill)
    .padding(SPACING_LG)
    .style(container_drawer)
    .into()
}

/// Overlay the delete confirmation on `base` while it is pending.
pub fn view_delete_confirmation<'a>(
    base: Element<'a, Message>,
    session: &'a EditorSession,
) -> Element<'a, Message> {
    let busy = match session.phase() {
        Phase::ConfirmingDelete => false,
        Phase::Deleting => true,
        Phase::Editing | Phase::Submitting => return base,
    };

    confirm_modal(
        base,
        "Delete product?",
        format!(
            "\"{}\" will be removed permanently. This cannot be undone.",
            session.product().title
        ),
        if busy { "Deleting..." } else { "Delete" },
        Message::editor(EditorMessage::DeleteConfirmed),
        Message::editor(EditorMessage::DeleteCancelled),
        busy,
    )
}

fn view_category_field(
    session: &EditorSession,
    editable: bool,
    error: Option<String>,
) -> Element<'_, Message> {
    let categories = session.categories();
    let hint = match categories {
        CategoryOptions::Loading => "Loading categories...",
        CategoryOptions::Ready(_) => "Select a category",
        CategoryOptions::Unavailable => "Categories unavailable",
    };

    select_field(
        FormField::Category.label(),
        categories.as_slice(),
        session.selected_category().cloned(),
        hint,
        (editable && !categories.is_loading())
            .then_some(|category| Message::editor(EditorMessage::CategorySelected(category))),
        error,
    )
}

fn view_actions(session: &EditorSession) -> Element<'_, Message> {
    let submit_label = if session.phase() == Phase::Submitting {
        "Saving..."
    } else {
        "Save changes"
    };

    let delete_button = button(
        row![lucide::trash().size(14), text("Delete").size(13)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .on_press_maybe(
        session
            .can_delete()
            .then(|| Message::editor(EditorMessage::DeleteRequested)),
    )
    .padding([8.0, 14.0])
    .style(button_danger);

    let submit_button = button(text(submit_label).size(13))
        .on_press_maybe(
            session
                .can_submit()
                .then(|| Message::editor(EditorMessage::Submit)),
        )
        .padding([8.0, 16.0])
        .style(button_primary);

    row![delete_button, space::horizontal(), submit_button]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center)
        .into()
}

fn placeholder(field: FormField) -> &'static str {
    match field {
        FormField::Title => "Product title",
        FormField::Description => "Short description",
        FormField::Price => "0.00",
        FormField::Quantity => "0",
        FormField::Category => "Select a category",
    }
}
