//! Pieces shared by the record screens.

use iced::widget::{button, center, column, container, row, space, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use dash_model::{Record, status_label};
use dash_table::TableController;

use crate::component::{PageInfo, SearchFilterBar, pagination};
use crate::message::{Message, TableMessage};
use crate::theme::{ConsoleColors, SPACING_SM, SPACING_XL, button_primary, button_secondary};

/// Screen title with a refresh button.
pub fn view_screen_header<'a>(
    title: &'a str,
    subtitle: &'a str,
    loading: bool,
    on_refresh: Message,
) -> Element<'a, Message> {
    let refresh_label = if loading { "Loading..." } else { "Refresh" };
    let refresh = button(
        row![lucide::refresh_cw().size(14), text(refresh_label).size(13)]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center),
    )
    .on_press_maybe((!loading).then_some(on_refresh))
    .padding([6.0, 12.0])
    .style(button_secondary);

    row![
        column![
            text(title).size(22),
            text(subtitle).size(13).style(|theme: &Theme| text::Style {
                color: Some(theme.console().text_muted),
            }),
        ]
        .spacing(2.0),
        space::horizontal(),
        refresh,
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Search input with one chip per status present in the record set.
///
/// `wrap` lifts table messages into the screen's [`Message`] variant.
pub fn view_filter_bar<R>(
    table: &TableController<R>,
    placeholder: &str,
    wrap: fn(TableMessage<R>) -> Message,
) -> Element<'static, Message>
where
    R: Record + 'static,
{
    let selected = table.query().statuses();
    let mut bar = SearchFilterBar::new(table.search_text(), placeholder, move |value| {
        wrap(TableMessage::SearchChanged(value))
    })
    .on_submit(wrap(TableMessage::SearchSubmitted))
    .on_clear(wrap(TableMessage::SearchCleared))
    .on_clear_filters(wrap(TableMessage::StatusesCleared));

    for status in table.status_options() {
        bar = bar.filter(
            status_label(status),
            selected.contains(status),
            wrap(TableMessage::StatusToggled(status.clone())),
        );
    }

    let total = table.total_matching();
    let stats = match total {
        1 => "1 result".to_string(),
        n => format!("{n} results"),
    };
    bar.stats(stats).view()
}

/// Pagination bar for a table.
pub fn view_table_pagination<R>(
    table: &TableController<R>,
    wrap: fn(TableMessage<R>) -> Message,
    disabled: bool,
) -> Element<'static, Message>
where
    R: Record + 'static,
{
    let query = table.query();
    let info = PageInfo {
        page: query.page_index(),
        total_pages: table.total_pages(),
        total_rows: table.total_matching(),
        page_size: query.page_size(),
    };
    pagination(
        info,
        move |page| wrap(TableMessage::PageChanged(page)),
        move |size| wrap(TableMessage::PageSizeChanged(size)),
        disabled,
    )
}

/// Placeholder shown before the first fetch completes.
pub fn view_loading<'a>(label: &'a str) -> Element<'a, Message> {
    center(
        column![
            lucide::loader().size(24),
            text(label).size(14).style(|theme: &Theme| text::Style {
                color: Some(theme.console().text_muted),
            }),
        ]
        .spacing(SPACING_SM)
        .align_x(Alignment::Center),
    )
    .into()
}

/// Error presentation shown instead of the table when a fetch fails.
pub fn view_fetch_error<'a>(message: &'a str, on_retry: Message) -> Element<'a, Message> {
    let content = column![
        lucide::circle_alert().size(28).style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().danger.base.color),
        }),
        text("Could not load data").size(16),
        text(message).size(13).style(|theme: &Theme| text::Style {
            color: Some(theme.console().text_muted),
        }),
        button(text("Try again").size(13))
            .on_press(on_retry)
            .padding([8.0, 16.0])
            .style(button_primary),
    ]
    .spacing(SPACING_SM)
    .align_x(Alignment::Center);

    container(center(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(SPACING_XL)
        .into()
}

/// Muted text used for empty states.
pub fn view_empty<'a>(label: &'a str) -> Element<'a, Message> {
    center(text(label).size(14).style(|theme: &Theme| text::Style {
        color: Some(theme.console().text_muted),
    }))
    .into()
}
