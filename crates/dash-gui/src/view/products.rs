//! Products screen.
//!
//! Product cards with search, availability filter, sorting and paging.
//! The editor drawer opens to the right of the cards.

use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use dash_model::{Product, ProductSortKey, SortDirection};
use dash_table::{TableController, TableStatus};

use super::common::{
    view_empty, view_fetch_error, view_filter_bar, view_loading, view_screen_header,
    view_table_pagination,
};
use super::editor::{view_delete_confirmation, view_editor_drawer};
use crate::component::status_badge;
use crate::message::{EditorMessage, Message, TableMessage};
use crate::state::AppState;
use crate::theme::{
    CARD_WIDTH, ConsoleColors, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, button_ghost,
    button_secondary, container_card,
};

const CARDS_PER_ROW: usize = 3;

/// Render the products screen, with the editor drawer when it is open.
pub fn view_products(state: &AppState) -> Element<'_, Message> {
    let table = &state.products;
    let refresh = Message::products(TableMessage::Refresh);

    let header = view_screen_header(
        "Products",
        "Browse the catalogue and edit the products you created",
        table.is_loading(),
        refresh.clone(),
    );

    let body: Element<'_, Message> = match table.status() {
        TableStatus::Loading => view_loading("Loading products..."),
        TableStatus::Error(message) => view_fetch_error(message, refresh),
        TableStatus::Ready { busy } => column![
            view_filter_bar(table, "Search by title...", Message::products),
            view_sort_bar(table, busy),
            view_cards(table, busy),
            view_table_pagination(table, Message::products, busy),
        ]
        .spacing(SPACING_MD)
        .height(Length::Fill)
        .into(),
    };

    let content = container(
        column![header, body]
            .spacing(SPACING_LG)
            .height(Length::Fill),
    )
    .padding(SPACING_LG)
    .width(Length::Fill)
    .height(Length::Fill);

    let Some(session) = state.drawer.session() else {
        return content.into();
    };

    let base: Element<'_, Message> = row![content, view_editor_drawer(session)]
        .height(Length::Fill)
        .into();
    view_delete_confirmation(base, session)
}

fn view_sort_bar(table: &TableController<Product>, busy: bool) -> Element<'static, Message> {
    let sort = table.query().sort();

    let mut bar = row![text("Sort by").size(12).style(|theme: &Theme| text::Style {
        color: Some(theme.console().text_muted),
    })]
    .spacing(SPACING_XS)
    .align_y(Alignment::Center);

    for key in ProductSortKey::ALL {
        let active = sort.key == key;
        let label: Element<'static, Message> = match (active, sort.direction) {
            (true, SortDirection::Ascending) => row![text(key.label()).size(12), lucide::arrow_up().size(12)]
                .spacing(SPACING_XS)
                .align_y(Alignment::Center)
                .into(),
            (true, SortDirection::Descending) => row![text(key.label()).size(12), lucide::arrow_down().size(12)]
                .spacing(SPACING_XS)
                .align_y(Alignment::Center)
                .into(),
            (false, _) => text(key.label()).size(12).into(),
        };
        bar = bar.push(
            button(label)
                .on_press_maybe((!busy).then(|| Message::products(TableMessage::SortBy(key))))
                .padding([4.0, 10.0])
                .style(if active { button_secondary } else { button_ghost }),
        );
    }

    bar.into()
}

fn view_cards(table: &TableController<Product>, busy: bool) -> Element<'static, Message> {
    let products = table.visible_rows();
    if products.is_empty() {
        return view_empty("No products match the current filters.");
    }

    let mut grid = column![].spacing(SPACING_MD);
    for chunk in products.chunks(CARDS_PER_ROW) {
        let mut line = row![].spacing(SPACING_MD);
        for product in chunk {
            line = line.push(view_card(product, busy));
        }
        grid = grid.push(line);
    }

    scrollable(grid).height(Length::Fill).into()
}

fn view_card(product: &Product, busy: bool) -> Element<'static, Message> {
    let muted = |theme: &Theme| text::Style {
        color: Some(theme.console().text_muted),
    };

    let category = match product.category_title() {
        "" => "Uncategorised".to_string(),
        title => title.to_string(),
    };

    let edit_button = button(
        row![lucide::pencil().size(12), text("Edit").size(12)]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .on_press_maybe((!busy).then(|| Message::editor(EditorMessage::Open(product.id.clone()))))
    .padding([4.0, 10.0])
    .style(button_secondary);

    container(
        column![
            row![
                text(product.title.clone()).size(15).width(Length::Fill),
                status_badge(product.availability_label(), product.availability_tone()),
            ]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center),
            text(category).size(12).style(muted),
            text(product.description.clone()).size(13),
            row![
                text(product.formatted_price()).size(16),
                text(format!("{} in stock", product.quantity))
                    .size(12)
                    .style(muted)
                    .width(Length::Fill),
                edit_button,
            ]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center),
        ]
        .spacing(SPACING_SM),
    )
    .width(Length::Fixed(CARD_WIDTH))
    .padding(SPACING_MD)
    .style(container_card)
    .into()
}
