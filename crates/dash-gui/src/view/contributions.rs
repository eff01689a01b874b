//! Contributions screen.
//!
//! Sortable, filterable, paginated table. Each row has a detail panel and
//! a simulated search job with a progress bar.

use iced::widget::{button, column, container, progress_bar, row, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use dash_model::{Contribution, ContributionSortKey, Record};
use dash_table::{JobState, TableController, TableStatus};

use super::common::{
    view_empty, view_fetch_error, view_filter_bar, view_loading, view_screen_header,
    view_table_pagination,
};
use crate::component::{TableColumn, TableRow, data_table, status_badge};
use crate::message::{Message, TableMessage};
use crate::state::AppState;
use crate::theme::{
    ConsoleColors, JOB_PROGRESS_WIDTH, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS,
    button_ghost, button_secondary, progress_bar_primary, progress_bar_success,
};

const ACTIONS_WIDTH: f32 = 220.0;

/// Render the contributions screen.
pub fn view_contributions(state: &AppState) -> Element<'_, Message> {
    let table = &state.contributions;
    let refresh = Message::contributions(TableMessage::Refresh);

    let header = view_screen_header(
        "Contributions",
        "Search, filter and sort incoming contributions",
        table.is_loading(),
        refresh.clone(),
    );

    let body: Element<'_, Message> = match table.status() {
        TableStatus::Loading => view_loading("Loading contributions..."),
        TableStatus::Error(message) => view_fetch_error(message, refresh),
        TableStatus::Ready { busy } => column![
            view_filter_bar(table, "Search by name...", Message::contributions),
            view_table(table, busy),
            view_table_pagination(table, Message::contributions, busy),
        ]
        .spacing(SPACING_MD)
        .height(Length::Fill)
        .into(),
    };

    column![header, body]
        .spacing(SPACING_LG)
        .padding(SPACING_LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_table(table: &TableController<Contribution>, busy: bool) -> Element<'_, Message> {
    let rows = table.visible_rows();
    if rows.is_empty() {
        return view_empty("No contributions match the current filters.");
    }

    let sort = table.query().sort();
    let mut columns: Vec<TableColumn<Message>> = ContributionSortKey::ALL
        .iter()
        .map(|&key| {
            let portion = if key == ContributionSortKey::Name { 3 } else { 2 };
            TableColumn::portion(key.label(), portion).sortable(
                Message::contributions(TableMessage::SortBy(key)),
                (sort.key == key).then_some(sort.direction),
            )
        })
        .collect();
    columns.push(TableColumn::fixed("", ACTIONS_WIDTH));

    let detail_id = table.detail();
    let table_rows = rows
        .into_iter()
        .map(|c| {
            let open = detail_id == Some(c.id());
            TableRow::new(vec![
                text(c.name.clone()).size(13).into(),
                text(c.formatted_amount()).size(13).into(),
                text(c.count.to_string()).size(13).into(),
                status_badge(c.status_label(), c.status_tone()),
                text(c.created_label()).size(13).into(),
                view_actions(c, table.job(c.id()), open, busy),
            ])
            .with_detail(open.then(|| view_detail(c)))
        })
        .collect();

    data_table(columns, table_rows, busy)
}

fn view_actions(
    contribution: &Contribution,
    job: JobState,
    detail_open: bool,
    busy: bool,
) -> Element<'static, Message> {
    let id = contribution.id.clone();

    let detail_icon = if detail_open {
        lucide::chevron_up().size(14)
    } else {
        lucide::chevron_down().size(14)
    };
    let detail_button = button(detail_icon)
        .on_press_maybe((!busy).then(|| Message::contributions(TableMessage::DetailToggled(id.clone()))))
        .padding([4.0, 8.0])
        .style(button_ghost);

    let job_cell: Element<'static, Message> = match job {
        JobState::Idle => button(
            row![lucide::play().size(12), text("Search").size(12)]
                .spacing(SPACING_XS)
                .align_y(Alignment::Center),
        )
        .on_press_maybe((!busy).then(|| Message::contributions(TableMessage::JobStarted(id))))
        .padding([4.0, 10.0])
        .style(button_secondary)
        .into(),
        JobState::Running { progress } => row![
            progress_bar(0.0..=1.0, job.fraction())
                .length(JOB_PROGRESS_WIDTH)
                .girth(6.0)
                .style(progress_bar_primary),
            text(format!("{progress}%")).size(11),
        ]
        .spacing(SPACING_XS)
        .align_y(Alignment::Center)
        .into(),
        JobState::Done => row![
            progress_bar(0.0..=1.0, job.fraction())
                .length(JOB_PROGRESS_WIDTH)
                .girth(6.0)
                .style(progress_bar_success),
            lucide::circle_check().size(14).style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().success.base.color),
            }),
        ]
        .spacing(SPACING_XS)
        .align_y(Alignment::Center)
        .into(),
    };

    row![detail_button, job_cell]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center)
        .into()
}

fn view_detail(contribution: &Contribution) -> Element<'static, Message> {
    let muted = |theme: &Theme| text::Style {
        color: Some(theme.console().text_muted),
    };

    let description = if contribution.description.is_empty() {
        "No description.".to_string()
    } else {
        contribution.description.clone()
    };

    container(
        column![
            text(contribution.name.clone()).size(14),
            text(description).size(13),
            row![
                text(format!("ID {}", contribution.id)).size(12).style(muted),
                text(format!("Owner {}", contribution.owner_id))
                    .size(12)
                    .style(muted),
                text(format!("{} items", contribution.count))
                    .size(12)
                    .style(muted),
            ]
            .spacing(SPACING_MD),
        ]
        .spacing(SPACING_XS),
    )
    .width(Length::Fill)
    .into()
}
