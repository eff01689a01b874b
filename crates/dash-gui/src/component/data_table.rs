//! Data table component.
//!
//! Renders one page of rows under sortable column headers. Paging lives in
//! [`pagination`](super::pagination) so screens can place it freely.

use iced::widget::{button, column, container, row, rule, scrollable, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use dash_model::SortDirection;

use crate::theme::{
    ConsoleColors, SPACING_XS, TABLE_CELL_PADDING_X, TABLE_CELL_PADDING_Y, button_ghost,
};

// =============================================================================
// TABLE COLUMN
// =============================================================================

/// Column definition for the data table.
pub struct TableColumn<M> {
    pub header: String,
    pub width: Length,
    /// Message sent when the header is clicked; `None` for unsortable columns.
    pub on_sort: Option<M>,
    /// Direction shown next to the header when this column is the sort key.
    pub sorted: Option<SortDirection>,
}

impl<M> TableColumn<M> {
    /// Column with fixed width.
    pub fn fixed(header: impl Into<String>, width: f32) -> Self {
        Self::new(header, Length::Fixed(width))
    }

    /// Column that fills available space.
    pub fn fill(header: impl Into<String>) -> Self {
        Self::new(header, Length::Fill)
    }

    /// Column with proportional width.
    pub fn portion(header: impl Into<String>, portion: u16) -> Self {
        Self::new(header, Length::FillPortion(portion))
    }

    fn new(header: impl Into<String>, width: Length) -> Self {
        Self {
            header: header.into(),
            width,
            on_sort: None,
            sorted: None,
        }
    }

    /// Make the header clickable.
    pub fn sortable(mut self, on_sort: M, sorted: Option<SortDirection>) -> Self {
        self.on_sort = Some(on_sort);
        self.sorted = sorted;
        self
    }
}

// =============================================================================
// TABLE ROW
// =============================================================================

/// One rendered row: a cell per column plus an optional detail panel shown
/// underneath.
pub struct TableRow<'a, M> {
    pub cells: Vec<Element<'a, M>>,
    pub detail: Option<Element<'a, M>>,
    pub highlighted: bool,
}

impl<'a, M> TableRow<'a, M> {
    pub fn new(cells: Vec<Element<'a, M>>) -> Self {
        Self {
            cells,
            detail: None,
            highlighted: false,
        }
    }

    /// Show `detail` under the row and highlight it.
    pub fn with_detail(mut self, detail: Option<Element<'a, M>>) -> Self {
        self.highlighted = detail.is_some();
        self.detail = detail;
        self
    }
}

// =============================================================================
// DATA TABLE
// =============================================================================

/// Creates a table.
///
/// While `disabled`, headers stop reacting to clicks and rows are dimmed;
/// cells are responsible for disabling their own controls.
///
/// ```rust,ignore
/// let columns = vec![
///     TableColumn::fill("Name").sortable(Message::SortBy(Key::Name), Some(SortDirection::Ascending)),
///     TableColumn::fixed("Status", 120.0),
/// ];
/// let table = data_table(columns, rows, table.is_loading());
/// ```
pub fn data_table<'a, M: Clone + 'a>(
    columns: Vec<TableColumn<M>>,
    rows: Vec<TableRow<'a, M>>,
    disabled: bool,
) -> Element<'a, M> {
    let widths: Vec<Length> = columns.iter().map(|c| c.width).collect();

    // Header row
    let mut header = row![].spacing(0);
    for col in columns {
        header = header.push(header_cell(col, disabled));
    }

    // Data rows
    let mut data_rows = column![].spacing(0);
    for (row_idx, table_row) in rows.into_iter().enumerate() {
        let is_even = row_idx % 2 == 0;
        let highlighted = table_row.highlighted;

        let mut cells = row![].spacing(0).align_y(Alignment::Center);
        for (col_idx, cell) in table_row.cells.into_iter().enumerate() {
            let width = widths.get(col_idx).copied().unwrap_or(Length::Fill);
            cells = cells.push(
                container(cell)
                    .width(width)
                    .padding([TABLE_CELL_PADDING_Y, TABLE_CELL_PADDING_X]),
            );
        }

        data_rows = data_rows.push(container(cells).width(Length::Fill).style(
            move |theme: &Theme| {
                let console = theme.console();
                let background = if highlighted {
                    console.background_selected
                } else if is_even {
                    console.background_elevated
                } else {
                    theme.extended_palette().background.base.color
                };
                container::Style {
                    background: Some(background.into()),
                    text_color: Some(if disabled {
                        console.text_disabled
                    } else {
                        console.text_secondary
                    }),
                    ..Default::default()
                }
            },
        ));

        if let Some(detail) = table_row.detail {
            data_rows = data_rows.push(
                container(detail)
                    .width(Length::Fill)
                    .padding([TABLE_CELL_PADDING_Y * 2.0, TABLE_CELL_PADDING_X * 2.0])
                    .style(|theme: &Theme| container::Style {
                        background: Some(theme.console().background_secondary.into()),
                        ..Default::default()
                    }),
            );
        }
    }

    column![
        header,
        divider(),
        scrollable(data_rows).height(Length::Fill),
        divider(),
    ]
    .spacing(0)
    .into()
}

fn header_cell<'a, M: Clone + 'a>(col: TableColumn<M>, disabled: bool) -> Element<'a, M> {
    let label = text(col.header)
        .size(12)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.console().text_muted),
        });

    let content: Element<'a, M> = match col.on_sort {
        Some(on_sort) => {
            let indicator: Element<'a, M> = match col.sorted {
                Some(SortDirection::Ascending) => lucide::arrow_up().size(12).into(),
                Some(SortDirection::Descending) => lucide::arrow_down().size(12).into(),
                None => text("").size(12).into(),
            };
            button(row![label, indicator].spacing(SPACING_XS).align_y(Alignment::Center))
                .on_press_maybe((!disabled).then_some(on_sort))
                .padding(0)
                .style(button_ghost)
                .into()
        }
        None => label.into(),
    };

    container(content)
        .width(col.width)
        .padding([TABLE_CELL_PADDING_Y, TABLE_CELL_PADDING_X])
        .style(|theme: &Theme| container::Style {
            background: Some(theme.console().background_secondary.into()),
            ..Default::default()
        })
        .into()
}

fn divider<'a, M: 'a>() -> Element<'a, M> {
    rule::horizontal(1)
        .style(|theme: &Theme| rule::Style {
            color: theme.console().border_default,
            radius: 0.0.into(),
            fill_mode: rule::FillMode::Full,
            snap: true,
        })
        .into()
}
