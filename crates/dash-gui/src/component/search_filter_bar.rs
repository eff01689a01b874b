//! Search and filter bar component.
//!
//! A search input with status filter chips and an optional result count.
//! Used by both record screens.

use iced::widget::{Space, button, column, row, text, text_input};
use iced::{Alignment, Border, Element, Length, Theme};
use iced_fonts::lucide;

use crate::theme::{
    BORDER_RADIUS_FULL, ConsoleColors, SPACING_SM, SPACING_XS, button_ghost, button_secondary,
    text_input_default,
};

// =============================================================================
// FILTER TOGGLE
// =============================================================================

/// A single filter chip with active/inactive state.
///
/// ```ignore
/// FilterToggle::new("Pending", is_active, Message::ToggleStatus("pending".into()))
///     .view()
/// ```
pub struct FilterToggle<M> {
    label: String,
    active: bool,
    on_toggle: M,
}

impl<M: Clone + 'static> FilterToggle<M> {
    pub fn new(label: impl Into<String>, active: bool, on_toggle: M) -> Self {
        Self {
            label: label.into(),
            active,
            on_toggle,
        }
    }

    pub fn view(self) -> Element<'static, M> {
        let active = self.active;

        let label: Element<'static, M> = if active {
            row![lucide::check().size(11), text(self.label).size(12)]
                .spacing(SPACING_XS)
                .align_y(Alignment::Center)
                .into()
        } else {
            text(self.label).size(12).into()
        };

        button(label)
            .on_press(self.on_toggle)
            .padding([4.0, 10.0])
            .style(move |theme: &Theme, status| {
                let mut style = button_secondary(theme, status);
                style.border.radius = BORDER_RADIUS_FULL.into();
                if active {
                    let primary = theme.extended_palette().primary.base.color;
                    style.background = Some(theme.console().accent_primary_light.into());
                    style.text_color = primary;
                    style.border = Border {
                        radius: BORDER_RADIUS_FULL.into(),
                        color: primary,
                        width: 1.0,
                    };
                }
                style
            })
            .into()
    }
}

// =============================================================================
// SEARCH FILTER BAR
// =============================================================================

/// Search input with filter chips and optional stats.
///
/// ```ignore
/// let wrap = Message::contributions;
/// SearchFilterBar::new(table.search_text(), "Search by name...", move |value| {
///     wrap(TableMessage::SearchChanged(value))
/// })
/// .on_submit(wrap(TableMessage::SearchSubmitted))
/// .on_clear(wrap(TableMessage::SearchCleared))
/// .filter("Pending", true, wrap(TableMessage::StatusToggled("pending".into())))
/// .stats("12 results")
/// .view()
/// ```
pub struct SearchFilterBar<M> {
    search_value: String,
    placeholder: String,
    on_search: Box<dyn Fn(String) -> M>,
    on_submit: Option<M>,
    on_clear: Option<M>,
    filters: Vec<(String, bool, M)>,
    on_clear_filters: Option<M>,
    stats_text: Option<String>,
}

impl<M: Clone + 'static> SearchFilterBar<M> {
    pub fn new(
        search_value: &str,
        placeholder: impl Into<String>,
        on_search: impl Fn(String) -> M + 'static,
    ) -> Self {
        Self {
            search_value: search_value.to_string(),
            placeholder: placeholder.into(),
            on_search: Box::new(on_search),
            on_submit: None,
            on_clear: None,
            filters: Vec::new(),
            on_clear_filters: None,
            stats_text: None,
        }
    }

    /// Message sent when Enter is pressed in the input.
    pub fn on_submit(mut self, msg: M) -> Self {
        self.on_submit = Some(msg);
        self
    }

    /// Message for the clear button shown while the input is not empty.
    pub fn on_clear(mut self, msg: M) -> Self {
        self.on_clear = Some(msg);
        self
    }

    /// Add a filter chip.
    pub fn filter(mut self, label: impl Into<String>, active: bool, on_toggle: M) -> Self {
        self.filters.push((label.into(), active, on_toggle));
        self
    }

    /// Message for the "clear filters" link shown while any chip is active.
    pub fn on_clear_filters(mut self, msg: M) -> Self {
        self.on_clear_filters = Some(msg);
        self
    }

    /// Add stats text below the filters.
    pub fn stats(mut self, text: impl Into<String>) -> Self {
        self.stats_text = Some(text.into());
        self
    }

    pub fn view(self) -> Element<'static, M> {
        let mut search_input = text_input(&self.placeholder, &self.search_value)
            .on_input(self.on_search)
            .padding([8.0, 12.0])
            .size(13)
            .width(Length::Fill)
            .style(text_input_default);
        if let Some(msg) = self.on_submit {
            search_input = search_input.on_submit(msg);
        }

        let mut search_row = row![lucide::search().size(14), search_input]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center);
        if let Some(msg) = self.on_clear.filter(|_| !self.search_value.is_empty()) {
            search_row = search_row.push(
                button(lucide::x().size(14))
                    .on_press(msg)
                    .padding([6.0, 8.0])
                    .style(button_ghost),
            );
        }

        let any_active = self.filters.iter().any(|(_, active, _)| *active);
        let mut filters_row = row(self
            .filters
            .into_iter()
            .map(|(label, active, on_toggle)| FilterToggle::new(label, active, on_toggle).view()))
        .spacing(SPACING_XS)
        .align_y(Alignment::Center);
        if let Some(msg) = self.on_clear_filters.filter(|_| any_active) {
            filters_row = filters_row.push(
                button(text("Clear filters").size(12))
                    .on_press(msg)
                    .padding([4.0, 8.0])
                    .style(button_ghost),
            );
        }

        let mut content = column![search_row, filters_row].spacing(SPACING_SM);

        if let Some(stats_text) = self.stats_text {
            content = content.push(Space::new().height(SPACING_XS));
            content = content.push(text(stats_text).size(12).style(|theme: &Theme| {
                text::Style {
                    color: Some(theme.console().text_muted),
                }
            }));
        }

        content.into()
    }
}
