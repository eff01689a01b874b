//! Pagination bar: previous/next buttons, page summary and page size picker.

use iced::widget::{button, container, pick_list, row, space, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use dash_model::PageSize;

use crate::theme::{ConsoleColors, SPACING_SM, button_ghost};

/// Paging position, 1-based like the query state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page: usize,
    pub total_pages: usize,
    pub total_rows: usize,
    pub page_size: PageSize,
}

impl PageInfo {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// "Showing 11-20 of 45", or "No results".
    pub fn summary(&self) -> String {
        if self.total_rows == 0 {
            return "No results".to_string();
        }
        let first = (self.page.saturating_sub(1)) * self.page_size.get() + 1;
        let last = (self.page * self.page_size.get()).min(self.total_rows);
        if first > self.total_rows {
            return format!("Page {} of {}", self.page, self.total_pages);
        }
        format!("Showing {first}-{last} of {}", self.total_rows)
    }
}

/// Creates the pagination bar.
///
/// All controls are inert while `disabled`.
pub fn pagination<'a, M: Clone + 'a>(
    info: PageInfo,
    on_page: impl Fn(usize) -> M + 'a,
    on_page_size: impl Fn(PageSize) -> M + 'a,
    disabled: bool,
) -> Element<'a, M> {
    let prev_enabled = !disabled && info.has_previous();
    let next_enabled = !disabled && info.has_next();

    let prev_button = button(lucide::chevron_left().size(14))
        .on_press_maybe(prev_enabled.then(|| on_page(info.page - 1)))
        .padding([4.0, 10.0])
        .style(button_ghost);

    let next_button = button(lucide::chevron_right().size(14))
        .on_press_maybe(next_enabled.then(|| on_page(info.page + 1)))
        .padding([4.0, 10.0])
        .style(button_ghost);

    let page_info = text(format!(
        "Page {} of {}",
        info.page,
        info.total_pages.max(1)
    ))
    .size(12)
    .style(|theme: &Theme| text::Style {
        color: Some(theme.console().text_muted),
    });

    let summary = text(info.summary())
        .size(12)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.console().text_muted),
        });

    let size_picker: Element<'a, M> = if disabled {
        text(info.page_size.to_string()).size(12).into()
    } else {
        pick_list(PageSize::ALL.to_vec(), Some(info.page_size), on_page_size)
            .text_size(12)
            .padding([4.0, 8.0])
            .into()
    };

    container(
        row![
            summary,
            space::horizontal(),
            prev_button,
            page_info,
            next_button,
            size_picker,
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(SPACING_SM)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(page: usize, total_rows: usize) -> PageInfo {
        PageInfo {
            page,
            total_pages: total_rows.div_ceil(10).max(1),
            total_rows,
            page_size: PageSize::Ten,
        }
    }

    #[test]
    fn test_summary() {
        assert_eq!(info(1, 0).summary(), "No results");
        assert_eq!(info(1, 45).summary(), "Showing 1-10 of 45");
        assert_eq!(info(5, 45).summary(), "Showing 41-45 of 45");
    }

    #[test]
    fn test_navigation_bounds() {
        assert!(!info(1, 45).has_previous());
        assert!(info(1, 45).has_next());
        assert!(info(5, 45).has_previous());
        assert!(!info(5, 45).has_next());
        assert!(!info(1, 0).has_next());
    }
}
