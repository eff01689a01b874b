//! Top navigation bar.

use iced::widget::{button, container, row, space, text};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use crate::message::Message;
use crate::state::{AppState, View};
use crate::theme::{NAV_HEIGHT, SPACING_LG, SPACING_SM, SPACING_XS, button_ghost, button_nav, container_nav};

pub fn view_nav(state: &AppState) -> Element<'_, Message> {
    let mut tabs = row![].spacing(SPACING_XS).align_y(Alignment::Center);
    for view in View::ALL {
        let icon = match view {
            View::Contributions => lucide::list().size(14),
            View::Products => lucide::package().size(14),
        };
        tabs = tabs.push(
            button(
                row![icon, text(view.label()).size(13)]
                    .spacing(SPACING_SM)
                    .align_y(Alignment::Center),
            )
            .on_press(Message::Navigate(view))
            .padding([6.0, 12.0])
            .style(button_nav(state.view == view)),
        );
    }

    let theme_mode = state.settings.display.theme_mode;
    let theme_icon = if theme_mode.is_dark() {
        lucide::sun().size(16)
    } else {
        lucide::moon().size(16)
    };

    let user = if state.auth.user_id.is_empty() {
        "Not signed in".to_string()
    } else {
        state.auth.user_id.clone()
    };

    container(
        row![
            text("Dashboard").size(16),
            tabs,
            space::horizontal(),
            row![lucide::user().size(14), text(user).size(12)]
                .spacing(SPACING_XS)
                .align_y(Alignment::Center),
            button(theme_icon)
                .on_press(Message::ToggleTheme)
                .padding([6.0, 8.0])
                .style(button_ghost),
        ]
        .spacing(SPACING_LG)
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(NAV_HEIGHT))
    .padding([0.0, SPACING_LG])
    .align_y(Alignment::Center)
    .style(container_nav)
    .into()
}
