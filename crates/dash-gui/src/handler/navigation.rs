//! Navigation and display preference handlers.

use iced::Task;

use super::table::{load_contributions, load_products};
use crate::component::ToastState;
use crate::message::Message;
use crate::state::{AppState, View};

/// Switch screens.
///
/// The screen being left is torn down (pending search, running jobs and
/// the open detail panel go away, as does the editor drawer) and the
/// screen being entered refetches its records.
pub fn navigate(state: &mut AppState, view: View) -> Task<Message> {
    if state.view == view {
        return Task::none();
    }
    tracing::debug!(from = ?state.view, to = ?view, "Navigate");

    match state.view {
        View::Contributions => state.contributions.reset(),
        View::Products => {
            state.products.reset();
            state.drawer.close();
        }
    }
    state.view = view;

    match view {
        View::Contributions => load_contributions(state),
        View::Products => load_products(state),
    }
}

/// Flip between light and dark mode and persist the choice.
pub fn toggle_theme(state: &mut AppState) -> Task<Message> {
    let display = &mut state.settings.display;
    display.theme_mode = display.theme_mode.toggled();

    if let Err(err) = state.settings.save() {
        tracing::warn!(%err, "Failed to save settings");
        let message = match err.suggestion() {
            Some(hint) => format!("{err}. {hint}"),
            None => err.to_string(),
        };
        state.toast.show(ToastState::warning("Settings not saved", message));
    }
    Task::none()
}
