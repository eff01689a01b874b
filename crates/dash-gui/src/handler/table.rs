//! Table screen message handlers.
//!
//! Handles:
//! - Fetching and refreshing the record sets
//! - Search, status filter, sort and paging inputs
//! - Detail panels and per-row jobs

use iced::Task;

use dash_model::{Contribution, Product, Record};
use dash_table::TableController;

use super::MessageHandler;
use crate::message::{Message, TableMessage};
use crate::service;
use crate::state::AppState;

/// Handler for the contributions table.
pub struct ContributionsHandler;

impl MessageHandler<TableMessage<Contribution>> for ContributionsHandler {
    fn handle(&self, state: &mut AppState, msg: TableMessage<Contribution>) -> Task<Message> {
        if apply(&mut state.contributions, msg) {
            load_contributions(state)
        } else {
            Task::none()
        }
    }
}

/// Handler for the product catalogue.
pub struct ProductsHandler;

impl MessageHandler<TableMessage<Product>> for ProductsHandler {
    fn handle(&self, state: &mut AppState, msg: TableMessage<Product>) -> Task<Message> {
        if apply(&mut state.products, msg) {
            load_products(state)
        } else {
            Task::none()
        }
    }
}

/// Start a contributions fetch.
///
/// Without an API client the fetch fails immediately with the reason.
pub fn load_contributions(state: &mut AppState) -> Task<Message> {
    state.contributions.begin_fetch();
    match state.data_source() {
        Ok(source) => Task::perform(service::fetch_contributions(source), |result| {
            Message::contributions(TableMessage::Loaded(result))
        }),
        Err(err) => {
            state.contributions.finish_fetch(Err(err.to_string()));
            Task::none()
        }
    }
}

/// Start a product catalogue fetch.
pub fn load_products(state: &mut AppState) -> Task<Message> {
    state.products.begin_fetch();
    match state.data_source() {
        Ok(source) => Task::perform(service::fetch_products(source), |result| {
            Message::products(TableMessage::Loaded(result))
        }),
        Err(err) => {
            state.products.finish_fetch(Err(err.to_string()));
            Task::none()
        }
    }
}

/// Apply a table message. Returns whether a fetch was requested.
fn apply<R: Record>(table: &mut TableController<R>, msg: TableMessage<R>) -> bool {
    match msg {
        TableMessage::Refresh => return true,

        TableMessage::Loaded(result) => table.finish_fetch(result),

        TableMessage::SearchChanged(text) => table.search_input(text),

        TableMessage::SearchSubmitted => table.submit_search(),

        TableMessage::SearchCleared => table.clear_search(),

        TableMessage::SearchTick => {
            table.poll_search();
        }

        TableMessage::StatusToggled(status) => table.toggle_status(&status),

        TableMessage::StatusesCleared => table.clear_statuses(),

        TableMessage::SortBy(key) => table.sort_by(key),

        TableMessage::PageChanged(page) => table.go_to_page(page),

        TableMessage::PageSizeChanged(size) => table.set_page_size(size),

        TableMessage::DetailToggled(id) => table.toggle_detail(&id),

        TableMessage::JobStarted(id) => {
            if !table.start_job(&id) {
                tracing::debug!(row = %id, "Job already started");
            }
        }

        TableMessage::JobTick => {
            for id in table.tick_jobs() {
                tracing::info!(row = %id, "Row search finished");
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use dash_api::ApiConfig;
    use dash_model::{ContributionSortKey, RecordId, SortDirection};
    use dash_table::{JobState, TableStatus};

    use super::*;
    use crate::state::Settings;

    fn offline_state() -> AppState {
        AppState::with_settings(Settings {
            api: ApiConfig::with_base_url("not-a-url"),
            ..Settings::default()
        })
    }

    fn contribution(id: u64, name: &str, status: &str) -> Contribution {
        Contribution {
            id: RecordId::from(id),
            name: name.to_string(),
            status: status.to_string(),
            ..Contribution::default()
        }
    }

    fn loaded_state() -> AppState {
        let mut state = offline_state();
        let rows = vec![
            contribution(1, "Ada", "paid"),
            contribution(2, "Grace", "pending"),
            contribution(3, "Linus", "paid"),
        ];
        let _ = ContributionsHandler.handle(&mut state, TableMessage::Loaded(Ok(rows)));
        state
    }

    #[test]
    fn test_refresh_without_api_reports_error() {
        let mut state = offline_state();
        let _ = ContributionsHandler.handle(&mut state, TableMessage::Refresh);

        assert!(matches!(state.contributions.status(), TableStatus::Error(msg) if msg.contains("API unavailable")));
    }

    #[test]
    fn test_filters_and_sort_flow_through() {
        let mut state = loaded_state();
        assert_eq!(state.contributions.total_matching(), 3);

        let _ = ContributionsHandler.handle(&mut state, TableMessage::StatusToggled("paid".to_string()));
        assert_eq!(state.contributions.total_matching(), 2);

        let _ = ContributionsHandler.handle(&mut state, TableMessage::SortBy(ContributionSortKey::Name));
        assert_eq!(state.contributions.query().sort().direction, SortDirection::Descending);
        let names: Vec<_> = state
            .contributions
            .visible_rows()
            .iter()
            .map(|c| c.name.clone())
            .collect();
        assert_eq!(names, ["Linus", "Ada"]);

        let _ = ContributionsHandler.handle(&mut state, TableMessage::StatusesCleared);
        assert_eq!(state.contributions.total_matching(), 3);
    }

    #[test]
    fn test_submitted_search_applies_immediately() {
        let mut state = loaded_state();

        let _ = ContributionsHandler.handle(&mut state, TableMessage::SearchChanged("gra".to_string()));
        assert_eq!(state.contributions.total_matching(), 3);
        assert!(state.contributions.needs_search_poll());

        let _ = ContributionsHandler.handle(&mut state, TableMessage::SearchSubmitted);
        assert_eq!(state.contributions.total_matching(), 1);
        assert!(!state.contributions.needs_search_poll());

        let _ = ContributionsHandler.handle(&mut state, TableMessage::SearchCleared);
        assert_eq!(state.contributions.total_matching(), 3);
        assert_eq!(state.contributions.search_text(), "");
    }

    #[test]
    fn test_job_runs_to_completion_on_ticks() {
        let mut state = loaded_state();
        let id = RecordId::from(2);

        let _ = ContributionsHandler.handle(&mut state, TableMessage::JobStarted(id.clone()));
        assert!(state.contributions.needs_job_tick());

        for _ in 0..200 {
            if !state.contributions.needs_job_tick() {
                break;
            }
            let _ = ContributionsHandler.handle(&mut state, TableMessage::JobTick);
        }
        assert_eq!(state.contributions.job(&id), JobState::Done);
    }

    #[test]
    fn test_detail_toggle() {
        let mut state = loaded_state();
        let id = RecordId::from(1);

        let _ = ContributionsHandler.handle(&mut state, TableMessage::DetailToggled(id.clone()));
        assert_eq!(state.contributions.detail(), Some(&id));

        let _ = ContributionsHandler.handle(&mut state, TableMessage::DetailToggled(id));
        assert_eq!(state.contributions.detail(), None);
    }
}
