//! Application subscriptions.
//!
//! This module centralizes all Iced subscriptions for the application.
//! Subscriptions are reactive event sources that run alongside the app.
//!
//! # Subscription Overview
//!
//! | Subscription | Interval | Condition | Purpose |
//! |--------------|----------|-----------|---------|
//! | Toast Dismiss | 5 seconds | Toast visible, restarted per toast | Auto-dismiss notifications |
//! | Search Poll | 50ms | Search input pending on the current screen | Apply debounced search |
//! | Job Tick | `[table] job_interval_ms` | A contributions row job is running | Advance row jobs |
//!
//! # Architecture
//!
//! Subscriptions are batched together in `create_subscription()`. Each one
//! returns `Subscription::none()` when its condition is not met, so tearing
//! down the state that needs a timer also stops the timer.

use std::time::Duration;

use iced::{Subscription, time};

use crate::message::{Message, TableMessage, ToastMessage};
use crate::state::{AppState, View};

/// Poll interval for pending search input. Much shorter than the quiet
/// period so the applied search lands close to its deadline.
const SEARCH_POLL_INTERVAL: Duration = Duration::from_millis(50);

const TOAST_TIMEOUT: Duration = Duration::from_secs(5);

/// Create all application subscriptions.
pub fn create_subscription(state: &AppState) -> Subscription<Message> {
    Subscription::batch([
        toast_subscription(state),
        search_subscription(state),
        job_subscription(state),
    ])
}

/// Toast auto-dismiss subscription.
///
/// Keyed on the toast generation, so a replaced toast gets a fresh timer.
fn toast_subscription(state: &AppState) -> Subscription<Message> {
    if state.toast.current().is_some() {
        time::every(TOAST_TIMEOUT)
            .with(state.toast.generation())
            .map(|(generation, _)| Message::Toast(ToastMessage::Expired(generation)))
    } else {
        Subscription::none()
    }
}

/// Debounced search poll for the visible screen.
fn search_subscription(state: &AppState) -> Subscription<Message> {
    match state.view {
        View::Contributions if state.contributions.needs_search_poll() => {
            time::every(SEARCH_POLL_INTERVAL)
                .map(|_| Message::contributions(TableMessage::SearchTick))
        }
        View::Products if state.products.needs_search_poll() => {
            time::every(SEARCH_POLL_INTERVAL).map(|_| Message::products(TableMessage::SearchTick))
        }
        _ => Subscription::none(),
    }
}

/// Row job timer. Only the contributions table runs jobs.
fn job_subscription(state: &AppState) -> Subscription<Message> {
    if state.view == View::Contributions && state.contributions.needs_job_tick() {
        let interval = state.settings.table.job_schedule().interval;
        time::every(interval).map(|_| Message::contributions(TableMessage::JobTick))
    } else {
        Subscription::none()
    }
}
