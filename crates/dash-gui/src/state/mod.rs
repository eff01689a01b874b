//! Application state management.
//!
//! - **AppState**: Root state (settings, API client, tables, drawer, toast)
//! - **View**: Which screen is showing
//! - **Settings**: Persisted user preferences

mod app_state;
mod navigation;
mod settings;

pub use app_state::AppState;
pub use navigation::View;
pub use settings::{ACCESS_TOKEN_ENV, AuthSettings, DisplaySettings, Settings};
