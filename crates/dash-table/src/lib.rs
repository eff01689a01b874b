//! Table view controller.
//!
//! Owns everything a table screen needs besides rendering:
//!
//! - `controller` - [`TableController`] (query state, fetch state, visible page)
//! - `debounce` - [`Debounced`] raw/applied input pair with a quiet period
//! - `jobs` - [`RowJobs`] per-row simulated jobs with explicit teardown
//! - `config` - [`TableConfig`] user settings for the above

mod config;
mod controller;
mod debounce;
mod jobs;

pub use config::TableConfig;
pub use controller::{TableController, TableStatus};
pub use debounce::Debounced;
pub use jobs::{JobSchedule, JobState, RowJobs};
