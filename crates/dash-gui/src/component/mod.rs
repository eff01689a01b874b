//! Reusable UI components.
//!
//! Components are pure view functions or small builders; they take the
//! message to emit from their caller and never touch application state.
//!
//! - `data_table` - sortable table with optional per-row detail panels
//! - `pagination` - page navigation and page size picker
//! - `search_filter_bar` - search input with status filter chips
//! - `status_badge` - tone-colored status pill
//! - `form_field` - labelled text and select inputs with inline errors
//! - `modal` - dialog overlay and destructive confirmation
//! - `toast` - notification popup and the notification sink behind it

pub mod data_table;
pub mod form_field;
pub mod modal;
pub mod pagination;
pub mod search_filter_bar;
pub mod status_badge;
pub mod toast;

pub use data_table::{TableColumn, TableRow, data_table};
pub use form_field::{form_field, select_field};
pub use modal::{confirm_modal, modal};
pub use pagination::{PageInfo, pagination};
pub use search_filter_bar::{FilterToggle, SearchFilterBar};
pub use status_badge::status_badge;
pub use toast::{ToastSink, ToastSlot, ToastState, ToastType, view_toast};

/// Lucide icon font, registered with the application at startup.
pub use iced_fonts::LUCIDE_FONT_BYTES;
