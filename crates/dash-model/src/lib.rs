//! Data model for the dashboard console.
//!
//! This crate holds the types shared by the query engine, the table
//! controller, the edit workflow and the GUI:
//!
//! - [`record`]: the [`Record`] trait and record identifiers
//! - [`contribution`] / [`product`]: the two record types served by the API
//! - [`display`]: derived display fields (status tones, currency)
//! - [`query`]: [`QueryState`] (text, status filter, sort and page)
//! - [`auth`]: [`AuthorizationContext`] supplied by the auth collaborator
//! - [`form`]: the editable product form and its validation
//! - [`notification`]: notification triples and the sink trait
//! - [`resource`]: fetch state as reported by the data source

pub mod auth;
pub mod contribution;
pub mod display;
pub mod form;
mod lenient;
pub mod notification;
pub mod product;
pub mod query;
pub mod record;
pub mod resource;

pub use auth::{AuthorizationContext, EDIT_PRODUCTS};
pub use contribution::{Contribution, ContributionSortKey};
pub use display::{StatusTone, format_currency, status_label};
pub use form::{FieldError, FormErrors, FormField, ProductForm, ProductUpdate};
pub use notification::{Notification, NotificationSink, Severity};
pub use product::{Category, LOW_STOCK_THRESHOLD, Product, ProductSortKey};
pub use query::{PageSize, QueryState, SortDirection, SortSpec};
pub use record::{Record, RecordId};
pub use resource::Resource;
