//! JSON API access for the dashboard console.
//!
//! [`ApiClient`] talks to the REST backend and implements the two seams the
//! rest of the application depends on: [`DataSource`] for the table
//! collections and [`ProductApi`] for categories and product writes.

pub mod client;
pub mod config;
pub mod error;
pub mod source;
mod types;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use source::{DataSource, ProductApi};
