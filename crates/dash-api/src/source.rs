//! Data access seams.
//!
//! The GUI and the edit workflow only see these traits, so tests can swap
//! the HTTP client for an in-memory fake.

use async_trait::async_trait;

use dash_model::{Category, Contribution, Product, ProductUpdate, RecordId};

use crate::error::Result;

/// Read-only access to the record collections shown in tables.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetch the full contributions list.
    async fn fetch_contributions(&self) -> Result<Vec<Contribution>>;

    /// Fetch the full products list.
    async fn fetch_products(&self) -> Result<Vec<Product>>;
}

/// Category lookup and product writes used by the editor drawer.
#[async_trait]
pub trait ProductApi: Send + Sync {
    /// Fetch the selectable categories.
    async fn categories(&self) -> Result<Vec<Category>>;

    /// Replace a product's editable fields.
    async fn update_product(&self, id: &RecordId, update: &ProductUpdate) -> Result<()>;

    /// Delete a product.
    async fn delete_product(&self, id: &RecordId) -> Result<()>;
}
