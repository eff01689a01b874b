//! Product records shown as cards and edited in the drawer.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::display::{StatusTone, format_currency, status_label};
use crate::record::{Record, RecordId};

/// Quantity at or below which a product counts as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// A product category as served by the categories endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    #[serde(deserialize_with = "crate::lenient::or_default")]
    pub id: RecordId,
    #[serde(deserialize_with = "crate::lenient::or_default")]
    pub title: String,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.title)
    }
}

/// One product.
///
/// Fields that are missing, `null` or malformed upstream fall back to their
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier.
    #[serde(deserialize_with = "crate::lenient::or_default")]
    pub id: RecordId,
    /// Product title (searched by the free-text filter).
    #[serde(deserialize_with = "crate::lenient::or_default")]
    pub title: String,
    /// Long description.
    #[serde(deserialize_with = "crate::lenient::or_default")]
    pub description: String,
    /// Unit price.
    #[serde(deserialize_with = "crate::lenient::or_default")]
    pub price: f64,
    /// Units in stock.
    #[serde(deserialize_with = "crate::lenient::or_default")]
    pub quantity: u32,
    /// Assigned category, if any.
    #[serde(deserialize_with = "crate::lenient::or_default")]
    pub category: Option<Category>,
    /// User that created the product. Only the creator may edit or delete it.
    #[serde(deserialize_with = "crate::lenient::or_default")]
    pub creator_id: String,
}

/// Sortable product fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductSortKey {
    #[default]
    Title,
    Price,
    Quantity,
}

impl ProductSortKey {
    /// All keys in display order.
    pub const ALL: [ProductSortKey; 3] = [Self::Title, Self::Price, Self::Quantity];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Price => "Price",
            Self::Quantity => "Quantity",
        }
    }
}

impl std::fmt::Display for ProductSortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Product {
    /// Availability derived from the stock quantity.
    pub fn availability(&self) -> &'static str {
        match self.quantity {
            0 => "out_of_stock",
            q if q <= LOW_STOCK_THRESHOLD => "low_stock",
            _ => "in_stock",
        }
    }

    /// Price formatted for display.
    pub fn formatted_price(&self) -> String {
        format_currency(self.price)
    }

    /// Category title, or an empty string.
    pub fn category_title(&self) -> &str {
        self.category.as_ref().map_or("", |c| c.title.as_str())
    }

    /// Badge label for the availability.
    pub fn availability_label(&self) -> String {
        status_label(self.availability())
    }

    /// Badge tone for the availability.
    pub fn availability_tone(&self) -> StatusTone {
        StatusTone::for_status(self.availability())
    }
}

impl Record for Product {
    type SortKey = ProductSortKey;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.title
    }

    fn status(&self) -> &str {
        self.availability()
    }

    fn compare_by(&self, other: &Self, key: ProductSortKey) -> Ordering {
        match key {
            ProductSortKey::Title => self.title.to_lowercase().cmp(&other.title.to_lowercase()),
            ProductSortKey::Price => self.price.total_cmp(&other.price),
            ProductSortKey::Quantity => self.quantity.cmp(&other.quantity),
        }
    }
}
