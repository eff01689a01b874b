//! Contribution records shown on the contributions table.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::display::{StatusTone, format_currency, status_label};
use crate::record::{Record, RecordId};

/// One contribution row.
///
/// Every field defaults when missing, `null` or of the wrong type upstream,
/// so a partially populated payload still renders instead of failing the
/// whole fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Contribution {
    /// Unique identifier.
    #[serde(deserialize_with = "crate::lenient::or_default")]
    pub id: RecordId,
    /// Contributor name (searched by the free-text filter).
    #[serde(deserialize_with = "crate::lenient::or_default")]
    pub name: String,
    /// Free-text description.
    #[serde(deserialize_with = "crate::lenient::or_default")]
    pub description: String,
    /// Contributed amount.
    #[serde(deserialize_with = "crate::lenient::or_default")]
    pub amount: f64,
    /// Number of items in the contribution.
    #[serde(deserialize_with = "crate::lenient::or_default")]
    pub count: u32,
    /// Raw status value (`pending`, `paid`, ...).
    #[serde(deserialize_with = "crate::lenient::or_default")]
    pub status: String,
    /// User that created the contribution.
    #[serde(deserialize_with = "crate::lenient::or_default")]
    pub owner_id: String,
    /// Creation time, when the API reports it.
    #[serde(deserialize_with = "crate::lenient::or_default")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Sortable contribution columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionSortKey {
    #[default]
    Name,
    Amount,
    Count,
    Status,
    CreatedAt,
}

impl ContributionSortKey {
    /// All columns in display order.
    pub const ALL: [ContributionSortKey; 5] = [
        Self::Name,
        Self::Amount,
        Self::Count,
        Self::Status,
        Self::CreatedAt,
    ];

    /// Column header text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Amount => "Amount",
            Self::Count => "Count",
            Self::Status => "Status",
            Self::CreatedAt => "Created",
        }
    }
}

impl Contribution {
    /// Amount formatted for display.
    pub fn formatted_amount(&self) -> String {
        format_currency(self.amount)
    }

    /// Badge label for the status.
    pub fn status_label(&self) -> String {
        status_label(&self.status)
    }

    /// Badge tone for the status.
    pub fn status_tone(&self) -> StatusTone {
        StatusTone::for_status(&self.status)
    }

    /// Creation date for display, or a dash when unknown.
    pub fn created_label(&self) -> String {
        self.created_at
            .map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

impl Record for Contribution {
    type SortKey = ContributionSortKey;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn status(&self) -> &str {
        &self.status
    }

    fn compare_by(&self, other: &Self, key: ContributionSortKey) -> Ordering {
        match key {
            ContributionSortKey::Name => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            ContributionSortKey::Amount => self.amount.total_cmp(&other.amount),
            ContributionSortKey::Count => self.count.cmp(&other.count),
            ContributionSortKey::Status => self.status.cmp(&other.status),
            ContributionSortKey::CreatedAt => self.created_at.cmp(&other.created_at),
        }
    }
}
