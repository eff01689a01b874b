//! The record abstraction shared by every table in the console.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// RECORD ID
// =============================================================================

/// Unique, immutable identifier of a record.
///
/// The API is not consistent about identifier types, so JSON integers,
/// floats and strings are all accepted and normalised to their string form.
/// An integral float such as `3.0` becomes `"3"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "RawId", into = "String")]
pub struct RecordId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
}

impl From<RawId> for RecordId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Number(n) => Self(n.to_string()),
            RawId::Unsigned(n) => Self(n.to_string()),
            RawId::Float(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s),
        }
    }
}

impl From<RecordId> for String {
    fn from(id: RecordId) -> Self {
        id.0
    }
}

impl RecordId {
    /// Create an identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// RECORD TRAIT
// =============================================================================

/// One row of tabular data.
///
/// The query engine only needs three things from a record: the name used by
/// free-text search, the status used by the status filter, and an ordering
/// per sortable column.
pub trait Record {
    /// Sortable columns of this record type.
    type SortKey: Copy + Eq + fmt::Debug;

    /// Unique identifier.
    fn id(&self) -> &RecordId;

    /// Field matched by free-text search.
    fn name(&self) -> &str;

    /// Field matched by the status filter.
    fn status(&self) -> &str;

    /// Compare two records on a single column.
    fn compare_by(&self, other: &Self, key: Self::SortKey) -> Ordering;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_from_number_and_string() {
        let from_number: RecordId = serde_json::from_str("42").unwrap();
        let from_text: RecordId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(from_number, from_text);
        assert_eq!(from_number.as_str(), "42");
    }

    #[test]
    fn test_id_from_float() {
        let integral: RecordId = serde_json::from_str("3.0").unwrap();
        let fractional: RecordId = serde_json::from_str("1.5").unwrap();
        assert_eq!(integral.as_str(), "3");
        assert_eq!(fractional.as_str(), "1.5");
    }

    #[test]
    fn test_id_serializes_as_string() {
        let id = RecordId::from(7u64);
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"7\"");
    }
}
