//! Query state driving which records are visible.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// SORTING
// =============================================================================

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Column and direction to sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec<K> {
    pub key: K,
    pub direction: SortDirection,
}

impl<K> SortSpec<K> {
    /// Ascending sort on `key`.
    pub fn ascending(key: K) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    /// Descending sort on `key`.
    pub fn descending(key: K) -> Self {
        Self {
            key,
            direction: SortDirection::Descending,
        }
    }
}

// =============================================================================
// PAGE SIZE
// =============================================================================

/// Allowed rows-per-page values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum PageSize {
    #[default]
    Ten,
    Twenty,
    Fifty,
    Hundred,
}

impl PageSize {
    /// All sizes in ascending order.
    pub const ALL: [PageSize; 4] = [Self::Ten, Self::Twenty, Self::Fifty, Self::Hundred];

    /// Number of rows.
    pub const fn get(self) -> usize {
        match self {
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Fifty => 50,
            Self::Hundred => 100,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = String;

    fn try_from(rows: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|size| size.get() == rows)
            .ok_or_else(|| format!("unsupported page size {rows}, expected one of 10, 20, 50, 100"))
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / page", self.get())
    }
}

// =============================================================================
// QUERY STATE
// =============================================================================

/// Combined filter, sort and page parameters.
///
/// Page indices are 1-based and never drop below 1. Changing the page size
/// always returns to the first page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState<K> {
    text: String,
    statuses: BTreeSet<String>,
    sort: SortSpec<K>,
    page_index: usize,
    page_size: PageSize,
}

impl<K: Default> Default for QueryState<K> {
    fn default() -> Self {
        Self::new(PageSize::default())
    }
}

impl<K: Default> QueryState<K> {
    /// Empty query on the first page.
    pub fn new(page_size: PageSize) -> Self {
        Self {
            text: String::new(),
            statuses: BTreeSet::new(),
            sort: SortSpec::ascending(K::default()),
            page_index: 1,
            page_size,
        }
    }
}

impl<K: Copy + PartialEq> QueryState<K> {
    /// Free-text query as entered.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Selected status values; empty means "all".
    pub fn statuses(&self) -> &BTreeSet<String> {
        &self.statuses
    }

    pub fn sort(&self) -> SortSpec<K> {
        self.sort
    }

    /// Current 1-based page.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Replace the free-text query and return to the first page.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.page_index = 1;
    }

    /// Add or remove a status from the filter and return to the first page.
    pub fn toggle_status(&mut self, status: &str) {
        if !self.statuses.remove(status) {
            self.statuses.insert(status.to_string());
        }
        self.page_index = 1;
    }

    /// Clear the status filter and return to the first page.
    pub fn clear_statuses(&mut self) {
        self.statuses.clear();
        self.page_index = 1;
    }

    /// Drop selected statuses that are no longer offered.
    pub fn retain_statuses(&mut self, available: &[String]) {
        self.statuses.retain(|s| available.contains(s));
    }

    /// Column header click: flip direction on the active column, otherwise
    /// sort the new column ascending.
    pub fn sort_by(&mut self, key: K) {
        if self.sort.key == key {
            self.sort.direction = self.sort.direction.toggled();
        } else {
            self.sort = SortSpec::ascending(key);
        }
    }

    pub fn set_sort(&mut self, sort: SortSpec<K>) {
        self.sort = sort;
    }

    /// Move to a page. Zero is clamped to the first page.
    pub fn set_page(&mut self, page_index: usize) {
        self.page_index = page_index.max(1);
    }

    /// Change the page size. Always resets to the first page.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page_index = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    enum Key {
        #[default]
        Name,
        Amount,
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut q: QueryState<Key> = QueryState::default();
        q.set_page(4);
        assert_eq!(q.page_index(), 4);

        q.set_page_size(PageSize::Fifty);
        assert_eq!(q.page_index(), 1);

        // Same size again still resets.
        q.set_page(3);
        q.set_page_size(PageSize::Fifty);
        assert_eq!(q.page_index(), 1);
    }

    #[test]
    fn test_page_never_below_one() {
        let mut q: QueryState<Key> = QueryState::default();
        q.set_page(0);
        assert_eq!(q.page_index(), 1);
    }

    #[test]
    fn test_sort_by_toggles_active_column() {
        let mut q: QueryState<Key> = QueryState::default();
        q.sort_by(Key::Name);
        assert_eq!(q.sort(), SortSpec::descending(Key::Name));

        q.sort_by(Key::Amount);
        assert_eq!(q.sort(), SortSpec::ascending(Key::Amount));
    }

    #[test]
    fn test_toggle_status() {
        let mut q: QueryState<Key> = QueryState::default();
        q.set_page(2);
        q.toggle_status("paid");
        assert!(q.statuses().contains("paid"));
        assert_eq!(q.page_index(), 1);

        q.toggle_status("paid");
        assert!(q.statuses().is_empty());
    }

    #[test]
    fn test_page_size_serde() {
        let size: PageSize = serde_json::from_str("20").unwrap();
        assert_eq!(size, PageSize::Twenty);
        assert!(serde_json::from_str::<PageSize>("15").is_err());
    }
}
