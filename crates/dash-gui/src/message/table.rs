//! Messages shared by the record table screens.

use dash_model::{PageSize, Record, RecordId};

/// Messages for one [`TableController`](dash_table::TableController).
///
/// Generic over the record type so both screens use the same handler.
#[derive(Debug, Clone)]
pub enum TableMessage<R: Record> {
    // =========================================================================
    // Data
    // =========================================================================
    /// Re-fetch the record set
    Refresh,

    /// Fetch finished; errors carry the message to display
    Loaded(Result<Vec<R>, String>),

    // =========================================================================
    // Search & filters
    // =========================================================================
    /// Keystroke in the search input
    SearchChanged(String),

    /// Enter pressed: apply the search now
    SearchSubmitted,

    SearchCleared,

    /// Debounce poll while a search is pending
    SearchTick,

    StatusToggled(String),

    StatusesCleared,

    // =========================================================================
    // Sorting & paging
    // =========================================================================
    SortBy(R::SortKey),

    PageChanged(usize),

    PageSizeChanged(PageSize),

    // =========================================================================
    // Row affordances
    // =========================================================================
    /// Open or close the detail panel of a row
    DetailToggled(RecordId),

    /// Start the simulated search job of a row
    JobStarted(RecordId),

    /// Advance all running jobs by one step
    JobTick,
}
