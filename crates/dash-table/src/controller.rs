//! Table view controller.
//!
//! The controller is the single owner of a table's query state. Every input
//! mutates the state and then recomputes the visible page synchronously, so
//! the page on screen always matches the latest query (last write wins).

use std::time::Instant;

use dash_model::{PageSize, QueryState, Record, RecordId, Resource};
use dash_query::{PageSelection, distinct_statuses, select_page, total_pages};

use crate::config::TableConfig;
use crate::debounce::Debounced;
use crate::jobs::{JobState, RowJobs};

/// What the view should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus<'a> {
    /// Nothing fetched yet and a fetch is in flight.
    Loading,
    /// The last fetch failed; show the message instead of the table.
    Error(&'a str),
    /// Rows are available. `busy` greys the table during a reload.
    Ready { busy: bool },
}

/// State and behaviour of one table screen.
#[derive(Debug, Clone)]
pub struct TableController<R: Record> {
    resource: Resource<R>,
    query: QueryState<R::SortKey>,
    search: Debounced<String>,
    statuses: Vec<String>,
    selection: PageSelection,
    jobs: RowJobs,
    detail: Option<RecordId>,
}

impl<R> TableController<R>
where
    R: Record,
    R::SortKey: Default,
{
    pub fn new(config: &TableConfig) -> Self {
        Self {
            resource: Resource::default(),
            query: QueryState::new(config.default_page_size),
            search: Debounced::new(String::new(), config.debounce()),
            statuses: Vec::new(),
            selection: PageSelection::default(),
            jobs: RowJobs::new(config.job_schedule()),
            detail: None,
        }
    }
}

impl<R: Record> TableController<R> {
    // =========================================================================
    // FETCH
    // =========================================================================

    pub fn begin_fetch(&mut self) {
        self.resource.begin_fetch();
    }

    /// Apply a finished fetch and recompute everything derived from the
    /// record set.
    pub fn finish_fetch(&mut self, result: Result<Vec<R>, String>) {
        if let Err(error) = &result {
            tracing::warn!(%error, "Table fetch failed");
        }
        self.resource.finish_fetch(result);

        self.statuses = distinct_statuses(&self.resource.data);
        self.query.retain_statuses(&self.statuses);

        let present = self.resource.data.iter().map(Record::id);
        self.jobs.retain_rows(present);
        if let Some(id) = &self.detail
            && !self.resource.data.iter().any(|r| r.id() == id)
        {
            self.detail = None;
        }

        self.recompute();
        let last = self.total_pages();
        if self.query.page_index() > last {
            self.query.set_page(last);
            self.recompute();
        }
    }

    pub fn status(&self) -> TableStatus<'_> {
        if let Some(error) = &self.resource.error {
            return TableStatus::Error(error);
        }
        if self.resource.loading && self.resource.data.is_empty() {
            return TableStatus::Loading;
        }
        TableStatus::Ready {
            busy: self.resource.loading,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.resource.loading
    }

    /// Every fetched record, unfiltered.
    pub fn records(&self) -> &[R] {
        &self.resource.data
    }

    // =========================================================================
    // QUERY INPUTS
    // =========================================================================

    /// Keystroke in the search box. Only the raw value changes; the filter
    /// applies once the quiet period elapses.
    pub fn search_input(&mut self, text: String) {
        self.search_input_at(text, Instant::now());
    }

    pub fn search_input_at(&mut self, text: String, now: Instant) {
        self.search.input_at(text, now);
    }

    /// Apply the debounced search if it is due. Returns whether the visible
    /// page changed.
    pub fn poll_search(&mut self) -> bool {
        self.poll_search_at(Instant::now())
    }

    pub fn poll_search_at(&mut self, now: Instant) -> bool {
        let Some(text) = self.search.poll_at(now).cloned() else {
            return false;
        };
        tracing::debug!(query = %text, "Applying search");
        self.query.set_text(text);
        self.recompute();
        true
    }

    /// Apply the pending search immediately (e.g. on Enter).
    pub fn submit_search(&mut self) {
        if let Some(text) = self.search.flush().cloned() {
            self.query.set_text(text);
            self.recompute();
        }
    }

    /// Clear the search box and its filter at once.
    pub fn clear_search(&mut self) {
        self.search.reset(String::new());
        self.query.set_text("");
        self.recompute();
    }

    pub fn search_text(&self) -> &str {
        self.search.raw()
    }

    pub fn toggle_status(&mut self, status: &str) {
        self.query.toggle_status(status);
        self.recompute();
    }

    pub fn clear_statuses(&mut self) {
        self.query.clear_statuses();
        self.recompute();
    }

    /// Column header click.
    pub fn sort_by(&mut self, key: R::SortKey) {
        self.query.sort_by(key);
        self.recompute();
    }

    /// Move to a page, clamped to the available range.
    pub fn go_to_page(&mut self, page: usize) {
        self.query.set_page(page.min(self.total_pages()));
        self.recompute();
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.query.set_page_size(page_size);
        self.recompute();
    }

    pub fn query(&self) -> &QueryState<R::SortKey> {
        &self.query
    }

    /// Status values present in the full record set, for the filter chips.
    pub fn status_options(&self) -> &[String] {
        &self.statuses
    }

    // =========================================================================
    // VISIBLE PAGE
    // =========================================================================

    fn recompute(&mut self) {
        self.selection = select_page(&self.resource.data, &self.query);
    }

    pub fn visible_rows(&self) -> Vec<&R> {
        self.selection.rows(&self.resource.data)
    }

    pub fn total_matching(&self) -> usize {
        self.selection.total_matching
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.selection.total_matching, self.query.page_size().get())
    }

    // =========================================================================
    // ROW AFFORDANCES
    // =========================================================================

    /// Open the detail panel of a row, or close it if it is already open.
    pub fn toggle_detail(&mut self, id: &RecordId) {
        self.detail = match &self.detail {
            Some(open) if open == id => None,
            _ => Some(id.clone()),
        };
    }

    pub fn detail(&self) -> Option<&RecordId> {
        self.detail.as_ref()
    }

    pub fn start_job(&mut self, id: &RecordId) -> bool {
        self.jobs.start(id)
    }

    /// One timer tick for all running jobs.
    pub fn tick_jobs(&mut self) -> Vec<RecordId> {
        self.jobs.tick()
    }

    pub fn job(&self, id: &RecordId) -> JobState {
        self.jobs.state(id)
    }

    // =========================================================================
    // TIMERS
    // =========================================================================

    /// Whether the view should keep polling the debounced search.
    pub fn needs_search_poll(&self) -> bool {
        self.search.is_pending()
    }

    /// Whether the view should keep the job timer running.
    pub fn needs_job_tick(&self) -> bool {
        self.jobs.has_running()
    }

    /// Tear down when the hosting view goes away: pending search input and
    /// running jobs are cancelled.
    pub fn reset(&mut self) {
        self.search.cancel();
        self.jobs.cancel_all();
        self.detail = None;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use dash_model::{Contribution, ContributionSortKey, SortSpec};

    use super::*;

    fn contribution(id: u64, name: &str, status: &str, amount: f64) -> Contribution {
        Contribution {
            id: RecordId::from(id),
            name: name.to_string(),
            status: status.to_string(),
            amount,
            ..Default::default()
        }
    }

    fn loaded(records: Vec<Contribution>) -> TableController<Contribution> {
        let mut table = TableController::new(&TableConfig::default());
        table.begin_fetch();
        table.finish_fetch(Ok(records));
        table
    }

    fn visible_ids(table: &TableController<Contribution>) -> Vec<String> {
        table.visible_rows().iter().map(|r| r.id.to_string()).collect()
    }

    #[test]
    fn test_loading_then_ready() {
        let mut table: TableController<Contribution> = TableController::new(&TableConfig::default());
        table.begin_fetch();
        assert_eq!(table.status(), TableStatus::Loading);

        table.finish_fetch(Ok(vec![contribution(1, "Alpha", "paid", 1.0)]));
        assert_eq!(table.status(), TableStatus::Ready { busy: false });

        table.begin_fetch();
        assert_eq!(table.status(), TableStatus::Ready { busy: true });
        assert_eq!(visible_ids(&table), vec!["1"]);
    }

    #[test]
    fn test_error_replaces_table() {
        let mut table = loaded(vec![contribution(1, "Alpha", "paid", 1.0)]);
        table.begin_fetch();
        table.finish_fetch(Err("server unavailable".into()));
        assert_eq!(table.status(), TableStatus::Error("server unavailable"));
    }

    #[test]
    fn test_search_is_debounced() {
        let mut table = loaded(vec![
            contribution(1, "Alpha", "pending", 1.0),
            contribution(2, "Beta", "paid", 2.0),
        ]);
        let start = Instant::now();

        table.search_input_at("a".into(), start);
        table.search_input_at("al".into(), start + Duration::from_millis(100));
        assert_eq!(table.search_text(), "al");
        assert_eq!(visible_ids(&table), vec!["1", "2"]);

        assert!(!table.poll_search_at(start + Duration::from_millis(250)));
        assert!(table.needs_search_poll());

        assert!(table.poll_search_at(start + Duration::from_millis(300)));
        assert_eq!(visible_ids(&table), vec!["1"]);
        assert!(!table.needs_search_poll());
    }

    #[test]
    fn test_status_options_and_stale_selection() {
        let mut table = loaded(vec![
            contribution(1, "a", "paid", 1.0),
            contribution(2, "b", "failed", 1.0),
        ]);
        assert_eq!(table.status_options(), ["failed", "paid"]);

        table.toggle_status("failed");
        assert_eq!(visible_ids(&table), vec!["2"]);

        table.finish_fetch(Ok(vec![contribution(1, "a", "paid", 1.0)]));
        assert!(table.query().statuses().is_empty());
        assert_eq!(visible_ids(&table), vec!["1"]);
    }

    #[test]
    fn test_sort_and_page_size() {
        let records = (1..=25)
            .map(|i| contribution(i, &format!("n{i:02}"), "paid", i as f64))
            .collect();
        let mut table = loaded(records);

        table.sort_by(ContributionSortKey::Amount);
        table.sort_by(ContributionSortKey::Amount);
        assert_eq!(table.query().sort(), SortSpec::descending(ContributionSortKey::Amount));
        assert_eq!(visible_ids(&table)[0], "25");

        table.go_to_page(3);
        assert_eq!(table.query().page_index(), 3);
        assert_eq!(table.visible_rows().len(), 5);

        table.set_page_size(PageSize::Twenty);
        assert_eq!(table.query().page_index(), 1);
        assert_eq!(table.total_pages(), 2);
    }

    #[test]
    fn test_go_to_page_clamps_to_last() {
        let mut table = loaded(vec![contribution(1, "a", "paid", 1.0)]);
        table.go_to_page(9);
        assert_eq!(table.query().page_index(), 1);
        assert_eq!(visible_ids(&table), vec!["1"]);
    }

    #[test]
    fn test_shorter_refetch_clamps_page() {
        let records = (1..=11)
            .map(|i| contribution(i, &format!("n{i:02}"), "paid", 1.0))
            .collect();
        let mut table = loaded(records);
        table.go_to_page(2);
        assert_eq!(visible_ids(&table), vec!["11"]);

        table.begin_fetch();
        table.finish_fetch(Ok((1..=10)
            .map(|i| contribution(i, &format!("n{i:02}"), "paid", 1.0))
            .collect()));
        assert_eq!(table.total_pages(), 1);
        assert_eq!(table.query().page_index(), 1);
        assert_eq!(table.visible_rows().len(), 10);
    }

    #[test]
    fn test_empty_refetch_returns_to_first_page() {
        let records = (1..=25)
            .map(|i| contribution(i, "n", "paid", 1.0))
            .collect();
        let mut table = loaded(records);
        table.go_to_page(3);

        table.finish_fetch(Ok(Vec::new()));
        assert_eq!(table.query().page_index(), 1);
        assert!(table.visible_rows().is_empty());
    }

    #[test]
    fn test_detail_toggle() {
        let mut table = loaded(vec![contribution(1, "a", "paid", 1.0)]);
        let id = RecordId::from(1u64);
        table.toggle_detail(&id);
        assert_eq!(table.detail(), Some(&id));
        table.toggle_detail(&id);
        assert_eq!(table.detail(), None);
    }

    #[test]
    fn test_reset_cancels_timers() {
        let mut table = loaded(vec![contribution(1, "a", "paid", 1.0)]);
        let id = RecordId::from(1u64);
        table.start_job(&id);
        table.search_input("zzz".into());
        assert!(table.needs_job_tick());
        assert!(table.needs_search_poll());

        table.reset();
        assert!(!table.needs_job_tick());
        assert!(!table.needs_search_poll());
        assert_eq!(table.search_text(), "");
    }

    #[test]
    fn test_refetch_drops_jobs_of_removed_rows() {
        let mut table = loaded(vec![contribution(1, "a", "paid", 1.0)]);
        let id = RecordId::from(1u64);
        table.start_job(&id);
        table.finish_fetch(Ok(vec![contribution(2, "b", "paid", 1.0)]));
        assert_eq!(table.job(&id), JobState::Idle);
    }

    #[test]
    fn test_refetch_forgets_finished_jobs_of_removed_rows() {
        let mut table = loaded(vec![contribution(1, "a", "paid", 1.0)]);
        let id = RecordId::from(1u64);
        table.start_job(&id);
        while table.needs_job_tick() {
            table.tick_jobs();
        }
        assert_eq!(table.job(&id), JobState::Done);

        table.finish_fetch(Ok(vec![contribution(1, "a", "paid", 1.0)]));
        assert_eq!(table.job(&id), JobState::Done);

        table.finish_fetch(Ok(vec![contribution(2, "b", "paid", 1.0)]));
        assert_eq!(table.job(&id), JobState::Idle);
        table.finish_fetch(Ok(vec![contribution(1, "a", "paid", 1.0)]));
        assert!(table.start_job(&id));
    }
}
