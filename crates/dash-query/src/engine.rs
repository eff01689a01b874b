use std::collections::BTreeSet;

use dash_model::{QueryState, Record, SortDirection};

/// Indices into the full record set for one visible page.
///
/// Keeping indices instead of references lets the owner of the record set
/// cache the selection without borrowing it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSelection {
    /// Positions of the visible records, in display order.
    pub indices: Vec<usize>,
    /// Records matching the filters across all pages.
    pub total_matching: usize,
}

impl PageSelection {
    /// Resolve the selection against the record set it was computed from.
    pub fn rows<'a, R>(&self, records: &'a [R]) -> Vec<&'a R> {
        self.indices
            .iter()
            .filter_map(|&i| records.get(i))
            .collect()
    }
}

/// One visible page of records.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a, R> {
    pub rows: Vec<&'a R>,
    pub total_matching: usize,
}

/// Normalised filter inputs, computed once per recompute.
struct Filters<'q> {
    needle: String,
    statuses: &'q BTreeSet<String>,
}

impl<'q> Filters<'q> {
    fn new<K: Copy + PartialEq>(query: &'q QueryState<K>) -> Self {
        Self {
            needle: query.text().trim().to_lowercase(),
            statuses: query.statuses(),
        }
    }

    fn matches<R: Record>(&self, record: &R) -> bool {
        let text_ok = self.needle.is_empty() || record.name().to_lowercase().contains(&self.needle);
        let status_ok = self.statuses.is_empty() || self.statuses.contains(record.status());
        text_ok && status_ok
    }
}

/// Whether a record passes the text and status filters of `query`.
///
/// Text matching is case-insensitive substring containment on the record
/// name, using the trimmed query.
pub fn matches_filters<R: Record>(record: &R, query: &QueryState<R::SortKey>) -> bool {
    Filters::new(query).matches(record)
}

/// Filter, sort and paginate, returning record indices.
///
/// Sorting is a stable ascending sort; a descending request reverses the
/// ascending order, so records that tie on the key come out in reverse
/// input order. A page index past the end yields an empty page.
pub fn select_page<R: Record>(records: &[R], query: &QueryState<R::SortKey>) -> PageSelection {
    let filters = Filters::new(query);

    let mut matching: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| filters.matches(*record))
        .map(|(i, _)| i)
        .collect();
    let total_matching = matching.len();

    let sort = query.sort();
    matching.sort_by(|&a, &b| records[a].compare_by(&records[b], sort.key));
    if sort.direction == SortDirection::Descending {
        matching.reverse();
    }

    let page_size = query.page_size().get();
    let indices = match query.page_index().checked_sub(1) {
        Some(page) => matching
            .into_iter()
            .skip(page.saturating_mul(page_size))
            .take(page_size)
            .collect(),
        None => Vec::new(),
    };

    tracing::trace!(
        total = records.len(),
        matching = total_matching,
        visible = indices.len(),
        page = query.page_index(),
        "Recomputed page"
    );

    PageSelection {
        indices,
        total_matching,
    }
}

/// Filter, sort and paginate, returning the visible records.
pub fn filter_sort_paginate<'a, R: Record>(
    records: &'a [R],
    query: &QueryState<R::SortKey>,
) -> Page<'a, R> {
    let selection = select_page(records, query);
    Page {
        rows: selection.rows(records),
        total_matching: selection.total_matching,
    }
}

/// Distinct status values present in the record set, sorted.
///
/// Used to populate the status filter options. Empty statuses are skipped.
pub fn distinct_statuses<R: Record>(records: &[R]) -> Vec<String> {
    records
        .iter()
        .map(Record::status)
        .filter(|s| !s.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Number of pages needed for `total` rows. Always at least one.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use dash_model::{PageSize, RecordId, SortSpec};
    use proptest::prelude::*;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: RecordId,
        name: String,
        status: String,
        score: u32,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    enum Key {
        #[default]
        Name,
        Score,
    }

    impl Record for Row {
        type SortKey = Key;

        fn id(&self) -> &RecordId {
            &self.id
        }

        fn name(&self) -> &str {
            &self.name
        }

        fn status(&self) -> &str {
            &self.status
        }

        fn compare_by(&self, other: &Self, key: Key) -> Ordering {
            match key {
                Key::Name => self.name.cmp(&other.name),
                Key::Score => self.score.cmp(&other.score),
            }
        }
    }

    fn row(id: u64, name: &str, status: &str, score: u32) -> Row {
        Row {
            id: RecordId::from(id),
            name: name.to_string(),
            status: status.to_string(),
            score,
        }
    }

    fn ids(page: &Page<'_, Row>) -> Vec<String> {
        page.rows.iter().map(|r| r.id.to_string()).collect()
    }

    #[test]
    fn test_text_filter_example() {
        let records = vec![row(1, "Alpha", "pending", 0), row(2, "Beta", "paid", 0)];
        let mut query: QueryState<Key> = QueryState::new(PageSize::Ten);
        query.set_text("al");

        let page = filter_sort_paginate(&records, &query);
        assert_eq!(ids(&page), vec!["1"]);
        assert_eq!(page.total_matching, 1);
    }

    #[test]
    fn test_text_filter_is_substring_and_trimmed() {
        let records = vec![row(1, "Global Fund", "paid", 0), row(2, "Beta", "paid", 0)];
        let mut query: QueryState<Key> = QueryState::default();
        query.set_text("  BAL ");

        let page = filter_sort_paginate(&records, &query);
        assert_eq!(ids(&page), vec!["1"]);
    }

    #[test]
    fn test_status_filter() {
        let records = vec![
            row(1, "a", "pending", 0),
            row(2, "b", "paid", 0),
            row(3, "c", "failed", 0),
        ];
        let mut query: QueryState<Key> = QueryState::default();
        query.toggle_status("paid");
        query.toggle_status("failed");

        let page = filter_sort_paginate(&records, &query);
        assert_eq!(ids(&page), vec!["2", "3"]);
    }

    #[test]
    fn test_pagination_slices() {
        let records: Vec<Row> = (1..=25).map(|i| row(i, &format!("r{i:02}"), "", 0)).collect();
        let mut query: QueryState<Key> = QueryState::new(PageSize::Ten);
        query.set_page(3);

        let page = filter_sort_paginate(&records, &query);
        assert_eq!(ids(&page), vec!["21", "22", "23", "24", "25"]);
        assert_eq!(page.total_matching, 25);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let records = vec![row(1, "a", "", 0)];
        let mut query: QueryState<Key> = QueryState::default();
        query.set_page(5);

        let page = filter_sort_paginate(&records, &query);
        assert!(page.rows.is_empty());
        assert_eq!(page.total_matching, 1);
    }

    #[test]
    fn test_descending_reverses_tie_order() {
        // Rows 1 and 2 tie on score. Ascending keeps input order (1, 2);
        // descending is the reversed ascending order, so the tie flips.
        let records = vec![row(1, "a", "", 5), row(2, "b", "", 5), row(3, "c", "", 9)];
        let mut query: QueryState<Key> = QueryState::default();

        query.set_sort(SortSpec::ascending(Key::Score));
        assert_eq!(ids(&filter_sort_paginate(&records, &query)), vec!["1", "2", "3"]);

        query.set_sort(SortSpec::descending(Key::Score));
        assert_eq!(ids(&filter_sort_paginate(&records, &query)), vec!["3", "2", "1"]);
    }

    #[test]
    fn test_distinct_statuses() {
        let records = vec![
            row(1, "a", "paid", 0),
            row(2, "b", "pending", 0),
            row(3, "c", "paid", 0),
            row(4, "d", "", 0),
        ];
        assert_eq!(distinct_statuses(&records), vec!["paid", "pending"]);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
    }

    // =========================================================================
    // PROPERTIES
    // =========================================================================

    fn arb_rows() -> impl Strategy<Value = Vec<Row>> {
        prop::collection::vec(
            ("[a-cA-C]{0,4}", prop::sample::select(vec!["paid", "pending", "failed"]), 0u32..5),
            0..60,
        )
        .prop_map(|items| {
            items
                .into_iter()
                .enumerate()
                .map(|(i, (name, status, score))| row(i as u64, &name, status, score))
                .collect()
        })
    }

    fn arb_query() -> impl Strategy<Value = QueryState<Key>> {
        (
            "[a-c ]{0,3}",
            prop::collection::btree_set(
                prop::sample::select(vec!["paid", "pending", "failed"]),
                0..3,
            ),
            prop::sample::select(vec![Key::Name, Key::Score]),
            any::<bool>(),
            prop::sample::select(PageSize::ALL.to_vec()),
            1usize..8,
        )
            .prop_map(|(text, statuses, key, desc, size, page)| {
                let mut query = QueryState::new(size);
                query.set_text(text);
                for status in statuses {
                    query.toggle_status(status);
                }
                query.set_sort(if desc {
                    SortSpec::descending(key)
                } else {
                    SortSpec::ascending(key)
                });
                query.set_page(page);
                query
            })
    }

    proptest! {
        #[test]
        fn prop_page_bounded_and_filtered(records in arb_rows(), query in arb_query()) {
            let page = filter_sort_paginate(&records, &query);
            prop_assert!(page.rows.len() <= query.page_size().get());
            for record in &page.rows {
                prop_assert!(matches_filters(*record, &query));
            }
        }

        #[test]
        fn prop_idempotent(records in arb_rows(), query in arb_query()) {
            let first = select_page(&records, &query);
            let second = select_page(&records, &query);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_pages_partition_matches(records in arb_rows(), query in arb_query()) {
            let total = select_page(&records, &query).total_matching;
            let pages = total_pages(total, query.page_size().get());

            let mut seen = Vec::new();
            let mut q = query.clone();
            for p in 1..=pages {
                q.set_page(p);
                seen.extend(select_page(&records, &q).indices);
            }
            seen.sort_unstable();
            seen.dedup();
            prop_assert_eq!(seen.len(), total);
        }

        #[test]
        fn prop_descending_is_reversed_ascending(records in arb_rows(), key in prop::sample::select(vec![Key::Name, Key::Score])) {
            let mut asc: QueryState<Key> = QueryState::new(PageSize::Hundred);
            asc.set_sort(SortSpec::ascending(key));
            let mut desc = asc.clone();
            desc.set_sort(SortSpec::descending(key));

            let mut ascending = select_page(&records, &asc).indices;
            ascending.reverse();
            prop_assert_eq!(ascending, select_page(&records, &desc).indices);
        }
    }
}
