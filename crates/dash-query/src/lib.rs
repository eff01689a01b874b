//! Record filter/sort/paginate engine.
//!
//! Pure functions turning a full record set and a
//! [`QueryState`](dash_model::QueryState) into one visible page. Steps
//! always run in the same order: filter, then sort, then paginate.

mod engine;

pub use engine::{
    Page, PageSelection, distinct_statuses, filter_sort_paginate, matches_filters, select_page,
    total_pages,
};
