//! Derived list-view state: filter + page window
//!
//! `ListView` owns the fetched collection and the current inputs, and
//! recomputes the filtered subset and the visible page window whenever an
//! input changes. Nothing here touches the terminal; both the TUI and
//! the CLI drive the same state machine.

use crate::events::{matches_query, Event, PetsFilter};

/// Fixed page window size.
pub const PAGE_SIZE: usize = 5;

pub struct ListView {
    events: Vec<Event>,
    filtered: Vec<usize>,
    query: String,
    pets: PetsFilter,
    /// 1-based. Always within [1, total_pages()] while the filtered set is
    /// non-empty; any input change snaps it back to 1.
    page: usize,
}

impl Default for ListView {
    fn default() -> Self {
        Self::new()
    }
}

impl ListView {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            filtered: Vec::new(),
            query: String::new(),
            pets: PetsFilter::All,
            page: 1,
        }
    }

    /// Replace the full collection (once, after the fetch completes).
    pub fn set_events(&mut self, events: Vec<Event>) {
        self.events = events;
        self.refilter();
    }

    pub fn set_query(&mut self, query: &str) {
        if self.query != query {
            self.query = query.to_string();
            self.refilter();
        }
    }

    pub fn set_pets_filter(&mut self, pets: PetsFilter) {
        if self.pets != pets {
            self.pets = pets;
            self.refilter();
        }
    }

    pub fn cycle_pets_filter(&mut self) {
        self.pets = self.pets.next();
        self.refilter();
    }

    pub fn pets_filter(&self) -> PetsFilter {
        self.pets
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn total_count(&self) -> usize {
        self.events.len()
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    /// Both predicates compose with AND; page resets to 1 on every change.
    fn refilter(&mut self) {
        self.filtered = self
            .events
            .iter()
            .enumerate()
            .filter(|(_, e)| matches_query(e, &self.query) && self.pets.matches(e))
            .map(|(i, _)| i)
            .collect();
        self.page = 1;
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// ceil(filtered / PAGE_SIZE); 0 when the filtered set is empty.
    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(PAGE_SIZE)
    }

    /// No-op on the last page (and while empty).
    pub fn next_page(&mut self) {
        if self.page < self.total_pages() {
            self.page += 1;
        }
    }

    /// No-op on the first page.
    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }

    /// Clamp an arbitrary 1-based page request into range (CLI `--page`).
    pub fn set_page(&mut self, page: usize) {
        let last = self.total_pages().max(1);
        self.page = page.clamp(1, last);
    }

    /// The records visible on the current page, at most PAGE_SIZE of them.
    pub fn page_window(&self) -> Vec<&Event> {
        let start = (self.page - 1) * PAGE_SIZE;
        self.filtered
            .iter()
            .skip(start)
            .take(PAGE_SIZE)
            .map(|&i| &self.events[i])
            .collect()
    }

    /// Every record passing the current filters, unpaged (export).
    pub fn filtered_events(&self) -> Vec<&Event> {
        self.filtered.iter().map(|&i| &self.events[i]).collect()
    }

    /// Pagination controls are only shown when there is more than one page.
    pub fn has_pagination(&self) -> bool {
        self.filtered.len() > PAGE_SIZE
    }
}
