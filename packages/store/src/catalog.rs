//! # Catalog — the recipes page state machine
//!
//! [`Catalog`] owns everything the recipes page shows once the fetch has
//! completed: the full record set, the [`FilterState`], a
//! [`PaginationView`] over the positions that pass the filter, and the
//! [`DetailPresenter`] for the modal.
//!
//! ## Transitions
//!
//! | Operation | Effect |
//! |-----------|--------|
//! | [`load`](Catalog::load) | Replace the records, refilter, show the first page. |
//! | [`set_query`](Catalog::set_query) / [`set_cuisine`](Catalog::set_cuisine) / [`set_filter`](Catalog::set_filter) | Refilter, reset, show the first page. |
//! | [`show_more`](Catalog::show_more) | Reveal the next page. |
//! | [`open_detail`](Catalog::open_detail) / [`close_detail`](Catalog::close_detail) | Drive the modal. |
//!
//! Each transition is published as a [`CatalogEvent`] to listeners registered
//! with [`subscribe`](Catalog::subscribe).
//!
//! Debouncing the search box is not the catalog's concern: callers route
//! keystrokes through a [`crate::Debouncer`] and call `set_query` when it fires.

use std::ops::Range;

use tracing::debug;

use crate::detail::{DetailPresenter, RecipeCard, RecipeDetail};
use crate::error::Result;
use crate::events::{Listeners, Subscription};
use crate::filter::{cuisines, filter_indices, FilterState};
use crate::models::RecipeRecord;
use crate::pagination::PaginationView;

/// State changes published by a [`Catalog`].
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogEvent {
    /// A new filtered set replaced the old one; `revealed` is its first page.
    Refiltered { matched: usize, revealed: Range<usize> },
    /// "Load more" revealed these positions of the filtered set.
    Revealed(Range<usize>),
    DetailOpened(u32),
    DetailClosed,
}

pub struct Catalog {
    records: Vec<RecipeRecord>,
    filter: FilterState,
    page: PaginationView<usize>,
    detail: DetailPresenter,
    listeners: Listeners<CatalogEvent>,
}

impl Catalog {
    pub fn new(page_size: usize) -> Self {
        Self {
            records: Vec::new(),
            filter: FilterState::default(),
            page: PaginationView::new(page_size),
            detail: DetailPresenter::new(),
            listeners: Listeners::new(),
        }
    }

    /// Replace the record set. The current filter is kept and reapplied.
    pub fn load(&mut self, records: Vec<RecipeRecord>) {
        self.records = records;
        self.detail.dismiss();
        self.refilter();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query != self.filter.query {
            self.filter.query = query;
            self.refilter();
        }
    }

    pub fn set_cuisine(&mut self, cuisine: impl Into<String>) {
        let cuisine = cuisine.into();
        if cuisine != self.filter.cuisine {
            self.filter.cuisine = cuisine;
            self.refilter();
        }
    }

    pub fn set_filter(&mut self, filter: FilterState) {
        if filter != self.filter {
            self.filter = filter;
            self.refilter();
        }
    }

    /// Reveal the next page. Returns the newly revealed positions.
    pub fn show_more(&mut self) -> Range<usize> {
        let revealed = self.page.reveal_next();
        if !revealed.is_empty() {
            self.listeners.emit(&CatalogEvent::Revealed(revealed.clone()));
        }
        revealed
    }

    pub fn open_detail(&mut self, id: u32) -> Result<RecipeDetail> {
        let detail = self.detail.present(&self.records, id)?;
        self.listeners.emit(&CatalogEvent::DetailOpened(id));
        Ok(detail)
    }

    pub fn close_detail(&mut self) {
        if self.detail.is_open() {
            self.detail.dismiss();
            self.listeners.emit(&CatalogEvent::DetailClosed);
        }
    }

    /// Detail view of the recipe the modal currently shows.
    pub fn current_detail(&self) -> Option<RecipeDetail> {
        let id = self.detail.current()?;
        self.records
            .iter()
            .find(|r| r.id == id)
            .map(RecipeDetail::from)
    }

    /// Revealed recipes, in filtered order.
    pub fn visible(&self) -> impl Iterator<Item = &RecipeRecord> {
        self.page.visible().iter().map(|&i| &self.records[i])
    }

    pub fn visible_cards(&self) -> Vec<RecipeCard> {
        self.visible().map(RecipeCard::from).collect()
    }

    pub fn has_more(&self) -> bool {
        self.page.has_more()
    }

    pub fn displayed(&self) -> usize {
        self.page.displayed()
    }

    pub fn filtered_len(&self) -> usize {
        self.page.len()
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Distinct cuisines across all loaded records, sorted.
    pub fn cuisines(&self) -> Vec<String> {
        cuisines(&self.records)
    }

    #[must_use = "dropping the subscription unregisters the listener"]
    pub fn subscribe(&self, listener: impl FnMut(&CatalogEvent) + 'static) -> Subscription {
        self.listeners.subscribe(listener)
    }

    fn refilter(&mut self) {
        let matched = filter_indices(&self.records, &self.filter);
        let count = matched.len();
        let revealed = self.page.set_items(matched);
        debug!(
            query = %self.filter.query,
            cuisine = %self.filter.cuisine,
            matched = count,
            "Catalog refiltered"
        );
        self.listeners.emit(&CatalogEvent::Refiltered {
            matched: count,
            revealed,
        });
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(crate::pagination::DEFAULT_PAGE_SIZE)
    }
}
