// src/controller.rs

use crate::domain::{
    derive_view, DerivedView, Listing, ResultSet, SortKey, StructuredFilters, ViewState,
};
use crate::errors::SearchError;

/// Handed out when a search starts; the completion must bring it back.
/// Only the most recently issued ticket is ever applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchTicket(u64);

impl SearchTicket {
    pub fn sequence(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ControllerState {
    /// No search has completed yet.
    Idle,
    Loaded(ResultSet),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDelta {
    Previous,
    Next,
}

/// A partial update to the filter part of the view state. Fields left as
/// `None` keep their current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterChange {
    pub filter_text: Option<String>,
    pub structured_filters: Option<StructuredFilters>,
}

impl FilterChange {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            filter_text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn structured(filters: StructuredFilters) -> Self {
        Self {
            structured_filters: Some(filters),
            ..Default::default()
        }
    }
}

/// Owns the current result set and view state and answers every event with a
/// freshly computed view. Does no I/O.
#[derive(Debug)]
pub struct ResultSetController {
    state: ControllerState,
    view_state: ViewState,
    last_issued: u64,
    in_flight: Option<SearchTicket>,
    last_error: Option<SearchError>,
}

impl ResultSetController {
    pub fn new(page_size: usize) -> Self {
        Self {
            state: ControllerState::Idle,
            view_state: ViewState::new(page_size),
            last_issued: 0,
            in_flight: None,
            last_error: None,
        }
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    /// True while the latest issued search hasn't come back.
    pub fn is_searching(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The failure from the latest search, if it failed. Cleared by the next
    /// successful completion.
    pub fn last_error(&self) -> Option<&SearchError> {
        self.last_error.as_ref()
    }

    pub fn begin_search(&mut self) -> SearchTicket {
        self.last_issued += 1;
        let ticket = SearchTicket(self.last_issued);
        self.in_flight = Some(ticket);
        tracing::debug!(seq = ticket.0, "search started");
        ticket
    }

    fn is_latest(&self, ticket: SearchTicket) -> bool {
        ticket.0 == self.last_issued
    }

    pub fn on_search_complete(
        &mut self,
        ticket: SearchTicket,
        listings: Vec<Listing>,
    ) -> DerivedView {
        if !self.is_latest(ticket) {
            tracing::debug!(
                seq = ticket.0,
                latest = self.last_issued,
                "discarding stale search result"
            );
            return self.view();
        }

        tracing::info!(seq = ticket.0, count = listings.len(), "search results applied");
        self.state = ControllerState::Loaded(ResultSet::new(listings));
        self.in_flight = None;
        self.last_error = None;
        self.view_state.page_index = 1;
        self.view()
    }

    /// Records the failure for display. The result set and view state stay as
    /// they were, so the previous view remains renderable.
    pub fn on_search_failed(
        &mut self,
        ticket: SearchTicket,
        error: SearchError,
    ) -> DerivedView {
        if !self.is_latest(ticket) {
            tracing::debug!(seq = ticket.0, "discarding stale search failure");
            return self.view();
        }

        tracing::warn!(seq = ticket.0, error = %error, "search failed");
        self.in_flight = None;
        self.last_error = Some(error);
        self.view()
    }

    /// Validation failures happen before a ticket exists.
    pub fn on_validation_failed(&mut self, error: SearchError) -> DerivedView {
        self.last_error = Some(error);
        self.view()
    }

    pub fn on_filter_change(&mut self, change: FilterChange) -> DerivedView {
        if let Some(text) = change.filter_text {
            self.view_state.filter_text = text;
        }
        if let Some(filters) = change.structured_filters {
            self.view_state.structured_filters = filters;
        }
        self.view_state.page_index = 1;
        self.view()
    }

    pub fn on_sort_change(&mut self, key: SortKey) -> DerivedView {
        self.view_state.sort_key = key;
        self.view_state.page_index = 1;
        self.view()
    }

    /// Moves one page. A move past either end leaves the page where it is.
    pub fn on_page_change(&mut self, delta: PageDelta) -> DerivedView {
        let current = self.view();
        let target = match delta {
            PageDelta::Previous => current.page_index.checked_sub(1),
            PageDelta::Next => current.page_index.checked_add(1),
        };

        match target {
            Some(page) if (1..=current.total_pages).contains(&page) => {
                self.view_state.page_index = page;
                self.view()
            }
            _ => {
                self.view_state.page_index = current.page_index;
                current
            }
        }
    }

    /// The view for the current result set and view state. `Idle` renders as
    /// an empty result set.
    pub fn view(&self) -> DerivedView {
        let view = match &self.state {
            ControllerState::Idle => derive_view(&ResultSet::default(), &self.view_state),
            ControllerState::Loaded(set) => derive_view(set, &self.view_state),
        };
        tracing::debug!(
            page = view.page_index,
            total_pages = view.total_pages,
            filtered = view.filtered_count,
            "view recomputed"
        );
        view
    }

    /// Number of pages the current filters produce.
    pub fn total_pages(&self) -> usize {
        self.view().total_pages
    }
}
