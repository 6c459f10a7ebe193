// src/session.rs

use crate::controller::{FilterChange, PageDelta, ResultSetController, SearchTicket};
use crate::domain::{normalize_response, DerivedView, SortKey};
use crate::errors::SearchError;
use crate::provider::{SearchProvider, SearchRequest};
use serde_json::Value;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::time::Duration;

type Completion = (SearchTicket, Result<Value, SearchError>);

/// One browsing session: a controller plus the searches it has in flight.
///
/// Each search runs on its own thread and reports back over a channel. The
/// session applies completions in arrival order and the controller drops any
/// whose ticket is no longer the latest, so a slow early search can't
/// overwrite a newer one. Nothing is cancelled.
pub struct SearchSession<P: SearchProvider + 'static> {
    controller: ResultSetController,
    provider: Arc<P>,
    tx: Sender<Completion>,
    rx: Receiver<Completion>,
    outstanding: usize,
}

impl<P: SearchProvider + 'static> SearchSession<P> {
    pub fn new(provider: P, page_size: usize) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            controller: ResultSetController::new(page_size),
            provider: Arc::new(provider),
            tx,
            rx,
            outstanding: 0,
        }
    }

    pub fn controller(&self) -> &ResultSetController {
        &self.controller
    }

    pub fn is_searching(&self) -> bool {
        self.controller.is_searching()
    }

    /// Starts a search. Invalid input is rejected here and no request is
    /// sent; the error is also recorded on the controller for display.
    pub fn submit(&mut self, request: SearchRequest) -> Result<SearchTicket, SearchError> {
        if let Err(e) = request.validate() {
            tracing::info!(error = %e, "search rejected before sending");
            self.controller.on_validation_failed(e.clone());
            return Err(e);
        }

        let ticket = self.controller.begin_search();
        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();

        std::thread::spawn(move || {
            tracing::debug!(
                seq = ticket.sequence(),
                location = %request.location,
                "search thread started"
            );
            let result = provider.search(&request);
            // The session may be gone by now; nobody is left to tell.
            let _ = tx.send((ticket, result));
        });

        self.outstanding += 1;
        Ok(ticket)
    }

    /// Applies every completion that has already arrived. Never blocks.
    pub fn poll(&mut self) -> DerivedView {
        while let Ok(completion) = self.rx.try_recv() {
            self.apply(completion);
        }
        self.controller.view()
    }

    /// Blocks until the next completion arrives (or `timeout` passes) and
    /// applies it. Returns `None` when nothing is outstanding or on timeout.
    pub fn wait(&mut self, timeout: Duration) -> Option<DerivedView> {
        if self.outstanding == 0 {
            return None;
        }
        let completion = self.rx.recv_timeout(timeout).ok()?;
        Some(self.apply(completion))
    }

    /// Waits until every search issued so far has reported back.
    pub fn wait_all(&mut self, timeout: Duration) -> DerivedView {
        while self.outstanding > 0 {
            if self.wait(timeout).is_none() {
                tracing::warn!(
                    outstanding = self.outstanding,
                    "gave up waiting for searches"
                );
                break;
            }
        }
        self.controller.view()
    }

    fn apply(&mut self, (ticket, result): Completion) -> DerivedView {
        self.outstanding = self.outstanding.saturating_sub(1);
        match result {
            Ok(data) => {
                let listings = normalize_response(&data);
                self.controller.on_search_complete(ticket, listings)
            }
            Err(e) => self.controller.on_search_failed(ticket, e),
        }
    }

    pub fn on_filter_change(&mut self, change: FilterChange) -> DerivedView {
        self.controller.on_filter_change(change)
    }

    pub fn on_sort_change(&mut self, key: SortKey) -> DerivedView {
        self.controller.on_sort_change(key)
    }

    pub fn on_page_change(&mut self, delta: PageDelta) -> DerivedView {
        self.controller.on_page_change(delta)
    }
}
