use crate::domain::Listing;
use crate::errors::SearchError;
use crate::provider::{SearchProvider, SearchRequest};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};

/// A listing with the fields the engines look at.
pub fn listing(id: &str, price: Option<u64>, sqft: Option<u64>, kind: &str) -> Listing {
    let mut l = Listing::new(id, format!("{kind} at {id}"));
    l.price = price;
    l.size_sqft = sqft;
    l.property_type = kind.to_string();
    l
}

pub fn ids(listings: &[Listing]) -> Vec<&str> {
    listings.iter().map(|l| l.id.as_str()).collect()
}

/// Provider that answers from a fixed table keyed by location. A location
/// can be gated, in which case its answer waits until the test releases it.
#[derive(Default)]
pub struct FakeProvider {
    responses: HashMap<String, Result<Value, SearchError>>,
    gates: Mutex<HashMap<String, Receiver<()>>>,
    calls: Arc<AtomicUsize>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, location: &str, response: Result<Value, SearchError>) -> Self {
        self.responses.insert(location.to_string(), response);
        self
    }

    /// Holds the answer for `location` until the returned sender fires.
    pub fn gate(self, location: &str) -> (Self, Sender<()>) {
        let (tx, rx) = mpsc::channel();
        self.gates
            .lock()
            .unwrap()
            .insert(location.to_string(), rx);
        (self, tx)
    }

    /// Shared call counter; still readable after the provider moves into a session.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl SearchProvider for FakeProvider {
    fn search(&self, request: &SearchRequest) -> Result<Value, SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let gate = self.gates.lock().unwrap().remove(&request.location);
        if let Some(rx) = gate {
            let _ = rx.recv();
        }

        self.responses
            .get(&request.location)
            .cloned()
            .unwrap_or_else(|| Err(SearchError::Http { status: 404, body: String::new() }))
    }
}
