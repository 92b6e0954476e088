//! Deterministic stand-ins for the network and the clock.

use super::{FetchError, NominatimResult, OsmService, OverpassResponse, Pause};
use std::cell::RefCell;
use std::time::Duration;

type SearchFn = Box<dyn Fn(&str) -> Result<Vec<NominatimResult>, FetchError>>;
type InterpretFn = Box<dyn Fn(&str, usize) -> Result<OverpassResponse, FetchError>>;

/// Scripted [`OsmService`]: `interpret` also receives the zero-based call index.
pub struct FakeService {
    search: SearchFn,
    interpret: InterpretFn,
    queries: RefCell<Vec<String>>,
}

impl FakeService {
    pub fn new(
        search: impl Fn(&str) -> Result<Vec<NominatimResult>, FetchError> + 'static,
        interpret: impl Fn(&str, usize) -> Result<OverpassResponse, FetchError> + 'static,
    ) -> Self {
        Self {
            search: Box::new(search),
            interpret: Box::new(interpret),
            queries: RefCell::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.borrow().clone()
    }
}

impl OsmService for FakeService {
    fn search(&self, address: &str) -> Result<Vec<NominatimResult>, FetchError> {
        (self.search)(address)
    }

    fn interpret(&self, query: &str) -> Result<OverpassResponse, FetchError> {
        let call = self.queries.borrow().len();
        self.queries.borrow_mut().push(query.to_string());
        (self.interpret)(query, call)
    }
}

/// Records requested pauses instead of sleeping
#[derive(Default)]
pub struct RecordingPause {
    waits: RefCell<Vec<Duration>>,
}

impl RecordingPause {
    pub fn waits(&self) -> Vec<Duration> {
        self.waits.borrow().clone()
    }

    pub fn total(&self) -> Duration {
        self.waits.borrow().iter().sum()
    }
}

impl Pause for RecordingPause {
    fn pause(&self, duration: Duration) {
        self.waits.borrow_mut().push(duration);
    }
}
