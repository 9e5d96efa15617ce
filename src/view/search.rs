use std::sync::Arc;

use tokio::sync::watch;

use crate::core::MarketDataService;
use crate::search::TickerQuote;
use crate::view::state::{LoadOutcome, OnStart, StateCell, ViewState};

/// Stored when the search term is blank; no request is made.
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a stock symbol or name.";

/// View state behind the search screen.
///
/// Starting a search clears the previous results. A search started while one
/// is in flight is rejected.
pub struct SearchController {
    service: Arc<dyn MarketDataService>,
    state: StateCell<Vec<TickerQuote>>,
}

impl SearchController {
    /// Creates an idle controller backed by `service`.
    pub fn new(service: Arc<dyn MarketDataService>) -> Self {
        Self {
            service,
            state: StateCell::new(),
        }
    }

    /// A snapshot of the current state.
    pub fn state(&self) -> ViewState<Vec<TickerQuote>> {
        self.state.snapshot()
    }

    /// A receiver that is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<ViewState<Vec<TickerQuote>>> {
        self.state.subscribe()
    }

    /// Whether a load is in flight.
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// The message stored by the last failed attempt, if any.
    pub fn error_message(&self) -> Option<String> {
        self.state.error()
    }

    /// The results of the last successful search; empty otherwise.
    pub fn results(&self) -> Vec<TickerQuote> {
        self.state.snapshot().data
    }

    /// Cancels the search in flight, if any.
    pub fn cancel(&self) {
        self.state.cancel();
    }

    /// Searches for `query` after trimming surrounding whitespace.
    ///
    /// A blank query fails immediately with [`EMPTY_QUERY_MESSAGE`].
    pub async fn search(&self, query: &str) -> LoadOutcome {
        let term = query.trim();
        let outcome = if term.is_empty() {
            self.state.fail_fast(EMPTY_QUERY_MESSAGE, OnStart::Clear)
        } else {
            self.state
                .run(OnStart::Clear, self.service.search_by_name(term))
                .await
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(query = term, ?outcome, error = ?self.state.error(), "search finished");

        outcome
    }
}
