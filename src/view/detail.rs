use std::sync::Arc;

use tokio::sync::watch;

use crate::core::MarketDataService;
use crate::profile::CompanyProfile;
use crate::view::state::{LoadOutcome, LoadPhase, OnStart, StateCell, ViewState};

/// View state behind the company detail screen.
///
/// Loading clears the previous profile. A load started while one is in
/// flight is rejected.
pub struct DetailController {
    service: Arc<dyn MarketDataService>,
    state: StateCell<Option<CompanyProfile>>,
}

impl DetailController {
    /// Creates an idle controller backed by `service`.
    pub fn new(service: Arc<dyn MarketDataService>) -> Self {
        Self {
            service,
            state: StateCell::new(),
        }
    }

    /// Creates a controller that already shows `profile`, e.g. for previews.
    pub fn with_profile(service: Arc<dyn MarketDataService>, profile: CompanyProfile) -> Self {
        Self {
            service,
            state: StateCell::with_state(ViewState {
                phase: LoadPhase::Success,
                data: Some(profile),
                error: None,
            }),
        }
    }

    /// A snapshot of the current state.
    pub fn state(&self) -> ViewState<Option<CompanyProfile>> {
        self.state.snapshot()
    }

    /// A receiver that is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<ViewState<Option<CompanyProfile>>> {
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

    /// The loaded (or preloaded) profile, if any.
    pub fn profile(&self) -> Option<CompanyProfile> {
        self.state.snapshot().data
    }

    /// Cancels the load in flight, if any.
    pub fn cancel(&self) {
        self.state.cancel();
    }

    /// Loads the profile for `symbol`.
    pub async fn load(&self, symbol: &str) -> LoadOutcome {
        let service = &self.service;
        let outcome = self
            .state
            .run(OnStart::Clear, async move {
                service.fetch_profile(symbol).await.map(Some)
            })
            .await;

        #[cfg(feature = "tracing")]
        tracing::debug!(symbol, ?outcome, error = ?self.state.error(), "profile load finished");

        outcome
    }
}
