use std::sync::Arc;

use tokio::sync::watch;

use crate::core::MarketDataService;
use crate::news::{DEFAULT_LIMIT, DEFAULT_PAGE, NewsArticle};
use crate::view::state::{LoadOutcome, OnStart, StateCell, ViewState};

/// View state behind the news feed.
///
/// The current articles stay visible while a refresh is in flight and are
/// replaced wholesale when it succeeds. A refresh started while one is in
/// flight (e.g. a repeated pull-to-refresh) is rejected.
pub struct NewsController {
    service: Arc<dyn MarketDataService>,
    state: StateCell<Vec<NewsArticle>>,
    page: u32,
    limit: u32,
}

impl NewsController {
    /// Creates an idle controller for page 0 with 20 articles.
    pub fn new(service: Arc<dyn MarketDataService>) -> Self {
        Self {
            service,
            state: StateCell::new(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Sets the page index requested on refresh.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the page size requested on refresh.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// A snapshot of the current state.
    pub fn state(&self) -> ViewState<Vec<NewsArticle>> {
        self.state.snapshot()
    }

    /// A receiver that is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<ViewState<Vec<NewsArticle>>> {
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

    /// The articles currently on screen.
    pub fn articles(&self) -> Vec<NewsArticle> {
        self.state.snapshot().data
    }

    /// Cancels the refresh in flight, if any.
    pub fn cancel(&self) {
        self.state.cancel();
    }

    /// Fetches the configured page and replaces the feed with it.
    pub async fn refresh(&self) -> LoadOutcome {
        let outcome = self
            .state
            .run(
                OnStart::Keep,
                self.service.fetch_articles(self.page, self.limit),
            )
            .await;

        #[cfg(feature = "tracing")]
        tracing::debug!(page = self.page, limit = self.limit, ?outcome, error = ?self.state.error(), "feed refresh finished");

        outcome
    }
}
