use futures::future::BoxFuture;

use crate::core::{FmpClient, FmpError};
use crate::news::NewsArticle;
use crate::profile::CompanyProfile;
use crate::search::TickerQuote;

/// A trait for services that can answer the three market-data calls the controllers need.
///
/// This decouples the view-state controllers from the HTTP client, so a
/// presentation layer (or a test) can plug in another source. It is
/// implemented by [`FmpClient`].
pub trait MarketDataService: Send + Sync {
    /// Searches tickers whose company name matches `query`.
    fn search_by_name<'a>(
        &'a self,
        query: &'a str,
    ) -> BoxFuture<'a, Result<Vec<TickerQuote>, FmpError>>;

    /// Fetches the profile for `symbol`.
    fn fetch_profile<'a>(
        &'a self,
        symbol: &'a str,
    ) -> BoxFuture<'a, Result<CompanyProfile, FmpError>>;

    /// Fetches one page of news articles.
    fn fetch_articles(
        &self,
        page: u32,
        limit: u32,
    ) -> BoxFuture<'_, Result<Vec<NewsArticle>, FmpError>>;
}

impl MarketDataService for FmpClient {
    fn search_by_name<'a>(
        &'a self,
        query: &'a str,
    ) -> BoxFuture<'a, Result<Vec<TickerQuote>, FmpError>> {
        Box::pin(crate::search::search_by_name(self, query))
    }

    fn fetch_profile<'a>(
        &'a self,
        symbol: &'a str,
    ) -> BoxFuture<'a, Result<CompanyProfile, FmpError>> {
        Box::pin(crate::profile::fetch_profile(self, symbol))
    }

    fn fetch_articles(
        &self,
        page: u32,
        limit: u32,
    ) -> BoxFuture<'_, Result<Vec<NewsArticle>, FmpError>> {
        Box::pin(crate::news::fetch_articles(self, page, limit))
    }
}
