mod api;
mod model;

pub use model::{ARTICLE_DATE_FORMAT, NewsArticle};

use crate::{FmpClient, FmpError};

/// Page index used when none is given.
pub const DEFAULT_PAGE: u32 = 0;
/// Page size used when none is given.
pub const DEFAULT_LIMIT: u32 = 20;

/// Fetches one page of the articles feed.
///
/// Issues `GET {base}/fmp-articles?page={page}&limit={limit}&apikey={key}`.
///
/// # Errors
///
/// Returns `FmpError::EmptyResult` for an empty page, `FmpError::DecodeFailure`
/// if the body is not an array of articles, `FmpError::RemoteError` (from an
/// `{"error": ...}` body or the raw body text) or `FmpError::UnexpectedStatus`
/// on a non-2xx status, and `FmpError::TransportFailure` if the request fails.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn fetch_articles(
    client: &FmpClient,
    page: u32,
    limit: u32,
) -> Result<Vec<NewsArticle>, FmpError> {
    api::fetch_articles(client, page, limit).await
}

/// A builder for fetching a page of news articles.
#[derive(Debug, Clone)]
pub struct ArticlesBuilder {
    client: FmpClient,
    page: u32,
    limit: u32,
}

impl ArticlesBuilder {
    /// Creates a new `ArticlesBuilder` for page 0 with 20 articles.
    pub fn new(client: &FmpClient) -> Self {
        Self {
            client: client.clone(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Sets the zero-based page index.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the maximum number of articles to return.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Executes the request and fetches the articles.
    ///
    /// # Errors
    ///
    /// See [`fetch_articles`].
    pub async fn fetch(self) -> Result<Vec<NewsArticle>, FmpError> {
        api::fetch_articles(&self.client, self.page, self.limit).await
    }
}
