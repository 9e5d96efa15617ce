//! istocks-core: data-fetch and view-state layer for a Financial Modeling Prep stock browser.
//!
//! - [`FmpClient`] issues the three supported calls (ticker search, company
//!   profile, news articles), validates the HTTP status and decodes the JSON
//!   body, reporting every failure as an [`FmpError`].
//! - [`view`] holds one controller per screen. Each drives the client through
//!   the [`MarketDataService`] trait and publishes a [`view::ViewState`] for the
//!   presentation layer to render.
//!
//! The API key is never embedded: supply it with [`FmpClientBuilder::api_key`],
//! an [`FmpConfig`] file, or the `FMP_API_KEY` environment variable.
//!
//! ```no_run
//! use std::sync::Arc;
//! use istocks_core::{FmpClient, view::SearchController};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = FmpClient::from_env()?;
//! let search = SearchController::new(Arc::new(client));
//! search.search("Apple").await;
//! for quote in search.results() {
//!     println!("{} {}", quote.symbol, quote.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod news;
pub mod profile;
pub mod search;
pub mod view;

pub use crate::core::{
    ConfigError, FmpClient, FmpClientBuilder, FmpConfig, FmpError, LocalId, MarketDataService,
};
pub use news::{ArticlesBuilder, NewsArticle};
pub use profile::CompanyProfile;
pub use search::TickerQuote;
