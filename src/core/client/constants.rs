//! Centralized constants for default endpoints, UA and environment keys.

/// Identifies this crate to the API.
pub(crate) const USER_AGENT: &str = concat!("istocks-core/", env!("CARGO_PKG_VERSION"));

/// Financial Modeling Prep "stable" API base (resource names are joined beneath it).
pub(crate) const DEFAULT_BASE_URL: &str = "https://financialmodelingprep.com/stable/";

/// Resource name for the ticker search.
pub(crate) const SEARCH_NAME_PATH: &str = "search-name";

/// Resource name for the company profile.
pub(crate) const PROFILE_PATH: &str = "profile";

/// Resource name for the news articles feed.
pub(crate) const ARTICLES_PATH: &str = "fmp-articles";

/// Environment variable holding the API key.
pub(crate) const ENV_API_KEY: &str = "FMP_API_KEY";

/// Environment variable overriding the base URL.
pub(crate) const ENV_BASE_URL: &str = "FMP_BASE_URL";

/// Environment variable setting an overall request timeout, in seconds.
pub(crate) const ENV_TIMEOUT_SECS: &str = "FMP_TIMEOUT_SECS";
