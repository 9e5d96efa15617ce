//! Public client surface + builder.
//! Defaults (base URL, UA, resource names, env keys) live in `constants`.

pub(crate) mod constants;

use crate::core::{ConfigError, FmpConfig, FmpError};
use crate::news::{ArticlesBuilder, NewsArticle};
use crate::profile::CompanyProfile;
use crate::search::TickerQuote;
use constants::{DEFAULT_BASE_URL, USER_AGENT};
use reqwest::Client;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Thin wrapper that holds a configured HTTP client, the base URL and the API key.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Clone)]
pub struct FmpClient {
    http: Client,
    base: Url,
    api_key: Arc<str>,
}

impl fmt::Debug for FmpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FmpClient")
            .field("base", &self.base.as_str())
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl FmpClient {
    /// Create a new builder.
    pub fn builder() -> FmpClientBuilder {
        FmpClientBuilder::default()
    }

    /// Build a client from `FMP_API_KEY` / `FMP_BASE_URL` / `FMP_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the key is missing or a setting is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = FmpConfig::from_env()?;
        Self::builder().config(&config).build()
    }

    /// The base URL resources are joined beneath.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// `{base}/{resource}?{params...}&apikey={key}`, every value percent-encoded.
    pub(crate) fn resource_url(
        &self,
        resource: &str,
        params: &[(&str, &str)],
    ) -> Result<Url, FmpError> {
        let mut url = self.base.join(resource)?;
        {
            let mut qp = url.query_pairs_mut();
            for (k, v) in params {
                qp.append_pair(k, v);
            }
            qp.append_pair("apikey", &self.api_key);
        }
        Ok(url)
    }

    /* -------- convenience methods -------- */

    /// Searches tickers by company name. See [`crate::search::search_by_name`].
    ///
    /// # Errors
    ///
    /// Returns an `FmpError` for any transport, status, decode or empty-result failure.
    pub async fn search_by_name(&self, query: &str) -> Result<Vec<TickerQuote>, FmpError> {
        crate::search::search_by_name(self, query).await
    }

    /// Fetches one company profile. See [`crate::profile::fetch_profile`].
    ///
    /// # Errors
    ///
    /// Returns an `FmpError` for any transport, status, decode or empty-result failure.
    pub async fn fetch_profile(&self, symbol: &str) -> Result<CompanyProfile, FmpError> {
        crate::profile::fetch_profile(self, symbol).await
    }

    /// Fetches one page of news articles. See [`crate::news::fetch_articles`].
    ///
    /// # Errors
    ///
    /// Returns an `FmpError` for any transport, status, decode or empty-result failure.
    pub async fn fetch_articles(&self, page: u32, limit: u32) -> Result<Vec<NewsArticle>, FmpError> {
        crate::news::fetch_articles(self, page, limit).await
    }

    /// Starts an articles request with the default page (0) and limit (20).
    pub fn articles(&self) -> ArticlesBuilder {
        ArticlesBuilder::new(self)
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct FmpClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    base_url_raw: Option<String>,
    api_key: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl fmt::Debug for FmpClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FmpClientBuilder")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish_non_exhaustive()
    }
}

impl FmpClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the API base (e.g., `https://financialmodelingprep.com/stable/`).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self.base_url_raw = None;
        self
    }

    /// Set the access credential.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Apply every setting present in `config`.
    #[must_use]
    pub fn config(mut self, config: &FmpConfig) -> Self {
        self.api_key = Some(config.api_key.clone());
        if let Some(raw) = &config.base_url {
            self.base_url = None;
            self.base_url_raw = Some(raw.clone());
        }
        if let Some(t) = config.timeout() {
            self.timeout = Some(t);
        }
        if let Some(ct) = config.connect_timeout() {
            self.connect_timeout = Some(ct);
        }
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingApiKey` without a non-blank key,
    /// `ConfigError::InvalidBaseUrl` for an unparsable base URL, and
    /// `ConfigError::Http` if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<FmpClient, ConfigError> {
        let api_key = self
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let mut base = match (self.base_url, self.base_url_raw) {
            (Some(url), _) => url,
            (None, Some(raw)) => Url::parse(&raw)?,
            (None, None) => Url::parse(DEFAULT_BASE_URL)?,
        };
        // resources are joined relative to the base, which drops a last segment without '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(FmpClient {
            http,
            base,
            api_key: Arc::from(api_key.trim()),
        })
    }
}
