//! Externally supplied client settings (environment or JSON file).

use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::core::ConfigError;
use crate::core::client::constants::{ENV_API_KEY, ENV_BASE_URL, ENV_TIMEOUT_SECS};

/// Settings for an [`FmpClient`](crate::FmpClient).
///
/// The API key is never compiled into the crate; it has to come from here or
/// from [`FmpClientBuilder::api_key`](crate::FmpClientBuilder::api_key).
#[derive(Clone, Default, Deserialize)]
pub struct FmpConfig {
    /// Access credential sent as the `apikey` query parameter.
    #[serde(default)]
    pub api_key: String,
    /// Overrides the default `https://financialmodelingprep.com/stable/`.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Overall request timeout in seconds. Unset means no timeout.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Connect timeout in seconds. Unset means no timeout.
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
}

impl fmt::Debug for FmpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FmpConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

impl FmpConfig {
    /// Reads `FMP_API_KEY`, `FMP_BASE_URL` and `FMP_TIMEOUT_SECS` from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingApiKey` if the key is unset or blank, and
    /// `ConfigError::InvalidSetting` if the timeout is not a whole number of seconds.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`from_env`](Self::from_env).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(ENV_API_KEY)
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let base_url = lookup(ENV_BASE_URL).filter(|u| !u.trim().is_empty());

        let timeout_secs = match lookup(ENV_TIMEOUT_SECS) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|_| {
                ConfigError::InvalidSetting {
                    name: ENV_TIMEOUT_SECS,
                    value: raw.clone(),
                }
            })?),
            None => None,
        };

        Ok(Self {
            api_key,
            base_url,
            timeout_secs,
            connect_timeout_secs: None,
        })
    }

    /// Loads settings from a JSON file such as
    /// `{"api_key": "...", "base_url": "...", "timeout_secs": 10}`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` or `ConfigError::Parse` if the file cannot be
    /// read or decoded, and `ConfigError::MissingApiKey` if it has no key.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: FmpConfig = serde_json::from_str(&content)?;
        if config.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(config)
    }

    pub(crate) fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub(crate) fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }
}
