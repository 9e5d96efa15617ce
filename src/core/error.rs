use thiserror::Error;

/// The primary error type for every remote call made by this crate.
///
/// The `Display` output of each variant is the user-facing message. It never
/// contains the request URL, so the API key cannot leak through it.
#[derive(Debug, Error)]
pub enum FmpError {
    /// The request URL could not be built from the base URL and parameters.
    #[error("The URL was malformed. Please check the address.")]
    MalformedRequest(#[from] url::ParseError),

    /// The server answered outside 200..=299 and the body carried no usable message.
    #[error("Received an invalid response from the server. Status code: {0}")]
    UnexpectedStatus(u16),

    /// The service reported an error in the response body.
    #[error("API Error: {0}. Please check your API key or try again later.")]
    RemoteError(String),

    /// A success response did not match the expected JSON shape.
    #[error("Failed to process data from the server. {0}")]
    DecodeFailure(#[from] serde_json::Error),

    /// The HTTP exchange itself failed (DNS, TLS, timeout, reset, ...).
    #[error("Network request failed: {0}")]
    TransportFailure(reqwest::Error),

    /// The call succeeded but returned no records.
    #[error("No matching results were found.")]
    EmptyResult,
}

impl From<reqwest::Error> for FmpError {
    fn from(e: reqwest::Error) -> Self {
        // the URL carries `apikey`
        FmpError::TransportFailure(e.without_url())
    }
}

impl FmpError {
    /// The message a presentation layer may show for this error.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// The HTTP status attached to this error, if any.
    pub const fn status(&self) -> Option<u16> {
        match self {
            FmpError::UnexpectedStatus(code) => Some(*code),
            _ => None,
        }
    }
}

/// Errors raised while assembling an [`FmpClient`](crate::FmpClient).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No API key was configured, or it was blank.
    #[error("no API key configured (set FMP_API_KEY or call `api_key`)")]
    MissingApiKey,

    /// The base URL could not be parsed.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// A numeric setting read from the environment was not a number.
    #[error("invalid value for {name}: {value:?}")]
    InvalidSetting {
        /// The environment variable or config key.
        name: &'static str,
        /// The rejected value.
        value: String,
    },

    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The config file was not valid JSON for [`FmpConfig`](crate::FmpConfig).
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    /// The underlying HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}
