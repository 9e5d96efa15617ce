mod model;

pub use model::TickerQuote;

use crate::core::client::constants::SEARCH_NAME_PATH;
use crate::core::{FmpClient, FmpError, net};

/* ---------------- Public API ---------------- */

/// Searches for tickers whose company name matches `query`.
///
/// Issues `GET {base}/search-name?query={query}&apikey={key}`; the query is
/// sent as given, percent-encoded.
///
/// # Errors
///
/// Returns `FmpError::EmptyResult` when nothing matches, `FmpError::DecodeFailure`
/// when the body is not an array of quotes, `FmpError::UnexpectedStatus` or
/// `FmpError::RemoteError` on a non-2xx status, and `FmpError::TransportFailure`
/// if the request itself fails.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn search_by_name(client: &FmpClient, query: &str) -> Result<Vec<TickerQuote>, FmpError> {
    let url = client.resource_url(SEARCH_NAME_PATH, &[("query", query)])?;
    let quotes: Vec<TickerQuote> =
        net::get_json_array(client, url, SEARCH_NAME_PATH, query).await?;
    if quotes.is_empty() {
        return Err(FmpError::EmptyResult);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(count = quotes.len(), "search returned quotes");

    Ok(quotes)
}
