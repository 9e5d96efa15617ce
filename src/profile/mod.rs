//! Company profile type + loader.

mod api;
mod model;

pub use model::CompanyProfile;

use crate::core::{FmpClient, FmpError};

/// Loads the profile for a given symbol.
///
/// Issues `GET {base}/profile?symbol={symbol}&apikey={key}` and returns the
/// first element of the response array; further elements are ignored.
///
/// # Errors
///
/// Returns `FmpError::EmptyResult` if the array is empty, `FmpError::DecodeFailure`
/// if it does not hold profiles, `FmpError::RemoteError` or
/// `FmpError::UnexpectedStatus` on a non-2xx status, and
/// `FmpError::TransportFailure` if the request itself fails.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn fetch_profile(client: &FmpClient, symbol: &str) -> Result<CompanyProfile, FmpError> {
    api::load_profile(client, symbol).await
}
