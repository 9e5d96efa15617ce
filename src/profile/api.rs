//! `/profile` API path.

use crate::core::client::constants::PROFILE_PATH;
use crate::core::{FmpClient, FmpError, net};

use super::CompanyProfile;

/// The API answers with an array even for a single symbol; element 0 wins.
pub(super) async fn load_profile(
    client: &FmpClient,
    symbol: &str,
) -> Result<CompanyProfile, FmpError> {
    let url = client.resource_url(PROFILE_PATH, &[("symbol", symbol)])?;
    let profiles: Vec<CompanyProfile> =
        net::get_json_array(client, url, PROFILE_PATH, symbol).await?;

    let profile = profiles.into_iter().next().ok_or(FmpError::EmptyResult)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(company = %profile.company_name, "decoded profile");

    Ok(profile)
}
