#[cfg(feature = "test-mode")]
use std::env;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use crate::core::{FmpClient, FmpError, wire};

/// Read the response body as text.
/// In `test-mode`, if `FMP_RECORD=1`, the body is saved as a fixture.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _endpoint: &str,
    _key: &str,
    _ext: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if env::var("FMP_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_endpoint, _key, _ext, &text)
        {
            eprintln!("FMP_RECORD: failed to write fixture for {_key}: {e}");
        }
    }

    Ok(text)
}

/// GET `url` and decode a JSON array of `T`.
///
/// The status is checked before the body is decoded; only 200..=299 counts as success.
pub(crate) async fn get_json_array<T: DeserializeOwned>(
    client: &FmpClient,
    url: Url,
    endpoint: &str,
    key: &str,
) -> Result<Vec<T>, FmpError> {
    let resp = client
        .http()
        .get(url)
        .header("accept", "application/json")
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(status_error(status, resp, endpoint, key).await);
    }

    let body = get_text(resp, endpoint, key, "json").await?;
    decode_array(&body)
}

/// Non-2xx: structured `{error}` body, then raw body text, then the bare status.
async fn status_error(
    status: StatusCode,
    resp: reqwest::Response,
    endpoint: &str,
    key: &str,
) -> FmpError {
    let code = status.as_u16();
    let endpoint = format!("{endpoint}_status{code}");

    let Ok(body) = get_text(resp, &endpoint, key, "txt").await else {
        return FmpError::UnexpectedStatus(code);
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(status = code, body_len = body.len(), "non-success response");

    if let Some(message) = wire::error_message(&body) {
        return FmpError::RemoteError(message);
    }
    let raw = body.trim();
    if raw.is_empty() {
        FmpError::UnexpectedStatus(code)
    } else {
        FmpError::RemoteError(raw.to_string())
    }
}

/// Decode a success body. An error envelope where the array should be is a
/// service-level error, anything else that does not fit is a decode failure.
pub(crate) fn decode_array<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, FmpError> {
    match serde_json::from_str::<Vec<T>>(body) {
        Ok(items) => Ok(items),
        Err(e) => match wire::error_message(body) {
            Some(message) => Err(FmpError::RemoteError(message)),
            None => Err(FmpError::DecodeFailure(e)),
        },
    }
}
