use serde::{Deserialize, Deserializer};

/// Service-level error envelope, e.g. `{"error": "rate limited"}`.
#[derive(Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(alias = "Error Message")]
    pub(crate) error: String,
}

/// The message carried by a structured error body, if `body` is one.
pub(crate) fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .map(|b| b.error.trim().to_string())
        .filter(|m| !m.is_empty())
}

/// Accepts `"164000"` as well as `164000`; `null` is absent, any other type is an error.
pub(crate) fn de_opt_string_from_any<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum AnyScalar {
        Str(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Option::<AnyScalar>::deserialize(deserializer)? {
        Some(AnyScalar::Str(s)) => Some(s),
        Some(AnyScalar::Int(n)) => Some(n.to_string()),
        Some(AnyScalar::Float(f)) => Some(f.to_string()),
        None => None,
    })
}
