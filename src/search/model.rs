use serde::{Deserialize, Serialize};

use crate::core::LocalId;

/// A tradable instrument as returned by the name search.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerQuote {
    /// Row key for UI lists; not part of equality, hashing or JSON.
    #[serde(skip)]
    pub id: LocalId,
    /// The ticker symbol (e.g., "AAPL").
    pub symbol: String,
    /// The display name (e.g., "Apple Inc.").
    pub name: String,
    /// The trading currency code (e.g., "USD").
    pub currency: String,
    /// The exchange short code (e.g., "NASDAQ").
    pub exchange: String,
    /// The exchange full name (e.g., "NASDAQ Global Select").
    pub exchange_full_name: String,
}
