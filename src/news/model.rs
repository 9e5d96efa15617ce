use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::core::LocalId;

/// Layout of [`NewsArticle::date`].
pub const ARTICLE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Represents a single article from the news feed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NewsArticle {
    /// Row key for UI lists; not part of equality, hashing or JSON.
    #[serde(skip)]
    pub id: LocalId,
    /// The headline of the article.
    pub title: String,
    /// Publication time exactly as sent (`yyyy-MM-dd HH:mm:ss`).
    pub date: String,
    /// The article body. It contains HTML and is kept as opaque, untrusted text.
    pub content: String,
    /// Related tickers as one string, e.g. `"NYSE:BAC, NASDAQ:AAPL"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tickers: Option<String>,
    /// URL of the lead image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// A direct link to the article.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// The publishing site (e.g., "Financial Modeling Prep").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
}

impl NewsArticle {
    /// Parses [`date`](Self::date); `None` if it does not follow [`ARTICLE_DATE_FORMAT`].
    pub fn published_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(self.date.trim(), ARTICLE_DATE_FORMAT).ok()
    }

    /// The `tickers` string split on commas, trimmed, empties dropped.
    pub fn ticker_symbols(&self) -> Vec<&str> {
        self.tickers
            .as_deref()
            .map(|t| {
                t.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}
