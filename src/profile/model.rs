use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{LocalId, wire};

/// Extended descriptive and financial metadata for one company or instrument.
///
/// Only `symbol` and `company_name` are required; every other field may be
/// absent in the payload and decodes to `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    /// Row key for UI lists; not part of equality, hashing or JSON.
    #[serde(skip)]
    pub id: LocalId,
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beta: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_dividend: Option<f64>,
    /// 52-week range as sent by the API, e.g. `"142.66-208.7"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_volume: Option<f64>,
    pub company_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange_full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ceo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Sent as a string (e.g. `"164000"`); a bare number is accepted too.
    #[serde(
        default,
        deserialize_with = "wire::de_opt_string_from_any",
        skip_serializing_if = "Option::is_none"
    )]
    pub full_time_employees: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    /// Logo URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipo_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_etf: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_actively_trading: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_adr: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_fund: Option<bool>,
}

impl CompanyProfile {
    /// A profile with only the required fields set.
    pub fn new(symbol: impl Into<String>, company_name: impl Into<String>) -> Self {
        Self {
            id: LocalId::new(),
            symbol: symbol.into(),
            price: None,
            market_cap: None,
            beta: None,
            last_dividend: None,
            range: None,
            change: None,
            change_percentage: None,
            volume: None,
            average_volume: None,
            company_name: company_name.into(),
            currency: None,
            exchange_full_name: None,
            exchange: None,
            industry: None,
            website: None,
            description: None,
            ceo: None,
            sector: None,
            country: None,
            full_time_employees: None,
            phone: None,
            address: None,
            city: None,
            state: None,
            zip: None,
            image: None,
            ipo_date: None,
            is_etf: None,
            is_actively_trading: None,
            is_adr: None,
            is_fund: None,
        }
    }

    /// The 52-week `range` split into `(low, high)`.
    ///
    /// Returns `None` if the range is absent or not of the form `"low-high"`.
    pub fn range_bounds(&self) -> Option<(f64, f64)> {
        let raw = self.range.as_deref()?.trim();
        // skip the first char so a leading minus sign is not taken as the separator
        let split = raw.char_indices().skip(1).find(|&(_, c)| c == '-')?.0;
        let low = raw[..split].trim().parse::<f64>().ok()?;
        let high = raw[split + 1..].trim().parse::<f64>().ok()?;
        Some((low, high))
    }

    /// The IPO date, if present and well-formed.
    pub fn ipo_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.ipo_date.as_deref()?, "%Y-%m-%d").ok()
    }
}

fn hash_f64<H: Hasher>(value: Option<f64>, state: &mut H) {
    value.map(f64::to_bits).hash(state);
}

impl Hash for CompanyProfile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbol.hash(state);
        hash_f64(self.price, state);
        hash_f64(self.market_cap, state);
        hash_f64(self.beta, state);
        hash_f64(self.last_dividend, state);
        self.range.hash(state);
        hash_f64(self.change, state);
        hash_f64(self.change_percentage, state);
        hash_f64(self.volume, state);
        hash_f64(self.average_volume, state);
        self.company_name.hash(state);
        self.currency.hash(state);
        self.exchange_full_name.hash(state);
        self.exchange.hash(state);
        self.industry.hash(state);
        self.website.hash(state);
        self.description.hash(state);
        self.ceo.hash(state);
        self.sector.hash(state);
        self.country.hash(state);
        self.full_time_employees.hash(state);
        self.phone.hash(state);
        self.address.hash(state);
        self.city.hash(state);
        self.state.hash(state);
        self.zip.hash(state);
        self.image.hash(state);
        self.ipo_date.hash(state);
        self.is_etf.hash(state);
        self.is_actively_trading.hash(state);
        self.is_adr.hash(state);
        self.is_fund.hash(state);
    }
}
