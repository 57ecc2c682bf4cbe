use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/* ----- QUOTE (one ticker's snapshot from the batch endpoint) ----- */

/// A market snapshot for one ticker at fetch time.
///
/// The commonly used IEX fields are typed; every other field the upstream sends
/// lands in [`Quote::extra`], so new upstream fields never break deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Empty when the upstream omits it.
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub primary_exchange: Option<String>,
    #[serde(default)]
    pub calculation_price: Option<String>,

    #[serde(default)]
    pub open: Option<f64>,
    #[serde(default)]
    pub close: Option<f64>,
    #[serde(default)]
    pub high: Option<f64>,
    #[serde(default)]
    pub low: Option<f64>,
    #[serde(default)]
    pub previous_close: Option<f64>,

    #[serde(default)]
    pub latest_price: Option<f64>,
    #[serde(default)]
    pub latest_source: Option<String>,
    /// Epoch milliseconds of the last price update.
    #[serde(default)]
    pub latest_update: Option<i64>,
    #[serde(default)]
    pub latest_volume: Option<f64>,

    #[serde(default)]
    pub change: Option<f64>,
    #[serde(default)]
    pub change_percent: Option<f64>,
    #[serde(default)]
    pub volume: Option<f64>,
    #[serde(default)]
    pub avg_total_volume: Option<f64>,

    #[serde(default)]
    pub iex_bid_price: Option<f64>,
    #[serde(default)]
    pub iex_bid_size: Option<f64>,
    #[serde(default)]
    pub iex_ask_price: Option<f64>,
    #[serde(default)]
    pub iex_ask_size: Option<f64>,

    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub pe_ratio: Option<f64>,
    #[serde(default, rename = "week52High")]
    pub week52_high: Option<f64>,
    #[serde(default, rename = "week52Low")]
    pub week52_low: Option<f64>,
    #[serde(default)]
    pub ytd_change: Option<f64>,
    #[serde(default, rename = "isUSMarketOpen")]
    pub is_us_market_open: Option<bool>,

    /// Fields not modelled above, kept verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Quote {
    /// `latest_update` as a UTC timestamp.
    pub fn latest_update_at(&self) -> Option<DateTime<Utc>> {
        self.latest_update.and_then(DateTime::from_timestamp_millis)
    }

    /// Look up a field that is not modelled on the struct.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.extra.get(field)
    }
}
