use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::{MarketDataError, Quote};

/// Split a batch body into one [`Quote`] per requested ticker, in request order.
///
/// The first ticker without an entry (or whose entry has no `quote` section) aborts
/// the whole batch with [`MarketDataError::InvalidTicker`]; partial results are
/// never returned.
pub(crate) fn demultiplex<S: AsRef<str>>(
    body: &str,
    tickers: &[S],
) -> Result<Vec<Quote>, MarketDataError> {
    let batch: Map<String, Value> = serde_json::from_str(body)
        .map_err(|e| MarketDataError::Parse(format!("batch body: {e}")))?;

    tickers
        .iter()
        .map(|ticker| {
            let ticker = ticker.as_ref();
            let quote = batch
                .get(ticker)
                .and_then(|entry| entry.get("quote"))
                .ok_or_else(|| MarketDataError::InvalidTicker(ticker.to_string()))?;
            Quote::deserialize(quote)
                .map_err(|e| MarketDataError::Parse(format!("quote for {ticker}: {e}")))
        })
        .collect()
}
