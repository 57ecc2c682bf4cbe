use url::Url;

use crate::core::client::constants::{BATCH_PATH, BATCH_TYPES};
use crate::core::{MarketDataConfig, MarketDataError};

/// Build the batch quote URL for `tickers`.
///
/// Produces `<host>/stock/market/batch?symbols=<csv>&types=quote&token=<token>`,
/// keeping any path prefix already present on the host. No I/O is performed.
///
/// # Errors
///
/// Returns [`MarketDataError::InvalidInput`] if `tickers` is empty or contains a
/// blank symbol.
pub fn batch_url<S: AsRef<str>>(
    config: &MarketDataConfig,
    tickers: &[S],
) -> Result<Url, MarketDataError> {
    if tickers.is_empty() {
        return Err(MarketDataError::InvalidInput(
            "at least one ticker required".into(),
        ));
    }
    if let Some(pos) = tickers.iter().position(|t| t.as_ref().trim().is_empty()) {
        return Err(MarketDataError::InvalidInput(format!(
            "ticker at position {pos} is empty"
        )));
    }

    let symbols = tickers
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",");

    let mut url = config.host().clone();
    url.set_query(None);
    url.path_segments_mut()
        .map_err(|()| {
            MarketDataError::Config(format!("host {} cannot carry a path", config.host()))
        })?
        .pop_if_empty()
        .extend(BATCH_PATH);
    url.query_pairs_mut()
        .append_pair("symbols", &symbols)
        .append_pair("types", BATCH_TYPES)
        .append_pair("token", config.token());

    Ok(url)
}
