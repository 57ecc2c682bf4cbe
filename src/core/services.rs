use core::future::Future;
use core::pin::Pin;

use crate::core::{MarketDataError, Quote};

/// Boxed future returned by [`QuoteRepository`] methods.
pub type RepoFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, MarketDataError>> + Send + 'a>>;

/// Read-only access to quotes keyed by ticker.
///
/// Implementors provide the batch path; the single-ticker lookup is derived from it
/// and enforces the one-ticker-one-quote invariant.
pub trait QuoteRepository: Send + Sync {
    /// Fetch one quote per ticker, in input order.
    ///
    /// # Errors
    ///
    /// Fails with [`MarketDataError::InvalidInput`] for an empty slice and with
    /// [`MarketDataError::InvalidTicker`] if any ticker is absent from the response.
    fn find_many<'a>(&'a self, tickers: &'a [String]) -> RepoFuture<'a, Vec<Quote>>;

    /// Fetch a single ticker's quote; `Ok(None)` when the upstream has no data.
    ///
    /// # Errors
    ///
    /// Propagates batch failures, and fails with [`MarketDataError::DataIntegrity`]
    /// if the batch path yields more than one quote.
    fn find_one<'a>(&'a self, ticker: &'a str) -> RepoFuture<'a, Option<Quote>> {
        Box::pin(async move {
            let tickers = [ticker.to_string()];
            let quotes = self.find_many(&tickers).await?;
            single_quote(quotes)
        })
    }
}

/// Collapse a batch result for one ticker into zero or one quote.
pub(crate) fn single_quote(mut quotes: Vec<Quote>) -> Result<Option<Quote>, MarketDataError> {
    match quotes.len() {
        0 => Ok(None),
        1 => Ok(quotes.pop()),
        n => Err(MarketDataError::DataIntegrity(format!(
            "unexpected number of quotes: expected 1, got {n}"
        ))),
    }
}
