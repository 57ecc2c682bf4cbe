//! Batch quote retrieval from the IEX `stock/market/batch` endpoint.

mod demux;
mod request;

pub use request::batch_url;

use crate::core::services::{QuoteRepository, RepoFuture, single_quote};
use crate::core::{ConnectionManager, MarketDataConfig, MarketDataError, Quote, net};

/* ---------------- Public API ---------------- */

/// Read-only quote access backed by the IEX batch endpoint.
///
/// Holds only configuration and a handle to the shared [`ConnectionManager`]; each
/// call leases a client from the pool and returns it when the call completes.
///
/// # Example
///
/// ```no_run
/// # use iex_market_data::{ConnectionManager, MarketDataConfig, MarketDataDao};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let dao = MarketDataDao::new(ConnectionManager::default(), MarketDataConfig::from_env()?);
///
/// let quotes = dao.find_many(["AAPL", "MSFT"]).await?;
/// for q in &quotes {
///     println!("{}: {:?}", q.symbol, q.latest_price);
/// }
///
/// if let Some(q) = dao.find_one("TSLA").await? {
///     println!("TSLA last updated {:?}", q.latest_update_at());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MarketDataDao {
    connections: ConnectionManager,
    config: MarketDataConfig,
}

impl MarketDataDao {
    pub fn new(connections: ConnectionManager, config: MarketDataConfig) -> Self {
        Self {
            connections,
            config,
        }
    }

    /// Fetch quotes for every ticker in one batch request.
    ///
    /// Returns one quote per ticker in input order, or an empty vector if the
    /// endpoint answers 404.
    ///
    /// # Errors
    ///
    /// - [`MarketDataError::InvalidInput`] if no tickers (or a blank one) are given.
    /// - [`MarketDataError::Status`] / [`MarketDataError::Http`] on retrieval failure.
    /// - [`MarketDataError::InvalidTicker`] if any ticker is missing from the response.
    /// - [`MarketDataError::Parse`] if the body or a quote payload is malformed.
    pub async fn find_many<I, S>(&self, tickers: I) -> Result<Vec<Quote>, MarketDataError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tickers: Vec<String> = tickers.into_iter().map(Into::into).collect();
        self.fetch_batch(&tickers).await
    }

    /// Fetch a single ticker's quote; `Ok(None)` when the endpoint has no data.
    ///
    /// # Errors
    ///
    /// Same as [`MarketDataDao::find_many`], plus [`MarketDataError::DataIntegrity`]
    /// if the batch yields more than one quote.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn find_one(&self, ticker: &str) -> Result<Option<Quote>, MarketDataError> {
        single_quote(self.fetch_batch(&[ticker]).await?)
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip_all, err, fields(tickers = tickers.len()))
    )]
    async fn fetch_batch<S: AsRef<str>>(&self, tickers: &[S]) -> Result<Vec<Quote>, MarketDataError> {
        let url = batch_url(&self.config, tickers)?;

        let body = {
            let lease = self.connections.lease();
            net::execute_get(&lease, &url).await?
        };

        match body {
            Some(body) => demux::demultiplex(&body, tickers),
            None => Ok(Vec::new()),
        }
    }
}

impl QuoteRepository for MarketDataDao {
    fn find_many<'a>(&'a self, tickers: &'a [String]) -> RepoFuture<'a, Vec<Quote>> {
        Box::pin(self.fetch_batch(tickers))
    }

    fn find_one<'a>(&'a self, ticker: &'a str) -> RepoFuture<'a, Option<Quote>> {
        Box::pin(MarketDataDao::find_one(self, ticker))
    }
}
