//! iex-market-data: typed, read-only access to IEX Cloud batch quotes.
//!
//! A [`MarketDataDao`] turns a set of tickers into a single
//! `stock/market/batch` request, then splits the keyed response back into one
//! [`Quote`] per ticker.
//!
//! ```no_run
//! # use iex_market_data::{ConnectionManager, MarketDataConfig, MarketDataDao};
//! # #[tokio::main]
//! # async fn main() -> Result<(), iex_market_data::MarketDataError> {
//! let config = MarketDataConfig::with_token("pk_live_...")?;
//! let dao = MarketDataDao::new(ConnectionManager::builder().build()?, config);
//! let quotes = dao.find_many(["AAPL", "GOOG"]).await?;
//! assert_eq!(quotes.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod quote;

pub use crate::core::{
    ConnectionManager, ErrorKind, MarketDataConfig, MarketDataError, Quote, QuoteRepository,
};
pub use quote::MarketDataDao;

/// Install a `tracing` subscriber honoring `RUST_LOG`. Intended for tests and demos.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing_for_tests() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
