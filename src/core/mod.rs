//! Core components of the `iex-market-data` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The pooled transport ([`ConnectionManager`]) and its builder.
//! - Endpoint configuration ([`MarketDataConfig`]).
//! - The primary [`MarketDataError`] type.
//! - The [`Quote`] model and the [`QuoteRepository`] trait.

/// The pooled HTTP transport and scoped client leases.
pub mod client;
/// Host and token configuration.
pub mod config;
/// The primary error type (`MarketDataError`) for the crate.
pub mod error;
/// The `Quote` data model.
pub mod models;
/// Read-only repository trait.
pub mod services;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::MarketDataError`
pub use client::{ClientLease, ConnectionManager, ConnectionManagerBuilder};
pub use config::{MarketDataConfig, MarketDataConfigBuilder};
pub use error::{ErrorKind, MarketDataError};
pub use models::Quote;
pub use net::redact_url;
pub use services::{QuoteRepository, RepoFuture};
