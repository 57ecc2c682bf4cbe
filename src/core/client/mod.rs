//! Pooled HTTP transport + builder.
//! Internals are split into `lease` (scoped per-call borrowing) and `constants` (UA + defaults).

pub(crate) mod constants;
mod lease;

pub use lease::ClientLease;

use crate::core::MarketDataError;
use constants::USER_AGENT;
use reqwest::Client;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Owner of the shared HTTP connection pool.
///
/// Cloning is cheap and every clone shares the same pool. Components never keep
/// a client of their own; they take a [`ClientLease`] for the duration of one
/// request and drop it afterwards.
#[derive(Debug, Clone)]
pub struct ConnectionManager {
    http: Client,
    outstanding: Arc<AtomicUsize>,
}

impl Default for ConnectionManager {
    fn default() -> Self {
        Self::builder().build().expect("default connection manager")
    }
}

impl ConnectionManager {
    /// Create a new builder.
    pub fn builder() -> ConnectionManagerBuilder {
        ConnectionManagerBuilder::default()
    }

    /// Borrow a client handle from the pool. The lease is returned on drop.
    pub fn lease(&self) -> ClientLease {
        self.outstanding.fetch_add(1, Ordering::AcqRel);
        ClientLease::new(self.http.clone(), Arc::clone(&self.outstanding))
    }

    /// Number of leases currently held by in-flight calls.
    pub fn outstanding_leases(&self) -> usize {
        self.outstanding.load(Ordering::Acquire)
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct ConnectionManagerBuilder {
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    pool_max_idle_per_host: Option<usize>,
    pool_idle_timeout: Option<Duration>,
}

impl ConnectionManagerBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Cap the number of idle connections kept per host.
    pub fn pool_max_idle_per_host(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = Some(max);
        self
    }

    /// How long an idle pooled connection is kept alive.
    pub fn pool_idle_timeout(mut self, dur: Duration) -> Self {
        self.pool_idle_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<ConnectionManager, MarketDataError> {
        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }
        if let Some(max) = self.pool_max_idle_per_host {
            httpb = httpb.pool_max_idle_per_host(max);
        }
        if let Some(idle) = self.pool_idle_timeout {
            httpb = httpb.pool_idle_timeout(idle);
        }

        let http = httpb
            .build()
            .map_err(|e| MarketDataError::Config(format!("cannot build HTTP client: {e}")))?;

        Ok(ConnectionManager {
            http,
            outstanding: Arc::new(AtomicUsize::new(0)),
        })
    }
}
