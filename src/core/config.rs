//! Endpoint configuration: the IEX host and the API token.

use std::env;
use std::fmt;

use url::Url;

use crate::core::MarketDataError;
use crate::core::client::constants::{DEFAULT_HOST, ENV_HOST, ENV_TOKEN};

/// Host and authentication token used to build batch requests.
#[derive(Clone, PartialEq, Eq)]
pub struct MarketDataConfig {
    host: Url,
    token: String,
}

impl MarketDataConfig {
    /// Create a new builder.
    pub fn builder() -> MarketDataConfigBuilder {
        MarketDataConfigBuilder::default()
    }

    /// Shorthand for a config with the default host.
    ///
    /// # Errors
    ///
    /// Returns [`MarketDataError::Config`] if the token is blank.
    pub fn with_token(token: impl Into<String>) -> Result<Self, MarketDataError> {
        Self::builder().token(token).build()
    }

    /// Load the config from `IEX_PUB_TOKEN` and, optionally, `IEX_HOST`.
    ///
    /// # Errors
    ///
    /// Returns an error if the token variable is missing or blank, or if the host
    /// variable is set but is not a valid URL.
    pub fn from_env() -> Result<Self, MarketDataError> {
        let token = env::var(ENV_TOKEN)
            .map_err(|_| MarketDataError::Config(format!("{ENV_TOKEN} is not set")))?;
        let mut builder = Self::builder().token(token);
        if let Ok(host) = env::var(ENV_HOST) {
            builder = builder.host(Url::parse(&host)?);
        }
        builder.build()
    }

    pub fn host(&self) -> &Url {
        &self.host
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for MarketDataConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarketDataConfig")
            .field("host", &self.host.as_str())
            .field("token", &"***")
            .finish()
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct MarketDataConfigBuilder {
    host: Option<Url>,
    token: Option<String>,
}

impl MarketDataConfigBuilder {
    /// Override the API host (e.g., `https://sandbox.iexapis.com/stable`).
    pub fn host(mut self, url: Url) -> Self {
        self.host = Some(url);
        self
    }

    /// Set the API token appended to every request.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn build(self) -> Result<MarketDataConfig, MarketDataError> {
        let host = match self.host {
            Some(h) => h,
            None => Url::parse(DEFAULT_HOST)?,
        };
        if host.cannot_be_a_base() {
            return Err(MarketDataError::Config(format!(
                "host {host} cannot carry a path"
            )));
        }

        let token = self
            .token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| MarketDataError::Config("an API token is required".into()))?;

        Ok(MarketDataConfig { host, token })
    }
}
