//! Centralized constants for default endpoints and UA.

/// UA sent with every request unless overridden on the builder.
pub(crate) const USER_AGENT: &str = concat!("iex-market-data/", env!("CARGO_PKG_VERSION"));

/// IEX Cloud API host (versioned path prefix included).
pub(crate) const DEFAULT_HOST: &str = "https://cloud.iexapis.com/v1";

/// Path segments of the batch endpoint, appended to the host.
pub(crate) const BATCH_PATH: [&str; 3] = ["stock", "market", "batch"];

/// Only the quote section is requested from the batch endpoint.
pub(crate) const BATCH_TYPES: &str = "quote";

/// Environment variable holding the API token.
pub(crate) const ENV_TOKEN: &str = "IEX_PUB_TOKEN";

/// Environment variable overriding the API host.
pub(crate) const ENV_HOST: &str = "IEX_HOST";
