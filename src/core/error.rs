use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum MarketDataError {
    /// The caller supplied unusable input, such as an empty ticker collection.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The server returned a status other than 200 or 404.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The request URL, with the token redacted.
        url: String,
    },

    /// The request could not be executed (connection refused, I/O failure, body read error).
    #[error("HTTP error at {url}: {source}")]
    Http {
        /// The request URL, with the token redacted.
        url: String,
        /// The underlying transport error, stripped of its URL.
        #[source]
        source: reqwest::Error,
    },

    /// A requested ticker has no usable entry in the batch response.
    #[error("ticker not found: {0}")]
    InvalidTicker(String),

    /// The response body, or a per-ticker payload, is not the JSON we expect.
    #[error("cannot parse quote payload: {0}")]
    Parse(String),

    /// An upstream or internal invariant was violated.
    #[error("data integrity violation: {0}")]
    DataIntegrity(String),

    /// A configured host URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The configuration is incomplete or cannot be used to build requests.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Coarse classification of a [`MarketDataError`].
///
/// Callers deciding on retry policy usually only care about the kind:
/// `Retrieval` failures may be transient, the rest are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Unusable caller input.
    Input,
    /// Unexpected HTTP status or transport failure.
    Retrieval,
    /// A requested ticker is absent from the response.
    InvalidTicker,
    /// Malformed response body or quote payload.
    Parse,
    /// More results than the one-ticker-one-quote invariant allows.
    DataIntegrity,
    /// Unusable host or token configuration.
    Config,
}

impl MarketDataError {
    /// Returns the kind of failure this error represents.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::Input,
            Self::Status { .. } | Self::Http { .. } => ErrorKind::Retrieval,
            Self::InvalidTicker(_) => ErrorKind::InvalidTicker,
            Self::Parse(_) => ErrorKind::Parse,
            Self::DataIntegrity(_) => ErrorKind::DataIntegrity,
            Self::Url(_) | Self::Config(_) => ErrorKind::Config,
        }
    }

    /// The HTTP status code, if the server answered with an unexpected one.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
