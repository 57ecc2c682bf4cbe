use reqwest::StatusCode;
use url::Url;

use crate::core::{ClientLease, MarketDataError};

/// Render `url` with the `token` query value masked, for errors and logs.
pub fn redact_url(url: &Url) -> String {
    if !url.query_pairs().any(|(k, _)| k == "token") {
        return url.to_string();
    }
    let mut out = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "token" { "***".into() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    out.query_pairs_mut().clear().extend_pairs(pairs);
    out.to_string()
}

/// Issue a single GET and map the outcome.
///
/// `Ok(Some(body))` on 200, `Ok(None)` on 404, [`MarketDataError::Status`] on any
/// other status and [`MarketDataError::Http`] when the request or body read fails.
pub(crate) async fn execute_get(
    lease: &ClientLease,
    url: &Url,
) -> Result<Option<String>, MarketDataError> {
    let transport = |e: reqwest::Error| MarketDataError::Http {
        url: redact_url(url),
        source: e.without_url(),
    };

    let resp = lease
        .http()
        .get(url.clone())
        .header("accept", "application/json")
        .send()
        .await
        .map_err(transport)?;

    let status = resp.status();

    #[cfg(feature = "tracing")]
    tracing::debug!(status = status.as_u16(), url = %redact_url(url), "batch response");

    match status {
        StatusCode::OK => {
            let body = resp.text().await.map_err(transport)?;
            #[cfg(feature = "tracing")]
            tracing::trace!(bytes = body.len(), "batch body read");
            Ok(Some(body))
        }
        StatusCode::NOT_FOUND => Ok(None),
        other => Err(MarketDataError::Status {
            status: other.as_u16(),
            url: redact_url(url),
        }),
    }
}
