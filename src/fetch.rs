//! Source fetcher: one unauthenticated GET against the archived page.

use std::time::Duration;

use crate::error::EtlError;

/// Fetch the raw HTML of `url`.
///
/// No retries, no backoff: a request that cannot complete fails the run.
pub fn fetch_page(url: &str) -> Result<String, EtlError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(concat!("bankcap/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| EtlError::Network(e.to_string()))?;

    let resp = client
        .get(url)
        .send()
        .map_err(|e| EtlError::Network(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(EtlError::HttpStatus {
            status: status.as_u16(),
        });
    }

    resp.text().map_err(|e| EtlError::Network(e.to_string()))
}
