//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::HeadersConfig;

/// Initializes the HTTP client used by the headers fetcher.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header and timeout from the headers configuration
/// - Certificate verification disabled (self-signed and mismatched
///   certificates are accepted)
/// - Default redirect following
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_insecure_client(config: &HeadersConfig) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .danger_accept_invalid_certs(true)
        .build()?;
    Ok(Arc::new(client))
}

/// Initializes the HTTP client for crt.sh queries (certificates verified).
///
/// crt.sh can take tens of seconds on broad queries, so only the connect
/// phase is bounded.
pub fn init_client(connect_timeout_secs: u64) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .user_agent(concat!("recon/", env!("CARGO_PKG_VERSION")))
        .build()
}
