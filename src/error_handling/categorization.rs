//! Error categorization.
//!
//! Maps low-level `reqwest` failures onto `HeaderFetchError` and maps every
//! fetch failure onto the `ErrorType` counter it is reported under.

use std::error::Error as StdError;

use super::stats::ProcessingStats;
use super::types::{ErrorType, HeaderFetchError};
use crate::config::HTTP_STATUS_NOT_FOUND;

/// Returns true when any error in the source chain looks like a TLS failure.
///
/// reqwest reports handshake problems as connect errors, so the only signal is
/// the wording of the underlying rustls/hyper errors.
fn is_tls_failure(error: &reqwest::Error) -> bool {
    let mut source: Option<&(dyn StdError + 'static)> = error.source();
    while let Some(cause) = source {
        let message = cause.to_string().to_lowercase();
        if message.contains("tls")
            || message.contains("ssl")
            || message.contains("handshake")
            || message.contains("certificate")
        {
            return true;
        }
        source = cause.source();
    }
    false
}

/// Classifies a `reqwest::Error` raised while fetching `url`.
pub fn classify_reqwest_error(url: &str, error: reqwest::Error) -> HeaderFetchError {
    if let Some(status) = error.status() {
        let status = status.as_u16();
        if status == HTTP_STATUS_NOT_FOUND {
            return HeaderFetchError::NotFound {
                url: url.to_string(),
            };
        }
        return HeaderFetchError::Status {
            url: url.to_string(),
            status,
        };
    }

    if error.is_timeout() {
        HeaderFetchError::Timeout {
            url: url.to_string(),
            source: error,
        }
    } else if is_tls_failure(&error) {
        HeaderFetchError::Tls {
            url: url.to_string(),
            source: error,
        }
    } else {
        HeaderFetchError::Request {
            url: url.to_string(),
            source: error,
        }
    }
}

/// Categorizes a `HeaderFetchError` into an `ErrorType`.
pub fn categorize_fetch_error(error: &HeaderFetchError) -> ErrorType {
    match error {
        HeaderFetchError::NotFound { .. } => ErrorType::HttpRequestNotFound,
        HeaderFetchError::Status { .. } => ErrorType::HttpRequestStatusError,
        HeaderFetchError::Tls { .. } => ErrorType::HttpRequestTlsError,
        HeaderFetchError::Timeout { .. } => ErrorType::HttpRequestTimeoutError,
        HeaderFetchError::Request { .. } => ErrorType::HttpRequestOtherError,
    }
}

/// Updates processing statistics for a failed fetch.
pub fn update_error_stats(stats: &ProcessingStats, error: &HeaderFetchError) {
    stats.increment_error(categorize_fetch_error(error));
}
