//! HTTP response-header fetching.
//!
//! Each list entry is turned into a URL, fetched with certificate
//! verification disabled, and its response headers are collected. Failed
//! entries are logged, counted and left out of the result mapping.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use log::{debug, info, warn};
use reqwest::header::HeaderMap;
use std::io::Write;
use std::time::Instant;

use crate::app::{log_progress, print_error_statistics, validate_and_normalize_url};
use crate::config::HeadersConfig;
use crate::error_handling::{
    classify_reqwest_error, update_error_stats, HeaderFetchError, ProcessingStats, WarningType,
};
use crate::export::{to_pretty_json, write_output_file};
use crate::initialization::init_insecure_client;
use crate::input::read_lines;

/// Header name → value for one response, in response order.
pub type HeaderValues = IndexMap<String, String>;

/// List entry → response headers, in input order.
pub type HeadersMap = IndexMap<String, HeaderValues>;

/// Summary of a completed headers run.
#[derive(Debug, Clone)]
pub struct HeadersReport {
    pub total_entries: usize,
    /// Entries whose headers were collected
    pub fetched: usize,
    /// Entries that were requested but failed
    pub failed: usize,
    /// Entries that could not be turned into a URL
    pub skipped: usize,
    pub elapsed_seconds: f64,
    pub results: HeadersMap,
}

/// Flattens a `HeaderMap` into name → value.
///
/// Repeated headers are joined with `", "`. Values that are not valid UTF-8
/// are converted lossily.
pub fn collect_headers(headers: &HeaderMap) -> HeaderValues {
    let mut values = HeaderValues::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        values
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }
    values
}

/// Fetches `url` and returns its response headers.
///
/// # Errors
///
/// Returns `HeaderFetchError::NotFound` for a 404, `Status` for any other
/// non-success status, and `Tls`, `Timeout` or `Request` for transport
/// failures.
pub async fn fetch_headers(
    client: &reqwest::Client,
    url: &str,
) -> Result<HeaderValues, HeaderFetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|e| classify_reqwest_error(url, e))?;
    debug!("{url}: {}", response.status());
    Ok(collect_headers(response.headers()))
}

/// Runs the `headers` subcommand.
///
/// Prints the result mapping as pretty JSON to `out` and writes it to the
/// optional output file.
///
/// # Errors
///
/// Fails when the list cannot be read, the HTTP client cannot be built, or
/// the output cannot be written. Per-entry failures are logged and counted.
pub async fn run_headers<W: Write>(config: &HeadersConfig, out: &mut W) -> Result<HeadersReport> {
    let start_time = Instant::now();

    let entries = read_lines(&config.list)
        .await
        .with_context(|| format!("Failed to read URL list: {}", config.list.display()))?;
    let client = init_insecure_client(config).context("Failed to initialize HTTP client")?;
    info!("Fetching response headers for {} entries", entries.len());

    let stats = ProcessingStats::new();
    let mut results = HeadersMap::new();
    let mut failed = 0;
    let mut skipped = 0;

    for (index, entry) in entries.iter().enumerate() {
        let Some(url) = validate_and_normalize_url(entry) else {
            stats.increment_warning(WarningType::InvalidUrl);
            skipped += 1;
            continue;
        };

        match fetch_headers(&client, &url).await {
            Ok(headers) => {
                results.insert(entry.clone(), headers);
            }
            Err(e) => {
                warn!("{e}");
                update_error_stats(&stats, &e);
                failed += 1;
            }
        }

        if (index + 1) % 100 == 0 {
            log_progress("entries", start_time, index + 1);
        }
    }
    log_progress("entries", start_time, entries.len());

    let json = to_pretty_json(&results)?;
    writeln!(out, "{json}").context("Failed to write results to stdout")?;
    if let Some(path) = &config.output {
        write_output_file(path, &json).await?;
        info!("Results written to {}", path.display());
    }

    print_error_statistics(&stats);

    Ok(HeadersReport {
        total_entries: entries.len(),
        fetched: results.len(),
        failed,
        skipped,
        elapsed_seconds: start_time.elapsed().as_secs_f64(),
        results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderValue, SET_COOKIE};

    #[test]
    fn test_collect_headers_joins_repeated_values() {
        let mut headers = HeaderMap::new();
        headers.insert("server", HeaderValue::from_static("nginx"));
        headers.append(SET_COOKIE, HeaderValue::from_static("a=1"));
        headers.append(SET_COOKIE, HeaderValue::from_static("b=2"));

        let values = collect_headers(&headers);

        assert_eq!(values["server"], "nginx");
        assert_eq!(values["set-cookie"], "a=1, b=2");
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_collect_headers_empty() {
        assert!(collect_headers(&HeaderMap::new()).is_empty());
    }

    #[test]
    fn test_collect_headers_lossy_value() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-raw",
            HeaderValue::from_bytes(&[b'o', b'k', 0xFF]).unwrap(),
        );
        assert_eq!(collect_headers(&headers)["x-raw"], "ok\u{FFFD}");
    }
}
