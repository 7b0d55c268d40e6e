//! Subdomain discovery through crt.sh certificate transparency search.
//!
//! A domain query collects every SAN (`name_value`) of the matching
//! certificates; an organization query collects their `common_name`s.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;
use url::Url;

use crate::config::{CrtOpt, HTTP_TIMEOUT_SECS};
use crate::error_handling::CrtError;
use crate::export::write_output_file;
use crate::initialization::init_client;

/// One certificate entry of the crt.sh JSON output.
///
/// Only the two fields used for name extraction are decoded.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Certificate {
    #[serde(default)]
    pub common_name: Option<String>,
    /// Newline-separated subject alternative names
    #[serde(default)]
    pub name_value: Option<String>,
}

/// What to search crt.sh for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrtQuery {
    Domain(String),
    Org(String),
}

impl CrtQuery {
    pub fn as_str(&self) -> &str {
        match self {
            CrtQuery::Domain(q) | CrtQuery::Org(q) => q,
        }
    }

    /// Builds the query from CLI options.
    ///
    /// Clap guarantees exactly one of `--domain` and `--org`; `None` is only
    /// returned for options built by hand with neither set.
    pub fn from_opt(opt: &CrtOpt) -> Option<Self> {
        match (&opt.domain, &opt.org) {
            (Some(domain), _) => Some(CrtQuery::Domain(domain.clone())),
            (None, Some(org)) => Some(CrtQuery::Org(org.clone())),
            (None, None) => None,
        }
    }
}

/// Builds `<base>?q=<query>&output=json`. Spaces in the query become `+`.
///
/// # Errors
///
/// Returns an error if `base_url` is not a valid URL.
pub fn build_query_url(base_url: &str, query: &CrtQuery) -> Result<Url> {
    let mut url = Url::parse(base_url).with_context(|| format!("Invalid crt.sh URL: {base_url}"))?;
    url.query_pairs_mut()
        .clear()
        .append_pair("q", query.as_str())
        .append_pair("output", "json");
    Ok(url)
}

/// Downloads and decodes the certificate list for a query URL.
///
/// # Errors
///
/// Returns `CrtError::Request` on transport failure, `Status` for a
/// non-success status and `Decode` when the body is not the expected JSON.
pub async fn fetch_certificates(
    client: &reqwest::Client,
    url: &Url,
) -> Result<Vec<Certificate>, CrtError> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(CrtError::Request)?;
    let status = response.status();
    if !status.is_success() {
        return Err(CrtError::Status(status.as_u16()));
    }
    response.json().await.map_err(CrtError::Decode)
}

/// Lowercases and trims a candidate name, rejecting anything that is empty,
/// contains a space or `&`, or has no dot.
pub fn candidate_name(raw: &str) -> Option<String> {
    let name = raw.trim().to_lowercase();
    if name.is_empty() || name.contains([' ', '&']) || !name.contains('.') {
        return None;
    }
    Some(name)
}

/// Extracts the unique, sorted names for `query` from `certificates`.
pub fn collect_names(certificates: &[Certificate], query: &CrtQuery) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    for certificate in certificates {
        match query {
            CrtQuery::Domain(_) => {
                if let Some(values) = &certificate.name_value {
                    names.extend(values.split('\n').filter_map(candidate_name));
                }
            }
            CrtQuery::Org(_) => {
                if let Some(common_name) = &certificate.common_name {
                    names.extend(candidate_name(common_name));
                }
            }
        }
    }
    names
}

/// Renders names one per line, each line newline-terminated.
pub fn render_names(names: &BTreeSet<String>) -> String {
    names.iter().map(|name| format!("{name}\n")).collect()
}

/// Runs the `crt` subcommand against `base_url`.
///
/// Prints one name per line to `out` and writes the same text to the optional
/// output file.
///
/// # Errors
///
/// Fails when crt.sh cannot be reached, answers with an error status or
/// undecodable JSON, or when the output cannot be written.
pub async fn run_crt<W: Write>(
    query: &CrtQuery,
    output: Option<&Path>,
    base_url: &str,
    out: &mut W,
) -> Result<BTreeSet<String>> {
    let url = build_query_url(base_url, query)?;
    let client = init_client(HTTP_TIMEOUT_SECS).context("Failed to initialize HTTP client")?;

    info!("Querying {url}");
    let certificates = fetch_certificates(&client, &url)
        .await
        .with_context(|| format!("crt.sh query failed for {}", query.as_str()))?;
    debug!("{} certificates returned", certificates.len());

    let names = collect_names(&certificates, query);
    info!("Found {} unique names", names.len());

    let text = render_names(&names);
    out.write_all(text.as_bytes())
        .context("Failed to write results to stdout")?;
    if let Some(path) = output {
        write_output_file(path, &text).await?;
        info!("Results written to {}", path.display());
    }

    Ok(names)
}
