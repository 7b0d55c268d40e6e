//! Batch CNAME resolution.
//!
//! Reads a domain list, walks each domain's chain and keeps the non-empty
//! chains in a mapping ordered like the input. This is the library side of
//! the `cname` subcommand.

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use indexmap::IndexMap;
use log::{debug, info};
use std::io::Write;
use std::time::Instant;

use crate::app::{log_progress, print_error_statistics};
use crate::config::CnameConfig;
use crate::dns::{resolve_cname_chain, CnameLookup};
use crate::domain::normalize_domain;
use crate::error_handling::ProcessingStats;
use crate::export::{export_csv, export_json, to_pretty_json};
use crate::initialization::init_resolver;
use crate::input::read_lines;

/// Domain → flattened CNAME chain, in input order.
///
/// Only domains with at least one chain entry are present.
pub type CnameMap = IndexMap<String, Vec<String>>;

/// Summary of a completed CNAME run.
#[derive(Debug, Clone)]
pub struct CnameReport {
    /// Domains read from the input list
    pub total_domains: usize,
    /// Domains that ended up in the result mapping
    pub domains_with_chains: usize,
    pub elapsed_seconds: f64,
    pub results: CnameMap,
}

/// Resolves the CNAME chain of every domain in `domains`.
///
/// Up to `concurrency` walks run at once, but results are consumed in input
/// order, so the mapping's insertion order always follows the list. Names are
/// normalized before lookup; names that normalize to nothing are skipped.
/// A domain listed twice keeps its first position and its last non-empty
/// chain.
pub async fn resolve_cnames<R>(
    domains: &[String],
    depth: u32,
    concurrency: usize,
    resolver: &R,
    stats: &ProcessingStats,
) -> CnameMap
where
    R: CnameLookup + ?Sized,
{
    let walks = stream::iter(domains.iter())
        .map(|domain| normalize_domain(domain))
        .filter(|domain| futures::future::ready(!domain.is_empty()))
        .map(|domain| async move {
            let chain = resolve_cname_chain(&domain, depth, resolver, stats).await;
            (domain, chain)
        })
        .buffered(concurrency.max(1));
    futures::pin_mut!(walks);

    let mut results = CnameMap::new();
    while let Some((domain, chain)) = walks.next().await {
        if chain.is_empty() {
            debug!("{domain}: no CNAME chain");
            continue;
        }
        // insert keeps the original slot of an existing key
        results.insert(domain, chain);
    }
    results
}

/// Runs the `cname` subcommand.
///
/// Prints the result mapping as pretty JSON to `out`, then writes the
/// optional JSON and CSV exports.
///
/// # Errors
///
/// Fails when the domain list or resolver list cannot be read, when the
/// resolver list yields no nameservers, or when an export cannot be written.
/// Individual lookup failures are logged and counted instead.
pub async fn run_cname<W: Write>(config: &CnameConfig, out: &mut W) -> Result<CnameReport> {
    let start_time = Instant::now();

    let domains = read_lines(&config.list)
        .await
        .with_context(|| format!("Failed to read domain list: {}", config.list.display()))?;
    info!(
        "Resolving CNAME chains for {} domains (depth {}, concurrency {})",
        domains.len(),
        config.depth,
        config.concurrency
    );

    let resolver = init_resolver(config.resolvers.as_deref(), config.dns_timeout_seconds)
        .await
        .context("Failed to initialize DNS resolver")?;

    let stats = ProcessingStats::new();
    let results = resolve_cnames(
        &domains,
        config.depth,
        config.concurrency,
        resolver.as_ref(),
        &stats,
    )
    .await;
    log_progress("domains", start_time, domains.len());

    let json = to_pretty_json(&results)?;
    writeln!(out, "{json}").context("Failed to write results to stdout")?;

    if let Some(path) = &config.output {
        export_json(&results, path).await?;
        info!("Results written to {}", path.display());
    }
    if let Some(path) = &config.csv {
        let rows = export_csv(&results, path)?;
        info!("{} CSV rows written to {}", rows, path.display());
    }

    print_error_statistics(&stats);

    Ok(CnameReport {
        total_domains: domains.len(),
        domains_with_chains: results.len(),
        elapsed_seconds: start_time.elapsed().as_secs_f64(),
        results,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns::{CnameAnswer, EmptyReason};
    use crate::error_handling::DnsLookupError;
    use futures::future::BoxFuture;
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::time::Duration;

    /// Answers from a fixed table; names starting with "slow" answer late.
    struct TableResolver(HashMap<&'static str, &'static [&'static str]>);

    impl CnameLookup for TableResolver {
        fn lookup_cname<'a>(
            &'a self,
            domain: &'a str,
        ) -> BoxFuture<'a, Result<CnameAnswer, DnsLookupError>> {
            Box::pin(async move {
                if domain.starts_with("slow") {
                    tokio::time::sleep(Duration::from_millis(30)).await;
                }
                Ok(match self.0.get(domain) {
                    Some(targets) => {
                        CnameAnswer::Targets(targets.iter().map(|t| t.to_string()).collect())
                    }
                    None => CnameAnswer::Empty(EmptyReason::NoAnswer),
                })
            })
        }
    }

    fn resolver() -> TableResolver {
        let mut table: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
        table.insert("a.com", &["b.com"]);
        table.insert("b.com", &["c.com"]);
        table.insert("slow.com", &["fast.net"]);
        table.insert("x.com", &["y.net"]);
        TableResolver(table)
    }

    fn list(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[tokio::test]
    async fn test_domains_without_chain_are_omitted() {
        let stats = ProcessingStats::new();
        let results = resolve_cnames(
            &list(&["a.com", "plain.com"]),
            5,
            4,
            &resolver(),
            &stats,
        )
        .await;

        assert_eq!(results.len(), 1);
        assert_eq!(results["a.com"], vec!["b.com", "c.com"]);
    }

    #[tokio::test]
    async fn test_order_follows_input_under_concurrency() {
        let stats = ProcessingStats::new();
        let results = resolve_cnames(
            &list(&["slow.com", "x.com", "a.com"]),
            5,
            3,
            &resolver(),
            &stats,
        )
        .await;

        let keys: Vec<&String> = results.keys().collect();
        assert_eq!(keys, vec!["slow.com", "x.com", "a.com"]);
    }

    #[tokio::test]
    async fn test_sequential_and_concurrent_runs_agree() {
        let domains = list(&["a.com", "slow.com", "nothing.org", "x.com"]);
        let stats = ProcessingStats::new();
        let sequential = resolve_cnames(&domains, 5, 1, &resolver(), &stats).await;
        let concurrent = resolve_cnames(&domains, 5, 10, &resolver(), &stats).await;
        assert_eq!(sequential, concurrent);
    }

    #[tokio::test]
    async fn test_keys_are_normalized_and_blank_names_skipped() {
        let stats = ProcessingStats::new();
        let results =
            resolve_cnames(&list(&["A.COM.", "  ", "."]), 5, 2, &resolver(), &stats).await;

        assert_eq!(results.keys().collect::<Vec<_>>(), vec!["a.com"]);
    }

    #[tokio::test]
    async fn test_duplicate_domain_keeps_first_position() {
        let stats = ProcessingStats::new();
        let results = resolve_cnames(
            &list(&["x.com", "a.com", "x.com"]),
            5,
            2,
            &resolver(),
            &stats,
        )
        .await;

        let keys: Vec<&String> = results.keys().collect();
        assert_eq!(keys, vec!["x.com", "a.com"]);
        assert_eq!(results["x.com"], vec!["y.net"]);
    }

    #[tokio::test]
    async fn test_zero_concurrency_is_treated_as_sequential() {
        let stats = ProcessingStats::new();
        let results = resolve_cnames(&list(&["a.com"]), 1, 0, &resolver(), &stats).await;
        assert_eq!(results["a.com"], vec!["b.com"]);
    }

    #[tokio::test]
    async fn test_run_cname_missing_list_fails() {
        let config = CnameConfig {
            list: PathBuf::from("/nonexistent/domains.txt"),
            ..Default::default()
        };
        let mut out = Vec::new();

        let error = run_cname(&config, &mut out).await.unwrap_err();

        assert!(format!("{error:#}").contains("Failed to read domain list"));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_run_cname_empty_resolver_list_fails() {
        let dir = tempfile::tempdir().unwrap();
        let domains = dir.path().join("domains.txt");
        let resolvers = dir.path().join("resolvers.txt");
        std::fs::write(&domains, "example.com\n").unwrap();
        std::fs::write(&resolvers, "# nothing here\n\n").unwrap();
        let config = CnameConfig {
            list: domains,
            resolvers: Some(resolvers),
            ..Default::default()
        };
        let mut out = Vec::new();

        let error = run_cname(&config, &mut out).await.unwrap_err();

        assert!(format!("{error:#}").contains("Failed to initialize DNS resolver"));
    }

    fn unwritable_config(dir: &std::path::Path) -> CnameConfig {
        let domains = dir.join("domains.txt");
        std::fs::write(&domains, "# nothing to resolve\n").unwrap();
        CnameConfig {
            list: domains,
            concurrency: 1,
            dns_timeout_seconds: 1,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_run_cname_unwritable_json_fails_after_printing() {
        let dir = tempfile::tempdir().unwrap();
        let config = CnameConfig {
            output: Some(PathBuf::from("/nonexistent/dir/out.json")),
            ..unwritable_config(dir.path())
        };
        let mut out = Vec::new();

        let error = run_cname(&config, &mut out).await.unwrap_err();

        assert!(format!("{error:#}").contains("Failed to write output file"));
        assert_eq!(String::from_utf8(out).unwrap(), "{}\n");
    }

    #[tokio::test]
    async fn test_run_cname_unwritable_csv_fails_after_printing() {
        let dir = tempfile::tempdir().unwrap();
        let config = CnameConfig {
            csv: Some(PathBuf::from("/nonexistent/dir/out.csv")),
            ..unwritable_config(dir.path())
        };
        let mut out = Vec::new();

        let error = run_cname(&config, &mut out).await.unwrap_err();

        assert!(format!("{error:#}").contains("Failed to create CSV file"));
        assert_eq!(String::from_utf8(out).unwrap(), "{}\n");
    }

    #[tokio::test]
    async fn test_run_cname_empty_list_prints_braces() {
        let dir = tempfile::tempdir().unwrap();
        let domains = dir.path().join("domains.txt");
        let json_out = dir.path().join("out.json");
        let csv_out = dir.path().join("out.csv");
        std::fs::write(&domains, "\n# only comments\n").unwrap();
        let config = CnameConfig {
            list: domains,
            output: Some(json_out.clone()),
            csv: Some(csv_out.clone()),
            resolvers: None,
            depth: 5,
            concurrency: 1,
            dns_timeout_seconds: 1,
        };
        let mut out = Vec::new();

        let report = run_cname(&config, &mut out).await.unwrap();

        assert_eq!(report.total_domains, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "{}\n");
        assert_eq!(std::fs::read_to_string(json_out).unwrap(), "{}");
        assert_eq!(std::fs::read_to_string(csv_out).unwrap(), "");
    }
}
