//! DNS resolver initialization.
//!
//! Builds the hickory resolver used for CNAME queries, either from the system
//! configuration or from a user-supplied nameserver list.

use std::net::{IpAddr, SocketAddr};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;
use log::{debug, info, warn};

use crate::config::{DNS_ATTEMPTS, DNS_PORT};
use crate::error_handling::InitializationError;
use crate::input::read_lines;

/// Parses a nameserver entry written as a bare IP or as `IP:port`.
///
/// Returns `None` for anything else (hostnames are resolved separately).
pub fn parse_nameserver(entry: &str) -> Option<SocketAddr> {
    if let Ok(ip) = entry.parse::<IpAddr>() {
        return Some(SocketAddr::new(ip, DNS_PORT));
    }
    entry.parse::<SocketAddr>().ok()
}

/// Reads a resolver list file into nameserver socket addresses.
///
/// Each line is an IP, an `IP:port` pair, or a hostname. Hostnames are looked
/// up once through the system resolver; entries that do not resolve are
/// skipped with a warning.
///
/// # Errors
///
/// Returns `InitializationError::ResolverFileError` if the file cannot be read
/// and `InitializationError::NoNameserversError` if no entry is usable.
pub async fn load_nameservers(path: &Path) -> Result<Vec<SocketAddr>, InitializationError> {
    let entries = read_lines(path)
        .await
        .map_err(|source| InitializationError::ResolverFileError {
            path: path.display().to_string(),
            source,
        })?;

    let mut nameservers = Vec::new();
    for entry in &entries {
        if let Some(addr) = parse_nameserver(entry) {
            nameservers.push(addr);
            continue;
        }
        match tokio::net::lookup_host((entry.as_str(), DNS_PORT)).await {
            Ok(addrs) => {
                let before = nameservers.len();
                nameservers.extend(addrs);
                debug!(
                    "Nameserver {entry} resolved to {} address(es)",
                    nameservers.len() - before
                );
            }
            Err(e) => warn!("Skipping nameserver {entry}: {e}"),
        }
    }

    if nameservers.is_empty() {
        return Err(InitializationError::NoNameserversError(
            path.display().to_string(),
        ));
    }
    Ok(nameservers)
}

fn apply_timeouts(opts: &mut ResolverOpts, timeout_secs: u64) {
    opts.timeout = Duration::from_secs(timeout_secs);
    opts.attempts = DNS_ATTEMPTS;
    opts.ndots = 0;
}

/// Builds a resolver that sends every query to `nameservers` (UDP with TCP fallback).
pub fn resolver_for_nameservers(
    nameservers: &[SocketAddr],
    timeout_secs: u64,
) -> Arc<TokioAsyncResolver> {
    let mut group = NameServerConfigGroup::new();
    for addr in nameservers {
        group.merge(NameServerConfigGroup::from_ips_clear(
            &[addr.ip()],
            addr.port(),
            true,
        ));
    }
    let config = ResolverConfig::from_parts(None, Vec::new(), group);

    let mut opts = ResolverOpts::default();
    apply_timeouts(&mut opts, timeout_secs);
    Arc::new(TokioAsyncResolver::tokio(config, opts))
}

/// Builds a resolver from the system configuration (`/etc/resolv.conf`).
///
/// Only the nameservers are taken over; the local domain and search list are
/// dropped. Falls back to hickory's default upstreams when the system
/// configuration cannot be read.
pub fn system_resolver(timeout_secs: u64) -> Arc<TokioAsyncResolver> {
    let (config, mut opts) = match hickory_resolver::system_conf::read_system_conf() {
        Ok((system, opts)) => {
            let nameservers = NameServerConfigGroup::from(system.name_servers().to_vec());
            (ResolverConfig::from_parts(None, Vec::new(), nameservers), opts)
        }
        Err(e) => {
            warn!("Failed to read system DNS configuration ({e}); using default upstreams");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };
    apply_timeouts(&mut opts, timeout_secs);
    Arc::new(TokioAsyncResolver::tokio(config, opts))
}

/// Initializes the DNS resolver for CNAME lookups.
///
/// When `resolvers` is given, its nameservers override the system defaults for
/// every query in the run.
///
/// # Errors
///
/// Returns an `InitializationError` if the resolver file is unreadable or empty.
pub async fn init_resolver(
    resolvers: Option<&Path>,
    timeout_secs: u64,
) -> Result<Arc<TokioAsyncResolver>, InitializationError> {
    match resolvers {
        Some(path) => {
            let nameservers = load_nameservers(path).await?;
            info!(
                "Using {} nameserver(s) from {}",
                nameservers.len(),
                path.display()
            );
            Ok(resolver_for_nameservers(&nameservers, timeout_secs))
        }
        None => Ok(system_resolver(timeout_secs)),
    }
}
