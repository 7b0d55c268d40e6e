//! massdns output parsing.
//!
//! Converts massdns simple-text output (`name. TYPE value` per line) into
//! three groups: public A records, private A records and CNAME records.
//! Record types other than A and CNAME are ignored.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use log::{debug, info};
use regex::Regex;
use serde::Serialize;
use std::io::Write;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::path::Path;
use std::sync::LazyLock;

use crate::app::print_error_statistics;
use crate::error_handling::{ProcessingStats, WarningType};
use crate::export::{to_pretty_json, write_output_file};

static RECORD_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*)\s+(A|CNAME)\s+(.*)").expect("massdns record pattern must compile")
});

/// One A or CNAME line of massdns output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MassdnsRecord {
    A { name: String, address: String },
    Cname { name: String, target: String },
}

/// Parsed massdns output.
///
/// A records map each address to the names resolving to it, in file order.
/// CNAME records map each name to its target; a later line for the same name
/// replaces the earlier one.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct MassdnsReport {
    #[serde(rename = "Public A Records")]
    pub public_a: IndexMap<String, Vec<String>>,
    #[serde(rename = "Private A Records")]
    pub private_a: IndexMap<String, Vec<String>>,
    #[serde(rename = "CNAME Records")]
    pub cname: IndexMap<String, String>,
}

impl MassdnsReport {
    fn add(&mut self, record: MassdnsRecord) {
        match record {
            MassdnsRecord::A { name, address } => {
                let group = if is_private_ip(&address) {
                    &mut self.private_a
                } else {
                    &mut self.public_a
                };
                group.entry(address).or_default().push(name);
            }
            MassdnsRecord::Cname { name, target } => {
                self.cname.insert(name, target);
            }
        }
    }
}

/// Parses one line of massdns output.
///
/// Trailing dots are removed from the line and from the record name. Returns
/// `None` for lines that are not A or CNAME records.
pub fn parse_line(line: &str) -> Option<MassdnsRecord> {
    let line = line.trim_end_matches(['.', '\n', '\r']);
    let captures = RECORD_LINE.captures(line)?;
    let name = captures[1].trim_end_matches('.').to_string();
    let value = captures[3].to_string();
    match &captures[2] {
        "A" => Some(MassdnsRecord::A {
            name,
            address: value,
        }),
        _ => Some(MassdnsRecord::Cname {
            name,
            target: value,
        }),
    }
}

/// Parses a complete massdns output file.
///
/// Non-blank lines that are not A or CNAME records are counted in `stats`.
pub fn parse_massdns_output(content: &str, stats: &ProcessingStats) -> MassdnsReport {
    let mut report = MassdnsReport::default();
    for line in content.lines() {
        match parse_line(line) {
            Some(record) => report.add(record),
            None if line.trim().is_empty() => {}
            None => {
                debug!("Skipping unrecognized line: {line}");
                stats.increment_warning(WarningType::UnrecognizedMassdnsLine);
            }
        }
    }
    report
}

/// Returns true when `value` is an IP address in a private or reserved
/// range. Values that do not parse as an IP address are treated as public.
pub fn is_private_ip(value: &str) -> bool {
    match value.trim().parse::<IpAddr>() {
        Ok(IpAddr::V4(ip)) => is_private_ipv4(ip),
        Ok(IpAddr::V6(ip)) => is_private_ipv6(ip),
        Err(_) => false,
    }
}

fn is_private_ipv4(ip: Ipv4Addr) -> bool {
    let o = ip.octets();
    // This-network 0.0.0.0/8
    o[0] == 0
        // Private 10.0.0.0/8
        || o[0] == 10
        // Loopback 127.0.0.0/8
        || o[0] == 127
        // Link-local 169.254.0.0/16
        || (o[0] == 169 && o[1] == 254)
        // Private 172.16.0.0/12
        || (o[0] == 172 && (16..=31).contains(&o[1]))
        // IETF protocol assignments 192.0.0.0/24, TEST-NET-1 192.0.2.0/24
        || (o[0] == 192 && o[1] == 0 && (o[2] == 0 || o[2] == 2))
        // Private 192.168.0.0/16
        || (o[0] == 192 && o[1] == 168)
        // Benchmarking 198.18.0.0/15
        || (o[0] == 198 && (o[1] == 18 || o[1] == 19))
        // TEST-NET-2 198.51.100.0/24
        || (o[0] == 198 && o[1] == 51 && o[2] == 100)
        // TEST-NET-3 203.0.113.0/24
        || (o[0] == 203 && o[1] == 0 && o[2] == 113)
        // Reserved 240.0.0.0/4, including broadcast
        || o[0] >= 240
}

fn is_private_ipv6(ip: Ipv6Addr) -> bool {
    if let Some(mapped) = ip.to_ipv4_mapped() {
        return is_private_ipv4(mapped);
    }
    let s = ip.segments();
    ip.is_unspecified()
        || ip.is_loopback()
        // Discard-only 100::/64
        || (s[0] == 0x0100 && s[1] == 0 && s[2] == 0 && s[3] == 0)
        // Documentation 2001:db8::/32
        || (s[0] == 0x2001 && s[1] == 0x0db8)
        // Unique local fc00::/7
        || (s[0] & 0xfe00) == 0xfc00
        // Link-local fe80::/10
        || (s[0] & 0xffc0) == 0xfe80
}

/// Runs the `massdns` subcommand.
///
/// Prints the parsed groups as pretty JSON to `out` and writes the same text
/// to the optional output file.
///
/// # Errors
///
/// Fails when the input cannot be read or the output cannot be written.
pub async fn run_massdns<W: Write>(
    input_file: &Path,
    output: Option<&Path>,
    out: &mut W,
) -> Result<MassdnsReport> {
    let content = tokio::fs::read_to_string(input_file)
        .await
        .with_context(|| format!("Failed to read massdns output: {}", input_file.display()))?;

    let stats = ProcessingStats::new();
    let report = parse_massdns_output(&content, &stats);
    info!(
        "Parsed {} public A, {} private A and {} CNAME entries",
        report.public_a.len(),
        report.private_a.len(),
        report.cname.len()
    );

    let json = to_pretty_json(&report)?;
    writeln!(out, "{json}").context("Failed to write results to stdout")?;
    if let Some(path) = output {
        write_output_file(path, &json).await?;
        info!("Results written to {}", path.display());
    }

    print_error_statistics(&stats);
    Ok(report)
}
