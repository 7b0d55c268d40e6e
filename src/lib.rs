//! recon library: reconnaissance utilities for security assessments.
//!
//! - `cname`: recursive CNAME chain resolution for a domain list, exported as
//!   JSON and CSV
//! - `headers`: HTTP response headers for a list of hosts or URLs
//! - `massdns`: massdns output grouped into public/private A and CNAME records
//! - `crt`: subdomain discovery via crt.sh certificate transparency search
//!
//! # Example
//!
//! ```no_run
//! use recon::{run_cname, CnameConfig};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = CnameConfig {
//!     list: PathBuf::from("domains.txt"),
//!     depth: 3,
//!     ..Default::default()
//! };
//!
//! let report = run_cname(&config, &mut std::io::stdout()).await?;
//! println!(
//!     "{} of {} domains have a CNAME chain",
//!     report.domains_with_chains, report.total_domains
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! All entry points are async and require a Tokio runtime.

mod app;
pub mod cname;
pub mod config;
pub mod crt;
pub mod dns;
mod domain;
pub mod error_handling;
pub mod export;
pub mod headers;
pub mod initialization;
mod input;
pub mod massdns;

// Re-export public API
pub use cname::{resolve_cnames, run_cname, CnameMap, CnameReport};
pub use config::{Cli, CnameConfig, Command, HeadersConfig, LogFormat, LogLevel};
pub use crt::{run_crt, CrtQuery};
pub use domain::normalize_domain;
pub use headers::{run_headers, HeadersMap, HeadersReport};
pub use input::{parse_lines, read_lines};
pub use massdns::{parse_massdns_output, run_massdns, MassdnsReport};
