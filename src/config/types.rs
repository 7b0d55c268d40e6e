//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and the library-level configuration each subcommand is converted into.

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};

use crate::config::constants::{
    DEFAULT_CNAME_CONCURRENCY, DEFAULT_CNAME_DEPTH, DEFAULT_USER_AGENT, DNS_TIMEOUT_SECS,
    HTTP_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line interface.
///
/// Logging options are global so they may appear before or after the subcommand.
///
/// # Examples
///
/// ```bash
/// recon cname -l domains.txt --csv chains.csv
/// recon --log-level debug headers -l hosts.txt -o headers.json
/// recon massdns massdns.out -o parsed.json
/// recon crt -d example.com
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "recon",
    version,
    about = "Reconnaissance utilities for security assessments."
)]
pub struct Cli {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve CNAME records recursively from a list of domains
    #[command(arg_required_else_help = true)]
    Cname(CnameOpt),

    /// Fetch HTTP response headers for a list of domains without verifying TLS
    #[command(arg_required_else_help = true)]
    Headers(HeadersOpt),

    /// Parse massdns output and convert it to JSON
    #[command(arg_required_else_help = true)]
    Massdns(MassdnsOpt),

    /// Discover subdomains from crt.sh certificate transparency logs
    #[command(arg_required_else_help = true)]
    Crt(CrtOpt),
}

/// Options for the `cname` subcommand.
#[derive(Debug, Clone, Args)]
pub struct CnameOpt {
    /// Path to the file containing domains
    #[arg(short = 'l', long = "list", value_name = "FILE")]
    pub list: PathBuf,

    /// Path to the JSON output file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to the CSV output file
    #[arg(long, value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// Path to the file containing DNS resolvers (one IP, IP:port or hostname per line)
    #[arg(long, value_name = "FILE")]
    pub resolvers: Option<PathBuf>,

    /// Depth of recursive resolution
    #[arg(short, long, default_value_t = DEFAULT_CNAME_DEPTH)]
    pub depth: u32,

    /// Number of domains resolved at once (1 = strictly sequential)
    #[arg(long, default_value_t = DEFAULT_CNAME_CONCURRENCY)]
    pub concurrency: usize,

    /// Per-query DNS timeout in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub timeout_seconds: u64,
}

/// Options for the `headers` subcommand.
#[derive(Debug, Clone, Args)]
pub struct HeadersOpt {
    /// List of domains or URLs to query
    #[arg(short = 'l', long = "list", value_name = "FILE")]
    pub list: PathBuf,

    /// Output file for the JSON result
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = HTTP_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

/// Options for the `massdns` subcommand.
#[derive(Debug, Clone, Args)]
pub struct MassdnsOpt {
    /// The massdns output file (simple text format)
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// Output file to save the results
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Options for the `crt` subcommand.
///
/// Exactly one of `--domain` or `--org` must be given.
#[derive(Debug, Clone, Args)]
#[command(group(ArgGroup::new("query").required(true).args(["domain", "org"])))]
pub struct CrtOpt {
    /// Domain name to search for
    #[arg(short, long)]
    pub domain: Option<String>,

    /// Organization name to search for
    #[arg(long)]
    pub org: Option<String>,

    /// Output file to save the results
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Library configuration for a CNAME run (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use recon::CnameConfig;
/// use std::path::PathBuf;
///
/// let config = CnameConfig {
///     list: PathBuf::from("domains.txt"),
///     depth: 3,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct CnameConfig {
    /// File to read domains from
    pub list: PathBuf,

    /// Optional JSON export path
    pub output: Option<PathBuf>,

    /// Optional CSV export path
    pub csv: Option<PathBuf>,

    /// Optional nameserver list overriding the system configuration
    pub resolvers: Option<PathBuf>,

    /// Maximum recursion depth
    pub depth: u32,

    /// Chain walks polled at once
    pub concurrency: usize,

    /// Per-query DNS timeout in seconds
    pub dns_timeout_seconds: u64,
}

impl Default for CnameConfig {
    fn default() -> Self {
        Self {
            list: PathBuf::from("domains.txt"),
            output: None,
            csv: None,
            resolvers: None,
            depth: DEFAULT_CNAME_DEPTH,
            concurrency: DEFAULT_CNAME_CONCURRENCY,
            dns_timeout_seconds: DNS_TIMEOUT_SECS,
        }
    }
}

impl From<CnameOpt> for CnameConfig {
    fn from(opt: CnameOpt) -> Self {
        Self {
            list: opt.list,
            output: opt.output,
            csv: opt.csv,
            resolvers: opt.resolvers,
            depth: opt.depth,
            concurrency: opt.concurrency,
            dns_timeout_seconds: opt.timeout_seconds,
        }
    }
}

/// Library configuration for a headers run.
#[derive(Debug, Clone)]
pub struct HeadersConfig {
    /// File to read domains or URLs from
    pub list: PathBuf,

    /// Optional JSON export path
    pub output: Option<PathBuf>,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Default for HeadersConfig {
    fn default() -> Self {
        Self {
            list: PathBuf::from("domains.txt"),
            output: None,
            timeout_seconds: HTTP_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl From<HeadersOpt> for HeadersConfig {
    fn from(opt: HeadersOpt) -> Self {
        Self {
            list: opt.list,
            output: opt.output,
            timeout_seconds: opt.timeout_seconds,
            user_agent: opt.user_agent,
        }
    }
}
