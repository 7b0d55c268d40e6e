//! Configuration constants.
//!
//! Defaults shared by the CLI options and the library configuration structs.

/// Default CNAME recursion depth.
pub const DEFAULT_CNAME_DEPTH: u32 = 5;

/// Default number of chain walks polled at once by the batch orchestrator.
/// A value of 1 resolves domains strictly one after another.
pub const DEFAULT_CNAME_CONCURRENCY: usize = 10;

// Network operation timeouts
/// DNS query timeout in seconds
/// Most DNS queries complete in <1s; 3s fails fast on unresponsive nameservers
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// Number of attempts per DNS query before it is reported as timed out
pub const DNS_ATTEMPTS: usize = 2;
/// Port used for nameservers listed without an explicit port
pub const DNS_PORT: u16 = 53;

/// Per-request HTTP timeout in seconds for the headers fetcher
pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Maximum URL length (2048 characters).
/// Matches common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// crt.sh certificate transparency search endpoint
pub const CRT_SH_URL: &str = "https://crt.sh/";

/// Indentation used for every pretty-printed JSON document
pub const JSON_INDENT: &[u8] = b"    ";

// HTTP status codes (for clarity and consistency)
pub const HTTP_STATUS_NOT_FOUND: u16 = 404;
