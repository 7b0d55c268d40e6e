//! Shared helpers for the subcommands.
//!
//! URL normalization for the headers fetcher, progress logging, and the
//! end-of-run statistics summary.

pub mod logging;
pub mod statistics;
pub mod url;

// Re-export public API
pub use logging::log_progress;
pub use statistics::print_error_statistics;
pub use url::validate_and_normalize_url;
