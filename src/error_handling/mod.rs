//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions for initialization, DNS, HTTP and crt.sh failures
//! - Processing statistics tracking (errors, warnings, info metrics)
//! - Categorization of HTTP failures
//!
//! Counters are categorized into:
//! - **Errors**: Failures that drop an entry from the result
//! - **Warnings**: Input that was skipped
//! - **Info**: Recovered outcomes (CNAME no-answer, NXDOMAIN, timeout)

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_fetch_error, classify_reqwest_error, update_error_stats};
pub use stats::ProcessingStats;
pub use types::{
    CrtError, DnsLookupError, ErrorType, HeaderFetchError, InfoType, InitializationError,
    WarningType,
};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_processing_stats_initialization() {
        let stats = ProcessingStats::new();
        for error_type in ErrorType::iter() {
            assert_eq!(stats.get_error_count(error_type), 0);
        }
        for warning_type in WarningType::iter() {
            assert_eq!(stats.get_warning_count(warning_type), 0);
        }
        for info_type in InfoType::iter() {
            assert_eq!(stats.get_info_count(info_type), 0);
        }
    }

    #[test]
    fn test_processing_stats_increment() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::DnsCnameLookupError);
        assert_eq!(stats.get_error_count(ErrorType::DnsCnameLookupError), 1);

        stats.increment_warning(WarningType::InvalidUrl);
        assert_eq!(stats.get_warning_count(WarningType::InvalidUrl), 1);

        stats.increment_info(InfoType::CnameNxDomain);
        assert_eq!(stats.get_info_count(InfoType::CnameNxDomain), 1);
    }

    #[test]
    fn test_processing_stats_totals() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::DnsCnameLookupError);
        stats.increment_error(ErrorType::HttpRequestTimeoutError);
        stats.increment_warning(WarningType::UnrecognizedMassdnsLine);
        stats.increment_info(InfoType::CnameTimeout);
        stats.increment_info(InfoType::CnameTimeout);

        assert_eq!(stats.total_errors(), 2);
        assert_eq!(stats.total_warnings(), 1);
        assert_eq!(stats.total_info(), 2);
    }

    #[test]
    fn test_processing_stats_shared_across_threads() {
        let stats = std::sync::Arc::new(ProcessingStats::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let stats = std::sync::Arc::clone(&stats);
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        stats.increment_info(InfoType::CnameNoAnswer);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(stats.get_info_count(InfoType::CnameNoAnswer), 100);
    }
}
