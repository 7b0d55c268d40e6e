//! Error type definitions.
//!
//! This module defines all error, warning, and info types used throughout the application.

use hickory_resolver::error::ResolveError;
use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// The resolver list could not be read.
    #[error("Failed to read resolver file {path}: {source}")]
    ResolverFileError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The resolver list did not yield a single usable nameserver.
    #[error("No usable nameservers in resolver file {0}")]
    NoNameserversError(String),
}

/// An unrecoverable resolver failure for a single CNAME query.
///
/// No-answer, NXDOMAIN and timeout outcomes are not errors; see `CnameAnswer`.
#[derive(Error, Debug)]
pub enum DnsLookupError {
    #[error("CNAME lookup for {domain} failed: {source}")]
    Resolver {
        domain: String,
        #[source]
        source: ResolveError,
    },
}

/// Failure fetching response headers for one URL.
#[derive(Error, Debug)]
pub enum HeaderFetchError {
    #[error("Error: 404 Not Found for URL: {url}")]
    NotFound { url: String },

    #[error("HTTP Error: {status} for URL: {url}")]
    Status { url: String, status: u16 },

    #[error("SSL Error for URL {url}: {source}")]
    Tls {
        url: String,
        #[source]
        source: ReqwestError,
    },

    #[error("Request timed out for URL {url}: {source}")]
    Timeout {
        url: String,
        #[source]
        source: ReqwestError,
    },

    #[error("Request Error for URL {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: ReqwestError,
    },
}

/// Failure querying crt.sh.
#[derive(Error, Debug)]
pub enum CrtError {
    #[error("crt.sh request failed: {0}")]
    Request(#[source] ReqwestError),

    #[error("crt.sh returned HTTP {0}")]
    Status(u16),

    #[error("Error parsing JSON: {0}")]
    Decode(#[source] ReqwestError),
}

/// Types of errors that can occur while processing an input entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // DNS errors
    DnsCnameLookupError,
    // HTTP/Network errors
    HttpRequestNotFound,
    HttpRequestStatusError,
    HttpRequestTlsError,
    HttpRequestTimeoutError,
    HttpRequestOtherError,
}

/// Types of warnings: input that was skipped rather than processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum WarningType {
    InvalidUrl,
    UnrecognizedMassdnsLine,
}

/// Types of informational metrics.
///
/// The CNAME outcomes here are all recovered as an empty chain segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum InfoType {
    CnameNoAnswer,
    CnameNxDomain,
    CnameTimeout,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::DnsCnameLookupError => "DNS CNAME lookup error",
            ErrorType::HttpRequestNotFound => "Not Found (404)",
            ErrorType::HttpRequestStatusError => "HTTP request status error",
            ErrorType::HttpRequestTlsError => "TLS handshake error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
        }
    }
}

impl WarningType {
    /// Returns a human-readable string representation of the warning type.
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningType::InvalidUrl => "Invalid URL skipped",
            WarningType::UnrecognizedMassdnsLine => "Unrecognized massdns line",
        }
    }
}

impl InfoType {
    /// Returns a human-readable string representation of the info type.
    pub fn as_str(&self) -> &'static str {
        match self {
            InfoType::CnameNoAnswer => "CNAME query without answer",
            InfoType::CnameNxDomain => "CNAME query for non-existent domain",
            InfoType::CnameTimeout => "CNAME query timed out",
        }
    }
}
