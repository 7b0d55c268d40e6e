//! CNAME record queries.
//!
//! One query answers "which names does this domain directly alias?". Outcomes
//! that simply mean "nothing to follow" (no CNAME record, NXDOMAIN, timeout)
//! are reported as `CnameAnswer::Empty`; only other resolver failures are
//! errors.

use futures::future::BoxFuture;
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::error::ProtoErrorKind;
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::{Name, RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use crate::domain::normalize_domain;
use crate::error_handling::DnsLookupError;

/// Why a CNAME query produced nothing to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// The name exists but has no CNAME record.
    NoAnswer,
    /// The name does not exist.
    NxDomain,
    /// No nameserver answered within the configured timeout.
    Timeout,
}

/// Result of a single CNAME query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CnameAnswer {
    /// Normalized targets in the order the resolver returned them.
    Targets(Vec<String>),
    Empty(EmptyReason),
}

impl CnameAnswer {
    /// The targets to follow; empty for every `Empty` outcome.
    pub fn into_targets(self) -> Vec<String> {
        match self {
            CnameAnswer::Targets(targets) => targets,
            CnameAnswer::Empty(_) => Vec::new(),
        }
    }
}

/// A source of CNAME answers.
///
/// Implemented for hickory's `TokioAsyncResolver`; the chain walker only
/// depends on this trait so it can run against any resolver.
pub trait CnameLookup: Send + Sync {
    fn lookup_cname<'a>(
        &'a self,
        domain: &'a str,
    ) -> BoxFuture<'a, Result<CnameAnswer, DnsLookupError>>;
}

impl CnameLookup for TokioAsyncResolver {
    fn lookup_cname<'a>(
        &'a self,
        domain: &'a str,
    ) -> BoxFuture<'a, Result<CnameAnswer, DnsLookupError>> {
        Box::pin(lookup_cname_records(domain, self))
    }
}

/// Maps a resolver error onto an empty answer where it is recoverable.
///
/// # Errors
///
/// Returns `DnsLookupError::Resolver` for anything other than no-records,
/// NXDOMAIN, or timeout.
pub fn classify_resolve_error(
    domain: &str,
    error: ResolveError,
) -> Result<CnameAnswer, DnsLookupError> {
    let reason = match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            if *response_code == ResponseCode::NXDomain {
                Some(EmptyReason::NxDomain)
            } else {
                Some(EmptyReason::NoAnswer)
            }
        }
        ResolveErrorKind::Timeout => Some(EmptyReason::Timeout),
        ResolveErrorKind::Proto(proto) if matches!(proto.kind(), ProtoErrorKind::Timeout) => {
            Some(EmptyReason::Timeout)
        }
        _ => None,
    };

    match reason {
        Some(reason) => Ok(CnameAnswer::Empty(reason)),
        None => Err(DnsLookupError::Resolver {
            domain: domain.to_string(),
            source: error,
        }),
    }
}

/// Queries CNAME records for a domain.
///
/// # Arguments
///
/// * `domain` - The domain to query
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// The directly aliased names (normalized, in ASCII wire form), or the reason
/// there are none.
///
/// The name is queried as fully qualified, so no search domain is ever
/// appended to it.
///
/// # Errors
///
/// Returns `DnsLookupError` for resolver failures other than no-records,
/// NXDOMAIN, or timeout.
pub async fn lookup_cname_records(
    domain: &str,
    resolver: &TokioAsyncResolver,
) -> Result<CnameAnswer, DnsLookupError> {
    let mut name = Name::from_utf8(domain).map_err(|e| DnsLookupError::Resolver {
        domain: domain.to_string(),
        source: e.into(),
    })?;
    name.set_fqdn(true);

    match resolver.lookup(name, RecordType::CNAME).await {
        Ok(lookup) => {
            let targets: Vec<String> = lookup
                .iter()
                .filter_map(|rdata| {
                    if let RData::CNAME(cname) = rdata {
                        Some(normalize_domain(&cname.0.to_ascii()))
                    } else {
                        None
                    }
                })
                .filter(|target| !target.is_empty())
                .collect();
            if targets.is_empty() {
                Ok(CnameAnswer::Empty(EmptyReason::NoAnswer))
            } else {
                Ok(CnameAnswer::Targets(targets))
            }
        }
        Err(e) => classify_resolve_error(domain, e),
    }
}
