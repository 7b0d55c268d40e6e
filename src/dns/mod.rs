//! DNS resolution for CNAME chains.
//!
//! This module provides:
//! - CNAME record queries via `hickory-resolver` behind the `CnameLookup` trait
//! - Classification of empty outcomes (no answer, NXDOMAIN, timeout)
//! - The recursive chain walker bounded by a depth counter

mod chain;
mod records;

// Re-export public API
pub use chain::{direct_targets, resolve_cname_chain};
pub use records::{
    classify_resolve_error, lookup_cname_records, CnameAnswer, CnameLookup, EmptyReason,
};
