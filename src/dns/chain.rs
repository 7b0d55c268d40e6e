//! Recursive CNAME chain walking.
//!
//! For a domain with direct targets `[t1, t2]` the chain is
//! `[t1, t2] ++ walk(t1) ++ walk(t2)`, each nested walk one level shallower.
//! Nothing is deduplicated: an alias loop (A -> B -> A) repeats until the
//! depth runs out.

use futures::future::BoxFuture;
use log::{debug, warn};

use super::records::{CnameAnswer, CnameLookup, EmptyReason};
use crate::error_handling::{ErrorType, InfoType, ProcessingStats};

/// Queries the direct targets of `domain`, recording the outcome in `stats`.
///
/// Resolver failures are logged and treated like an empty answer so that one
/// bad branch does not abort the walk.
pub async fn direct_targets<R>(domain: &str, resolver: &R, stats: &ProcessingStats) -> Vec<String>
where
    R: CnameLookup + ?Sized,
{
    match resolver.lookup_cname(domain).await {
        Ok(CnameAnswer::Targets(targets)) => {
            debug!("{domain} -> {}", targets.join(", "));
            targets
        }
        Ok(CnameAnswer::Empty(reason)) => {
            let info = match reason {
                EmptyReason::NoAnswer => InfoType::CnameNoAnswer,
                EmptyReason::NxDomain => InfoType::CnameNxDomain,
                EmptyReason::Timeout => InfoType::CnameTimeout,
            };
            debug!("{domain}: {}", info.as_str());
            stats.increment_info(info);
            Vec::new()
        }
        Err(e) => {
            warn!("{e}");
            stats.increment_error(ErrorType::DnsCnameLookupError);
            Vec::new()
        }
    }
}

/// Follows the CNAME chain of `domain` up to `depth` levels.
///
/// Returns every discovered target: first the direct targets in resolver
/// order, then the recursive results of each direct target in the same order.
/// A depth of zero returns an empty chain without issuing a query.
pub fn resolve_cname_chain<'a, R>(
    domain: &'a str,
    depth: u32,
    resolver: &'a R,
    stats: &'a ProcessingStats,
) -> BoxFuture<'a, Vec<String>>
where
    R: CnameLookup + ?Sized,
{
    Box::pin(async move {
        if depth == 0 {
            return Vec::new();
        }

        let direct = direct_targets(domain, resolver, stats).await;
        let mut chain = direct.clone();
        for target in &direct {
            chain.extend(resolve_cname_chain(target, depth - 1, resolver, stats).await);
        }
        chain
    })
}
