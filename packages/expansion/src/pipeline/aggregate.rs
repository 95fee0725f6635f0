//! Candidate aggregation - expand each seed into related articles.
//!
//! Seeds are processed strictly in input order, one at a time. The
//! external service imposes rate limits, so a fixed pause separates
//! consecutive seed queries; the pacing is part of the contract with the
//! service, not a tunable.

use governor::{Quota, RateLimiter};
use std::time::Duration;
use tracing::info;

use crate::seeds::SeedSets;
use crate::traits::literature::LiteratureService;
use crate::types::candidate::{CandidateSet, Pmid};

/// Minimum spacing between consecutive seed queries.
pub const SEED_QUERY_INTERVAL: Duration = Duration::from_millis(500);

/// Expand every seed and accumulate candidate discoveries.
///
/// For each seed the service's related records are fetched; ids that are
/// themselves seeds, known negatives, or older than the cutoff are skipped,
/// and the rest are recorded against the current seed. A seed whose query
/// fails contributes nothing. Progress is logged every 10 seeds.
pub async fn aggregate<S: LiteratureService>(
    service: &S,
    seeds: &[Pmid],
    sets: &SeedSets,
) -> CandidateSet {
    let quota = Quota::with_period(SEED_QUERY_INTERVAL).expect("non-zero interval");
    let limiter = RateLimiter::direct(quota);

    let mut candidates = CandidateSet::new();
    let total = seeds.len();

    for (idx, &seed) in seeds.iter().enumerate() {
        limiter.until_ready().await;

        let position = idx + 1;
        if position % 10 == 0 {
            let pct = position * 100 / total;
            info!("  Progress: {}/{} ({}%)", position, total, pct);
        }

        for pmid in service.find_related(seed).await {
            if sets.admits(pmid) {
                candidates.record(pmid, seed);
            }
        }
    }

    info!("Complete: {}/{} (100%)", total, total);
    candidates
}
