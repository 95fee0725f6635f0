//! Weighted scoring - recency penalty plus comparative boost.
//!
//! The candidate's position in the observed identifier range stands in for
//! publication recency: PMIDs are assigned roughly chronologically, so the
//! oldest surviving candidate has `age_norm = 1` and the newest `0`.

use std::collections::{HashMap, HashSet};

use crate::types::candidate::{CandidateSet, Pmid};
use crate::types::config::ScoringConfig;

/// Compute the weighted score for every candidate.
///
/// `weighted = raw * (1 - beta * age_norm^gamma)`, multiplied by the
/// comparative boost when the candidate carries the flag. When all
/// candidates share one identifier the age term collapses and the weighted
/// score equals the raw score. Scores are not clamped.
pub fn weighted_scores(
    candidates: &CandidateSet,
    comparative: &HashSet<Pmid>,
    config: &ScoringConfig,
) -> HashMap<Pmid, f64> {
    let Some((min_id, max_id)) = candidates.id_span() else {
        return HashMap::new();
    };
    let span = (max_id - min_id) as f64;

    candidates
        .iter()
        .map(|(&pmid, seeds)| {
            let raw = seeds.len() as f64;
            let mut weighted = if max_id == min_id {
                raw
            } else {
                let age_norm = (max_id - pmid) as f64 / span;
                raw * (1.0 - config.age_beta * age_norm.powf(config.age_gamma))
            };
            if comparative.contains(&pmid) {
                weighted *= config.comparative_boost;
            }
            (pmid, weighted)
        })
        .collect()
}
