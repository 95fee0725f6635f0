//! Report generation - threshold files, ranked list, and summary
//! statistics.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{ExpansionError, Result};
use crate::types::candidate::{CandidateSet, Pmid};

/// Thresholds a file is always attempted for, alongside the recommended one.
pub const FIXED_THRESHOLDS: [usize; 4] = [2, 3, 5, 10];

/// Derive the recommended confidence threshold from the best raw score.
pub fn recommended_threshold(max_raw_score: usize) -> usize {
    (max_raw_score / 10).max(2)
}

/// What a finished run produced.
#[derive(Debug, Clone)]
pub struct ExpansionSummary {
    /// Surviving candidates, total.
    pub total_candidates: usize,

    /// Best raw score observed.
    pub max_raw_score: usize,

    /// Recommended confidence threshold.
    pub recommended_threshold: usize,

    /// Candidates with raw score >= the recommended threshold.
    pub high_confidence: usize,

    /// Candidates with raw score in `3..recommended`.
    pub medium_confidence: usize,

    /// Candidates with raw score below 3.
    pub low_confidence: usize,

    /// Output files written, in write order.
    pub files: Vec<PathBuf>,
}

/// Candidates ordered for the ranked report: weighted score descending,
/// then raw score descending, then PMID ascending.
pub fn ranked_order(candidates: &CandidateSet, weighted: &HashMap<Pmid, f64>) -> Vec<Pmid> {
    let mut pmids = candidates.pmids();
    pmids.sort_by(|a, b| {
        let wa = weighted.get(a).copied().unwrap_or(0.0);
        let wb = weighted.get(b).copied().unwrap_or(0.0);
        wb.partial_cmp(&wa)
            .unwrap_or(Ordering::Equal)
            .then_with(|| candidates.raw_score(*b).cmp(&candidates.raw_score(*a)))
            .then_with(|| a.cmp(b))
    });
    pmids
}

/// Write all output files and log the summary statistics.
pub fn write_reports(
    output_dir: &Path,
    candidates: &CandidateSet,
    weighted: &HashMap<Pmid, f64>,
) -> Result<ExpansionSummary> {
    let max_raw_score = candidates.max_raw_score();
    let recommended = recommended_threshold(max_raw_score);

    info!("=== RESULTS ===");
    info!("Total unique candidate papers found: {}", candidates.len());
    log_score_distribution(candidates);
    info!("Maximum score: {}", max_raw_score);
    info!(
        "Recommended threshold: >={} (captures high-confidence matches)",
        recommended
    );

    info!("=== OUTPUT FILES ===");
    let mut files = Vec::new();

    // The recommended threshold is appended without deduplication; a value
    // that repeats one of the fixed thresholds rewrites the same file with
    // identical content.
    let mut thresholds = FIXED_THRESHOLDS.to_vec();
    thresholds.push(recommended);

    for threshold in thresholds {
        if threshold > max_raw_score {
            continue;
        }
        let path = output_dir.join(format!("candidates_min{}_seeds.txt", threshold));

        let mut pmids: Vec<Pmid> = candidates
            .iter()
            .filter(|(_, seeds)| seeds.len() >= threshold)
            .map(|(&pmid, _)| pmid)
            .collect();
        pmids.sort_unstable();

        let mut body = String::new();
        for pmid in &pmids {
            body.push_str(&pmid.to_string());
            body.push('\n');
        }
        write_file(&path, &body)?;

        info!(
            "  candidates_min{}_seeds.txt: {} candidates (>={} seeds)",
            threshold,
            pmids.len(),
            threshold
        );
        files.push(path);
    }

    let ranked_path = output_dir.join("candidates_ranked.txt");
    let mut body = String::from("PMID\tScore\tWeightedScore\tSeeds\n");
    for pmid in ranked_order(candidates, weighted) {
        let seeds = candidates
            .discovering_seeds(pmid)
            .unwrap_or(&[])
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let score = candidates.raw_score(pmid);
        let weight = weighted.get(&pmid).copied().unwrap_or(0.0);
        body.push_str(&format!("{}\t{}\t{:.6}\t{}\n", pmid, score, weight, seeds));
    }
    write_file(&ranked_path, &body)?;
    info!(
        "  candidates_ranked.txt: All {} candidates with weighted and raw scores",
        candidates.len()
    );
    files.push(ranked_path);

    let high_confidence = count_scores(candidates, |s| s >= recommended);
    let medium_confidence = count_scores(candidates, |s| (3..recommended).contains(&s));
    let low_confidence = count_scores(candidates, |s| s < 3);

    info!("=== RECOMMENDATIONS ===");
    info!(
        "High confidence (>={} seeds): {} papers",
        recommended, high_confidence
    );
    info!("  -> START HERE - these are most likely true positives");
    info!(
        "Medium confidence (3-{} seeds): {} papers",
        recommended.saturating_sub(1),
        medium_confidence
    );
    info!("  -> Review these after high confidence papers");
    info!("Low confidence (1-2 seeds): {} papers", low_confidence);
    info!("  -> Likely many false positives");
    info!("Next steps:");
    info!(
        "  1. Review candidates_min{}_seeds.txt",
        recommended
    );
    info!("  2. If you need more papers, lower the threshold");
    info!("  3. If you find false positives, raise the threshold");

    Ok(ExpansionSummary {
        total_candidates: candidates.len(),
        max_raw_score,
        recommended_threshold: recommended,
        high_confidence,
        medium_confidence,
        low_confidence,
        files,
    })
}

fn count_scores(candidates: &CandidateSet, keep: impl Fn(usize) -> bool) -> usize {
    candidates.iter().filter(|(_, s)| keep(s.len())).count()
}

fn log_score_distribution(candidates: &CandidateSet) {
    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for (_, seeds) in candidates.iter() {
        *counts.entry(seeds.len()).or_default() += 1;
    }

    info!("Score Distribution (how many seeds found each candidate):");
    for (score, count) in counts.iter().rev() {
        info!("  {:3} seeds: {:4} candidates", score, count);
    }
}

fn write_file(path: &Path, body: &str) -> Result<()> {
    fs::write(path, body).map_err(|source| ExpansionError::Report {
        path: path.to_path_buf(),
        source,
    })
}
