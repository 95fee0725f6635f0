//! Expansion pipeline - the core of the library.
//!
//! The pipeline runs five phases in order:
//! - Aggregate: query related records for every seed
//! - Raw scoring: one point per distinct discovering seed
//! - Content filter: prune by title/abstract/publication-type vocabulary
//! - Weighted scoring: recency penalty plus comparative boost
//! - Report: threshold files, ranked list, summary statistics

pub mod aggregate;
pub mod filter;
pub mod report;
pub mod score;

pub use aggregate::{aggregate, SEED_QUERY_INTERVAL};
pub use filter::{
    apply_rules, evaluate, fetch_all_metadata, filter_candidates, FilterOutcome, RejectReason,
    RuleContext,
};
pub use report::{
    ranked_order, recommended_threshold, write_reports, ExpansionSummary, FIXED_THRESHOLDS,
};
pub use score::weighted_scores;

use tracing::info;

use crate::error::{ExpansionError, Result};
use crate::seeds::SeedSets;
use crate::traits::literature::LiteratureService;
use crate::types::config::ExpansionConfig;

/// Run the full pipeline and write the output files.
///
/// Fails with [`ExpansionError::ExhaustedSearch`] when aggregation finds
/// nothing and [`ExpansionError::ExhaustedAfterFilter`] when filtering
/// removes every candidate. External-call failures never surface here;
/// they only thin the data.
pub async fn run<S: LiteratureService>(
    service: &S,
    sets: &SeedSets,
    config: &ExpansionConfig,
) -> Result<ExpansionSummary> {
    let all_seeds = sets.seeds();
    let seeds = match config.max_seeds {
        Some(max) => &all_seeds[..max.min(all_seeds.len())],
        None => all_seeds,
    };

    info!("=== PubMed Iterative Expansion ===");
    info!("Using {} papers as seeds", seeds.len());
    info!("Output directory: {}", config.output_dir.display());

    info!("Querying PubMed (this will take a while)...");
    info!("Progress will be shown every 10 papers");
    let candidates = aggregate::aggregate(service, seeds, sets).await;
    if candidates.is_empty() {
        return Err(ExpansionError::ExhaustedSearch);
    }
    info!("Processing results...");

    info!("Filtering by content...");
    let outcome = filter::filter_candidates(service, candidates, &config.filter).await;
    if outcome.kept.is_empty() {
        return Err(ExpansionError::ExhaustedAfterFilter);
    }

    let weighted = score::weighted_scores(&outcome.kept, &outcome.comparative, &config.scoring);
    info!(
        "Age weighting parameters: AGE_BETA={}, AGE_GAMMA={}",
        config.scoring.age_beta, config.scoring.age_gamma
    );
    info!(
        "Comparative boost factor: {}",
        config.scoring.comparative_boost
    );

    report::write_reports(&config.output_dir, &outcome.kept, &weighted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockLiteratureService;

    fn sets() -> SeedSets {
        SeedSets::new(vec![100, 200], vec![300], 50)
    }

    #[tokio::test]
    async fn test_end_to_end_single_candidate() {
        let service = MockLiteratureService::new()
            .with_related(100, [500])
            .with_related(200, [500])
            .with_article(
                500,
                "Whole genome sequencing of barley landraces",
                "We sequenced 200 accessions.",
                "Journal Article",
            );
        let dir = tempfile::tempdir().unwrap();
        let config = ExpansionConfig::new(dir.path());

        let summary = run(&service, &sets(), &config).await.unwrap();

        assert_eq!(summary.total_candidates, 1);
        assert_eq!(summary.max_raw_score, 2);
        assert_eq!(summary.recommended_threshold, 2);

        // Single surviving candidate: the identifier span collapses and the
        // weighted score equals the raw score exactly.
        let ranked = std::fs::read_to_string(dir.path().join("candidates_ranked.txt")).unwrap();
        assert_eq!(
            ranked,
            "PMID\tScore\tWeightedScore\tSeeds\n500\t2\t2.000000\t100,200\n"
        );

        let min2 = std::fs::read_to_string(dir.path().join("candidates_min2_seeds.txt")).unwrap();
        assert_eq!(min2, "500\n");
    }

    #[tokio::test]
    async fn test_no_candidates_is_fatal() {
        let service = MockLiteratureService::new();
        let dir = tempfile::tempdir().unwrap();
        let config = ExpansionConfig::new(dir.path());

        let err = run(&service, &sets(), &config).await.unwrap_err();
        assert!(matches!(err, ExpansionError::ExhaustedSearch));
    }

    #[tokio::test]
    async fn test_everything_filtered_is_fatal() {
        let service = MockLiteratureService::new()
            .with_related(100, [500])
            .with_article(500, "RNA-seq atlas", "expression profiling", "Journal Article");
        let dir = tempfile::tempdir().unwrap();
        let config = ExpansionConfig::new(dir.path());

        let err = run(&service, &sets(), &config).await.unwrap_err();
        assert!(matches!(err, ExpansionError::ExhaustedAfterFilter));
    }

    #[tokio::test]
    async fn test_max_seeds_truncates_processing_only() {
        let service = MockLiteratureService::new()
            .with_related(100, [500, 200])
            .with_related(200, [501])
            .with_article(
                500,
                "Whole genome resequencing",
                "population diversity",
                "Journal Article",
            );
        let dir = tempfile::tempdir().unwrap();
        let config = ExpansionConfig::new(dir.path()).with_max_seeds(1);

        let summary = run(&service, &sets(), &config).await.unwrap();

        // Seed 200 was not queried, but it still cannot become a candidate.
        assert_eq!(service.related_calls(), vec![100]);
        assert_eq!(summary.total_candidates, 1);
    }
}
