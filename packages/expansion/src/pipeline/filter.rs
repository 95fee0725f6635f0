//! Content filtering - prune candidates by title, abstract, and
//! publication type.
//!
//! Filtering is two-pass: metadata is fetched in batches for the whole
//! candidate set first, then every candidate is evaluated against an
//! ordered chain of exclusion rules. The first matching rule wins; a
//! candidate with no metadata is kept unconditionally, since missing data
//! is not evidence of irrelevance.

use std::collections::{HashMap, HashSet};

use tracing::{debug, info};

use crate::patterns::FilterPatterns;
use crate::traits::literature::LiteratureService;
use crate::types::candidate::{ArticleMetadata, CandidateSet, Pmid};
use crate::types::config::FilterOptions;

/// Why a candidate was excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Assembly-only paper without comparative-study language.
    AssemblyOnly,

    /// Review, editorial, letter, meta-analysis, news, or comment.
    ExcludedPubType,

    /// Disqualifying vocabulary in title or abstract.
    NegativeSignal,

    /// No whole-genome/WGS/resequencing vocabulary found.
    NoPositiveSignal,
}

/// Everything a rule may consult about one candidate.
pub struct RuleContext<'a> {
    /// Lower-cased title + abstract.
    pub content: &'a str,

    /// Lower-cased publication type list.
    pub pub_types: &'a str,

    /// Whether the comparative vocabulary matched `content`.
    pub comparative: bool,

    pub options: &'a FilterOptions,
    pub patterns: &'a FilterPatterns,
}

fn assembly_only(cx: &RuleContext) -> bool {
    cx.options.exclude_assembly_only && cx.patterns.assembly.is_match(cx.content) && !cx.comparative
}

fn excluded_pub_type(cx: &RuleContext) -> bool {
    !cx.pub_types.is_empty() && cx.patterns.excluded_pub_types.is_match(cx.pub_types)
}

fn negative_signal(cx: &RuleContext) -> bool {
    cx.patterns.negative.is_match(cx.content)
}

fn missing_positive_signal(cx: &RuleContext) -> bool {
    cx.options.require_positive_signal && !cx.patterns.positive.is_match(cx.content)
}

/// Exclusion rules in precedence order. First match wins.
const RULES: &[(RejectReason, fn(&RuleContext) -> bool)] = &[
    (RejectReason::AssemblyOnly, assembly_only),
    (RejectReason::ExcludedPubType, excluded_pub_type),
    (RejectReason::NegativeSignal, negative_signal),
    (RejectReason::NoPositiveSignal, missing_positive_signal),
];

/// Evaluate the rule chain for one candidate.
pub fn evaluate(cx: &RuleContext) -> Option<RejectReason> {
    RULES
        .iter()
        .find(|(_, matches)| matches(cx))
        .map(|(reason, _)| *reason)
}

/// Result of content filtering.
#[derive(Debug, Default)]
pub struct FilterOutcome {
    /// Candidates that survived.
    pub kept: CandidateSet,

    /// Candidates whose content matched the comparative vocabulary
    /// (flagged regardless of whether they survived).
    pub comparative: HashSet<Pmid>,

    /// How many candidates were removed.
    pub removed: usize,
}

/// Fetch metadata for all `pmids` in fixed-size batches.
pub async fn fetch_all_metadata<S: LiteratureService>(
    service: &S,
    pmids: &[Pmid],
    batch_size: usize,
) -> HashMap<Pmid, ArticleMetadata> {
    let mut metadata = HashMap::new();
    for batch in pmids.chunks(batch_size.max(1)) {
        metadata.extend(service.fetch_metadata(batch).await);
    }
    metadata
}

/// Apply the rule chain to every candidate, consuming the input set.
pub fn apply_rules(
    candidates: CandidateSet,
    metadata: &HashMap<Pmid, ArticleMetadata>,
    options: &FilterOptions,
) -> FilterOutcome {
    let patterns = FilterPatterns::new();
    let mut outcome = FilterOutcome::default();

    for (pmid, seeds) in candidates {
        let Some(meta) = metadata.get(&pmid) else {
            // Fail open: no metadata, keep the candidate.
            outcome.kept.insert_discovered(pmid, seeds);
            continue;
        };

        let content = meta.content();
        let pub_types = meta.pub_types_lower();

        // The comparative flag is computed before any exclusion runs; it
        // exempts the candidate from the assembly-only rule and survives
        // into scoring.
        let comparative = patterns.comparative.is_match(&content);
        if comparative {
            outcome.comparative.insert(pmid);
        }

        let cx = RuleContext {
            content: &content,
            pub_types: &pub_types,
            comparative,
            options,
            patterns: &patterns,
        };

        match evaluate(&cx) {
            Some(reason) => {
                debug!("excluded {}: {:?}", pmid, reason);
                outcome.removed += 1;
            }
            None => outcome.kept.insert_discovered(pmid, seeds),
        }
    }

    info!(
        "Content filter removed {} candidates not matching WGS criteria",
        outcome.removed
    );
    outcome
}

/// Fetch metadata for the whole candidate set, then filter it.
pub async fn filter_candidates<S: LiteratureService>(
    service: &S,
    candidates: CandidateSet,
    options: &FilterOptions,
) -> FilterOutcome {
    let pmids = candidates.pmids();
    let metadata = fetch_all_metadata(service, &pmids, options.metadata_batch_size).await;
    apply_rules(candidates, &metadata, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockLiteratureService;

    fn context<'a>(
        content: &'a str,
        pub_types: &'a str,
        comparative: bool,
        options: &'a FilterOptions,
        patterns: &'a FilterPatterns,
    ) -> RuleContext<'a> {
        RuleContext {
            content,
            pub_types,
            comparative,
            options,
            patterns,
        }
    }

    #[test]
    fn test_assembly_only_rule() {
        let options = FilterOptions::default();
        let patterns = FilterPatterns::new();

        let cx = context("a de novo assembly of barley", "", false, &options, &patterns);
        assert_eq!(evaluate(&cx), Some(RejectReason::AssemblyOnly));

        // Comparative language exempts the candidate from the assembly rule;
        // it then fails the positive-signal requirement instead.
        let cx = context("a de novo assembly of barley", "", true, &options, &patterns);
        assert_eq!(evaluate(&cx), Some(RejectReason::NoPositiveSignal));

        let disabled = FilterOptions::default().with_exclude_assembly_only(false);
        let cx = context(
            "a de novo assembly from whole genome data",
            "",
            false,
            &disabled,
            &patterns,
        );
        assert_eq!(evaluate(&cx), None);
    }

    #[test]
    fn test_excluded_pub_type_rule() {
        let options = FilterOptions::default();
        let patterns = FilterPatterns::new();

        let cx = context(
            "whole genome resequencing",
            "journal article;review",
            false,
            &options,
            &patterns,
        );
        assert_eq!(evaluate(&cx), Some(RejectReason::ExcludedPubType));

        // Empty publication types never trigger the rule.
        let cx = context("whole genome resequencing", "", false, &options, &patterns);
        assert_eq!(evaluate(&cx), None);
    }

    #[test]
    fn test_negative_signal_rule_beats_positive() {
        let options = FilterOptions::default();
        let patterns = FilterPatterns::new();

        let cx = context(
            "whole genome study with rna-seq validation",
            "",
            false,
            &options,
            &patterns,
        );
        assert_eq!(evaluate(&cx), Some(RejectReason::NegativeSignal));
    }

    #[test]
    fn test_positive_signal_requirement() {
        let patterns = FilterPatterns::new();

        let required = FilterOptions::default();
        let cx = context("a linkage map of wheat", "", false, &required, &patterns);
        assert_eq!(evaluate(&cx), Some(RejectReason::NoPositiveSignal));

        let relaxed = FilterOptions::default().with_require_positive_signal(false);
        let cx = context("a linkage map of wheat", "", false, &relaxed, &patterns);
        assert_eq!(evaluate(&cx), None);
    }

    #[tokio::test]
    async fn test_missing_metadata_keeps_candidate() {
        let service = MockLiteratureService::new();
        let mut candidates = CandidateSet::new();
        candidates.record(500, 100);

        let outcome = filter_candidates(&service, candidates, &FilterOptions::default()).await;

        assert_eq!(outcome.kept.raw_score(500), 1);
        assert_eq!(outcome.removed, 0);
    }

    #[tokio::test]
    async fn test_rna_seq_discarded_despite_positive_match() {
        let service = MockLiteratureService::new().with_article(
            500,
            "Whole genome and RNA-seq analysis",
            "resequencing plus expression profiling",
            "Journal Article",
        );
        let mut candidates = CandidateSet::new();
        candidates.record(500, 100);
        candidates.record(500, 200);

        let outcome = filter_candidates(&service, candidates, &FilterOptions::default()).await;

        assert!(outcome.kept.is_empty());
        assert_eq!(outcome.removed, 1);
    }

    #[tokio::test]
    async fn test_comparative_flag_set_for_survivors() {
        let service = MockLiteratureService::new().with_article(
            500,
            "Whole genome resequencing",
            "population diversity of wild barley",
            "Journal Article",
        );
        let mut candidates = CandidateSet::new();
        candidates.record(500, 100);

        let outcome = filter_candidates(&service, candidates, &FilterOptions::default()).await;

        assert_eq!(outcome.kept.raw_score(500), 1);
        assert!(outcome.comparative.contains(&500));
    }

    #[tokio::test]
    async fn test_metadata_fetched_in_batches() {
        let service = MockLiteratureService::new();
        let pmids: Vec<Pmid> = (1..=450).collect();

        fetch_all_metadata(&service, &pmids, 200).await;

        assert_eq!(service.metadata_calls(), vec![200, 200, 50]);
    }

    #[tokio::test]
    async fn test_filter_is_idempotent() {
        let service = MockLiteratureService::new()
            .with_article(
                500,
                "Whole genome resequencing",
                "population diversity of wild accessions",
                "Journal Article",
            )
            .with_article(600, "RNA-seq atlas", "expression profiling", "Journal Article");
        let mut candidates = CandidateSet::new();
        candidates.record(500, 100);
        candidates.record(600, 100);

        let options = FilterOptions::default();
        let first = filter_candidates(&service, candidates, &options).await;
        let survivors = first.kept.len();

        let second = filter_candidates(&service, first.kept, &options).await;
        assert_eq!(second.kept.len(), survivors);
        assert_eq!(second.removed, 0);
    }
}
