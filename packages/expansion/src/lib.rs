//! Seed-Driven PubMed Expansion Library
//!
//! Finds new papers similar to a curated set by expanding each seed paper
//! into its related records, then scoring candidates by how many seeds
//! discovered them. Candidates are pruned by content (title, abstract, and
//! publication types), scored with a recency penalty and an optional
//! comparative-study boost, and written out as ranked and thresholded
//! lists.
//!
//! # Design
//!
//! - The external literature service sits behind the [`LiteratureService`]
//!   trait; failures there degrade to empty results and never abort a run.
//! - Seeds are processed sequentially with mandatory pacing between
//!   queries; the external service's rate limits are part of the contract.
//! - Filtering is an ordered first-match-wins rule chain over fixed
//!   vocabulary families, so exclusion precedence stays auditable.
//!
//! # Usage
//!
//! ```rust,ignore
//! use expansion::{pipeline, EntrezCliService, ExpansionConfig, SeedSets};
//!
//! let service = EntrezCliService::new();
//! let sets = SeedSets::curated();
//! let config = ExpansionConfig::new("pubmed_results");
//!
//! let summary = pipeline::run(&service, &sets, &config).await?;
//! println!("{} candidates ranked", summary.total_candidates);
//! ```
//!
//! # Modules
//!
//! - [`traits`] - the [`LiteratureService`] seam
//! - [`entrez`] - Entrez Direct adapter and response parsers
//! - [`types`] - candidate and configuration types
//! - [`seeds`] - curated seed lists
//! - [`patterns`] - content filter vocabulary
//! - [`pipeline`] - aggregation, filtering, scoring, reporting
//! - [`testing`] - mock service for tests

pub mod entrez;
pub mod error;
pub mod patterns;
pub mod pipeline;
pub mod seeds;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{ExpansionError, Result};
pub use traits::literature::LiteratureService;
pub use types::{
    candidate::{ArticleMetadata, CandidateSet, Pmid},
    config::{ExpansionConfig, FilterOptions, ScoringConfig},
};

// Re-export the adapter and seed data
pub use entrez::EntrezCliService;
pub use seeds::SeedSets;

// Re-export pipeline components
pub use pipeline::{
    aggregate, filter_candidates, ranked_order, recommended_threshold, weighted_scores,
    write_reports, ExpansionSummary, FilterOutcome, RejectReason,
};

// Re-export testing utilities
pub use testing::MockLiteratureService;
