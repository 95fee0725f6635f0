//! Core data types for the expansion pipeline.

pub mod candidate;
pub mod config;

pub use candidate::{ArticleMetadata, CandidateSet, Pmid};
pub use config::{ExpansionConfig, FilterOptions, ScoringConfig};
