//! Configuration types for filtering, scoring, and pipeline runs.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for the content filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Require a positive whole-genome/WGS/resequencing match in the
    /// title or abstract.
    ///
    /// Default: true.
    pub require_positive_signal: bool,

    /// Discard assembly-only papers unless they also match the
    /// comparative-study vocabulary.
    ///
    /// Default: true.
    pub exclude_assembly_only: bool,

    /// Number of PMIDs per metadata fetch call.
    ///
    /// Default: 200.
    pub metadata_batch_size: usize,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            require_positive_signal: true,
            exclude_assembly_only: true,
            metadata_batch_size: 200,
        }
    }
}

impl FilterOptions {
    /// Create options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether a positive signal is required.
    pub fn with_require_positive_signal(mut self, require: bool) -> Self {
        self.require_positive_signal = require;
        self
    }

    /// Set whether assembly-only papers are excluded.
    pub fn with_exclude_assembly_only(mut self, exclude: bool) -> Self {
        self.exclude_assembly_only = exclude;
        self
    }

    /// Set the metadata batch size.
    pub fn with_metadata_batch_size(mut self, size: usize) -> Self {
        self.metadata_batch_size = size;
        self
    }
}

/// Parameters for the weighted scoring curve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Maximum age penalty as a fraction of the raw score, in `[0, 1]`.
    ///
    /// Default: 0.3.
    pub age_beta: f64,

    /// Age curve exponent. Values below 1 spread the penalty across
    /// middling ages; values above 1 concentrate it on the oldest records.
    ///
    /// Default: 0.7.
    pub age_gamma: f64,

    /// Score multiplier applied to comparative-study hits.
    ///
    /// Default: 1.15.
    pub comparative_boost: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            age_beta: 0.3,
            age_gamma: 0.7,
            comparative_boost: 1.15,
        }
    }
}

impl ScoringConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum age penalty fraction.
    pub fn with_age_beta(mut self, beta: f64) -> Self {
        self.age_beta = beta;
        self
    }

    /// Set the age curve exponent.
    pub fn with_age_gamma(mut self, gamma: f64) -> Self {
        self.age_gamma = gamma;
        self
    }

    /// Set the comparative-study boost.
    pub fn with_comparative_boost(mut self, boost: f64) -> Self {
        self.comparative_boost = boost;
        self
    }
}

/// Configuration for a full pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpansionConfig {
    /// Directory the output files are written to.
    pub output_dir: PathBuf,

    /// Limit the number of seeds processed (for partial or test runs).
    ///
    /// The full include set still participates in candidate admission even
    /// when the processing list is truncated.
    pub max_seeds: Option<usize>,

    /// Content filter options.
    pub filter: FilterOptions,

    /// Weighted scoring parameters.
    pub scoring: ScoringConfig,
}

impl ExpansionConfig {
    /// Create a config writing to `output_dir`, with defaults elsewhere.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            max_seeds: None,
            filter: FilterOptions::default(),
            scoring: ScoringConfig::default(),
        }
    }

    /// Limit the number of seeds processed.
    pub fn with_max_seeds(mut self, max: usize) -> Self {
        self.max_seeds = Some(max);
        self
    }

    /// Set the filter options.
    pub fn with_filter(mut self, filter: FilterOptions) -> Self {
        self.filter = filter;
        self
    }

    /// Set the scoring parameters.
    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring;
        self
    }
}
