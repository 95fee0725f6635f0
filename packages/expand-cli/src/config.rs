use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

use expansion::{ExpansionConfig, ScoringConfig};

/// Runner configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub output_dir: PathBuf,
    pub max_seeds: Option<usize>,
    pub age_beta: f64,
    pub age_gamma: f64,
    pub comparative_boost: f64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let defaults = ScoringConfig::default();

        Ok(Self {
            output_dir: env::var("EXPANSION_OUTPUT_DIR")
                .unwrap_or_else(|_| "pubmed_results".to_string())
                .into(),
            max_seeds: match env::var("EXPANSION_MAX_SEEDS") {
                Ok(raw) => Some(
                    raw.parse()
                        .context("EXPANSION_MAX_SEEDS must be a valid number")?,
                ),
                Err(_) => None,
            },
            age_beta: parse_or("EXPANSION_AGE_BETA", defaults.age_beta)?,
            age_gamma: parse_or("EXPANSION_AGE_GAMMA", defaults.age_gamma)?,
            comparative_boost: parse_or("EXPANSION_COMPARATIVE_BOOST", defaults.comparative_boost)?,
        })
    }

    /// Convert into the library's pipeline configuration.
    pub fn to_expansion_config(&self) -> ExpansionConfig {
        let scoring = ScoringConfig::new()
            .with_age_beta(self.age_beta)
            .with_age_gamma(self.age_gamma)
            .with_comparative_boost(self.comparative_boost);

        let mut config = ExpansionConfig::new(self.output_dir.clone()).with_scoring(scoring);
        if let Some(max) = self.max_seeds {
            config = config.with_max_seeds(max);
        }
        config
    }
}

fn parse_or(key: &str, default: f64) -> Result<f64> {
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("{} must be a valid number", key)),
        Err(_) => Ok(default),
    }
}
