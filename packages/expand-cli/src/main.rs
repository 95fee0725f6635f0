// Main entry point for the expansion runner

mod config;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use expansion::{pipeline, EntrezCliService, SeedSets};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,expansion=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            config.output_dir.display()
        )
    })?;

    let service = EntrezCliService::new();
    let sets = SeedSets::curated();

    let summary = pipeline::run(&service, &sets, &config.to_expansion_config()).await?;

    tracing::info!(
        "Done! {} candidates ranked; output files are in: {}",
        summary.total_candidates,
        config.output_dir.display()
    );

    Ok(())
}
