//! Typed errors for the expansion library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while running the expansion pipeline.
///
/// External-call failures never appear here: the service adapter absorbs
/// them and reports empty results, so the pipeline only fails when it ends
/// up with nothing to rank.
#[derive(Debug, Error)]
pub enum ExpansionError {
    /// Seed expansion discovered zero candidate articles.
    #[error("no related articles found; check your network connection and seed list")]
    ExhaustedSearch,

    /// Content filtering removed every candidate.
    #[error("no candidates left after content filtering")]
    ExhaustedAfterFilter,

    /// Writing an output file failed.
    #[error("failed to write {}: {source}", path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for expansion operations.
pub type Result<T> = std::result::Result<T, ExpansionError>;
