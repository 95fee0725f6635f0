//! Literature service trait for external record discovery.
//!
//! The pipeline talks to the external literature search service through
//! this seam. Both operations are infallible by contract: an
//! implementation absorbs every failure mode (non-zero exit, timeout,
//! unparseable or empty response) and reports it as an empty collection.
//! The aggregator deliberately cannot tell "the call failed" apart from
//! "nothing was found"; a single unreachable seed degrades that seed's
//! contribution to zero instead of halting the run.
//!
//! # Implementations
//!
//! - [`EntrezCliService`](crate::entrez::EntrezCliService) - Entrez Direct
//!   command-line tools
//! - [`MockLiteratureService`](crate::testing::MockLiteratureService) - for
//!   testing

use std::collections::HashMap;

use async_trait::async_trait;

use crate::types::candidate::{ArticleMetadata, Pmid};

/// Capability interface for the external literature search service.
#[async_trait]
pub trait LiteratureService: Send + Sync {
    /// PMIDs of articles related to `seed`.
    ///
    /// Returns an empty list on any failure.
    async fn find_related(&self, seed: Pmid) -> Vec<Pmid>;

    /// Metadata for a batch of PMIDs.
    ///
    /// Articles missing from the response are simply absent from the map;
    /// a failed call yields an empty map.
    async fn fetch_metadata(&self, batch: &[Pmid]) -> HashMap<Pmid, ArticleMetadata>;
}
