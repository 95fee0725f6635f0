//! Testing utilities including a mock literature service.
//!
//! Useful for exercising the pipeline without the Entrez Direct tools or a
//! network connection.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::traits::literature::LiteratureService;
use crate::types::candidate::{ArticleMetadata, Pmid};

/// A mock literature service with canned responses.
///
/// Seeds without configured related records return an empty list, matching
/// the real adapter's failure behavior. Metadata is returned only for PMIDs
/// present in both the request batch and the configured map.
#[derive(Default)]
pub struct MockLiteratureService {
    related: HashMap<Pmid, Vec<Pmid>>,
    metadata: HashMap<Pmid, ArticleMetadata>,

    /// Seeds queried, in call order.
    related_calls: Arc<RwLock<Vec<Pmid>>>,

    /// Batch sizes of metadata requests, in call order.
    metadata_calls: Arc<RwLock<Vec<usize>>>,
}

impl MockLiteratureService {
    /// Create a mock with no canned responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the related records returned for a seed.
    pub fn with_related(mut self, seed: Pmid, related: impl IntoIterator<Item = Pmid>) -> Self {
        self.related.insert(seed, related.into_iter().collect());
        self
    }

    /// Set the metadata returned for a PMID.
    pub fn with_metadata(mut self, pmid: Pmid, metadata: ArticleMetadata) -> Self {
        self.metadata.insert(pmid, metadata);
        self
    }

    /// Convenience: set metadata from title/abstract/publication types.
    pub fn with_article(
        self,
        pmid: Pmid,
        title: &str,
        abstract_text: &str,
        pub_types: &str,
    ) -> Self {
        self.with_metadata(pmid, ArticleMetadata::new(title, abstract_text, pub_types))
    }

    /// Seeds passed to `find_related`, in call order.
    pub fn related_calls(&self) -> Vec<Pmid> {
        self.related_calls.read().unwrap().clone()
    }

    /// Batch sizes passed to `fetch_metadata`, in call order.
    pub fn metadata_calls(&self) -> Vec<usize> {
        self.metadata_calls.read().unwrap().clone()
    }
}

#[async_trait]
impl LiteratureService for MockLiteratureService {
    async fn find_related(&self, seed: Pmid) -> Vec<Pmid> {
        self.related_calls.write().unwrap().push(seed);
        self.related.get(&seed).cloned().unwrap_or_default()
    }

    async fn fetch_metadata(&self, batch: &[Pmid]) -> HashMap<Pmid, ArticleMetadata> {
        self.metadata_calls.write().unwrap().push(batch.len());
        batch
            .iter()
            .filter_map(|p| self.metadata.get(p).map(|m| (*p, m.clone())))
            .collect()
    }
}
