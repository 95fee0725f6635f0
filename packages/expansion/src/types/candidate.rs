//! Candidate articles and their metadata.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// PubMed identifier.
pub type Pmid = u64;

/// Article metadata fetched for content filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleMetadata {
    /// Article title.
    pub title: String,

    /// Abstract text. Fragments are joined with single spaces in the order
    /// they appeared in the response.
    pub abstract_text: String,

    /// Semicolon-joined publication type list (may be empty).
    pub pub_types: String,
}

impl ArticleMetadata {
    /// Create metadata from its three fields.
    pub fn new(
        title: impl Into<String>,
        abstract_text: impl Into<String>,
        pub_types: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            abstract_text: abstract_text.into(),
            pub_types: pub_types.into(),
        }
    }

    /// Lower-cased `title + " " + abstract`, the string content rules match
    /// against.
    pub fn content(&self) -> String {
        format!("{} {}", self.title, self.abstract_text).to_lowercase()
    }

    /// Lower-cased publication type list.
    pub fn pub_types_lower(&self) -> String {
        self.pub_types.to_lowercase()
    }
}

/// Candidate articles keyed by PMID, each tracking the seeds that
/// discovered it.
///
/// Discovery order is preserved per candidate, and a seed is recorded at
/// most once per candidate, so the raw score is always the count of
/// distinct discovering seeds.
#[derive(Debug, Clone, Default)]
pub struct CandidateSet {
    entries: HashMap<Pmid, Vec<Pmid>>,
}

impl CandidateSet {
    /// Create an empty candidate set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `seed` discovered `candidate`.
    ///
    /// Creates the candidate entry on first sight. Recording the same seed
    /// twice for one candidate is a no-op.
    pub fn record(&mut self, candidate: Pmid, seed: Pmid) {
        let seeds = self.entries.entry(candidate).or_default();
        if !seeds.contains(&seed) {
            seeds.push(seed);
        }
    }

    /// Insert a candidate with its full discovery list.
    pub fn insert_discovered(&mut self, candidate: Pmid, seeds: Vec<Pmid>) {
        self.entries.insert(candidate, seeds);
    }

    /// Count of distinct seeds that discovered `candidate` (0 if unknown).
    pub fn raw_score(&self, candidate: Pmid) -> usize {
        self.entries.get(&candidate).map(Vec::len).unwrap_or(0)
    }

    /// Seeds that discovered `candidate`, in discovery order.
    pub fn discovering_seeds(&self, candidate: Pmid) -> Option<&[Pmid]> {
        self.entries.get(&candidate).map(Vec::as_slice)
    }

    /// All candidate PMIDs, in no particular order.
    pub fn pmids(&self) -> Vec<Pmid> {
        self.entries.keys().copied().collect()
    }

    /// Iterate over `(pmid, discovering seeds)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Pmid, &Vec<Pmid>)> {
        self.entries.iter()
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set holds no candidates.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Smallest and largest candidate PMID, if any candidates exist.
    pub fn id_span(&self) -> Option<(Pmid, Pmid)> {
        let min = self.entries.keys().min().copied()?;
        let max = self.entries.keys().max().copied()?;
        Some((min, max))
    }

    /// Largest raw score across all candidates (0 when empty).
    pub fn max_raw_score(&self) -> usize {
        self.entries.values().map(Vec::len).max().unwrap_or(0)
    }
}

impl IntoIterator for CandidateSet {
    type Item = (Pmid, Vec<Pmid>);
    type IntoIter = std::collections::hash_map::IntoIter<Pmid, Vec<Pmid>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
