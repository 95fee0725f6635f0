//! Parsers for the Entrez Direct text formats.
//!
//! `efetch -format uid` returns one numeric identifier per line.
//! `efetch -format xml` returns a line stream where an article's title,
//! abstract fragments, and publication types may be scattered across many
//! lines following its `<PMID>` marker. [`MetadataParser`] accumulates
//! fields until the next identifier marker (or end of stream) and emits the
//! finished record at that boundary. Both parsers drop anything malformed
//! without complaint.

use std::collections::{HashMap, HashSet};

use regex::Regex;

use crate::types::candidate::{ArticleMetadata, Pmid};

/// Parse the newline-delimited uid format into PMIDs.
///
/// Lines are trimmed and stripped of surrounding quotes; anything that is
/// not purely digits is discarded.
pub fn parse_uid_lines(text: &str) -> Vec<Pmid> {
    text.lines()
        .filter_map(|line| {
            let line = line.trim().trim_matches('"');
            if line.is_empty() || !line.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            line.parse::<Pmid>().ok()
        })
        .collect()
}

/// Field markers recognized in the article stream.
#[derive(Debug)]
struct FieldMarkers {
    pmid: Regex,
    title: Regex,
    abstract_text: Regex,
    pub_type: Regex,
}

impl FieldMarkers {
    fn new() -> Self {
        Self {
            pmid: Regex::new(r"<PMID[^>]*>(\d+)</PMID>").unwrap(),
            title: Regex::new(r"<ArticleTitle>([^<]*)</ArticleTitle>").unwrap(),
            abstract_text: Regex::new(r"<AbstractText[^>]*>([^<]*)</AbstractText>").unwrap(),
            pub_type: Regex::new(r"<PublicationType[^>]*>([^<]*)</PublicationType>").unwrap(),
        }
    }
}

/// Parser state: waiting for an identifier marker, or accumulating fields
/// for the article that marker opened.
#[derive(Debug)]
enum ParseState {
    AwaitingRecord,
    Accumulating {
        pmid: Pmid,
        title: String,
        abstract_fragments: Vec<String>,
        pub_types: Vec<String>,
    },
}

/// Streaming field-accumulation parser for the article metadata format.
///
/// Every identifier marker closes the record in progress and opens a new
/// one; the final record is closed by [`finish`](MetadataParser::finish).
/// Records whose identifier was not requested are discarded, which guards
/// against joins to unrelated identifiers elsewhere in the stream.
#[derive(Debug)]
pub struct MetadataParser {
    markers: FieldMarkers,
    wanted: HashSet<Pmid>,
    state: ParseState,
    records: HashMap<Pmid, ArticleMetadata>,
}

impl MetadataParser {
    /// Create a parser that keeps only records for `batch`.
    pub fn new(batch: &[Pmid]) -> Self {
        Self {
            markers: FieldMarkers::new(),
            wanted: batch.iter().copied().collect(),
            state: ParseState::AwaitingRecord,
            records: HashMap::new(),
        }
    }

    /// Feed one line of the stream.
    pub fn feed_line(&mut self, line: &str) {
        if let Some(cap) = self.markers.pmid.captures(line) {
            self.emit_current();
            self.state = match cap[1].parse::<Pmid>() {
                Ok(pmid) => ParseState::Accumulating {
                    pmid,
                    title: String::new(),
                    abstract_fragments: Vec::new(),
                    pub_types: Vec::new(),
                },
                Err(_) => ParseState::AwaitingRecord,
            };
            return;
        }

        if let ParseState::Accumulating {
            title,
            abstract_fragments,
            pub_types,
            ..
        } = &mut self.state
        {
            if let Some(cap) = self.markers.title.captures(line) {
                *title = cap[1].to_string();
            }
            if let Some(cap) = self.markers.abstract_text.captures(line) {
                abstract_fragments.push(cap[1].to_string());
            }
            if let Some(cap) = self.markers.pub_type.captures(line) {
                pub_types.push(cap[1].to_string());
            }
        }
    }

    /// Close the final record and return everything parsed.
    pub fn finish(mut self) -> HashMap<Pmid, ArticleMetadata> {
        self.emit_current();
        self.records
    }

    fn emit_current(&mut self) {
        let state = std::mem::replace(&mut self.state, ParseState::AwaitingRecord);
        if let ParseState::Accumulating {
            pmid,
            title,
            abstract_fragments,
            pub_types,
        } = state
        {
            if self.wanted.contains(&pmid) {
                self.records.insert(
                    pmid,
                    ArticleMetadata {
                        title,
                        abstract_text: abstract_fragments.join(" "),
                        pub_types: pub_types.join(";"),
                    },
                );
            }
        }
    }
}

/// Run the metadata parser over a full response body.
pub fn parse_article_stream(text: &str, batch: &[Pmid]) -> HashMap<Pmid, ArticleMetadata> {
    let mut parser = MetadataParser::new(batch);
    for line in text.lines() {
        parser.feed_line(line);
    }
    parser.finish()
}
