//! Content pattern families for the filter.
//!
//! The vocabulary encodes what counts as a whole-genome resequencing paper:
//! positive terms that must appear, negative terms that disqualify
//! (targeted/reduced-representation sequencing, expression work, organelle
//! genomes), assembly-only language, comparative-study language, and the
//! publication types that are never wanted. All matching is case-insensitive
//! substring matching over title + abstract (or the publication type list).

use regex::Regex;

const POSITIVE: &str = r"(?i)whole[\s\-]?genome|WGS|resequenc";

const NEGATIVE: &str = r"(?i)0K-exome|targeted|amplicon|panel|GBS|genotyping(\s+by\s+sequencing)?|GenomeStudio|SNP([\s\-]?array)?|microarray|Infinium|Axiom|expression|transcriptome|RNA[\s\-]?seq|mRNA|SSR(s)?|microsatellite|RAD[\s\-]?seq|ddRAD|SLAF|reduced\s+representation|capture|hybrid[\s\-]?capture|chloroplast|mitochondri|mitochondrial\s+genome|plastid|plastome|mitogenome";

const ASSEMBLY: &str = r"(?i)(de[\s\-]?novo\s+)?assembly|genome\s+assembly";

const COMPARATIVE: &str = r"(?i)variant|polymorphism|SNP|indel|SV|structural\s+variant|copy\s+number|CNV|haplotype|diversity|population|comparative|resequenc|association|GWAS|selection|adaptation|introgression|domestication|pangenome|pan[\s\-]?genome|phylogeny|evolution";

const EXCLUDED_PUB_TYPES: &str = r"(?i)Review|Editorial|Letter|Meta-Analysis|News|Comment";

/// The compiled pattern families used by the content filter.
#[derive(Debug)]
pub struct FilterPatterns {
    /// Whole-genome / WGS / resequencing vocabulary.
    pub positive: Regex,

    /// Disqualifying vocabulary.
    pub negative: Regex,

    /// Assembly and genome-assembly language.
    pub assembly: Regex,

    /// Variant/diversity/population-genetic vocabulary.
    pub comparative: Regex,

    /// Publication types that are never wanted.
    pub excluded_pub_types: Regex,
}

impl FilterPatterns {
    /// Compile the pattern families.
    pub fn new() -> Self {
        Self {
            positive: Regex::new(POSITIVE).unwrap(),
            negative: Regex::new(NEGATIVE).unwrap(),
            assembly: Regex::new(ASSEMBLY).unwrap(),
            comparative: Regex::new(COMPARATIVE).unwrap(),
            excluded_pub_types: Regex::new(EXCLUDED_PUB_TYPES).unwrap(),
        }
    }
}

impl Default for FilterPatterns {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_matches_wgs_vocabulary() {
        let patterns = FilterPatterns::new();

        assert!(patterns.positive.is_match("whole genome sequencing of barley"));
        assert!(patterns.positive.is_match("whole-genome analysis"));
        assert!(patterns.positive.is_match("we performed wgs on 200 accessions"));
        assert!(patterns.positive.is_match("resequencing reveals diversity"));
        assert!(!patterns.positive.is_match("a linkage map of wheat"));
    }

    #[test]
    fn test_negative_matches_disqualifying_vocabulary() {
        let patterns = FilterPatterns::new();

        assert!(patterns.negative.is_match("rna-seq of developing grains"));
        assert!(patterns.negative.is_match("an rna seq time course"));
        assert!(patterns.negative.is_match("ssr markers for cultivar identification"));
        assert!(patterns.negative.is_match("the complete chloroplast genome"));
        assert!(patterns.negative.is_match("genotyping by sequencing of landraces"));
        assert!(!patterns.negative.is_match("whole genome resequencing of wild barley"));
    }

    #[test]
    fn test_assembly_matches_with_and_without_de_novo() {
        let patterns = FilterPatterns::new();

        assert!(patterns.assembly.is_match("a de novo assembly of the genome"));
        assert!(patterns.assembly.is_match("chromosome-scale genome assembly"));
        assert!(patterns.assembly.is_match("improved assembly of the reference"));
        assert!(!patterns.assembly.is_match("variant calling against the reference"));
    }

    #[test]
    fn test_comparative_matches_population_vocabulary() {
        let patterns = FilterPatterns::new();

        assert!(patterns.comparative.is_match("population structure and diversity"));
        assert!(patterns.comparative.is_match("a gwas of flowering time"));
        assert!(patterns.comparative.is_match("signatures of selection during domestication"));
        assert!(!patterns.comparative.is_match("an annotation pipeline"));
    }

    #[test]
    fn test_excluded_pub_types() {
        let patterns = FilterPatterns::new();

        assert!(patterns.excluded_pub_types.is_match("journal article;review"));
        assert!(patterns.excluded_pub_types.is_match("meta-analysis"));
        assert!(!patterns.excluded_pub_types.is_match("journal article"));
    }
}
