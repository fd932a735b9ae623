//! Chromosome name normalisation.
//!
//! Accepts the naming conventions seen in user input:
//! - Ensembl: 1, 2, ..., X, Y, MT
//! - UCSC: chr1, chr2, ..., chrX, chrY, chrM
//! - RefSeq: NC_000001.11, ..., NC_000023 (X), NC_000024 (Y), NC_012920 (MT)
//!
//! Anything else normalises to [`Chromosome::NotApplicable`], printed as `NA`.

use serde::{Serialize, Serializer};
use std::fmt;

/// Canonical mitochondrial symbol.
pub const MT: &str = "MT";

/// Sentinel printed for unrecognised chromosomes.
pub const NOT_APPLICABLE: &str = "NA";

const AUTOSOMES: [&str; 22] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "16", "17",
    "18", "19", "20", "21", "22",
];

/// Lower-cased mitochondrial synonyms.
const MT_SYNONYMS: &[&str] = &[
    "chrm",
    "m",
    "mt",
    "mtdna",
    "mit",
    "mito",
    "mitochondria",
    "mitochondrion",
];

/// RefSeq accession of the mitochondrial genome (without version).
const REFSEQ_MT: &str = "NC_012920";

/// A normalised human chromosome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Chromosome {
    /// Autosome 1 to 22
    Autosome(u8),
    X,
    Y,
    Mt,
    /// Not a recognised chromosome
    #[default]
    NotApplicable,
}

impl Chromosome {
    /// Normalise a chromosome token.
    ///
    /// # Examples
    ///
    /// ```
    /// use ferro_input::chromosome::Chromosome;
    ///
    /// assert_eq!(Chromosome::parse(" x ").as_str(), "X");
    /// assert_eq!(Chromosome::parse("chr7").as_str(), "7");
    /// assert_eq!(Chromosome::parse("mtDNA").as_str(), "MT");
    /// assert_eq!(Chromosome::parse("23").as_str(), "NA");
    /// ```
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Chromosome::NotApplicable;
        }

        let lower = trimmed.to_ascii_lowercase();
        if MT_SYNONYMS.contains(&lower.as_str()) {
            return Chromosome::Mt;
        }

        let bare = lower.strip_prefix("chr").unwrap_or(&lower);
        match bare {
            "x" => Chromosome::X,
            "y" => Chromosome::Y,
            "m" | "mt" => Chromosome::Mt,
            _ => Self::parse_autosome(bare),
        }
    }

    /// Normalise an optional token; `None` is not applicable.
    pub fn from_option(s: Option<&str>) -> Self {
        s.map_or(Chromosome::NotApplicable, Self::parse)
    }

    /// Resolve a RefSeq chromosome accession such as `NC_000017.11`.
    ///
    /// Returns `None` when the accession is not a human chromosome sequence.
    pub fn from_refseq(accession: &str) -> Option<Self> {
        let base = accession
            .split_once('.')
            .map_or(accession, |(base, _version)| base);
        if base == REFSEQ_MT {
            return Some(Chromosome::Mt);
        }
        let digits = base.strip_prefix("NC_")?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match digits.parse::<u8>().ok()? {
            n @ 1..=22 => Some(Chromosome::Autosome(n)),
            23 => Some(Chromosome::X),
            24 => Some(Chromosome::Y),
            _ => None,
        }
    }

    /// Resolve the reference sequence of an HGVS genomic description.
    ///
    /// RefSeq accessions are tried first, then the plain chromosome normaliser.
    pub fn from_reference_sequence(refseq: &str) -> Self {
        Self::from_refseq(refseq).unwrap_or_else(|| Self::parse(refseq))
    }

    /// Checked constructor for an autosome number.
    pub fn autosome(n: u8) -> Option<Self> {
        (1..=22).contains(&n).then_some(Chromosome::Autosome(n))
    }

    /// True for X, Y, MT and autosomes 1 to 22.
    ///
    /// An out-of-range [`Chromosome::Autosome`] is not applicable.
    pub fn is_applicable(&self) -> bool {
        match self {
            Chromosome::Autosome(n) => (1..=22).contains(n),
            Chromosome::NotApplicable => false,
            _ => true,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Chromosome::Autosome(n) => usize::from(*n)
                .checked_sub(1)
                .and_then(|i| AUTOSOMES.get(i))
                .copied()
                .unwrap_or(NOT_APPLICABLE),
            Chromosome::X => "X",
            Chromosome::Y => "Y",
            Chromosome::Mt => MT,
            Chromosome::NotApplicable => NOT_APPLICABLE,
        }
    }

    // Autosomes are written without leading zeros.
    fn parse_autosome(s: &str) -> Self {
        if s.starts_with('0') || s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Chromosome::NotApplicable;
        }
        match s.parse::<u8>() {
            Ok(n @ 1..=22) => Chromosome::Autosome(n),
            _ => Chromosome::NotApplicable,
        }
    }
}

/// Normalise a chromosome token to its canonical text (`"NA"` when not applicable).
pub fn normalize_chromosome(s: &str) -> &'static str {
    Chromosome::parse(s).as_str()
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Chromosome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
