use serde::Serialize;
use std::fmt;

use super::GenomicInput;

/// Position on a coding transcript (c. coordinates).
///
/// `base` is negative in the 5' UTR; `utr3` marks `*N` positions past the stop
/// codon; `offset` is the intronic distance from the nearest exon base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CdsPosition {
    pub base: i64,
    pub utr3: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
}

impl CdsPosition {
    pub fn new(base: i64) -> Self {
        Self {
            base,
            utr3: false,
            offset: None,
        }
    }

    pub fn is_intronic(&self) -> bool {
        self.offset.is_some_and(|o| o != 0)
    }
}

impl fmt::Display for CdsPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.utr3 {
            write!(f, "*")?;
        }
        write!(f, "{}", self.base)?;
        match self.offset {
            Some(o) if o >= 0 => write!(f, "+{}", o),
            Some(o) => write!(f, "{}", o),
            None => Ok(()),
        }
    }
}

/// Coding (c.) fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CodingInput {
    /// Transcript accession, including its version when given.
    pub accession: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gene: Option<String>,
    pub position: Option<CdsPosition>,
    pub ref_allele: Option<String>,
    pub alt_allele: Option<String>,
    /// Protein consequence written after the description, e.g. `p.Arg12Cys`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein_change: Option<String>,
    pub derived_genomic_inputs: Vec<GenomicInput>,
}
