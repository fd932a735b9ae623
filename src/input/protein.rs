use serde::Serialize;

use super::GenomicInput;

/// Protein fields. Amino acids are stored as one-letter codes (`*` for stop).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProteinInput {
    pub accession: String,
    pub position: Option<u64>,
    pub ref_aa: Option<char>,
    pub alt_aa: Option<char>,
    pub derived_genomic_inputs: Vec<GenomicInput>,
}

impl ProteinInput {
    /// True when both amino acids are known and identical.
    pub fn is_synonymous(&self) -> bool {
        matches!((self.ref_aa, self.alt_aa), (Some(r), Some(a)) if r == a)
    }
}
