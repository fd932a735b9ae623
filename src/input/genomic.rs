use serde::Serialize;

use crate::chromosome::Chromosome;

/// Genomic fields: chromosome, 1-based position and alleles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenomicInput {
    pub chr: Chromosome,
    pub pos: Option<u64>,
    /// Variant identifier from a VCF ID column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub ref_allele: Option<String>,
    pub alt_allele: Option<String>,
}

impl GenomicInput {
    /// A bare coordinate without alleles.
    pub fn new(chr: Chromosome, pos: u64) -> Self {
        Self {
            chr,
            pos: Some(pos),
            ..Self::default()
        }
    }

    pub fn with_alleles(
        mut self,
        ref_allele: impl Into<String>,
        alt_allele: impl Into<String>,
    ) -> Self {
        self.ref_allele = Some(ref_allele.into());
        self.alt_allele = Some(alt_allele.into());
        self
    }

    /// `(chr, pos)` when the chromosome is recognised and the position known.
    pub fn coordinate(&self) -> Option<(Chromosome, u64)> {
        match self.pos {
            Some(pos) if self.chr.is_applicable() => Some((self.chr, pos)),
            _ => None,
        }
    }
}
