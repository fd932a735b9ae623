use serde::Serialize;

use super::GenomicInput;

/// Cross-reference identifier fields (dbSNP, ClinVar, COSMIC).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IdInput {
    pub id: String,
    pub derived_genomic_inputs: Vec<GenomicInput>,
}

impl IdInput {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            derived_genomic_inputs: Vec::new(),
        }
    }

    /// The first `len` characters when the identifier is longer than that, else `""`.
    pub fn prefix(&self, len: usize) -> &str {
        match self.id.char_indices().nth(len) {
            Some((end, _)) => &self.id[..end],
            None => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix() {
        let id = IdInput::new("COSV123");
        assert_eq!(id.prefix(4), "COSV");
        assert_eq!(IdInput::new("COSV").prefix(4), "");
        assert_eq!(IdInput::new("").prefix(2), "");
        assert_eq!(IdInput::new("é12").prefix(1), "é");
    }
}
