//! Error types for ferro-input
//!
//! Two kinds of failure exist in this crate:
//! - Content problems in a variant line. These are never returned as `Err`; they are
//!   recorded as [`Message`](crate::message::Message)s on the parsed record, keyed by
//!   an [`ErrorCode`] or [`NoticeCode`] so that the text is stable and reproducible.
//! - Operational failures (reading an input file, loading a config file, writing
//!   JSON). These use [`InputError`].

use std::fmt;
use thiserror::Error;

/// Error codes for content problems found while parsing a line
///
/// Each code maps to one fixed message text. Records are invalid exactly when
/// they carry at least one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Chromosome missing or not one of 1-22, X, Y, MT
    InvalidChromosome,
    /// Position missing, zero or not a number
    InvalidPosition,
    /// Reference allele missing or malformed
    InvalidReference,
    /// Alternate allele missing or malformed
    InvalidAlternate,
    /// HGVS-shaped input whose description is not g., c. or p.
    InvalidHgvsDescription,
    /// Identifier with a known prefix but a malformed body
    InvalidIdentifier,
    /// Transcript or protein accession not recognised
    InvalidAccession,
    /// Reference amino acid not recognised
    InvalidReferenceAminoAcid,
    /// Alternate amino acid not recognised
    InvalidAlternateAminoAcid,
}

impl ErrorCode {
    /// Get the error code as a string (e.g., "E1001")
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidChromosome => "E1001",
            ErrorCode::InvalidPosition => "E1002",
            ErrorCode::InvalidReference => "E1003",
            ErrorCode::InvalidAlternate => "E1004",
            ErrorCode::InvalidHgvsDescription => "E1005",
            ErrorCode::InvalidIdentifier => "E1006",
            ErrorCode::InvalidAccession => "E1007",
            ErrorCode::InvalidReferenceAminoAcid => "E1008",
            ErrorCode::InvalidAlternateAminoAcid => "E1009",
        }
    }

    /// The fixed message text attached to records carrying this code
    pub fn text(&self) -> &'static str {
        match self {
            ErrorCode::InvalidChromosome => "invalid chromosome",
            ErrorCode::InvalidPosition => "invalid position",
            ErrorCode::InvalidReference => "invalid reference allele",
            ErrorCode::InvalidAlternate => "invalid alternate allele",
            ErrorCode::InvalidHgvsDescription => "unrecognized HGVS description",
            ErrorCode::InvalidIdentifier => "invalid identifier",
            ErrorCode::InvalidAccession => "invalid accession",
            ErrorCode::InvalidReferenceAminoAcid => "invalid reference amino acid",
            ErrorCode::InvalidAlternateAminoAcid => "invalid alternate amino acid",
        }
    }

    /// All error codes, in numeric order
    pub fn all() -> &'static [ErrorCode] {
        &[
            ErrorCode::InvalidChromosome,
            ErrorCode::InvalidPosition,
            ErrorCode::InvalidReference,
            ErrorCode::InvalidAlternate,
            ErrorCode::InvalidHgvsDescription,
            ErrorCode::InvalidIdentifier,
            ErrorCode::InvalidAccession,
            ErrorCode::InvalidReferenceAminoAcid,
            ErrorCode::InvalidAlternateAminoAcid,
        ]
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Codes for non-fatal notices (warnings and info) attached to records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeCode {
    /// `NC_000001.11:12345A>G` style input without the `g.` prefix
    MissingCoordinatePrefix,
    /// VCF ALT column with more than one allele
    MultiAllelicAlternate,
    /// HGVS genomic edit other than a substitution
    NonSubstitutionEdit,
    /// Text after an HGVS description that could not be interpreted
    TrailingAnnotation,
    /// Protein input giving a position but no amino acid change
    NoAminoAcidChange,
}

impl NoticeCode {
    /// Get the notice code as a string (e.g., "W1001")
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeCode::MissingCoordinatePrefix => "W1001",
            NoticeCode::MultiAllelicAlternate => "W1002",
            NoticeCode::NonSubstitutionEdit => "W1003",
            NoticeCode::TrailingAnnotation => "W1004",
            NoticeCode::NoAminoAcidChange => "I1001",
        }
    }

    /// The fixed message text for this notice
    pub fn text(&self) -> &'static str {
        match self {
            NoticeCode::MissingCoordinatePrefix => {
                "HGVS description has no coordinate prefix; assumed genomic (g.)"
            }
            NoticeCode::MultiAllelicAlternate => {
                "multiple alternate alleles given; only the first is used"
            }
            NoticeCode::NonSubstitutionEdit => {
                "only substitutions carry reference and alternate alleles"
            }
            NoticeCode::TrailingAnnotation => "trailing annotation not recognized; ignored",
            NoticeCode::NoAminoAcidChange => "no amino acid change given",
        }
    }

    /// Returns true if this notice is informational rather than a warning.
    pub fn is_info(&self) -> bool {
        self.as_str().starts_with('I')
    }
}

impl fmt::Display for NoticeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for ferro-input operations
#[derive(Error, Debug)]
pub enum InputError {
    /// IO error while reading input or writing output
    #[error("IO error: {msg}")]
    Io { msg: String },

    /// Configuration file could not be read or parsed
    #[error("Config error in {path}: {msg}")]
    Config { path: String, msg: String },

    /// JSON serialisation error
    #[error("JSON error: {msg}")]
    Json { msg: String },
}

impl From<std::io::Error> for InputError {
    fn from(err: std::io::Error) -> Self {
        InputError::Io {
            msg: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for InputError {
    fn from(err: serde_json::Error) -> Self {
        InputError::Json {
            msg: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for InputError {
    fn from(err: toml::de::Error) -> Self {
        InputError::Config {
            path: "<inline>".to_string(),
            msg: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_as_str() {
        assert_eq!(ErrorCode::InvalidChromosome.as_str(), "E1001");
        assert_eq!(ErrorCode::InvalidHgvsDescription.as_str(), "E1005");
        assert_eq!(ErrorCode::InvalidAlternateAminoAcid.as_str(), "E1009");
    }

    #[test]
    fn test_error_code_text() {
        assert_eq!(ErrorCode::InvalidChromosome.text(), "invalid chromosome");
        assert_eq!(ErrorCode::InvalidPosition.text(), "invalid position");
        assert_eq!(ErrorCode::InvalidReference.text(), "invalid reference allele");
        assert_eq!(ErrorCode::InvalidAlternate.text(), "invalid alternate allele");
        assert_eq!(
            ErrorCode::InvalidHgvsDescription.text(),
            "unrecognized HGVS description"
        );
        assert_eq!(ErrorCode::InvalidIdentifier.text(), "invalid identifier");
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(format!("{}", ErrorCode::InvalidIdentifier), "E1006");
    }

    #[test]
    fn test_error_codes_are_unique() {
        use std::collections::HashSet;
        let codes: HashSet<_> = ErrorCode::all().iter().map(|c| c.as_str()).collect();
        assert_eq!(codes.len(), ErrorCode::all().len());
        let texts: HashSet<_> = ErrorCode::all().iter().map(|c| c.text()).collect();
        assert_eq!(texts.len(), ErrorCode::all().len());
    }

    #[test]
    fn test_notice_code() {
        assert_eq!(NoticeCode::MissingCoordinatePrefix.as_str(), "W1001");
        assert!(!NoticeCode::MultiAllelicAlternate.is_info());
        assert!(NoticeCode::NoAminoAcidChange.is_info());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: InputError = io_err.into();
        assert!(matches!(err, InputError::Io { .. }));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_from_toml_error() {
        let toml_err = toml::from_str::<toml::Value>("= nope").unwrap_err();
        let err: InputError = toml_err.into();
        assert!(matches!(err, InputError::Config { .. }));
    }
}
