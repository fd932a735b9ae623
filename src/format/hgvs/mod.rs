//! HGVS descriptions: `REFSEQ:DESCRIPTION`.
//!
//! The route accepts any line whose first token has a non-empty reference sequence
//! and description around a colon, then picks a sub-grammar from the description
//! prefix:
//!
//! | Prefix | Grammar | Example |
//! |--------|---------|---------|
//! | `g.` | [`genomic`] | `NC_000017.11:g.43045712G>A` |
//! | none, `NC_` reference | [`genomic`] | `NC_000017.11:43045712G>A` |
//! | `c.` | [`coding`] | `NM_007294.4(BRCA1):c.5266dupC` |
//! | `p.` | [`protein`] | `NP_000537.3:p.(Arg175His)` |
//!
//! Descriptions no sub-grammar understands give an invalid record whose family is
//! guessed from the reference sequence.

pub mod coding;
pub mod edit;
pub mod genomic;
pub mod protein;

use memchr::memchr;

use crate::chromosome::Chromosome;
use crate::error::ErrorCode;
use crate::input::{CodingInput, GenomicInput, InputData, InputFormat, ProteinInput, UserInput};
use crate::message::Messages;

/// Reference sequence prefixes of coding transcripts.
pub(crate) const TRANSCRIPT_PREFIXES: [&str; 5] = ["NM_", "NR_", "XM_", "XR_", "ENST"];

/// Reference sequence prefixes of proteins.
pub(crate) const PROTEIN_PREFIXES: [&str; 3] = ["NP_", "XP_", "ENSP"];

const CHROMOSOME_PREFIX: &str = "NC_";

/// A line split around the colon of its first token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HgvsParts<'a> {
    pub refseq: &'a str,
    pub description: &'a str,
    /// Text after the first token, trimmed.
    pub trailing: &'a str,
}

impl<'a> HgvsParts<'a> {
    pub(crate) fn split(line: &'a str) -> Option<Self> {
        let line = line.trim();
        let end = line.find(char::is_whitespace).unwrap_or(line.len());
        let (token, trailing) = line.split_at(end);
        let colon = memchr(b':', token.as_bytes())?;
        let refseq = &token[..colon];
        let description = &token[colon + 1..];
        if refseq.is_empty() || description.is_empty() {
            return None;
        }
        Some(Self {
            refseq,
            description,
            trailing: trailing.trim(),
        })
    }
}

/// Sub-grammar selected by the description prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kind {
    Genomic { prefixed: bool },
    Coding,
    Protein,
}

impl Kind {
    pub(crate) fn of(parts: &HgvsParts<'_>) -> Option<Self> {
        let description = parts.description;
        if description.starts_with("g.") {
            Some(Kind::Genomic { prefixed: true })
        } else if description.starts_with("c.") {
            Some(Kind::Coding)
        } else if description.starts_with("p.") {
            Some(Kind::Protein)
        } else if parts.refseq.starts_with(CHROMOSOME_PREFIX)
            && !has_coordinate_prefix(description)
        {
            Some(Kind::Genomic { prefixed: false })
        } else {
            None
        }
    }
}

// `x.` where x is any letter
fn has_coordinate_prefix(description: &str) -> bool {
    matches!(description.as_bytes(), [c, b'.', ..] if c.is_ascii_alphabetic())
}

/// Precheck: the first token has the general `REFSEQ:DESCRIPTION` shape.
pub fn matches(line: &str) -> bool {
    HgvsParts::split(line).is_some()
}

/// Route parser: dispatch on the description prefix.
pub fn parse(line: &str) -> UserInput {
    let Some(parts) = HgvsParts::split(line) else {
        return invalid(line, line.trim(), InputFormat::HgvsG);
    };
    let record = match Kind::of(&parts) {
        Some(Kind::Genomic { prefixed }) => genomic::parse_parts(line, &parts, prefixed),
        Some(Kind::Coding) => coding::parse_parts(line, &parts),
        Some(Kind::Protein) => protein::parse_parts(line, &parts),
        None => None,
    };
    record.unwrap_or_else(|| invalid(line, parts.refseq, guess_format(parts.refseq)))
}

/// Best guess of the HGVS family from the reference sequence alone.
pub fn guess_format(refseq: &str) -> InputFormat {
    if TRANSCRIPT_PREFIXES.iter().any(|p| refseq.starts_with(p)) {
        InputFormat::HgvsC
    } else if PROTEIN_PREFIXES.iter().any(|p| refseq.starts_with(p)) {
        InputFormat::HgvsP
    } else {
        InputFormat::HgvsG
    }
}

/// Record for an HGVS-shaped line whose description was not understood.
pub(crate) fn invalid(line: &str, refseq: &str, format: InputFormat) -> UserInput {
    let mut messages = Messages::new();
    messages.push(ErrorCode::InvalidHgvsDescription);
    let data = match format {
        InputFormat::HgvsC => InputData::Coding(CodingInput {
            accession: refseq.to_string(),
            ..CodingInput::default()
        }),
        InputFormat::HgvsP => InputData::Protein(ProteinInput {
            accession: refseq.to_string(),
            ..ProteinInput::default()
        }),
        _ => InputData::Genomic(GenomicInput {
            chr: Chromosome::from_reference_sequence(refseq),
            ..GenomicInput::default()
        }),
    };
    let format = match format {
        InputFormat::HgvsC | InputFormat::HgvsP => format,
        _ => InputFormat::HgvsG,
    };
    UserInput::new(line, format, messages, data)
}
