//! Genomic HGVS (`NC_000017.11:g.43045712G>A`).

use crate::allele::{is_allele, normalize_allele};
use crate::chromosome::Chromosome;
use crate::error::{ErrorCode, NoticeCode};
use crate::input::{GenomicInput, InputData, InputFormat, UserInput};
use crate::message::Messages;

use super::edit::{parse_genomic_description, NucleotideEdit};
use super::{HgvsParts, Kind};

pub fn matches(line: &str) -> bool {
    HgvsParts::split(line)
        .is_some_and(|parts| matches!(Kind::of(&parts), Some(Kind::Genomic { .. })))
}

/// Parse as genomic HGVS regardless of the description prefix.
pub fn parse(line: &str) -> UserInput {
    let Some(parts) = HgvsParts::split(line) else {
        return super::invalid(line, line.trim(), InputFormat::HgvsG);
    };
    let prefixed = parts.description.starts_with("g.");
    parse_parts(line, &parts, prefixed)
        .unwrap_or_else(|| super::invalid(line, parts.refseq, InputFormat::HgvsG))
}

/// `None` when the description is not a genomic position plus edit.
pub(crate) fn parse_parts(
    line: &str,
    parts: &HgvsParts<'_>,
    prefixed: bool,
) -> Option<UserInput> {
    let body = parts
        .description
        .strip_prefix("g.")
        .unwrap_or(parts.description);
    let (rest, (start, _end, edit)) = parse_genomic_description(body).ok()?;
    if !rest.is_empty() {
        return None;
    }

    let mut messages = Messages::new();
    if !prefixed {
        messages.push(NoticeCode::MissingCoordinatePrefix);
    }
    let mut genomic = GenomicInput {
        chr: Chromosome::from_reference_sequence(parts.refseq),
        pos: Some(start),
        ..GenomicInput::default()
    };
    if !genomic.chr.is_applicable() {
        messages.push(ErrorCode::InvalidChromosome);
    }
    match edit {
        NucleotideEdit::Substitution {
            reference,
            alternate,
        } => {
            if is_allele(&reference) {
                genomic.ref_allele = Some(normalize_allele(&reference));
            } else {
                messages.push(ErrorCode::InvalidReference);
            }
            if is_allele(&alternate) {
                genomic.alt_allele = Some(normalize_allele(&alternate));
            } else {
                messages.push(ErrorCode::InvalidAlternate);
            }
        }
        _ => messages.push(NoticeCode::NonSubstitutionEdit),
    }
    if !parts.trailing.is_empty() {
        messages.push(NoticeCode::TrailingAnnotation);
    }

    Some(UserInput::new(
        line,
        InputFormat::HgvsG,
        messages,
        InputData::Genomic(genomic),
    ))
}
