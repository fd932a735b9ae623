//! gnomAD variant identifiers: `chrom-pos-ref-alt` (`1-55516888-G-A`).

use crate::allele::{is_allele, normalize_allele};
use crate::chromosome::Chromosome;
use crate::error::{ErrorCode, NoticeCode};
use crate::input::{GenomicInput, InputData, InputFormat, UserInput};
use crate::message::Messages;

const FIELD_COUNT: usize = 4;
const SEPARATOR: char = '-';

/// A single token with exactly four dash-separated fields.
pub fn matches(line: &str) -> bool {
    let token = line.trim();
    !token.is_empty()
        && !token.contains(char::is_whitespace)
        && token.split(SEPARATOR).count() == FIELD_COUNT
}

pub fn parse(line: &str) -> UserInput {
    let mut fields = line.trim().split(SEPARATOR);
    let chr = fields.next().unwrap_or("");
    let pos = fields.next().unwrap_or("");
    let ref_allele = fields.next().unwrap_or("");
    let alt_allele = fields.next().unwrap_or("");

    let mut messages = Messages::new();
    let mut genomic = GenomicInput {
        chr: Chromosome::parse(chr),
        ..GenomicInput::default()
    };
    if !genomic.chr.is_applicable() {
        messages.push(ErrorCode::InvalidChromosome);
    }
    genomic.pos = super::genomic::parse_position(pos);
    if genomic.pos.is_none() {
        messages.push(ErrorCode::InvalidPosition);
    }
    if is_allele(ref_allele) {
        genomic.ref_allele = Some(normalize_allele(ref_allele));
    } else {
        messages.push(ErrorCode::InvalidReference);
    }
    if is_allele(alt_allele) {
        genomic.alt_allele = Some(normalize_allele(alt_allele));
    } else {
        messages.push(ErrorCode::InvalidAlternate);
    }
    if fields.next().is_some() {
        messages.push(NoticeCode::TrailingAnnotation);
    }

    UserInput::new(line, InputFormat::Gnomad, messages, InputData::Genomic(genomic))
}
