//! Positional genomic input: `chr pos [end] [ref/alt | ref [alt]] [anything]`.
//!
//! Tokens may be separated by whitespace, commas or dashes, so `21 100 C/T`,
//! `21,100,C,T` and `X-100-A` all parse. A dash at the start of a token is a
//! sign, so `1 -5` is an invalid position rather than position 5. Lines shaped like a VCF data row are
//! handed to [`super::vcf`] first.

use crate::allele::{is_allele, normalize_allele, split_ref_alt_pair};
use crate::chromosome::Chromosome;
use crate::error::ErrorCode;
use crate::input::{GenomicInput, InputData, InputFormat, UserInput};
use crate::message::Messages;

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ','
}

// Dashes join fields inside a token (`chr21-25891796-C/T`). A leading dash is a
// sign and stays on the token so the field is rejected rather than negated.
fn split_dashes(token: &str) -> Vec<&str> {
    if token.starts_with('-') {
        return vec![token];
    }
    token.split('-').filter(|t| !t.is_empty()).collect()
}

fn tokenize(line: &str) -> Vec<&str> {
    line.split(is_separator)
        .filter(|t| !t.is_empty())
        .flat_map(split_dashes)
        .collect()
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_signed_digits(s: &str) -> bool {
    is_digits(s.strip_prefix('-').unwrap_or(s))
}

/// A 1-based position: digits only, greater than zero.
pub(crate) fn parse_position(s: &str) -> Option<u64> {
    let s = s.trim();
    if !is_digits(s) {
        return None;
    }
    s.parse::<u64>().ok().filter(|&p| p > 0)
}

/// Precheck: the first token is a recognised chromosome.
pub fn matches(line: &str) -> bool {
    line.split(is_separator)
        .find(|t| !t.is_empty())
        .and_then(|t| split_dashes(t).first().copied())
        .is_some_and(|t| Chromosome::parse(t).is_applicable())
}

/// Route parser: strict VCF when the line is a VCF data row, generic otherwise.
pub fn parse(line: &str) -> UserInput {
    if super::vcf::matches(line) {
        super::vcf::parse(line)
    } else {
        parse_custom(line)
    }
}

/// Parse the generic positional shape.
pub fn parse_custom(line: &str) -> UserInput {
    let tokens = tokenize(line);
    let mut messages = Messages::new();
    let mut genomic = GenomicInput {
        chr: Chromosome::from_option(tokens.first().copied()),
        ..GenomicInput::default()
    };
    if !genomic.chr.is_applicable() {
        messages.push(ErrorCode::InvalidChromosome);
    }
    genomic.pos = tokens.get(1).and_then(|t| parse_position(t));
    if genomic.pos.is_none() {
        messages.push(ErrorCode::InvalidPosition);
    }

    let mut rest = tokens.iter().skip(2).copied().peekable();
    // end coordinate of a range; checked but not kept
    if let Some(end) = rest.next_if(|t| is_signed_digits(t)) {
        if genomic.pos.is_some() && parse_position(end).is_none() {
            messages.push(ErrorCode::InvalidPosition);
        }
    }
    if let Some(token) = rest.next() {
        parse_alleles(token, rest.next(), &mut genomic, &mut messages);
    }

    UserInput::new(
        line,
        InputFormat::CustomGenomic,
        messages,
        InputData::Genomic(genomic),
    )
}

// Anything that is neither an allele nor allele-like is trailing text and is ignored.
fn parse_alleles(
    token: &str,
    next: Option<&str>,
    genomic: &mut GenomicInput,
    messages: &mut Messages,
) {
    if let Some((ref_allele, alt_allele)) = split_ref_alt_pair(token) {
        genomic.ref_allele = Some(ref_allele);
        genomic.alt_allele = Some(alt_allele);
    } else if let Some((ref_allele, alt_allele)) = token.split_once('/') {
        if !is_allele(ref_allele) {
            messages.push(ErrorCode::InvalidReference);
        }
        if !is_allele(alt_allele) {
            messages.push(ErrorCode::InvalidAlternate);
        }
    } else if is_allele(token) {
        genomic.ref_allele = Some(normalize_allele(token));
        match next {
            Some(alt) if is_allele(alt) => genomic.alt_allele = Some(normalize_allele(alt)),
            Some(alt) if is_allele_like(alt) => messages.push(ErrorCode::InvalidAlternate),
            _ => {}
        }
    } else if is_allele_like(token) {
        messages.push(ErrorCode::InvalidReference);
    }
}

fn is_allele_like(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphabetic())
}

/// Record for text that no grammar recognised: assumed genomic, all fields invalid.
pub fn invalid_input(line: &str) -> UserInput {
    let mut messages = Messages::new();
    messages.push(ErrorCode::InvalidChromosome);
    messages.push(ErrorCode::InvalidPosition);
    messages.push(ErrorCode::InvalidReference);
    messages.push(ErrorCode::InvalidAlternate);
    UserInput::new(
        line,
        InputFormat::CustomGenomic,
        messages,
        InputData::Genomic(GenomicInput::default()),
    )
}
