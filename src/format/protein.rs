//! Protein changes keyed by a UniProt accession.
//!
//! Accepted shapes, all starting with the accession:
//!
//! ```text
//! P68871 E7V            one-letter change
//! P68871 p.Glu7Val      three-letter change, optional p.
//! P68871 7 E V          position, reference, alternate
//! P68871 7 Glu/Val      position, reference/alternate
//! P68871 7              position only
//! ```
//!
//! The change helpers here are shared with the HGVS protein grammar.

use nom::{
    bytes::complete::take_while1,
    character::complete::digit1,
    combinator::{all_consuming, map_res},
    IResult, Parser,
};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::amino_acid::AminoAcid;
use crate::error::{ErrorCode, NoticeCode};
use crate::input::{InputData, InputFormat, ProteinInput, UserInput};
use crate::message::Messages;

use super::first_token;
use super::genomic::parse_position;

static UNIPROT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:[OPQ][0-9][A-Z0-9]{3}[0-9]|[A-NR-Z][0-9](?:[A-Z][A-Z0-9]{2}[0-9]){1,2})(?:-\d+)?$",
    )
    .unwrap()
});

/// Synonymous alternate: the amino acid is unchanged.
const UNCHANGED: &str = "=";

/// UniProtKB accession, optionally with an isoform suffix (`P04637-2`).
pub fn is_uniprot_accession(s: &str) -> bool {
    UNIPROT_PATTERN.is_match(s)
}

pub fn matches(line: &str) -> bool {
    is_uniprot_accession(first_token(line))
}

fn is_change_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '*'
}

/// `<ref><pos><alt>` with the three parts returned unchecked.
fn change_parts(input: &str) -> IResult<&str, (&str, u64, &str)> {
    all_consuming((
        take_while1(is_change_char),
        map_res(digit1, str::parse::<u64>),
        take_while1(|c: char| is_change_char(c) || c == '='),
    ))
    .parse(input)
}

/// Split a compact change such as `Arg175His`, `R175H` or `Arg175=`.
///
/// Amino acids must be one or three characters long; their codes are not checked.
pub(crate) fn split_change(change: &str) -> Option<(&str, u64, &str)> {
    let is_code = |s: &str| s.len() == 1 || s.len() == 3;
    change_parts(change)
        .ok()
        .map(|(_, parts)| parts)
        .filter(|(reference, pos, alternate)| {
            *pos > 0 && is_code(*reference) && (is_code(*alternate) || *alternate == UNCHANGED)
        })
}

/// One- or three-letter amino acid as its one-letter code.
fn amino_acid_code(s: &str) -> Option<char> {
    AminoAcid::parse(s)
        .or_else(|| match s.len() {
            1 => AminoAcid::parse(&s.to_ascii_uppercase()),
            _ => None,
        })
        .map(|aa| aa.to_one_letter())
}

/// Resolve reference and alternate amino acids, recording an error for each bad one.
pub(crate) fn resolve_change(
    reference: &str,
    alternate: &str,
    messages: &mut Messages,
) -> (Option<char>, Option<char>) {
    let ref_aa = amino_acid_code(reference);
    if ref_aa.is_none() {
        messages.push(ErrorCode::InvalidReferenceAminoAcid);
    }
    let alt_aa = if alternate == UNCHANGED {
        ref_aa
    } else {
        let alt_aa = amino_acid_code(alternate);
        if alt_aa.is_none() {
            messages.push(ErrorCode::InvalidAlternateAminoAcid);
        }
        alt_aa
    };
    (ref_aa, alt_aa)
}

fn strip_change_decoration(change: &str) -> &str {
    let change = change.strip_prefix("p.").unwrap_or(change);
    change
        .strip_prefix('(')
        .and_then(|c| c.strip_suffix(')'))
        .unwrap_or(change)
}

pub fn parse(line: &str) -> UserInput {
    let mut tokens = line.split_whitespace();
    let accession = tokens.next().unwrap_or("");
    let body: Vec<&str> = tokens.collect();

    let mut messages = Messages::new();
    let mut protein = ProteinInput {
        accession: accession.to_string(),
        ..ProteinInput::default()
    };
    if !is_uniprot_accession(accession) {
        messages.push(ErrorCode::InvalidAccession);
    }

    match body.as_slice() {
        [] => messages.push(ErrorCode::InvalidPosition),
        [single] => parse_single(single, &mut protein, &mut messages),
        [pos, pair] => {
            protein.position = parse_position(pos);
            if protein.position.is_none() {
                messages.push(ErrorCode::InvalidPosition);
            }
            let (reference, alternate) = pair.split_once('/').unwrap_or((*pair, ""));
            (protein.ref_aa, protein.alt_aa) =
                resolve_change(reference, alternate, &mut messages);
        }
        [pos, reference, alternate, trailing @ ..] => {
            protein.position = parse_position(pos);
            if protein.position.is_none() {
                messages.push(ErrorCode::InvalidPosition);
            }
            (protein.ref_aa, protein.alt_aa) =
                resolve_change(reference, alternate, &mut messages);
            if !trailing.is_empty() {
                messages.push(NoticeCode::TrailingAnnotation);
            }
        }
    }

    UserInput::new(
        line,
        InputFormat::CustomProtein,
        messages,
        InputData::Protein(protein),
    )
}

// A bare position, or a compact change.
fn parse_single(token: &str, protein: &mut ProteinInput, messages: &mut Messages) {
    if let Some(pos) = parse_position(token) {
        protein.position = Some(pos);
        messages.push(NoticeCode::NoAminoAcidChange);
        return;
    }
    match split_change(strip_change_decoration(token)) {
        Some((reference, pos, alternate)) => {
            protein.position = Some(pos);
            (protein.ref_aa, protein.alt_aa) = resolve_change(reference, alternate, messages);
        }
        None => {
            messages.push(ErrorCode::InvalidPosition);
            messages.push(ErrorCode::InvalidReferenceAminoAcid);
            messages.push(ErrorCode::InvalidAlternateAminoAcid);
        }
    }
}
