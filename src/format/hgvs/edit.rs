//! Position and edit combinators for HGVS nucleotide descriptions.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, digit1, one_of},
    combinator::{map, opt},
    sequence::preceded,
    IResult, Parser,
};

use crate::input::CdsPosition;

/// A nucleotide edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NucleotideEdit {
    /// `A>G`. Both sides are kept as written so callers can report bad alleles.
    Substitution { reference: String, alternate: String },
    Deletion,
    Duplication,
    /// `insAT`; the inserted bases are checked, not kept.
    Insertion,
    DelIns,
}

impl NucleotideEdit {
    pub fn is_substitution(&self) -> bool {
        matches!(self, NucleotideEdit::Substitution { .. })
    }
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_base(c: char) -> bool {
    matches!(c.to_ascii_uppercase(), 'A' | 'C' | 'G' | 'T' | 'N')
}

fn verify_error(input: &str) -> nom::Err<nom::error::Error<&str>> {
    nom::Err::Error(nom::error::Error::new(
        input,
        nom::error::ErrorKind::Verify,
    ))
}

/// Parse a 1-based genomic position. Zero and overflowing values are rejected.
#[inline]
pub fn parse_genome_pos(input: &str) -> IResult<&str, u64> {
    let (remaining, digits) = digit1.parse(input)?;
    match digits.parse::<u64>() {
        Ok(pos) if pos > 0 => Ok((remaining, pos)),
        _ => Err(verify_error(input)),
    }
}

/// Parse a coding position: `76`, `-14`, `*25`, `88+1`, `89-2`.
#[inline]
pub fn parse_cds_pos(input: &str) -> IResult<&str, CdsPosition> {
    let (rest, marker) = opt(one_of("-*")).parse(input)?;
    let (rest, digits) = digit1.parse(rest)?;
    let base = match digits.parse::<i64>() {
        Ok(base) if base > 0 => base,
        _ => return Err(verify_error(input)),
    };
    let (rest, offset) = opt(parse_offset).parse(rest)?;
    Ok((
        rest,
        CdsPosition {
            base: if marker == Some('-') { -base } else { base },
            utr3: marker == Some('*'),
            offset,
        },
    ))
}

fn parse_offset(input: &str) -> IResult<&str, i64> {
    let (rest, (sign, digits)) = (one_of("+-"), digit1).parse(input)?;
    let value: i64 = digits.parse().map_err(|_| verify_error(input))?;
    Ok((rest, if sign == '-' { -value } else { value }))
}

fn substitution(input: &str) -> IResult<&str, NucleotideEdit> {
    map(
        (take_while1(is_letter), char('>'), take_while1(is_letter)),
        |(reference, _, alternate): (&str, char, &str)| NucleotideEdit::Substitution {
            reference: reference.to_string(),
            alternate: alternate.to_string(),
        },
    )
    .parse(input)
}

fn delins(input: &str) -> IResult<&str, NucleotideEdit> {
    map(preceded(tag("delins"), take_while1(is_base)), |_| NucleotideEdit::DelIns).parse(input)
}

fn deletion(input: &str) -> IResult<&str, NucleotideEdit> {
    map((tag("del"), take_while(is_base)), |_| NucleotideEdit::Deletion).parse(input)
}

fn duplication(input: &str) -> IResult<&str, NucleotideEdit> {
    map((tag("dup"), take_while(is_base)), |_| NucleotideEdit::Duplication).parse(input)
}

fn insertion(input: &str) -> IResult<&str, NucleotideEdit> {
    map(preceded(tag("ins"), take_while1(is_base)), |_| NucleotideEdit::Insertion).parse(input)
}

/// Parse a nucleotide edit. `delins` is tried before `del`.
pub fn parse_edit(input: &str) -> IResult<&str, NucleotideEdit> {
    alt((substitution, delins, deletion, duplication, insertion)).parse(input)
}

/// `<pos>[_<end>]<edit>` after the `g.` prefix.
pub fn parse_genomic_description(
    input: &str,
) -> IResult<&str, (u64, Option<u64>, NucleotideEdit)> {
    (
        parse_genome_pos,
        opt(preceded(char('_'), parse_genome_pos)),
        parse_edit,
    )
        .parse(input)
}

/// `<pos>[_<end>]<edit>` after the `c.` prefix.
pub fn parse_coding_description(
    input: &str,
) -> IResult<&str, (CdsPosition, Option<CdsPosition>, NucleotideEdit)> {
    (
        parse_cds_pos,
        opt(preceded(char('_'), parse_cds_pos)),
        parse_edit,
    )
        .parse(input)
}
