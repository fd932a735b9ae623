//! Protein HGVS (`NP_000537.3:p.(Arg175His)`, `P04637:p.R175H`).

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1},
    combinator::{all_consuming, opt, recognize},
    sequence::preceded,
    IResult, Parser,
};

use crate::error::{ErrorCode, NoticeCode};
use crate::format::protein::{is_uniprot_accession, resolve_change, split_change};
use crate::input::{InputData, InputFormat, ProteinInput, UserInput};
use crate::message::Messages;

use super::{HgvsParts, Kind};

fn refseq_protein_accession(input: &str) -> IResult<&str, &str> {
    all_consuming(recognize((
        alt((tag("NP_"), tag("XP_"), tag("ENSP"))),
        digit1,
        opt(preceded(char('.'), digit1)),
    )))
    .parse(input)
}

/// RefSeq, Ensembl or UniProt protein accession.
pub fn is_protein_accession(refseq: &str) -> bool {
    refseq_protein_accession(refseq).is_ok() || is_uniprot_accession(refseq)
}

pub fn matches(line: &str) -> bool {
    HgvsParts::split(line).is_some_and(|parts| Kind::of(&parts) == Some(Kind::Protein))
}

pub fn parse(line: &str) -> UserInput {
    let Some(parts) = HgvsParts::split(line) else {
        return super::invalid(line, line.trim(), InputFormat::HgvsP);
    };
    parse_parts(line, &parts)
        .unwrap_or_else(|| super::invalid(line, parts.refseq, InputFormat::HgvsP))
}

/// `None` when the description is not `p.` followed by a single amino acid change.
pub(crate) fn parse_parts(line: &str, parts: &HgvsParts<'_>) -> Option<UserInput> {
    let body = parts.description.strip_prefix("p.")?;
    // predicted consequences are written in parentheses
    let body = body
        .strip_prefix('(')
        .and_then(|b| b.strip_suffix(')'))
        .unwrap_or(body);
    let (reference, position, alternate) = split_change(body)?;

    let mut messages = Messages::new();
    let mut protein = ProteinInput {
        accession: parts.refseq.to_string(),
        position: Some(position),
        ..ProteinInput::default()
    };
    if !is_protein_accession(parts.refseq) {
        messages.push(ErrorCode::InvalidAccession);
    }
    (protein.ref_aa, protein.alt_aa) = resolve_change(reference, alternate, &mut messages);
    if !parts.trailing.is_empty() {
        messages.push(NoticeCode::TrailingAnnotation);
    }

    Some(UserInput::new(
        line,
        InputFormat::HgvsP,
        messages,
        InputData::Protein(protein),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("NP_000537.3:p.Arg175His", 'R', 'H')]
    #[case("NP_000537.3:p.(Arg175His)", 'R', 'H')]
    #[case("NP_000537.3:p.R175H", 'R', 'H')]
    #[case("ENSP00000269305.4:p.Arg175Ter", 'R', '*')]
    #[case("XP_011522345.1:p.Arg175*", 'R', '*')]
    #[case("P04637:p.Arg175=", 'R', 'R')]
    #[case("P04637-2:p.R175H", 'R', 'H')]
    fn test_valid(#[case] line: &str, #[case] ref_aa: char, #[case] alt_aa: char) {
        let record = parse(line);
        assert!(record.is_valid(), "{line}: {:?}", record.errors());
        let p = record.protein().unwrap();
        assert_eq!(p.position, Some(175));
        assert_eq!(p.ref_aa, Some(ref_aa));
        assert_eq!(p.alt_aa, Some(alt_aa));
    }

    #[test]
    fn test_invalid_accession() {
        let record = parse("NM_000546.6:p.Arg175His");
        assert_eq!(record.format(), InputFormat::HgvsP);
        assert_eq!(record.errors(), vec!["invalid accession"]);
    }

    #[test]
    fn test_invalid_amino_acids() {
        let record = parse("NP_000537.3:p.Xyz175Abc");
        assert_eq!(
            record.errors(),
            vec!["invalid reference amino acid", "invalid alternate amino acid"]
        );
    }

    #[test]
    fn test_unsupported_description() {
        for line in [
            "NP_000537.3:p.Arg175fs",
            "NP_000537.3:p.=",
            "NP_000537.3:p.?",
            "NP_000537.3:p.Arg175_Lys176del",
        ] {
            let record = parse(line);
            assert_eq!(record.errors(), vec!["unrecognized HGVS description"], "{line}");
            assert_eq!(record.format(), InputFormat::HgvsP);
        }
    }

    #[test]
    fn test_is_protein_accession() {
        assert!(is_protein_accession("NP_000537.3"));
        assert!(is_protein_accession("NP_000537"));
        assert!(is_protein_accession("Q9Y6K9"));
        assert!(!is_protein_accession("NP_"));
        assert!(!is_protein_accession("NP_000537.3x"));
    }
}
