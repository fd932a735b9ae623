//! Coding HGVS (`NM_000088.3(COL1A1):c.589G>T (p.Gly197Cys)`).

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, digit1},
    combinator::{opt, recognize},
    sequence::{delimited, preceded},
    IResult, Parser,
};

use crate::allele::{is_allele, normalize_allele};
use crate::error::{ErrorCode, NoticeCode};
use crate::input::{CodingInput, InputData, InputFormat, UserInput};
use crate::message::Messages;

use super::edit::{parse_coding_description, NucleotideEdit};
use super::{HgvsParts, Kind};

/// Versioned transcript accession: `NM_000088.3`, `ENST00000357033.8`.
fn transcript_accession(input: &str) -> IResult<&str, &str> {
    recognize((
        alt((tag("NM_"), tag("NR_"), tag("XM_"), tag("XR_"), tag("ENST"))),
        digit1,
        opt(preceded(char('.'), digit1)),
    ))
    .parse(input)
}

fn gene_symbol(input: &str) -> IResult<&str, &str> {
    delimited(
        char('('),
        take_while1(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.'),
        char(')'),
    )
    .parse(input)
}

/// Split `NM_000088.3(COL1A1)` into accession and gene.
pub(crate) fn parse_transcript(refseq: &str) -> Option<(&str, Option<&str>)> {
    let (rest, result) = (transcript_accession, opt(gene_symbol)).parse(refseq).ok()?;
    rest.is_empty().then_some(result)
}

/// Extract `p.…` from `(p.…)` or `p.…`.
fn protein_annotation(annotation: &str) -> Option<&str> {
    let inner = annotation
        .strip_prefix('(')
        .and_then(|a| a.strip_suffix(')'))
        .unwrap_or(annotation);
    let valid = inner.len() > 2 && inner.starts_with("p.") && !inner.contains(char::is_whitespace);
    valid.then_some(inner)
}

pub fn matches(line: &str) -> bool {
    HgvsParts::split(line).is_some_and(|parts| Kind::of(&parts) == Some(Kind::Coding))
}

pub fn parse(line: &str) -> UserInput {
    let Some(parts) = HgvsParts::split(line) else {
        return super::invalid(line, line.trim(), InputFormat::HgvsC);
    };
    parse_parts(line, &parts)
        .unwrap_or_else(|| super::invalid(line, parts.refseq, InputFormat::HgvsC))
}

/// `None` when the description is not `c.` followed by a position and an edit.
pub(crate) fn parse_parts(line: &str, parts: &HgvsParts<'_>) -> Option<UserInput> {
    let body = parts.description.strip_prefix("c.")?;
    let (rest, (position, _end, edit)) = parse_coding_description(body).ok()?;

    let mut messages = Messages::new();
    let mut coding = CodingInput {
        position: Some(position),
        ..CodingInput::default()
    };
    match parse_transcript(parts.refseq) {
        Some((accession, gene)) => {
            coding.accession = accession.to_string();
            coding.gene = gene.map(str::to_string);
        }
        None => {
            coding.accession = parts.refseq.to_string();
            messages.push(ErrorCode::InvalidAccession);
        }
    }
    match edit {
        NucleotideEdit::Substitution {
            reference,
            alternate,
        } => {
            if is_allele(&reference) {
                coding.ref_allele = Some(normalize_allele(&reference));
            } else {
                messages.push(ErrorCode::InvalidReference);
            }
            if is_allele(&alternate) {
                coding.alt_allele = Some(normalize_allele(&alternate));
            } else {
                messages.push(ErrorCode::InvalidAlternate);
            }
        }
        _ => messages.push(NoticeCode::NonSubstitutionEdit),
    }

    let annotation = format!("{} {}", rest, parts.trailing);
    let annotation = annotation.trim();
    if !annotation.is_empty() {
        match protein_annotation(annotation) {
            Some(change) => coding.protein_change = Some(change.to_string()),
            None => messages.push(NoticeCode::TrailingAnnotation),
        }
    }

    Some(UserInput::new(
        line,
        InputFormat::HgvsC,
        messages,
        InputData::Coding(coding),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::CdsPosition;

    #[test]
    fn test_substitution_with_gene() {
        let record = parse("NM_000088.3(COL1A1):c.589G>T");
        assert!(record.is_valid());
        let c = record.coding().unwrap();
        assert_eq!(c.accession, "NM_000088.3");
        assert_eq!(c.gene.as_deref(), Some("COL1A1"));
        assert_eq!(c.position, Some(CdsPosition::new(589)));
        assert_eq!(c.ref_allele.as_deref(), Some("G"));
        assert_eq!(c.alt_allele.as_deref(), Some("T"));
        assert!(record.derive_genomic_coordinates().is_empty());
    }

    #[test]
    fn test_intronic_and_utr_positions() {
        let c = parse("ENST00000357033.8:c.31+1G>A");
        assert!(c.is_valid());
        assert_eq!(c.coding().unwrap().position.unwrap().offset, Some(1));

        let c = parse("NM_000088.3:c.*25T>C");
        assert!(c.coding().unwrap().position.unwrap().utr3);

        let c = parse("NM_000088.3:c.-14G>C");
        assert_eq!(c.coding().unwrap().position.unwrap().base, -14);
    }

    #[test]
    fn test_protein_annotation() {
        for line in [
            "NM_000088.3:c.589G>T(p.Gly197Cys)",
            "NM_000088.3:c.589G>T (p.Gly197Cys)",
            "NM_000088.3:c.589G>T p.Gly197Cys",
        ] {
            let record = parse(line);
            assert!(record.is_valid(), "{line}");
            assert!(record.warnings().is_empty(), "{line}");
            assert_eq!(
                record.coding().unwrap().protein_change.as_deref(),
                Some("p.Gly197Cys")
            );
        }
        let record = parse("NM_000088.3:c.589G>T p.(Gly197Cys)");
        assert_eq!(
            record.coding().unwrap().protein_change.as_deref(),
            Some("p.(Gly197Cys)")
        );
    }

    #[test]
    fn test_unknown_trailing_text_warns() {
        let record = parse("NM_000088.3:c.589G>T pathogenic");
        assert!(record.is_valid());
        assert_eq!(record.warnings(), vec![NoticeCode::TrailingAnnotation.text()]);
        assert_eq!(record.coding().unwrap().protein_change, None);
    }

    #[test]
    fn test_invalid_accession() {
        let record = parse("NG_012232.1:c.589G>T");
        assert_eq!(record.format(), InputFormat::HgvsC);
        assert_eq!(record.errors(), vec!["invalid accession"]);
        assert_eq!(record.coding().unwrap().accession, "NG_012232.1");
    }

    #[test]
    fn test_non_substitution() {
        let record = parse("NM_007294.4:c.5266dupC");
        assert!(record.is_valid());
        assert_eq!(record.warnings(), vec![NoticeCode::NonSubstitutionEdit.text()]);
    }

    #[test]
    fn test_unparseable() {
        let record = parse("NM_000088.3:c.foo");
        assert_eq!(record.format(), InputFormat::HgvsC);
        assert_eq!(record.errors(), vec!["unrecognized HGVS description"]);
        let record = parse("NM_000088.3:g.589G>T");
        assert_eq!(record.format(), InputFormat::HgvsC);
        assert!(!record.is_valid());
    }

    #[test]
    fn test_parse_transcript() {
        assert_eq!(parse_transcript("NM_000088.3"), Some(("NM_000088.3", None)));
        assert_eq!(parse_transcript("NR_024540"), Some(("NR_024540", None)));
        assert_eq!(
            parse_transcript("XM_011544358.2(HLA-A)"),
            Some(("XM_011544358.2", Some("HLA-A")))
        );
        assert_eq!(parse_transcript("NP_000079.2"), None);
        assert_eq!(parse_transcript("NM_000088.3(COL1A1"), None);
    }
}
