//! VCF data rows: `CHROM POS ID REF ALT [QUAL FILTER INFO ...]`.
//!
//! Columns are whitespace separated. REF and ALT are nucleotide sequences; ALT may
//! list several comma-separated alleles, of which only the first is kept.

use crate::allele::is_nucleotide_sequence;
use crate::chromosome::Chromosome;
use crate::error::{ErrorCode, NoticeCode};
use crate::input::{GenomicInput, InputData, InputFormat, UserInput};
use crate::message::Messages;

use super::genomic::parse_position;

/// Placeholder for an empty column.
const MISSING: &str = ".";

const MIN_COLUMNS: usize = 5;

/// The five mandatory columns of a data row.
#[derive(Debug, Clone, Copy, Default)]
struct VcfColumns<'a> {
    chrom: &'a str,
    pos: &'a str,
    id: &'a str,
    reference: &'a str,
    alternate: &'a str,
}

impl<'a> VcfColumns<'a> {
    fn split(line: &'a str) -> (Self, usize) {
        let mut fields = line.split_whitespace();
        let mut columns = Self::default();
        let mut count = 0;
        for slot in [
            &mut columns.chrom,
            &mut columns.pos,
            &mut columns.id,
            &mut columns.reference,
            &mut columns.alternate,
        ] {
            if let Some(field) = fields.next() {
                *slot = field;
                count += 1;
            }
        }
        (columns, count)
    }

    fn alternates(&self) -> impl Iterator<Item = &'a str> {
        self.alternate.split(',')
    }
}

fn is_alternate_list(alternate: &str) -> bool {
    alternate.split(',').all(is_nucleotide_sequence)
}

/// True when the line is a complete, well-formed data row.
///
/// A bare five-column row with a numeric ID is read as `chr pos end ref alt`
/// instead, so the end coordinate is not taken for an identifier.
pub fn matches(line: &str) -> bool {
    let (columns, count) = VcfColumns::split(line);
    if count == MIN_COLUMNS && columns.id.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    count >= MIN_COLUMNS
        && Chromosome::parse(columns.chrom).is_applicable()
        && parse_position(columns.pos).is_some()
        && is_nucleotide_sequence(columns.reference)
        && is_alternate_list(columns.alternate)
}

pub fn parse(line: &str) -> UserInput {
    let (columns, _) = VcfColumns::split(line);
    let mut messages = Messages::new();
    let mut genomic = GenomicInput {
        chr: Chromosome::parse(columns.chrom),
        ..GenomicInput::default()
    };
    if !genomic.chr.is_applicable() {
        messages.push(ErrorCode::InvalidChromosome);
    }
    genomic.pos = parse_position(columns.pos);
    if genomic.pos.is_none() {
        messages.push(ErrorCode::InvalidPosition);
    }
    if !columns.id.is_empty() && columns.id != MISSING {
        genomic.id = Some(columns.id.to_string());
    }
    if is_nucleotide_sequence(columns.reference) {
        genomic.ref_allele = Some(columns.reference.to_ascii_uppercase());
    } else {
        messages.push(ErrorCode::InvalidReference);
    }
    if is_alternate_list(columns.alternate) {
        let mut alternates = columns.alternates();
        genomic.alt_allele = alternates.next().map(str::to_ascii_uppercase);
        if alternates.next().is_some() {
            messages.push(NoticeCode::MultiAllelicAlternate);
        }
    } else {
        messages.push(ErrorCode::InvalidAlternate);
    }

    UserInput::new(line, InputFormat::Vcf, messages, InputData::Genomic(genomic))
}
