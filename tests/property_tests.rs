//! Property-based tests for input classification
//!
//! Arbitrary and structured lines are fed through the classifier to check that it
//! never panics, always yields a well-formed record and is deterministic.

use ferro_input::{Chromosome, InputFormat, InputProcessor, InputType};
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

// =============================================================================
// Strategies
// =============================================================================

/// Generate valid nucleotide bases in either case
fn nucleotide() -> impl Strategy<Value = char> {
    prop_oneof![
        Just('A'),
        Just('C'),
        Just('G'),
        Just('T'),
        Just('a'),
        Just('c'),
        Just('g'),
        Just('t'),
    ]
}

/// Generate chromosome names in the common naming styles
fn chromosome_name() -> impl Strategy<Value = String> {
    prop_oneof![
        (1..=22u8).prop_map(|n| n.to_string()),
        (1..=22u8).prop_map(|n| format!("chr{n}")),
        Just("X".to_string()),
        Just("chrY".to_string()),
        Just("MT".to_string()),
        Just("chrM".to_string()),
    ]
}

/// Generate positive positions
fn position() -> impl Strategy<Value = u64> {
    1..1_000_000_000u64
}

/// Generate separators used between genomic fields
fn separator() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(" "), Just("\t"), Just(","), Just("  ")]
}

/// Generate arbitrary printable lines with variant-ish characters
fn noisy_line() -> impl Strategy<Value = String> {
    "[ -~\t]{0,60}"
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn prop_never_panics_and_is_well_formed(line in noisy_line()) {
        let processor = InputProcessor::new();
        match processor.parse_one(&line) {
            None => prop_assert!(line.trim().is_empty()),
            Some(record) => {
                prop_assert_eq!(record.input_str(), line.as_str());
                prop_assert!(InputFormat::all().contains(&record.format()));
                prop_assert_eq!(record.format().input_type(), record.input_type());
                prop_assert_eq!(record.is_valid(), record.errors().is_empty());
            }
        }
    }

    #[test]
    fn prop_parse_one_is_deterministic(line in noisy_line()) {
        let processor = InputProcessor::new();
        prop_assert_eq!(processor.parse_one(&line), processor.parse_one(&line));
    }

    #[test]
    fn prop_parse_as_keeps_format(line in noisy_line(), index in 0..10usize) {
        let format = InputFormat::all()[index];
        if let Some(record) = InputProcessor::new().parse_as(format, &line) {
            prop_assert_eq!(record.format(), format);
        }
    }

    #[test]
    fn prop_custom_genomic_lines_parse(
        chr in chromosome_name(),
        pos in position(),
        ref_allele in nucleotide(),
        alt_allele in nucleotide(),
        sep in separator(),
    ) {
        let line = format!("{chr}{sep}{pos}{sep}{ref_allele}{sep}{alt_allele}");
        let record = InputProcessor::new().parse_one(&line).unwrap();

        prop_assert_eq!(record.input_type(), InputType::Genomic);
        prop_assert!(record.is_valid(), "{}: {:?}", line, record.errors());
        let g = record.genomic().unwrap();
        prop_assert_eq!(g.chr, Chromosome::parse(&chr));
        prop_assert_eq!(g.pos, Some(pos));
        prop_assert_eq!(g.ref_allele.clone(), Some(ref_allele.to_ascii_uppercase().to_string()));
        prop_assert_eq!(g.alt_allele.clone(), Some(alt_allele.to_ascii_uppercase().to_string()));
        prop_assert_eq!(record.derive_genomic_coordinates(), vec![(g.chr, pos)]);
    }

    #[test]
    fn prop_rsids_are_identifiers(n in 1..u32::MAX, trailing in "[ \t]{0,3}") {
        let line = format!("rs{n}{trailing}");
        let record = InputProcessor::new().parse_one(&line).unwrap();
        prop_assert_eq!(record.format(), InputFormat::Dbsnp);
        prop_assert!(record.is_valid());
        prop_assert_eq!(record.id_prefix(), "rs");
    }

    #[test]
    fn prop_batch_matches_single(lines in prop::collection::vec(noisy_line(), 0..30)) {
        let processor = InputProcessor::new();
        let batch = processor.parse_batch(&lines);
        let expected: Vec<_> = lines
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .filter_map(|l| processor.parse_one(l))
            .collect();
        prop_assert_eq!(batch, expected);
    }
}
