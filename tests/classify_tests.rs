//! End-to-end classification tests
//!
//! Lines go through the public `InputProcessor` API and the resulting records are
//! checked against their family, format, fields and diagnostics.

use ferro_input::input::{CdsPosition, InputData};
use ferro_input::{summarize, Chromosome, InputFormat, InputProcessor, InputType, MessageKind};
use rstest::rstest;

fn classify(line: &str) -> ferro_input::UserInput {
    InputProcessor::new()
        .parse_one(line)
        .expect("non-blank line yields a record")
}

// =============================================================================
// Scenarios
// =============================================================================

#[rstest]
#[case::spaces("21 25891796 25891797 C/T . . .")]
#[case::tabs("21\t25891796\t25891797\tC/T\t.\t.\t.")]
#[case::tabs_then_spaces("21\t25891796\t25891797\tC/T . . .")]
fn test_custom_genomic_with_end_and_pair(#[case] line: &str) {
    let record = classify(line);
    assert_eq!(record.input_type(), InputType::Genomic);
    assert_eq!(record.format(), InputFormat::CustomGenomic);
    assert!(record.is_valid());
    assert_eq!(record.input_str(), line);

    let g = record.genomic().unwrap();
    assert_eq!(g.chr, Chromosome::Autosome(21));
    assert_eq!(g.pos, Some(25891796));
    assert_eq!(g.ref_allele.as_deref(), Some("C"));
    assert_eq!(g.alt_allele.as_deref(), Some("T"));
}

#[test]
fn test_unrecognized_hgvs_description() {
    let record = classify("NM_000088.3:x.459A>G");
    assert!(!record.is_valid());
    assert_eq!(record.errors(), vec!["unrecognized HGVS description"]);
    assert_eq!(record.input_type(), InputType::Coding);
}

#[test]
fn test_batch_summary() {
    let records = InputProcessor::new().parse_batch(&["1 100 A G", "rs334", "23 100 A G"]);
    assert_eq!(records.len(), 3);
    let text = summarize(&records);
    assert!(text.contains("1 genomic, 1 ID"), "{text}");
    assert!(text.contains("1 input is not valid"), "{text}");
    assert!(text.contains("Invalid input (23 100 A G): [invalid chromosome"), "{text}");
}

// =============================================================================
// Dispatch priority
// =============================================================================

#[rstest]
#[case("rs1 2 3", InputType::Id)]
#[case("RCV000000001 100", InputType::Id)]
#[case("COSM476 X", InputType::Id)]
#[case("NC_000001.11:g.100A>G 1 100 A G", InputType::Genomic)]
#[case("1-100-A-G", InputType::Genomic)]
fn test_priority(#[case] line: &str, #[case] expected: InputType) {
    assert_eq!(classify(line).input_type(), expected, "{line}");
}

#[test]
fn test_identifier_prefixes() {
    assert_eq!(classify("rs121913529").id_prefix(), "rs");
    assert_eq!(classify("VCV000012345.1").id_prefix(), "VCV");
    assert_eq!(classify("COSV52663476").id_prefix(), "COSV");
    assert_eq!(classify("X 100 A G").id_prefix(), "");
}

// =============================================================================
// Formats
// =============================================================================

#[rstest]
#[case("X\t100\trs1\tA\tG\t50\tPASS\t.", InputFormat::Vcf)]
#[case("chrX 100 A G", InputFormat::CustomGenomic)]
#[case("MT-100-a-g", InputFormat::Gnomad)]
#[case("NC_012920.1:g.100A>G", InputFormat::HgvsG)]
fn test_genomic_formats(#[case] line: &str, #[case] format: InputFormat) {
    let record = classify(line);
    assert_eq!(record.format(), format);
    assert!(record.is_valid(), "{line}: {:?}", record.errors());
    let coordinates = record.derive_genomic_coordinates();
    assert_eq!(coordinates.len(), 1);
    assert_eq!(coordinates[0].1, 100);
}

#[test]
fn test_numeric_third_column_is_an_end_coordinate() {
    let record = classify("1 100 200 A G");
    assert_eq!(record.format(), InputFormat::CustomGenomic);
    assert!(record.is_valid());
    let g = record.genomic().unwrap();
    assert_eq!(g.id, None);
    assert_eq!(g.pos, Some(100));
    assert_eq!(g.ref_allele.as_deref(), Some("A"));
    assert_eq!(g.alt_allele.as_deref(), Some("G"));
}

#[rstest]
#[case("1 -5 A G")]
#[case("X -100")]
#[case("21 25891796 -25891797 C/T")]
fn test_signed_position_is_invalid(#[case] line: &str) {
    let record = classify(line);
    assert_eq!(record.format(), InputFormat::CustomGenomic);
    assert!(!record.is_valid(), "{line}");
    assert_eq!(record.errors(), vec!["invalid position"]);
}

#[test]
fn test_vcf_multi_allelic_warns() {
    let record = classify("7\t140753336\t.\tA\tT,C");
    assert_eq!(record.format(), InputFormat::Vcf);
    assert!(record.is_valid());
    assert_eq!(record.genomic().unwrap().alt_allele.as_deref(), Some("T"));
    assert_eq!(record.messages()[0].kind(), MessageKind::Warn);
}

#[test]
fn test_coding_record() {
    let record = classify("NM_007294.4(BRCA1):c.5266+3A>G (p.?)");
    assert_eq!(record.format(), InputFormat::HgvsC);
    let InputData::Coding(c) = record.data() else {
        panic!("expected a coding record");
    };
    assert_eq!(c.gene.as_deref(), Some("BRCA1"));
    assert_eq!(
        c.position,
        Some(CdsPosition {
            base: 5266,
            utr3: false,
            offset: Some(3)
        })
    );
    assert_eq!(c.protein_change.as_deref(), Some("p.?"));
    assert!(record.derive_genomic_coordinates().is_empty());
}

#[rstest]
#[case("NP_000537.3:p.Arg175His", InputFormat::HgvsP)]
#[case("P04637 R175H", InputFormat::CustomProtein)]
#[case("P04637 175 Arg His", InputFormat::CustomProtein)]
fn test_protein_records(#[case] line: &str, #[case] format: InputFormat) {
    let record = classify(line);
    assert_eq!(record.format(), format);
    let p = record.protein().unwrap();
    assert_eq!(p.position, Some(175));
    assert_eq!((p.ref_aa, p.alt_aa), (Some('R'), Some('H')));
}

#[test]
fn test_derived_genomic_inputs() {
    use ferro_input::input::GenomicInput;

    let record = classify("rs334").with_derived_genomic_inputs(vec![
        GenomicInput::new(Chromosome::Autosome(11), 5227002),
        GenomicInput::default(),
    ]);
    assert_eq!(
        record.derive_genomic_coordinates(),
        vec![(Chromosome::Autosome(11), 5227002)]
    );
}

// =============================================================================
// Forced grammars
// =============================================================================

#[test]
fn test_parse_as_every_format() {
    let processor = InputProcessor::new();
    for format in InputFormat::all() {
        let record = processor.parse_as(*format, "rs334").unwrap();
        assert_eq!(record.format(), *format);
        assert_eq!(record.input_type(), format.input_type());
        assert_eq!(record.is_valid(), *format == InputFormat::Dbsnp, "{format}");
    }
}

#[test]
fn test_json_record() {
    let record = classify("NC_000017.11:g.43045712G>A");
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["type"], "GENOMIC");
    assert_eq!(value["format"], "hgvs_g");
    assert_eq!(value["chr"], "17");
    assert_eq!(value["pos"], 43045712);
    assert_eq!(value["messages"].as_array().unwrap().len(), 0);
}
