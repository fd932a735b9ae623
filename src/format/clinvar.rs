//! ClinVar accessions: reference (`RCV`) and variation (`VCV`) records.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::input::{InputFormat, UserInput};

/// Length of the `RCV`/`VCV` prefix.
pub const PREFIX_LEN: usize = 3;

const PREFIXES: [&str; 2] = ["RCV", "VCV"];

static CLINVAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(RCV|VCV)\d+(\.\d+)?$").unwrap());

pub fn matches(line: &str) -> bool {
    let line = line.trim_start();
    PREFIXES.iter().any(|p| line.starts_with(p))
}

pub fn parse(line: &str) -> UserInput {
    super::parse_identifier(line, InputFormat::ClinVar, &CLINVAR_PATTERN)
}
