//! dbSNP reference SNP identifiers (`rs121913529`).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::input::{InputFormat, UserInput};

/// Length of the `rs` prefix.
pub const PREFIX_LEN: usize = 2;

const PREFIX: &str = "rs";

static RSID_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^rs\d+$").unwrap());

/// Case-sensitive `rs` prefix.
pub fn matches(line: &str) -> bool {
    line.trim_start().starts_with(PREFIX)
}

pub fn parse(line: &str) -> UserInput {
    super::parse_identifier(line, InputFormat::Dbsnp, &RSID_PATTERN)
}
