//! COSMIC identifiers (`COSV`, `COSM`, `COSN`).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::input::{InputFormat, UserInput};

/// Length of the `COSV`/`COSM`/`COSN` prefix.
pub const PREFIX_LEN: usize = 4;

const PREFIXES: [&str; 3] = ["COSV", "COSM", "COSN"];

static COSMIC_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^COS[VMN]\d+$").unwrap());

pub fn matches(line: &str) -> bool {
    let line = line.trim_start();
    PREFIXES.iter().any(|p| line.starts_with(p))
}

pub fn parse(line: &str) -> UserInput {
    super::parse_identifier(line, InputFormat::Cosmic, &COSMIC_PATTERN)
}
