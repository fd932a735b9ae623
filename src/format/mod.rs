//! Notation grammars.
//!
//! Each notation has a cheap shape check (`matches`) and a parser (`parse`) that
//! always returns a record of its own format, carrying error messages when the
//! line is malformed. Two static tables tie them together:
//!
//! - [`GRAMMARS`]: one entry per [`InputFormat`], used to force a notation.
//! - [`ROUTES`]: the ordered dispatch cascade used to classify free text. A route
//!   may cover several formats (the HGVS route picks g., c. or p. itself).

pub mod clinvar;
pub mod cosmic;
pub mod dbsnp;
pub mod genomic;
pub mod gnomad;
pub mod hgvs;
pub mod protein;
pub mod vcf;

use regex::Regex;

use crate::error::ErrorCode;
use crate::input::{IdInput, InputData, InputFormat, UserInput};
use crate::message::Messages;

/// Cheap shape test on a raw line.
pub type MatchFn = fn(&str) -> bool;

/// Full parser producing a record of a known format.
pub type ParseFn = fn(&str) -> UserInput;

/// Capabilities of a single notation.
#[derive(Debug, Clone, Copy)]
pub struct Grammar {
    pub format: InputFormat,
    pub matches: MatchFn,
    pub parse: ParseFn,
}

/// One step of the dispatch cascade.
#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub name: &'static str,
    pub precheck: MatchFn,
    pub parse: ParseFn,
}

/// Per-format capability table, in [`InputFormat::all`] order.
pub static GRAMMARS: [Grammar; 10] = [
    Grammar {
        format: InputFormat::Dbsnp,
        matches: dbsnp::matches,
        parse: dbsnp::parse,
    },
    Grammar {
        format: InputFormat::ClinVar,
        matches: clinvar::matches,
        parse: clinvar::parse,
    },
    Grammar {
        format: InputFormat::Cosmic,
        matches: cosmic::matches,
        parse: cosmic::parse,
    },
    Grammar {
        format: InputFormat::HgvsG,
        matches: hgvs::genomic::matches,
        parse: hgvs::genomic::parse,
    },
    Grammar {
        format: InputFormat::HgvsC,
        matches: hgvs::coding::matches,
        parse: hgvs::coding::parse,
    },
    Grammar {
        format: InputFormat::HgvsP,
        matches: hgvs::protein::matches,
        parse: hgvs::protein::parse,
    },
    Grammar {
        format: InputFormat::Gnomad,
        matches: gnomad::matches,
        parse: gnomad::parse,
    },
    Grammar {
        format: InputFormat::CustomProtein,
        matches: protein::matches,
        parse: protein::parse,
    },
    Grammar {
        format: InputFormat::Vcf,
        matches: vcf::matches,
        parse: vcf::parse,
    },
    Grammar {
        format: InputFormat::CustomGenomic,
        matches: genomic::matches,
        parse: genomic::parse_custom,
    },
];

/// Dispatch cascade, highest priority first.
///
/// Identifier routes come before everything else so that an identifier-shaped
/// token is never read as a genomic position.
pub static ROUTES: [Route; 7] = [
    Route {
        name: "dbsnp",
        precheck: dbsnp::matches,
        parse: dbsnp::parse,
    },
    Route {
        name: "clinvar",
        precheck: clinvar::matches,
        parse: clinvar::parse,
    },
    Route {
        name: "cosmic",
        precheck: cosmic::matches,
        parse: cosmic::parse,
    },
    Route {
        name: "hgvs",
        precheck: hgvs::matches,
        parse: hgvs::parse,
    },
    Route {
        name: "gnomad",
        precheck: gnomad::matches,
        parse: gnomad::parse,
    },
    Route {
        name: "protein",
        precheck: protein::matches,
        parse: protein::parse,
    },
    Route {
        name: "genomic",
        precheck: genomic::matches,
        parse: genomic::parse,
    },
];

/// Look up the grammar of a format.
pub fn grammar(format: InputFormat) -> &'static Grammar {
    GRAMMARS
        .iter()
        .find(|g| g.format == format)
        .unwrap_or(&GRAMMARS[GRAMMARS.len() - 1])
}

/// Record for lines no route accepted.
pub fn fallback(line: &str) -> UserInput {
    genomic::invalid_input(line)
}

/// First whitespace-delimited token of a line.
pub(crate) fn first_token(line: &str) -> &str {
    line.split_whitespace().next().unwrap_or("")
}

/// Shared parser for the identifier formats: the trimmed line must match `pattern`.
pub(crate) fn parse_identifier(line: &str, format: InputFormat, pattern: &Regex) -> UserInput {
    let id = line.trim();
    let mut messages = Messages::new();
    if !pattern.is_match(id) {
        messages.push(ErrorCode::InvalidIdentifier);
    }
    UserInput::new(line, format, messages, InputData::Id(IdInput::new(id)))
}
