//! Parsed variant records.
//!
//! Every classified line becomes a [`UserInput`]: the verbatim line, the grammar that
//! matched it, the diagnostics collected while parsing, and the family-specific
//! fields in [`InputData`]. A record is built once by a grammar and is read-only
//! afterwards; downstream resolvers attach genomic anchors with
//! [`UserInput::with_derived_genomic_inputs`], which consumes the record.

mod coding;
mod genomic;
mod id;
mod protein;

pub use coding::{CdsPosition, CodingInput};
pub use genomic::GenomicInput;
pub use id::IdInput;
pub use protein::ProteinInput;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::chromosome::Chromosome;
use crate::message::{Message, MessageKind, Messages};

/// Coarse notation family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InputType {
    Genomic,
    Coding,
    Protein,
    Id,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Genomic => "GENOMIC",
            InputType::Coding => "CODING",
            InputType::Protein => "PROTEIN",
            InputType::Id => "ID",
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The specific grammar a record was parsed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputFormat {
    CustomGenomic,
    Vcf,
    HgvsG,
    HgvsC,
    HgvsP,
    CustomProtein,
    Dbsnp,
    #[serde(rename = "clinvar")]
    ClinVar,
    Cosmic,
    Gnomad,
}

impl InputFormat {
    /// Family a format belongs to.
    pub fn input_type(&self) -> InputType {
        match self {
            InputFormat::CustomGenomic
            | InputFormat::Vcf
            | InputFormat::HgvsG
            | InputFormat::Gnomad => InputType::Genomic,
            InputFormat::HgvsC => InputType::Coding,
            InputFormat::HgvsP | InputFormat::CustomProtein => InputType::Protein,
            InputFormat::Dbsnp | InputFormat::ClinVar | InputFormat::Cosmic => InputType::Id,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputFormat::CustomGenomic => "custom_genomic",
            InputFormat::Vcf => "vcf",
            InputFormat::HgvsG => "hgvs_g",
            InputFormat::HgvsC => "hgvs_c",
            InputFormat::HgvsP => "hgvs_p",
            InputFormat::CustomProtein => "custom_protein",
            InputFormat::Dbsnp => "dbsnp",
            InputFormat::ClinVar => "clinvar",
            InputFormat::Cosmic => "cosmic",
            InputFormat::Gnomad => "gnomad",
        }
    }

    /// All formats, in dispatch priority order.
    pub fn all() -> &'static [InputFormat] {
        &[
            InputFormat::Dbsnp,
            InputFormat::ClinVar,
            InputFormat::Cosmic,
            InputFormat::HgvsG,
            InputFormat::HgvsC,
            InputFormat::HgvsP,
            InputFormat::Gnomad,
            InputFormat::CustomProtein,
            InputFormat::Vcf,
            InputFormat::CustomGenomic,
        ]
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase().replace('-', "_");
        match lower.as_str() {
            "custom_genomic" | "genomic" => Ok(InputFormat::CustomGenomic),
            "vcf" => Ok(InputFormat::Vcf),
            "hgvs_g" | "hgvsg" => Ok(InputFormat::HgvsG),
            "hgvs_c" | "hgvsc" => Ok(InputFormat::HgvsC),
            "hgvs_p" | "hgvsp" => Ok(InputFormat::HgvsP),
            "custom_protein" | "protein" => Ok(InputFormat::CustomProtein),
            "dbsnp" | "rsid" => Ok(InputFormat::Dbsnp),
            "clinvar" => Ok(InputFormat::ClinVar),
            "cosmic" => Ok(InputFormat::Cosmic),
            "gnomad" => Ok(InputFormat::Gnomad),
            _ => Err(format!("unknown input format: {s}")),
        }
    }
}

/// Family-specific fields of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum InputData {
    Genomic(GenomicInput),
    Coding(CodingInput),
    Protein(ProteinInput),
    Id(IdInput),
}

impl InputData {
    pub fn input_type(&self) -> InputType {
        match self {
            InputData::Genomic(_) => InputType::Genomic,
            InputData::Coding(_) => InputType::Coding,
            InputData::Protein(_) => InputType::Protein,
            InputData::Id(_) => InputType::Id,
        }
    }
}

/// One classified input line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserInput {
    input_str: String,
    format: InputFormat,
    messages: Vec<Message>,
    #[serde(flatten)]
    data: InputData,
}

impl UserInput {
    pub(crate) fn new(
        input_str: &str,
        format: InputFormat,
        messages: Messages,
        data: InputData,
    ) -> Self {
        debug_assert_eq!(format.input_type(), data.input_type());
        Self {
            input_str: input_str.to_string(),
            format,
            messages: messages.into_vec(),
            data,
        }
    }

    /// The line exactly as it was given.
    pub fn input_str(&self) -> &str {
        &self.input_str
    }

    pub fn input_type(&self) -> InputType {
        self.data.input_type()
    }

    pub fn format(&self) -> InputFormat {
        self.format
    }

    /// All diagnostics, in the order they were raised.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn data(&self) -> &InputData {
        &self.data
    }

    /// A record is valid when it carries no error message.
    pub fn is_valid(&self) -> bool {
        !self.messages.iter().any(Message::is_error)
    }

    /// Texts of the error messages, in order.
    pub fn errors(&self) -> Vec<&str> {
        self.messages_of(MessageKind::Error)
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.messages_of(MessageKind::Warn)
    }

    fn messages_of(&self, kind: MessageKind) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|m| m.kind() == kind)
            .map(Message::text)
            .collect()
    }

    /// Genomic anchors of this record.
    ///
    /// Genomic records yield their own chromosome and position when both are known.
    /// Other families yield whatever derived genomic inputs were attached, which is
    /// nothing until a resolver supplies them.
    pub fn derive_genomic_coordinates(&self) -> Vec<(Chromosome, u64)> {
        match &self.data {
            InputData::Genomic(g) => g.coordinate().into_iter().collect(),
            InputData::Coding(c) => coordinates_of(&c.derived_genomic_inputs),
            InputData::Protein(p) => coordinates_of(&p.derived_genomic_inputs),
            InputData::Id(i) => coordinates_of(&i.derived_genomic_inputs),
        }
    }

    /// Attach genomic inputs resolved elsewhere (mapping, database lookups).
    ///
    /// Replaces any previously attached inputs. Genomic records are returned
    /// unchanged since they already carry their own coordinates.
    pub fn with_derived_genomic_inputs(mut self, inputs: Vec<GenomicInput>) -> Self {
        match &mut self.data {
            InputData::Genomic(_) => {}
            InputData::Coding(c) => c.derived_genomic_inputs = inputs,
            InputData::Protein(p) => p.derived_genomic_inputs = inputs,
            InputData::Id(i) => i.derived_genomic_inputs = inputs,
        }
        self
    }

    /// Fixed-length prefix of an identifier record (`rs`, `RCV`, `COSV`, ...).
    ///
    /// Empty for non-identifier records and for identifiers not longer than the
    /// prefix.
    pub fn id_prefix(&self) -> &str {
        let InputData::Id(id) = &self.data else {
            return "";
        };
        let len = match self.format {
            InputFormat::Dbsnp => crate::format::dbsnp::PREFIX_LEN,
            InputFormat::ClinVar => crate::format::clinvar::PREFIX_LEN,
            InputFormat::Cosmic => crate::format::cosmic::PREFIX_LEN,
            _ => return "",
        };
        id.prefix(len)
    }

    pub fn genomic(&self) -> Option<&GenomicInput> {
        match &self.data {
            InputData::Genomic(g) => Some(g),
            _ => None,
        }
    }

    pub fn coding(&self) -> Option<&CodingInput> {
        match &self.data {
            InputData::Coding(c) => Some(c),
            _ => None,
        }
    }

    pub fn protein(&self) -> Option<&ProteinInput> {
        match &self.data {
            InputData::Protein(p) => Some(p),
            _ => None,
        }
    }

    pub fn id(&self) -> Option<&IdInput> {
        match &self.data {
            InputData::Id(i) => Some(i),
            _ => None,
        }
    }
}

impl fmt::Display for UserInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.input_str)
    }
}

fn coordinates_of(inputs: &[GenomicInput]) -> Vec<(Chromosome, u64)> {
    inputs.iter().filter_map(GenomicInput::coordinate).collect()
}
