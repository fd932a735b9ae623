//! Batch summaries.

use std::fmt;

use serde::Serialize;

use crate::input::{InputType, UserInput};

/// Valid records per input family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TypeCounts {
    pub genomic: usize,
    pub coding: usize,
    pub protein: usize,
    pub id: usize,
}

impl TypeCounts {
    fn add(&mut self, input_type: InputType) {
        match input_type {
            InputType::Genomic => self.genomic += 1,
            InputType::Coding => self.coding += 1,
            InputType::Protein => self.protein += 1,
            InputType::Id => self.id += 1,
        }
    }

    /// Non-zero counts as `("genomic", 2)`, `("cDNA", 1)`, ...
    fn labelled(&self) -> impl Iterator<Item = (&'static str, usize)> {
        [
            ("genomic", self.genomic),
            ("cDNA", self.coding),
            ("protein", self.protein),
            ("ID", self.id),
        ]
        .into_iter()
        .filter(|(_, n)| *n > 0)
    }
}

/// A record with at least one error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidInput {
    pub input: String,
    pub errors: Vec<String>,
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid input ({}): [{}]", self.input, self.errors.join(", "))
    }
}

/// Totals for a classified batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InputSummary {
    pub total: usize,
    pub valid: TypeCounts,
    pub invalid: Vec<InvalidInput>,
}

impl InputSummary {
    pub fn from_records(records: &[UserInput]) -> Self {
        let mut summary = InputSummary {
            total: records.len(),
            ..InputSummary::default()
        };
        for record in records {
            if record.is_valid() {
                summary.valid.add(record.input_type());
            } else {
                let invalid = InvalidInput {
                    input: record.input_str().to_string(),
                    errors: record.errors().into_iter().map(str::to_string).collect(),
                };
                tracing::warn!("{}", invalid);
                summary.invalid.push(invalid);
            }
        }
        summary
    }

    pub fn invalid_count(&self) -> usize {
        self.invalid.len()
    }
}

impl fmt::Display for InputSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Processed {} input{}", self.total, plural(self.total))?;
        let counts: Vec<String> = self
            .valid
            .labelled()
            .map(|(label, n)| format!("{n} {label}"))
            .collect();
        if !counts.is_empty() {
            write!(f, " ({})", counts.join(", "))?;
        }
        write!(f, ".")?;

        let invalid = self.invalid.len();
        if invalid > 0 {
            write!(
                f,
                "\n{} input{} {} not valid:",
                invalid,
                plural(invalid),
                if invalid == 1 { "is" } else { "are" }
            )?;
            for entry in &self.invalid {
                write!(f, "\n{entry}")?;
            }
        }
        Ok(())
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// Human-readable summary of a batch.
///
/// # Examples
///
/// ```
/// use ferro_input::{summarize, InputProcessor};
///
/// let records = InputProcessor::new().parse_batch(&["rs334", "X 100 A G"]);
/// assert_eq!(summarize(&records), "Processed 2 inputs (1 genomic, 1 ID).");
/// ```
pub fn summarize(records: &[UserInput]) -> String {
    InputSummary::from_records(records).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processor::InputProcessor;

    fn records(lines: &[&str]) -> Vec<UserInput> {
        InputProcessor::new().parse_batch(lines)
    }

    #[test]
    fn test_mixed_batch() {
        let records = records(&["1 100 A G", "rs334", "23 100 A G"]);
        let summary = InputSummary::from_records(&records);
        assert_eq!(summary.total, 3);
        assert_eq!(
            summary.valid,
            TypeCounts {
                genomic: 1,
                id: 1,
                ..TypeCounts::default()
            }
        );
        assert_eq!(summary.invalid_count(), 1);
        assert_eq!(
            summary.to_string(),
            "Processed 3 inputs (1 genomic, 1 ID).\n\
             1 input is not valid:\n\
             Invalid input (23 100 A G): [invalid chromosome, invalid position, \
             invalid reference allele, invalid alternate allele]"
        );
    }

    #[test]
    fn test_plurals() {
        assert_eq!(summarize(&records(&["rs1"])), "Processed 1 input (1 ID).");
        assert_eq!(summarize(&[]), "Processed 0 inputs.");

        let text = summarize(&records(&["foo", "bar"]));
        assert!(text.starts_with("Processed 2 inputs.\n2 inputs are not valid:"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_all_families() {
        let text = summarize(&records(&[
            "1 100 A G",
            "NM_000088.3:c.589G>T",
            "NP_000537.3:p.Arg175His",
            "COSV52663476",
        ]));
        assert_eq!(
            text,
            "Processed 4 inputs (1 genomic, 1 cDNA, 1 protein, 1 ID)."
        );
    }

    #[test]
    fn test_serialize() {
        let summary = InputSummary::from_records(&records(&["rs1", "nope"]));
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["total"], 2);
        assert_eq!(json["valid"]["id"], 1);
        assert_eq!(json["invalid"][0]["input"], "nope");
        assert_eq!(json["invalid"][0]["errors"].as_array().unwrap().len(), 4);
    }
}
