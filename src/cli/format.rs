//! Output formatting utilities for CLI operations

use std::io::Write;
use std::str::FromStr;

use serde::Serialize;

use crate::error::InputError;
use crate::input::{InputFormat, UserInput};
use crate::summary::InputSummary;

/// Output format for CLI results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Tab-separated text (default)
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl FromStr for OutputFormat {
    type Err = std::convert::Infallible;

    /// Parse an output format from a string
    ///
    /// # Examples
    ///
    /// ```
    /// use ferro_input::cli::OutputFormat;
    /// use std::str::FromStr;
    ///
    /// assert!(matches!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json));
    /// assert!(matches!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        })
    }
}

/// Example line for each notation, in dispatch priority order.
pub const FORMAT_EXAMPLES: [(InputFormat, &str); 10] = [
    (InputFormat::Dbsnp, "rs121913529"),
    (InputFormat::ClinVar, "RCV000012345.3"),
    (InputFormat::Cosmic, "COSV52663476"),
    (InputFormat::HgvsG, "NC_000017.11:g.43045712G>A"),
    (InputFormat::HgvsC, "NM_000088.3(COL1A1):c.589G>T"),
    (InputFormat::HgvsP, "NP_000537.3:p.Arg175His"),
    (InputFormat::Gnomad, "1-55516888-G-A"),
    (InputFormat::CustomProtein, "P68871 E7V"),
    (InputFormat::Vcf, "17\t43045712\t.\tG\tA"),
    (InputFormat::CustomGenomic, "21 25891796 C/T"),
];

/// Write one classified record
///
/// Text output is tab-separated: input, type, format, status, then the
/// messages joined with `; `.
///
/// # Examples
///
/// ```
/// use ferro_input::cli::{output_record, OutputFormat};
/// use ferro_input::InputProcessor;
/// use std::io::Cursor;
///
/// let record = InputProcessor::new().parse_one("rs334").unwrap();
/// let mut buffer = Cursor::new(Vec::new());
/// output_record(&mut buffer, &record, OutputFormat::Text).unwrap();
/// let result = String::from_utf8(buffer.into_inner()).unwrap();
/// assert_eq!(result, "rs334\tID\tdbsnp\tVALID\t\n");
/// ```
pub fn output_record<W: Write>(
    writer: &mut W,
    record: &UserInput,
    format: OutputFormat,
) -> Result<(), InputError> {
    match format {
        OutputFormat::Json => write_json_line(writer, record),
        OutputFormat::Text => {
            let messages: Vec<String> = record.messages().iter().map(|m| m.to_string()).collect();
            writeln!(
                writer,
                "{}\t{}\t{}\t{}\t{}",
                record.input_str(),
                record.input_type().as_str(),
                record.format(),
                if record.is_valid() { "VALID" } else { "INVALID" },
                messages.join("; ")
            )?;
            Ok(())
        }
    }
}

/// Write a batch summary
pub fn output_summary<W: Write>(
    writer: &mut W,
    summary: &InputSummary,
    format: OutputFormat,
) -> Result<(), InputError> {
    match format {
        OutputFormat::Json => write_json_line(writer, summary),
        OutputFormat::Text => {
            writeln!(writer, "{summary}")?;
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct FormatEntry {
    format: InputFormat,
    input_type: &'static str,
    example: &'static str,
}

/// Write the supported notations with an example each
pub fn output_formats<W: Write>(writer: &mut W, format: OutputFormat) -> Result<(), InputError> {
    for (input_format, example) in FORMAT_EXAMPLES {
        let entry = FormatEntry {
            format: input_format,
            input_type: input_format.input_type().as_str(),
            example,
        };
        match format {
            OutputFormat::Json => write_json_line(writer, &entry)?,
            OutputFormat::Text => writeln!(
                writer,
                "{:<15} {:<8} {}",
                entry.format.as_str(),
                entry.input_type,
                entry.example.escape_default()
            )?,
        }
    }
    Ok(())
}

fn write_json_line<W: Write, T: Serialize>(writer: &mut W, value: &T) -> Result<(), InputError> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}
