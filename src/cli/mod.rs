//! CLI utilities for ferro-input
//!
//! This module provides testable functions used by the CLI binary.
//! Input reading and output formatting live here so they can be unit tested
//! without end-to-end CLI runs.

pub mod format;
pub mod input;

// Re-export commonly used items
pub use format::{output_formats, output_record, output_summary, OutputFormat, FORMAT_EXAMPLES};
pub use input::{open_input, read_lines, LineOptions};

/// UTF-8 BOM (Byte Order Mark) constant
const UTF8_BOM: &str = "\u{feff}";

/// Strip UTF-8 BOM from the beginning of a string if present.
///
/// This is common when files are exported from Windows applications or Excel.
///
/// # Examples
///
/// ```
/// use ferro_input::cli::strip_bom;
///
/// assert_eq!(strip_bom("\u{feff}rs334"), "rs334");
/// assert_eq!(strip_bom("rs334"), "rs334");
/// ```
pub fn strip_bom(s: &str) -> &str {
    s.strip_prefix(UTF8_BOM).unwrap_or(s)
}

/// Strip inline comments from an input line.
///
/// Comments start with `#` and extend to the end of the line.
/// Leading/trailing whitespace is also trimmed.
///
/// # Examples
///
/// ```
/// use ferro_input::cli::strip_inline_comment;
///
/// assert_eq!(strip_inline_comment("X 100 A G  # my note"), "X 100 A G");
/// assert_eq!(strip_inline_comment("X 100 A G"), "X 100 A G");
/// assert_eq!(strip_inline_comment("# full line comment"), "");
/// ```
pub fn strip_inline_comment(s: &str) -> &str {
    match s.find('#') {
        Some(pos) => s[..pos].trim(),
        None => s.trim(),
    }
}

/// Process an input line: trim whitespace, then apply the BOM and inline comment
/// options.
///
/// Returns None if nothing is left, or if the line is a `#` comment line.
///
/// # Arguments
///
/// * `line` - The input line to process
/// * `is_first_line` - Whether this is the first line of input. A BOM can only
///   appear at the start of a file.
/// * `options` - Which decorations to strip
///
/// # Examples
///
/// ```
/// use ferro_input::cli::{process_input_line, LineOptions};
///
/// let options = LineOptions::default();
///
/// // Line with inline comment
/// assert_eq!(process_input_line("X 100 A G  # note", false, &options), Some("X 100 A G"));
///
/// // First line with BOM
/// assert_eq!(process_input_line("\u{feff}rs334", true, &options), Some("rs334"));
///
/// // Empty and comment-only lines
/// assert_eq!(process_input_line("", false, &options), None);
/// assert_eq!(process_input_line("# comment", false, &options), None);
/// ```
pub fn process_input_line<'a>(
    line: &'a str,
    is_first_line: bool,
    options: &LineOptions,
) -> Option<&'a str> {
    let line = line.trim();
    let line = if is_first_line && options.strip_bom {
        strip_bom(line)
    } else {
        line
    };
    let line = if options.strip_inline_comments {
        strip_inline_comment(line)
    } else {
        line.trim()
    };

    if line.is_empty() || line.starts_with('#') {
        None
    } else {
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_bom() {
        assert_eq!(strip_bom("\u{feff}test"), "test");
        assert_eq!(strip_bom("test"), "test");
        assert_eq!(strip_bom("\u{feff}"), "");
        assert_eq!(strip_bom(""), "");
    }

    #[test]
    fn test_strip_inline_comment() {
        assert_eq!(strip_inline_comment("rs1  # comment"), "rs1");
        assert_eq!(strip_inline_comment("rs1#comment"), "rs1");
        assert_eq!(strip_inline_comment("# full comment"), "");
        assert_eq!(strip_inline_comment("  rs1  "), "rs1");
    }

    #[test]
    fn test_process_input_line() {
        let options = LineOptions::default();
        assert_eq!(process_input_line("rs1", false, &options), Some("rs1"));
        assert_eq!(
            process_input_line("1 100 A G  # comment", false, &options),
            Some("1 100 A G")
        );

        // BOM only on the first line; it is not whitespace so trim() keeps it
        assert_eq!(process_input_line("\u{feff}rs1", true, &options), Some("rs1"));
        assert_eq!(
            process_input_line("\u{feff}rs1", false, &options),
            Some("\u{feff}rs1")
        );

        assert_eq!(process_input_line("", false, &options), None);
        assert_eq!(process_input_line("   ", false, &options), None);
        assert_eq!(process_input_line("# comment", false, &options), None);
    }

    #[test]
    fn test_process_input_line_options_off() {
        let options = LineOptions {
            strip_bom: false,
            strip_inline_comments: false,
        };
        assert_eq!(
            process_input_line("rs1 # note", false, &options),
            Some("rs1 # note")
        );
        assert_eq!(
            process_input_line("\u{feff}rs1", true, &options),
            Some("\u{feff}rs1")
        );
        assert_eq!(process_input_line("  # header", false, &options), None);
    }
}
