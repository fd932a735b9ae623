//! Reading input lines from files and readers.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::config::LineConfig;
use crate::error::InputError;

use super::process_input_line;

/// Line decorations to remove before classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineOptions {
    pub strip_bom: bool,
    pub strip_inline_comments: bool,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            strip_bom: true,
            strip_inline_comments: true,
        }
    }
}

impl From<&LineConfig> for LineOptions {
    fn from(config: &LineConfig) -> Self {
        Self {
            strip_bom: config.strip_bom,
            strip_inline_comments: config.strip_inline_comments,
        }
    }
}

/// Open a file for line reading, decompressing `.gz` files.
pub fn open_input<P: AsRef<Path>>(path: P) -> Result<Box<dyn BufRead>, InputError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| InputError::Io {
        msg: format!("Failed to open {}: {}", path.display(), e),
    })?;

    let reader: Box<dyn BufRead> = if path.extension().is_some_and(|e| e == "gz") {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };
    Ok(reader)
}

/// Read all lines worth classifying, cleaned according to `options`.
pub fn read_lines<R: BufRead>(reader: R, options: &LineOptions) -> Result<Vec<String>, InputError> {
    let mut lines = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(line) = process_input_line(&line, i == 0, options) {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}
