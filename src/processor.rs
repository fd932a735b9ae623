//! Line classification.
//!
//! [`InputProcessor`] walks the dispatch cascade in [`crate::format::ROUTES`]: the
//! first route whose precheck accepts a line parses it, and lines no route accepts
//! get the genomic fallback record.
//!
//! # Example
//!
//! ```
//! use ferro_input::{InputFormat, InputProcessor, InputType};
//!
//! let processor = InputProcessor::new();
//! let record = processor.parse_one("rs121913529").unwrap();
//! assert_eq!(record.input_type(), InputType::Id);
//! assert_eq!(record.format(), InputFormat::Dbsnp);
//!
//! assert!(processor.parse_one("   ").is_none());
//! ```

use crate::format::{self, ROUTES};
use crate::input::{InputFormat, UserInput};

/// Batches with more lines than this are classified in parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 10_000;

/// Classifier settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessorConfig {
    /// Minimum batch size for parallel classification.
    pub parallel_threshold: usize,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ProcessorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}

/// Classifies free-text variant lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputProcessor {
    config: ProcessorConfig,
}

impl InputProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ProcessorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Classify one line.
    ///
    /// Returns `None` only for empty or whitespace-only input. The record keeps
    /// `line` verbatim as its input string.
    pub fn parse_one(&self, line: &str) -> Option<UserInput> {
        if line.trim().is_empty() {
            return None;
        }
        Some(classify(line))
    }

    /// Parse `line` with one grammar, skipping the cascade.
    ///
    /// The record always has `format`; lines the grammar cannot read come back
    /// invalid rather than being handed to another grammar.
    pub fn parse_as(&self, format: InputFormat, line: &str) -> Option<UserInput> {
        if line.trim().is_empty() {
            return None;
        }
        Some((format::grammar(format).parse)(line))
    }

    /// Classify many lines, keeping their order.
    ///
    /// Lines are trimmed; blank lines and `#` comment lines produce no record.
    pub fn parse_batch<S: AsRef<str> + Sync>(&self, lines: &[S]) -> Vec<UserInput> {
        let lines: Vec<&str> = lines
            .iter()
            .map(|line| line.as_ref().trim())
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();

        #[cfg(feature = "parallel")]
        if lines.len() > self.config.parallel_threshold {
            tracing::debug!(lines = lines.len(), "classifying batch in parallel");
            return crate::parallel::classify_parallel(&lines);
        }

        lines.into_iter().map(classify).collect()
    }
}

/// Run the dispatch cascade on a non-blank line.
pub(crate) fn classify(line: &str) -> UserInput {
    for route in &ROUTES {
        if (route.precheck)(line) {
            tracing::debug!(route = route.name, input = line, "route matched");
            return (route.parse)(line);
        }
    }
    tracing::debug!(input = line, "no route matched, using fallback");
    format::fallback(line)
}
