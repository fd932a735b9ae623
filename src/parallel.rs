//! Parallel classification support for ferro-input
//!
//! This module provides parallel variants of the classification operations
//! using rayon. Enable with the `parallel` feature.
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "parallel")]
//! # fn main() {
//! use ferro_input::parallel::{classify_parallel, classify_parallel_valid};
//!
//! let lines = vec![
//!     "rs121913529",
//!     "NC_000017.11:g.43045712G>A",
//!     "not a variant",
//! ];
//!
//! let records = classify_parallel(&lines);
//! assert_eq!(records.len(), 3);
//!
//! let valid = classify_parallel_valid(&lines);
//! assert_eq!(valid.len(), 2);
//! # }
//! # #[cfg(not(feature = "parallel"))]
//! # fn main() {}
//! ```

use rayon::prelude::*;

use crate::input::{InputFormat, UserInput};
use crate::processor::classify;

/// Classify lines in parallel.
///
/// Every line must be non-blank. Order is preserved.
pub fn classify_parallel<S: AsRef<str> + Sync>(lines: &[S]) -> Vec<UserInput> {
    lines.par_iter().map(|s| classify(s.as_ref())).collect()
}

/// Classify lines in parallel, keeping only valid records.
pub fn classify_parallel_valid<S: AsRef<str> + Sync>(lines: &[S]) -> Vec<UserInput> {
    lines
        .par_iter()
        .map(|s| classify(s.as_ref()))
        .filter(UserInput::is_valid)
        .collect()
}

/// Parse lines in parallel with a single grammar.
pub fn parse_as_parallel<S: AsRef<str> + Sync>(
    format: InputFormat,
    lines: &[S],
) -> Vec<UserInput> {
    let parse = crate::format::grammar(format).parse;
    lines.par_iter().map(|s| parse(s.as_ref())).collect()
}

/// Statistics from parallel processing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParallelStats {
    /// Total records
    pub total: usize,
    /// Records without errors
    pub valid: usize,
    /// Records with at least one error
    pub invalid: usize,
}

impl ParallelStats {
    /// Tally a slice of records.
    pub fn from_records(records: &[UserInput]) -> Self {
        let valid = records.par_iter().filter(|r| r.is_valid()).count();
        Self {
            total: records.len(),
            valid,
            invalid: records.len() - valid,
        }
    }

    /// Percentage of valid records
    pub fn valid_rate(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            (self.valid as f64 / self.total as f64) * 100.0
        }
    }
}
