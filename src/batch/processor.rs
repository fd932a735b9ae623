//! Batch processor implementation.

use std::time::{Duration, Instant};

use crate::input::{InputFormat, UserInput};
use crate::processor::InputProcessor;
use crate::summary::InputSummary;

/// Configuration for batch processing.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Callback frequency (call progress callback every N records).
    pub progress_interval: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            progress_interval: 1000,
        }
    }
}

impl BatchConfig {
    /// Create a new batch configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the progress callback interval. Zero is treated as one.
    pub fn progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval.max(1);
        self
    }
}

/// Progress information for batch operations.
#[derive(Debug, Clone)]
pub struct BatchProgress {
    /// Total records to produce.
    pub total: usize,
    /// Records produced so far.
    pub processed: usize,
    /// Valid records so far.
    pub valid: usize,
    /// Invalid records so far.
    pub invalid: usize,
    /// Time elapsed since start.
    pub elapsed: Duration,
}

impl BatchProgress {
    /// Calculate completion percentage.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            (self.processed as f64 / self.total as f64) * 100.0
        }
    }

    /// Calculate processing rate (records per second).
    ///
    /// Returns 0.0 if no time has elapsed yet.
    pub fn items_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs < f64::EPSILON {
            0.0
        } else {
            self.processed as f64 / secs
        }
    }
}

/// Result of a batch operation.
#[derive(Debug)]
pub struct BatchResult {
    /// One record per non-blank, non-comment line, in input order.
    pub records: Vec<UserInput>,
    /// Total processing time.
    pub duration: Duration,
}

impl BatchResult {
    /// Create a new batch result.
    pub fn new(records: Vec<UserInput>, duration: Duration) -> Self {
        Self { records, duration }
    }

    /// Get the total number of records.
    pub fn total(&self) -> usize {
        self.records.len()
    }

    /// Get the number of valid records.
    pub fn valid_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_valid()).count()
    }

    /// Get the number of records with errors.
    pub fn invalid_count(&self) -> usize {
        self.total() - self.valid_count()
    }

    /// Calculate the valid share as a percentage.
    pub fn valid_rate(&self) -> f64 {
        if self.records.is_empty() {
            100.0
        } else {
            (self.valid_count() as f64 / self.records.len() as f64) * 100.0
        }
    }

    /// Calculate processing rate (records per second).
    ///
    /// Returns 0.0 if the duration is too short to provide a meaningful rate.
    pub fn items_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs < f64::EPSILON {
            0.0
        } else {
            self.records.len() as f64 / secs
        }
    }

    /// Per-type totals and invalid entries.
    pub fn summary(&self) -> InputSummary {
        InputSummary::from_records(&self.records)
    }

    /// Take the records.
    pub fn into_records(self) -> Vec<UserInput> {
        self.records
    }
}

/// Batch classifier with progress tracking and timing.
#[derive(Debug, Clone, Default)]
pub struct BatchProcessor {
    processor: InputProcessor,
    config: BatchConfig,
}

impl BatchProcessor {
    /// Create a new batch processor.
    pub fn new(processor: InputProcessor) -> Self {
        Self {
            processor,
            config: BatchConfig::default(),
        }
    }

    /// Create a new batch processor with configuration.
    pub fn with_config(processor: InputProcessor, config: BatchConfig) -> Self {
        Self { processor, config }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Get the underlying classifier.
    pub fn processor(&self) -> &InputProcessor {
        &self.processor
    }

    /// Classify lines through the dispatch cascade.
    pub fn classify<S: AsRef<str> + Sync>(&self, lines: &[S]) -> BatchResult {
        let start = Instant::now();
        let records = self.processor.parse_batch(lines);
        finish(records, start)
    }

    /// Classify lines one at a time, reporting progress.
    ///
    /// # Arguments
    ///
    /// * `lines` - Input lines; blank and `#` lines are skipped
    /// * `progress_fn` - Callback function called with progress updates
    pub fn classify_with_progress<S, F>(&self, lines: &[S], progress_fn: F) -> BatchResult
    where
        S: AsRef<str>,
        F: FnMut(BatchProgress),
    {
        self.run(lines, progress_fn, |line| self.processor.parse_one(line))
    }

    /// Parse every line with one grammar, reporting progress.
    pub fn classify_as_with_progress<S, F>(
        &self,
        format: InputFormat,
        lines: &[S],
        progress_fn: F,
    ) -> BatchResult
    where
        S: AsRef<str>,
        F: FnMut(BatchProgress),
    {
        self.run(lines, progress_fn, |line| self.processor.parse_as(format, line))
    }

    fn run<S, F, P>(&self, lines: &[S], mut progress_fn: F, parse: P) -> BatchResult
    where
        S: AsRef<str>,
        F: FnMut(BatchProgress),
        P: Fn(&str) -> Option<UserInput>,
    {
        let start = Instant::now();
        let lines: Vec<&str> = lines
            .iter()
            .map(|line| line.as_ref().trim())
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();
        let total = lines.len();
        let mut records = Vec::with_capacity(total);
        let mut valid = 0;
        let interval = self.config.progress_interval.max(1);

        for (i, line) in lines.into_iter().enumerate() {
            if let Some(record) = parse(line) {
                if record.is_valid() {
                    valid += 1;
                }
                records.push(record);
            }

            if (i + 1) % interval == 0 || i + 1 == total {
                progress_fn(BatchProgress {
                    total,
                    processed: i + 1,
                    valid,
                    invalid: records.len() - valid,
                    elapsed: start.elapsed(),
                });
            }
        }

        finish(records, start)
    }
}

fn finish(records: Vec<UserInput>, start: Instant) -> BatchResult {
    let result = BatchResult::new(records, start.elapsed());
    tracing::info!(
        records = result.total(),
        invalid = result.invalid_count(),
        elapsed_ms = result.duration.as_millis() as u64,
        "batch classified"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINES: [&str; 6] = [
        "# comment",
        "rs334",
        "",
        "NC_000017.11:g.43045712G>A",
        "not a variant",
        "X 100 A G",
    ];

    #[test]
    fn test_classify() {
        let result = BatchProcessor::default().classify(&LINES);
        assert_eq!(result.total(), 4);
        assert_eq!(result.valid_count(), 3);
        assert_eq!(result.invalid_count(), 1);
        assert!((result.valid_rate() - 75.0).abs() < f64::EPSILON);
        assert_eq!(result.summary().invalid[0].input, "not a variant");
    }

    #[test]
    fn test_progress_callback() {
        let processor = BatchProcessor::with_config(
            InputProcessor::new(),
            BatchConfig::new().progress_interval(2),
        );
        let mut updates = Vec::new();
        let result = processor.classify_with_progress(&LINES, |p| updates.push(p));

        assert_eq!(result.total(), 4);
        let processed: Vec<_> = updates.iter().map(|p| p.processed).collect();
        assert_eq!(processed, [2, 4]);
        let last = updates.last().unwrap();
        assert_eq!((last.valid, last.invalid), (3, 1));
        assert!((last.percent() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_matches_classify() {
        let processor = BatchProcessor::default();
        let sequential = processor.classify_with_progress(&LINES, |_| {});
        assert_eq!(sequential.records, processor.classify(&LINES).records);
    }

    #[test]
    fn test_classify_as() {
        let result = BatchProcessor::default().classify_as_with_progress(
            InputFormat::Dbsnp,
            &LINES,
            |_| {},
        );
        assert_eq!(result.total(), 4);
        assert!(result
            .records
            .iter()
            .all(|r| r.format() == InputFormat::Dbsnp));
        assert_eq!(result.valid_count(), 1);
    }

    #[test]
    fn test_empty_batch() {
        let result = BatchProcessor::default().classify::<&str>(&[]);
        assert_eq!(result.total(), 0);
        assert_eq!(result.valid_rate(), 100.0);
        assert_eq!(BatchConfig::new().progress_interval(0).progress_interval, 1);
    }
}
