//! Batch classification of variant lines.
//!
//! This module wraps [`InputProcessor`](crate::InputProcessor) with progress
//! reporting, timing and per-batch statistics.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use ferro_input::batch::BatchProcessor;
//! use ferro_input::InputProcessor;
//!
//! let processor = BatchProcessor::new(InputProcessor::new());
//!
//! let lines = vec!["rs334", "NC_000017.11:g.43045712G>A", "# comment"];
//!
//! let result = processor.classify(&lines);
//! assert_eq!(result.total(), 2);
//! println!("{}/{} valid", result.valid_count(), result.total());
//! ```
//!
//! ## With Progress Callback
//!
//! ```
//! use ferro_input::batch::{BatchConfig, BatchProcessor};
//! use ferro_input::InputProcessor;
//!
//! let processor = BatchProcessor::with_config(
//!     InputProcessor::new(),
//!     BatchConfig::new().progress_interval(100),
//! );
//!
//! let lines = vec!["rs334"];
//!
//! let result = processor.classify_with_progress(&lines, |progress| {
//!     println!("Progress: {:.1}%", progress.percent());
//! });
//! ```

mod processor;

pub use processor::{BatchConfig, BatchProcessor, BatchProgress, BatchResult};
