// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! ferro-input: variant input classifier
//!
//! Part of the ferro bioinformatics toolkit.
//!
//! Free-text variant descriptions (genomic positions, VCF rows, HGVS, gnomAD
//! identifiers, protein changes, dbSNP/ClinVar/COSMIC identifiers) are
//! classified into typed records that carry their diagnostics instead of failing.
//!
//! # Example
//!
//! ```
//! use ferro_input::{summarize, Chromosome, InputProcessor, InputType};
//!
//! let processor = InputProcessor::new();
//!
//! // Classify a single line
//! let record = processor.parse_one("21 25891796 25891797 C/T . . .").unwrap();
//! assert_eq!(record.input_type(), InputType::Genomic);
//! assert!(record.is_valid());
//! assert_eq!(
//!     record.derive_genomic_coordinates(),
//!     vec![(Chromosome::Autosome(21), 25891796)]
//! );
//!
//! // Classify a batch and summarize it
//! let records = processor.parse_batch(&["rs334", "NM_000088.3:c.589G>T", "junk"]);
//! println!("{}", summarize(&records));
//! ```

pub mod allele;
pub mod amino_acid;
pub mod batch;
pub mod chromosome;
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod input;
pub mod message;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod processor;
pub mod summary;

// Re-export commonly used types
pub use chromosome::Chromosome;
pub use error::{ErrorCode, InputError, NoticeCode};
pub use input::{InputData, InputFormat, InputType, UserInput};
pub use message::{Message, MessageKind};
pub use processor::{InputProcessor, ProcessorConfig};
pub use summary::{summarize, InputSummary};

/// Result type alias for ferro-input operations
pub type Result<T> = std::result::Result<T, InputError>;
