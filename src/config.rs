//! Configuration file support for ferro-input.
//!
//! This module provides loading of `.ferro-input.toml` configuration files
//! which tune batch processing and input line handling.
//!
//! # Example Configuration
//!
//! ```toml
//! [processing]
//! parallel_threshold = 5000
//! progress_interval = 1000
//!
//! [input]
//! strip_inline_comments = true
//! strip_bom = true
//! ```
//!
//! # Config File Locations
//!
//! Configuration is searched in this order (first found wins):
//! 1. `.ferro-input.toml` in current directory
//! 2. `~/.config/ferro/input.toml`
//!
//! CLI flags take precedence over config file settings.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::batch::BatchConfig;
use crate::error::InputError;
use crate::processor::{ProcessorConfig, DEFAULT_PARALLEL_THRESHOLD};

const CWD_CONFIG: &str = ".ferro-input.toml";

/// Parsed configuration from a `.ferro-input.toml` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Batch processing section.
    pub processing: ProcessingConfig,
    /// Input line handling section.
    pub input: LineConfig,
}

/// `[processing]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Batches larger than this are classified in parallel.
    pub parallel_threshold: usize,
    /// Progress is logged every N records.
    pub progress_interval: usize,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            progress_interval: BatchConfig::default().progress_interval,
        }
    }
}

/// `[input]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LineConfig {
    /// Drop `# ...` text at the end of a line.
    pub strip_inline_comments: bool,
    /// Drop a UTF-8 byte order mark from the first line.
    pub strip_bom: bool,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            strip_inline_comments: true,
            strip_bom: true,
        }
    }
}

impl InputConfig {
    /// Load configuration from the default locations.
    ///
    /// Returns `Ok(None)` when no config file exists. A file that exists but
    /// cannot be read or parsed is an error.
    pub fn load() -> Result<Option<Self>, InputError> {
        for path in Self::search_paths() {
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading config");
                return Self::load_from_path(&path).map(Some);
            }
        }
        Ok(None)
    }

    /// Candidate config files, in search order.
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CWD_CONFIG)];
        if let Some(home) = dirs_home() {
            paths.push(home.join(".config").join("ferro").join("input.toml"));
        }
        paths
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self, InputError> {
        let config_error = |msg: String| InputError::Config {
            path: path.display().to_string(),
            msg,
        };
        let content = fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
        toml::from_str(&content).map_err(|e| config_error(e.to_string()))
    }

    /// Parse configuration from TOML content.
    pub fn parse(content: &str) -> Result<Self, InputError> {
        Ok(toml::from_str(content)?)
    }

    /// Classifier settings, with an optional CLI override.
    pub fn processor_config(&self, parallel_threshold: Option<usize>) -> ProcessorConfig {
        ProcessorConfig::new().with_parallel_threshold(
            parallel_threshold.unwrap_or(self.processing.parallel_threshold),
        )
    }

    /// Batch settings.
    pub fn batch_config(&self) -> BatchConfig {
        BatchConfig::new().progress_interval(self.processing.progress_interval)
    }
}

/// Get the user's home directory.
fn dirs_home() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}
