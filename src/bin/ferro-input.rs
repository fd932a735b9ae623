// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! ferro-input CLI
//!
//! Command-line interface for classifying free-text variant inputs.

use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use ferro_input::batch::{BatchProcessor, BatchProgress, BatchResult};
use ferro_input::cli::{
    open_input, output_formats, output_record, output_summary, read_lines, LineOptions,
    OutputFormat,
};
use ferro_input::config::InputConfig;
use ferro_input::{InputFormat, InputProcessor};

#[derive(Parser)]
#[command(name = "ferro-input")]
#[command(author, version, about = "Variant input classifier")]
#[command(
    long_about = "Classify free-text variant descriptions (genomic positions, VCF rows,
HGVS, gnomAD, protein changes, dbSNP/ClinVar/COSMIC identifiers).

Examples:
  ferro-input classify 'rs121913529' 'NC_000017.11:g.43045712G>A'
  ferro-input classify -i inputs.txt.gz -f json
  echo '21 25891796 C/T' | ferro-input classify --summary
  ferro-input summary -i inputs.txt
  ferro-input formats"
)]
struct Cli {
    /// Log filter (e.g. warn, info, ferro_input=debug)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Config file (default: .ferro-input.toml, then ~/.config/ferro/input.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify inputs and print one record per line
    Classify {
        /// Inputs to classify (read from --input or stdin when absent)
        inputs: Vec<String>,

        /// Input file, one input per line (use - for stdin, .gz is decompressed)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(short = 'f', long, default_value = "text", value_parser = ["text", "json"])]
        format: String,

        /// Print a batch summary after the records
        #[arg(long)]
        summary: bool,

        /// Parse every input with this notation instead of detecting it
        #[arg(long)]
        format_hint: Option<String>,

        /// Classify batches larger than this in parallel
        #[arg(long)]
        parallel_threshold: Option<usize>,
    },

    /// Print only the batch summary
    Summary {
        /// Input file, one input per line (use - for stdin, .gz is decompressed)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output format
        #[arg(short = 'f', long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// List the supported notations with an example each
    Formats {
        /// Output format
        #[arg(short = 'f', long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Classify {
            inputs,
            input,
            format,
            summary,
            format_hint,
            parallel_threshold,
        } => run_classify(
            &config,
            &inputs,
            input.as_deref(),
            &format,
            summary,
            format_hint.as_deref(),
            parallel_threshold,
        ),
        Commands::Summary { input, format } => run_summary(&config, input.as_deref(), &format),
        Commands::Formats { format } => {
            let mut writer = io::stdout().lock();
            output_formats(&mut writer, format.parse()?)?;
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<InputConfig, Box<dyn std::error::Error>> {
    let config = match path {
        Some(path) => InputConfig::load_from_path(path)?,
        None => InputConfig::load()?.unwrap_or_default(),
    };
    tracing::debug!(?config, "configuration");
    Ok(config)
}

fn run_classify(
    config: &InputConfig,
    inputs: &[String],
    input: Option<&Path>,
    format: &str,
    summary: bool,
    format_hint: Option<&str>,
    parallel_threshold: Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_format: OutputFormat = format.parse()?;
    let format_hint = format_hint
        .map(str::parse::<InputFormat>)
        .transpose()
        .map_err(|e| format!("Invalid --format-hint: {e}"))?;

    let lines = if inputs.is_empty() {
        read_input_lines(config, input)?
    } else {
        inputs.to_vec()
    };

    let processor = BatchProcessor::with_config(
        InputProcessor::with_config(config.processor_config(parallel_threshold)),
        config.batch_config(),
    );
    let result = classify(&processor, &lines, format_hint);

    let mut writer = BufWriter::new(io::stdout().lock());
    for record in &result.records {
        output_record(&mut writer, record, output_format)?;
    }
    if summary {
        output_summary(&mut writer, &result.summary(), output_format)?;
    }
    writer.flush()?;
    Ok(())
}

fn run_summary(
    config: &InputConfig,
    input: Option<&Path>,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_format: OutputFormat = format.parse()?;
    let lines = read_input_lines(config, input)?;

    let processor = BatchProcessor::with_config(
        InputProcessor::with_config(config.processor_config(None)),
        config.batch_config(),
    );
    let result = classify(&processor, &lines, None);

    let mut writer = io::stdout().lock();
    output_summary(&mut writer, &result.summary(), output_format)?;
    Ok(())
}

fn classify(
    processor: &BatchProcessor,
    lines: &[String],
    format_hint: Option<InputFormat>,
) -> BatchResult {
    let report = |progress: BatchProgress| {
        tracing::info!(
            processed = progress.processed,
            total = progress.total,
            invalid = progress.invalid,
            "{:.1}% classified",
            progress.percent()
        );
    };
    match format_hint {
        Some(format) => processor.classify_as_with_progress(format, lines, report),
        // large batches go through the parallel path, which has no progress callback
        None if lines.len() > processor.processor().config().parallel_threshold => {
            processor.classify(lines)
        }
        None => processor.classify_with_progress(lines, report),
    }
}

fn read_input_lines(
    config: &InputConfig,
    input: Option<&Path>,
) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let options = LineOptions::from(&config.input);
    let lines = match input {
        Some(path) if path != Path::new("-") => read_lines(open_input(path)?, &options)?,
        _ => read_lines(io::stdin().lock(), &options)?,
    };
    Ok(lines)
}

fn init_tracing(level: &str) -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter =
        EnvFilter::try_new(level).map_err(|e| format!("Invalid log level '{}': {}", level, e))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    Ok(())
}
