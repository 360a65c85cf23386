//! Sweet-length nine-grid splitter.
//!
//! Reads free text, cuts it into eight bounded chunks around a generated
//! center cell, and prints the result.
//!
//! # Usage
//!
//! ```bash
//! # Markdown section on stdout, status report on stderr
//! cargo run -p mandala-cli -- article.txt
//!
//! # Read from stdin, only print the report
//! cat article.txt | cargo run -p mandala-cli -- --format report --quiet
//!
//! # Load settings and write the export to a file
//! cargo run -p mandala-cli -- article.txt --config ~/mandala.json -o grid.md
//!
//! # JSON Schema of the exported document
//! cargo run -p mandala-cli -- --schema
//! ```
//!
//! Set `RUST_LOG=mandala_segment=debug` to see merge and padding decisions.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use mandala_cli::{OutputFormat, Overrides, apply_overrides, load_config};
use mandala_segment::{GridDocument, Report, SegmentError, segment_with};
use tracing_subscriber::EnvFilter;

/// Cut text into a 3x3 grid of sweet-length chunks.
#[derive(Parser, Debug)]
#[command(name = "mandala", version, about)]
struct Args {
    /// Text file to split. Reads stdin when absent or `-`.
    input: Option<PathBuf>,

    /// Output format (markdown, report, json, cells).
    #[arg(short, long, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,

    /// Path to a JSON config file. Defaults to the per-user config if present.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Heading of the Markdown export.
    #[arg(long)]
    heading: Option<String>,

    /// Lower bound of the sweet spot, in visible characters.
    #[arg(long)]
    sweet_min: Option<usize>,

    /// Upper bound of the sweet spot, in visible characters.
    #[arg(long)]
    sweet_max: Option<usize>,

    /// Lower hard limit, in visible characters.
    #[arg(long)]
    hard_min: Option<usize>,

    /// Upper hard limit and splitting ceiling, in visible characters.
    #[arg(long)]
    hard_max: Option<usize>,

    /// Maximum characters of a cell title before it is cut.
    #[arg(long)]
    title_width: Option<usize>,

    /// Write the output to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the JSON Schema of the exported document and exit.
    #[arg(long)]
    schema: bool,

    /// Quiet mode. Do not echo the status report to stderr.
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            heading: self.heading.clone(),
            sweet_min: self.sweet_min,
            sweet_max: self.sweet_max,
            hard_min: self.hard_min,
            hard_max: self.hard_max,
            title_width: self.title_width,
        }
    }
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    run(&Args::parse())
}

/// Runs one invocation. Rejected input leaves `--output` untouched.
fn run(args: &Args) -> Result<ExitCode> {
    if args.schema {
        let schema = schemars::schema_for!(GridDocument);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(args.config.as_deref())?;
    let config = apply_overrides(config, &args.overrides())?;
    let raw = read_input(args.input.as_deref())?;

    let doc = match segment_with(&raw, &config) {
        Ok(doc) => doc,
        Err(err @ SegmentError::EmptyInput) => {
            eprintln!("{}", Report::rejected(&err));
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => return Err(err.into()),
    };
    tracing::info!(
        candidates = doc.stats.candidate_count,
        visible_length = doc.stats.input_visible_length,
        "segmented input"
    );

    let rendered = args
        .format
        .render(&doc)
        .context("failed to render document")?;

    match &args.output {
        Some(path) => {
            fs::write(path, rendered.as_bytes())
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => println!("{rendered}"),
    }

    if !args.quiet && (args.format != OutputFormat::Report || args.output.is_some()) {
        eprintln!("{}", doc.report());
    }

    Ok(ExitCode::SUCCESS)
}

/// Read the whole input from a file, or stdin for `None` and `-`.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}
