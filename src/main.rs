mod diagnostics;
mod driver;
mod error;
mod input;
mod output;
mod parser;
mod record;
mod settings;

use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use diagnostics::FileSink;
use settings::Settings;

#[derive(Parser)]
#[command(name = "restaurant_parser", about = "Normalize scraped restaurant listings")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a scraper export into normalized restaurant records
    Parse {
        /// Scraper export (JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Where to write the parsed records
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Key of the item list in the export
        #[arg(short = 'k', long)]
        key: Option<String>,
        /// Append-only log for skipped items and warnings
        #[arg(long)]
        error_log: Option<PathBuf>,
    },
    /// Parse a single raw listing block and print the record
    Inspect {
        /// File with the raw block (default: stdin)
        file: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            input,
            output,
            key,
            error_log,
        } => {
            let mut settings = Settings::load()?;
            if let Some(p) = input {
                settings.input = p;
            }
            if let Some(p) = output {
                settings.output = p;
            }
            if let Some(k) = key {
                settings.collection_key = k;
            }
            if let Some(p) = error_log {
                settings.error_log = p;
            }
            run_parse(&settings)
        }
        Commands::Inspect { file } => run_inspect(file),
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn run_parse(settings: &Settings) -> anyhow::Result<()> {
    debug!(?settings, "Loaded settings");
    println!("Loading {}", settings.input.display());

    let doc = input::load_document(&settings.input)?;
    let items = input::collection(&doc, &settings.collection_key)?;
    println!("Found {} restaurant entries to process.", items.len());

    let mut sink = FileSink::open(&settings.error_log)?;
    let pb = ProgressBar::new(items.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")?
            .progress_chars("#>-"),
    );

    let outcome = driver::parse_batch(items, &mut sink, settings.excerpt_chars, &pb);
    pb.finish_and_clear();
    sink.flush()?;
    info!(
        parsed = outcome.parsed(),
        skipped = outcome.skipped,
        diagnostics = sink.written(),
        "Batch finished"
    );

    let rows = output::prune_empty_fields(&outcome.records)?;
    output::write_records(&settings.output, &rows)?;

    println!(
        "Parsed {} restaurants, skipped {}.",
        outcome.parsed(),
        outcome.skipped
    );
    if outcome.skipped > 0 {
        println!(
            "Details on skipped items: {}",
            settings.error_log.display()
        );
    }
    println!("Saved to {}", settings.output.display());
    Ok(())
}

fn run_inspect(file: Option<PathBuf>) -> anyhow::Result<()> {
    let text = match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    let parsed = parser::parse_item(&text, None)?;
    for w in &parsed.warnings {
        eprintln!("warning: {}", w);
    }
    println!("{}", serde_json::to_string_pretty(&parsed.record)?);
    Ok(())
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
