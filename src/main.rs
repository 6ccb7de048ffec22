use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

use kugiri::reader::{self, DocumentReader, ReaderConfig};
use kugiri::{Pipeline, PipelineConfig};

#[derive(Parser, Debug)]
#[command(name = "kugiri")]
#[command(about = "Layered-annotation sentence boundary detector for Japanese text")]
#[command(version)]
struct Args {
    /// Input file with one document per line; stdin when omitted
    input: Option<PathBuf>,

    /// Separator printed between sentences of one document
    #[arg(long, default_value = "│")]
    separator: String,

    /// Abort on first error
    #[arg(long)]
    fail_fast: bool,

    /// Stats output file path
    #[arg(long, default_value = "run_stats.json")]
    stats_out: PathBuf,

    /// Suppress the stats file
    #[arg(long)]
    no_stats: bool,
}

#[derive(Debug, Serialize)]
struct RunStats {
    documents: u64,
    sentences: u64,
    failed_documents: u64,
    detector_warnings: u64,
    duration_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .json()
        .init();

    let args = Args::parse();
    let start_time = std::time::Instant::now();

    info!("Starting kugiri");
    info!(?args, "Parsed CLI arguments");

    if let Some(ref input) = args.input {
        // Validate early to fail with a clear error before any processing.
        if !input.exists() {
            anyhow::bail!("Input file does not exist: {}", input.display());
        }
        if !input.is_file() {
            anyhow::bail!("Input path is not a file: {}", input.display());
        }
    }

    let pipeline = Pipeline::japanese(PipelineConfig::default())?;

    let lines = match args.input {
        Some(ref input) => {
            let reader = DocumentReader::new(ReaderConfig {
                fail_fast: args.fail_fast,
                ..Default::default()
            });
            let (lines, stats) = reader.read_lines(input).await?;
            if let Some(ref error) = stats.read_error {
                warn!("Input read incomplete: {}", error);
            }
            lines
        }
        None => reader::read_stdin_lines().await?,
    };

    let mut stats = RunStats {
        documents: 0,
        sentences: 0,
        failed_documents: 0,
        detector_warnings: 0,
        duration_ms: 0,
    };

    for line in &lines {
        if line.trim().is_empty() {
            println!();
            continue;
        }

        match pipeline.segment(line) {
            Ok(segmentation) => {
                stats.documents += 1;
                stats.sentences += segmentation.len() as u64;
                stats.detector_warnings += segmentation.warnings().len() as u64;

                for warning in segmentation.warnings() {
                    warn!(
                        detector = %warning.detector,
                        message = %warning.message,
                        "detector contributed nothing"
                    );
                }

                let sentences: Vec<&str> = segmentation.sentences().collect();
                println!("{}", sentences.join(args.separator.as_str()));
            }
            Err(e) => {
                stats.failed_documents += 1;
                if args.fail_fast {
                    return Err(e.into());
                }
                warn!(error = %e, "document failed to segment");
                // Emit the document unsegmented so output stays aligned
                // with input lines.
                println!("{line}");
            }
        }
    }

    stats.duration_ms = start_time.elapsed().as_millis() as u64;
    info!(
        documents = stats.documents,
        sentences = stats.sentences,
        failed = stats.failed_documents,
        "Segmentation complete"
    );

    if !args.no_stats {
        let json = serde_json::to_string_pretty(&stats)?;
        tokio::fs::write(&args.stats_out, json).await?;
        info!("Wrote stats to {}", args.stats_out.display());
    }

    Ok(())
}
