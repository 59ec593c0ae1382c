//! Batch processing of every PDF in the input directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use outliner_core::{find_pdfs, DocumentPipeline, FileOutcome, OutlinerConfig};

use crate::Cli;

/// Result of processing a single file.
struct ProcessResult {
    path: PathBuf,
    outcome: FileOutcome,
    processing_time_ms: u64,
}

pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = match &cli.config {
        Some(path) => OutlinerConfig::from_file(path)?,
        None => OutlinerConfig::default(),
    };

    fs::create_dir_all(&cli.output)?;

    if !cli.input.is_dir() {
        println!(
            "{} Error: {} is not a directory",
            style("✗").red(),
            cli.input.display()
        );
        return Ok(());
    }

    let files = find_pdfs(&cli.input);
    if files.is_empty() {
        println!(
            "{} No PDF files found in {}",
            style("ℹ").blue(),
            cli.input.display()
        );
        return Ok(());
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    // Per-file log lines replace the bar in verbose mode
    let progress = if cli.verbose > 0 {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(files.len() as u64)
    };
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let pipeline = DocumentPipeline::new(&cli.output, &config);
    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();
        let outcome = pipeline.process(&path);
        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        debug!("{} -> {:?} in {}ms", path.display(), outcome, processing_time_ms);
        results.push(ProcessResult {
            path,
            outcome,
            processing_time_ms,
        });

        progress.inc(1);
    }

    progress.finish_and_clear();

    if cli.summary {
        let summary_path = cli.output.join("summary.csv");
        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let failed: Vec<_> = results.iter().filter(|r| !r.outcome.is_success()).collect();
    let successful = results.len() - failed.len();

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!("  - {}: {}", result.path.display(), failure_reason(&result.outcome));
        }
    }

    Ok(())
}

fn failure_reason(outcome: &FileOutcome) -> &str {
    match outcome {
        FileOutcome::Written { .. } => "",
        FileOutcome::NoText => "no text extracted",
        FileOutcome::WriteFailed(message) => message.as_str(),
    }
}

fn write_summary(path: &Path, results: &[ProcessResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "title",
        "headings",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        let time = result.processing_time_ms.to_string();

        match &result.outcome {
            FileOutcome::Written { title, headings, .. } => {
                wtr.write_record([
                    filename,
                    "success",
                    title.as_str(),
                    headings.to_string().as_str(),
                    time.as_str(),
                    "",
                ])?;
            }
            other => {
                wtr.write_record([filename, "error", "", "", time.as_str(), failure_reason(other)])?;
            }
        }
    }

    wtr.flush()?;
    Ok(())
}
