//! CLI application for PDF outline extraction.

mod batch;

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Extract titles and H1-H4 heading outlines from PDFs into JSON files
#[derive(Parser)]
#[command(name = "outliner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input directory containing PDFs
    #[arg(long, value_name = "DIR")]
    input: PathBuf,

    /// Output directory for JSON files (created if absent)
    #[arg(long, value_name = "DIR")]
    output: PathBuf,

    /// Enable verbose output (repeat for debug and trace logs)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also write summary.csv into the output directory
    #[arg(long)]
    summary: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    batch::run(&cli)
}
