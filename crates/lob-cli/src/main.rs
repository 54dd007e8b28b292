//! Order book executable: order lines in, trades and snapshots out.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;

#[derive(Parser)]
#[clap(name = "lob")]
#[clap(about = "Continuous limit order book with iceberg order support")]
struct Cli {
    /// Read order lines from a file instead of standard input
    input: Option<PathBuf>,

    /// Enable debug logging (diagnostics go to stderr)
    #[clap(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries only trades and snapshots; diagnostics go to stderr.
    let level = if cli.debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout().lock();
    match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            lob_cli::run(BufReader::new(file), stdout)
        }
        None => lob_cli::run(io::stdin().lock(), stdout),
    }
}
