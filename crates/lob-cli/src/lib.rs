//! lob-cli
//!
//! Per-line dispatch around the matching engine: read order lines,
//! apply them to the book, emit trades and a snapshot after each one.

use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::warn;

use lob_core::OrderBook;
use lob_protocol::{format_trade, parse_order_line, render_book};

/// Drive the engine over a line-based reader, writing trades and book
/// snapshots to `output`.
///
/// All trade lines for an input line are written before its snapshot,
/// and the snapshot reflects exactly the lines processed so far.
/// Unrecognized lines are skipped silently, malformed ones with a
/// warning on the diagnostic channel; only I/O failures abort the run.
pub fn run(input: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
    let mut book = OrderBook::new();

    for line in input.lines() {
        let line = line.context("failed to read input line")?;

        let (side, order) = match parse_order_line(&line) {
            Ok(Some(parsed)) => parsed,
            Ok(None) => continue,
            Err(err) => {
                warn!("skipping malformed order line {:?}: {}", line, err);
                continue;
            }
        };

        for trade in book.submit(side, order) {
            writeln!(output, "{}", format_trade(&trade)).context("failed to write trade line")?;
        }
        output
            .write_all(render_book(&book).as_bytes())
            .context("failed to write book snapshot")?;
        output.flush().context("failed to flush output")?;
    }

    Ok(())
}
