//! deskq: Power-of-Two-Choices desk simulator.
//!
//! Reads the desk count and the passengers, routes each arriving passenger
//! to the shorter of two randomly drawn desks, and prints every desk's queue
//! at every event time:
//!
//! ```text
//! $ echo "2 p1/0/5 p2/0/5" | deskq
//!     0   5
//! №1  p1  -
//! №2  p2  -
//! ```
//!
//! Diagnostics go to stderr.  On any error nothing is printed to stdout, no
//! CSV file is left behind, and the exit code is non-zero.

mod args;
mod config;
mod logging;


use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use dq_output::{CsvWriter, OutputWriter, TableWriter};
use dq_sim::{
    NoopObserver, SimBuilder, SimInput, SnapshotHistory, load_input_path, load_input_reader,
};

use args::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = config::resolve(&args)?;

    // ── Input ─────────────────────────────────────────────────────────────────

    let SimInput { desk_count, passengers } = match &args.input {
        Some(path) => load_input_path(path, config.max_passengers)
            .with_context(|| format!("failed to load input from {}", path.display()))?,
        None => load_input_reader(io::stdin().lock(), config.max_passengers)?,
    };
    info!(desks = desk_count, passengers = passengers.len(), "input loaded");

    // ── Run ───────────────────────────────────────────────────────────────────

    let t0 = Instant::now();
    let mut sim = SimBuilder::new(config, desk_count, passengers).build()?;
    sim.run(&mut NoopObserver)?;
    info!(elapsed_ms = t0.elapsed().as_millis() as u64, "run complete");

    let dropped = sim.rejected().len();
    if dropped > 0 {
        info!(dropped, "passengers dropped by full desks");
    }
    let history = sim.into_history();

    // ── Output ────────────────────────────────────────────────────────────────

    write_outputs(&history, args.csv.as_deref(), io::stdout().lock())
}

/// Write the CSV file (if requested), then the table to `out`.
///
/// If the table cannot be written the CSV file is removed again, so a run
/// either produces both outputs or neither.
fn write_outputs<W: Write>(history: &SnapshotHistory, csv: Option<&Path>, out: W) -> Result<()> {
    if let Some(path) = csv {
        let mut writer = CsvWriter::new(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        writer.write_history(history)?;
        writer.finish()?;
        info!(path = %path.display(), "CSV written");
    }

    let mut table = TableWriter::new(out);
    let written = table.write_history(history).and_then(|()| table.finish());
    if let Err(e) = written {
        if let Some(path) = csv {
            if let Err(rm) = fs::remove_file(path) {
                warn!(path = %path.display(), error = %rm, "could not remove CSV after failed table write");
            }
        }
        return Err(e).context("failed to write the table");
    }
    Ok(())
}
