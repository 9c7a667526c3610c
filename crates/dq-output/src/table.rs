//! Fixed-width text table.
//!
//! ```text
//!     0   5
//! №1  p1  -
//! №2  p2  -
//! ```
//!
//! Every column, the header included, is as wide as the longest time or cell
//! text plus two spaces.  The label column is as wide as the longest `№<i>`
//! plus two, and the header row is indented by the same amount.  Widths are
//! counted in characters so `№` lines up with ASCII labels.  Each line keeps
//! its trailing padding.

use std::fmt::Write as _;
use std::io::Write;

use dq_sim::SnapshotHistory;

use crate::{OutputResult, OutputWriter};

/// Render `history` into a single string, one `\n`-terminated line per row.
pub fn render_table(history: &SnapshotHistory) -> String {
    let labels: Vec<String> = history.rows().map(|(desk, _)| desk.label()).collect();
    let times: Vec<String> = history.times().iter().map(ToString::to_string).collect();

    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0) + 2;
    let cell_width = history
        .rows()
        .flat_map(|(_, cells)| cells.iter())
        .chain(times.iter())
        .map(|s| s.chars().count())
        .max()
        .unwrap_or(0)
        + 2;

    let mut out = String::new();
    pad(&mut out, "", label_width);
    for t in &times {
        pad(&mut out, t, cell_width);
    }
    out.push('\n');

    for ((_, cells), label) in history.rows().zip(&labels) {
        pad(&mut out, label, label_width);
        for cell in cells {
            pad(&mut out, cell, cell_width);
        }
        out.push('\n');
    }
    out
}

/// Append `text` left-aligned in a field `width` characters wide.
fn pad(out: &mut String, text: &str, width: usize) {
    // `{:<w$}` pads by char count, matching the width computation above.
    let _ = write!(out, "{text:<width$}");
}

// ── TableWriter ───────────────────────────────────────────────────────────────

/// Writes the table to any [`Write`] sink.
///
/// The whole table is rendered before anything is written, so a history
/// either reaches the sink complete or not at all.
pub struct TableWriter<W: Write> {
    out:      W,
    finished: bool,
}

impl<W: Write> TableWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    /// Recover the sink, e.g. a `Vec<u8>` in tests.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputWriter for TableWriter<W> {
    fn write_history(&mut self, history: &SnapshotHistory) -> OutputResult<()> {
        let table = render_table(history);
        self.out.write_all(table.as_bytes())?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
