//! CSV output backend.
//!
//! One header record `desk,<t0>,<t1>,...` followed by one record per desk:
//! its `№<i>` label, then the cell recorded at each time.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use dq_sim::SnapshotHistory;

use crate::{OutputResult, OutputWriter};

/// Writes snapshot histories as CSV.
pub struct CsvWriter<W: Write = File> {
    writer:   Writer<W>,
    finished: bool,
}

impl CsvWriter<File> {
    /// Create (or truncate) the CSV file at `path`.
    pub fn new(path: &Path) -> OutputResult<Self> {
        Ok(Self::from_writer(Writer::from_path(path)?))
    }
}

impl<W: Write> CsvWriter<W> {
    pub fn from_writer(writer: Writer<W>) -> Self {
        Self { writer, finished: false }
    }
}

impl<W: Write> OutputWriter for CsvWriter<W> {
    fn write_history(&mut self, history: &SnapshotHistory) -> OutputResult<()> {
        let mut header = Vec::with_capacity(history.len() + 1);
        header.push("desk".to_owned());
        header.extend(history.times().iter().map(ToString::to_string));
        self.writer.write_record(&header)?;

        for (desk, cells) in history.rows() {
            let label = desk.label();
            self.writer
                .write_record(std::iter::once(label.as_str()).chain(cells.iter().map(String::as_str)))?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }
}
