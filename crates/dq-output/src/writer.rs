//! The `OutputWriter` trait implemented by all renderers.

use dq_sim::SnapshotHistory;

use crate::OutputResult;

/// Trait implemented by the table and CSV writers.
pub trait OutputWriter {
    /// Render one complete history.
    fn write_history(&mut self, history: &SnapshotHistory) -> OutputResult<()>;

    /// Flush the underlying sink.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
