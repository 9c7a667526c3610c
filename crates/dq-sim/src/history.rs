//! `SnapshotHistory`: the time-indexed record of desk contents.
//!
//! The history is rectangular: `times().len()` entries, and exactly that
//! many cells per desk, cell `k` of every desk belonging to `times()[k]`.
//! It starts with one all-empty column at tick 0.
//!
//! Recording twice for the same tick overwrites the last column, so the
//! time axis is strictly increasing and each column shows the state at the
//! end of its instant.  This happens when events at tick 0 replace the
//! initial column, and when a zero-length service completes in the same
//! instant it started.

use dq_core::{DeskId, Tick};

use crate::SimResult;

/// Cell text for a desk with nobody queued.
pub const EMPTY_CELL: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotHistory {
    times: Vec<Tick>,
    /// `cells[desk][k]` is desk's content at `times[k]`.
    cells: Vec<Vec<String>>,
}

impl SnapshotHistory {
    /// A history for `desk_count` desks holding the initial all-empty
    /// column at tick 0.
    pub fn new(desk_count: usize) -> SimResult<Self> {
        let mut cells = Vec::new();
        cells.try_reserve_exact(desk_count)?;
        cells.extend((0..desk_count).map(|_| vec![EMPTY_CELL.to_owned()]));
        Ok(Self { times: vec![Tick::ZERO], cells })
    }

    /// Record the desk contents `row` (one cell per desk) for `now`.
    ///
    /// `now` must not precede the last recorded tick.
    pub fn record(&mut self, now: Tick, row: Vec<String>) -> SimResult<()> {
        debug_assert_eq!(row.len(), self.cells.len(), "snapshot row width");
        debug_assert!(self.times.last().is_none_or(|&last| last <= now), "time went backwards");

        if self.times.last() == Some(&now) {
            for (desk, cell) in self.cells.iter_mut().zip(row) {
                if let Some(last) = desk.last_mut() {
                    *last = cell;
                }
            }
            return Ok(());
        }

        self.times.try_reserve(1)?;
        for desk in &mut self.cells {
            desk.try_reserve(1)?;
        }
        self.times.push(now);
        for (desk, cell) in self.cells.iter_mut().zip(row) {
            desk.push(cell);
        }
        Ok(())
    }

    /// Recorded ticks, strictly increasing.
    pub fn times(&self) -> &[Tick] {
        &self.times
    }

    /// Number of recorded columns.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn desk_count(&self) -> usize {
        self.cells.len()
    }

    /// Every cell recorded for `desk`, aligned with [`times`][Self::times].
    pub fn desk(&self, desk: DeskId) -> &[String] {
        &self.cells[desk.index()]
    }

    pub fn cell(&self, desk: DeskId, column: usize) -> &str {
        &self.cells[desk.index()][column]
    }

    /// `(desk, cells)` pairs in desk order.
    pub fn rows(&self) -> impl Iterator<Item = (DeskId, &[String])> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cells)| (DeskId(i as u32), cells.as_slice()))
    }
}
