//! Simulation observer trait for progress reporting and data collection.

use dq_core::{DeskId, Passenger, Tick};
use dq_queue::QueueEntry;

use crate::{SimStats, SnapshotHistory};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] as the event loop
/// advances.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: drop counter
///
/// ```rust,ignore
/// struct DropCounter(usize);
///
/// impl SimObserver for DropCounter {
///     fn on_rejected(&mut self, _now: Tick, _desk: DeskId, _entry: &QueueEntry) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called when the loop moves to a new event time, before any processing.
    fn on_event_start(&mut self, _now: Tick) {}

    /// Called after `desk` finished serving `served`.
    fn on_completion(&mut self, _now: Tick, _desk: DeskId, _served: &QueueEntry) {}

    /// Called when `passenger` has been routed to `desk`, before it is
    /// enqueued there.
    fn on_arrival(&mut self, _now: Tick, _desk: DeskId, _passenger: &Passenger) {}

    /// Called when a full desk refused a passenger under the `Drop` policy.
    fn on_rejected(&mut self, _now: Tick, _desk: DeskId, _entry: &QueueEntry) {}

    /// Called after a snapshot column for `now` was recorded.
    fn on_snapshot(&mut self, _now: Tick, _history: &SnapshotHistory) {}

    /// Called once after the loop terminates.
    fn on_sim_end(&mut self, _final_time: Tick, _stats: &SimStats) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
