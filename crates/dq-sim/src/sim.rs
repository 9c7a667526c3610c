//! The `Sim` struct and its event loop.

use dq_core::{DeskId, SimConfig, SimRng, Tick};
use dq_queue::QueueEntry;
use tracing::{debug, info, trace, warn};

use crate::{
    Admission, ArrivalSchedule, DeskSelector, DeskSet, PowerOfTwoChoices, SimObserver, SimResult,
    SnapshotHistory,
};

// ── State & bookkeeping ───────────────────────────────────────────────────────

/// Whether the loop has more work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimState {
    /// Arrivals remain or some desk is busy.
    Running,
    /// Nothing left to do.
    Terminated,
}

/// Counters collected over one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SimStats {
    /// Event times that changed some desk (snapshots recorded after tick 0's
    /// initial column, counting overwritten ones).
    pub event_times: u64,
    pub arrivals:    u64,
    pub completions: u64,
    /// Passengers refused under `OverflowPolicy::Drop`.
    pub dropped:     u64,
    /// Held passengers later admitted under `OverflowPolicy::Retry`.
    pub retried:     u64,
}

/// A passenger turned away by a full desk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub time:  Tick,
    pub desk:  DeskId,
    pub entry: QueueEntry,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// Holds all state and drives the event loop described in the crate docs.
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<S: DeskSelector = PowerOfTwoChoices> {
    pub config: SimConfig,

    /// Time of the last processed event (tick 0 before the first).
    pub now: Tick,

    pub desks: DeskSet,

    pub arrivals: ArrivalSchedule,

    pub history: SnapshotHistory,

    /// Source of the two-choice draws.
    pub rng: SimRng,

    pub selector: S,

    pub stats: SimStats,

    pub(crate) rejected: Vec<Rejection>,

    /// Reused buffer of per-desk queue lengths handed to the selector.
    pub(crate) lens: Vec<usize>,
}

impl<S: DeskSelector> Sim<S> {
    // ── Public API ────────────────────────────────────────────────────────

    pub fn state(&self) -> SimState {
        if self.arrivals.is_empty() && self.desks.all_idle() {
            SimState::Terminated
        } else {
            SimState::Running
        }
    }

    /// Run until [`SimState::Terminated`].
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.step(observer)?.is_some() {}

        info!(
            desks       = self.desks.len(),
            final_time  = self.now.0,
            columns     = self.history.len(),
            arrivals    = self.stats.arrivals,
            completions = self.stats.completions,
            dropped     = self.stats.dropped,
            retried     = self.stats.retried,
            "simulation finished"
        );
        observer.on_sim_end(self.now, &self.stats);
        Ok(())
    }

    /// Process the next event time.
    ///
    /// Returns the tick processed, or `None` if the simulation had already
    /// terminated.  Useful for tests and incremental stepping.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<Option<Tick>> {
        if self.state() == SimState::Terminated {
            return Ok(None);
        }
        let Some(now) =
            Tick::earliest(self.arrivals.next_time(), self.desks.earliest_completion())
        else {
            return Ok(None);
        };

        debug!(time = now.0, "processing event time");
        observer.on_event_start(now);
        self.now = now;

        let completed = self.process_completions(now, observer)?;
        let arrived = self.process_arrivals(now, observer)?;

        if completed || arrived {
            self.history.record(now, self.desks.snapshot_row())?;
            self.stats.event_times += 1;
            observer.on_snapshot(now, &self.history);
        }
        Ok(Some(now))
    }

    /// Passengers refused by full desks, in the order they were refused.
    pub fn rejected(&self) -> &[Rejection] {
        &self.rejected
    }

    pub fn desk_count(&self) -> usize {
        self.desks.len()
    }

    /// Consume the simulation, keeping only its snapshot history.
    pub fn into_history(self) -> SnapshotHistory {
        self.history
    }

    // ── Event phases ──────────────────────────────────────────────────────

    /// Serve every desk whose completion is due at `now`.
    fn process_completions<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<bool> {
        let mut changed = false;
        for desk in self.desks.ids() {
            let Some(done) = self.desks.complete_if_due(desk, now)? else {
                continue;
            };
            trace!(time = now.0, %desk, passenger = %done.served.id, "service completed");
            self.stats.completions += 1;
            if let Some(id) = &done.admitted {
                debug!(time = now.0, %desk, passenger = %id, "held passenger admitted");
                self.stats.retried += 1;
            }
            observer.on_completion(now, desk, &done.served);
            changed = true;
        }
        Ok(changed)
    }

    /// Route every passenger arriving at `now`, in input order.
    fn process_arrivals<O: SimObserver>(&mut self, now: Tick, observer: &mut O) -> SimResult<bool> {
        let mut changed = false;
        while let Some(passenger) = self.arrivals.pop_due(now) {
            self.desks.queue_lens_into(&mut self.lens);
            let desk = self.selector.select(&self.lens, &mut self.rng);
            trace!(time = now.0, %desk, passenger = %passenger.id, lens = ?self.lens, "routed");

            self.stats.arrivals += 1;
            observer.on_arrival(now, desk, &passenger);

            match self.desks.admit(desk, QueueEntry::from(passenger), now)? {
                Admission::Queued { .. } | Admission::Held => {}
                Admission::Refused(entry) => {
                    warn!(time = now.0, %desk, passenger = %entry.id, "desk full, passenger dropped");
                    self.stats.dropped += 1;
                    observer.on_rejected(now, desk, &entry);
                    self.rejected.push(Rejection { time: now, desk, entry });
                }
            }
            changed = true;
        }
        Ok(changed)
    }
}
