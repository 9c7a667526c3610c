//! `DeskSet`: the N service desks and their completion timers.
//!
//! Each desk owns one [`PassengerQueue`] (ring buffer or linked list, picked
//! by `SimConfig::backend`) and the time its current head finishes service.
//! `next_completion == None` means the desk is idle.

use std::collections::VecDeque;

use dq_core::{DeskId, OverflowPolicy, SimConfig, Tick};
use dq_queue::{PassengerQueue, QueueEntry, QueueError, build_queue};
use tracing::debug;

use crate::{EMPTY_CELL, SimError, SimResult};

// ── Desk ──────────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct Desk {
    queue:           Box<dyn PassengerQueue>,
    next_completion: Option<Tick>,
    /// Passengers refused by a full queue under `OverflowPolicy::Retry`,
    /// waiting for a slot.  Always empty under `Drop`.
    holding:         VecDeque<QueueEntry>,
}

impl Desk {
    pub fn queue(&self) -> &dyn PassengerQueue {
        self.queue.as_ref()
    }

    pub fn next_completion(&self) -> Option<Tick> {
        self.next_completion
    }

    pub fn held(&self) -> usize {
        self.holding.len()
    }

    /// When the current head finishes if its service starts at `now`.
    fn head_completion(&self, id: DeskId, now: Tick) -> SimResult<Option<Tick>> {
        self.queue
            .front_service_time()
            .map(|s| now.checked_offset(s).ok_or(SimError::TimeOverflow { desk: id, now }))
            .transpose()
    }

    /// Queue contents for one snapshot cell: ids joined by spaces, or `-`.
    pub fn render(&self) -> String {
        if self.queue.is_empty() {
            return EMPTY_CELL.to_owned();
        }
        self.queue.ids().collect::<Vec<_>>().join(" ")
    }
}

// ── Outcomes ──────────────────────────────────────────────────────────────────

/// What happened to a passenger routed to a desk.
#[derive(Debug, PartialEq, Eq)]
pub enum Admission {
    /// Appended to the queue.  `started` is true if the desk was idle and
    /// began serving this passenger at once.
    Queued { started: bool },
    /// The queue was full; the passenger waits in the desk's holding line.
    Held,
    /// The queue was full and the overflow policy is `Drop`.
    Refused(QueueEntry),
}

/// A service completion at one desk.
#[derive(Debug, PartialEq, Eq)]
pub struct Completion {
    pub served:   QueueEntry,
    /// Id of a held passenger moved into the freed slot, if any.
    pub admitted: Option<String>,
}

// ── DeskSet ───────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct DeskSet {
    desks:    Vec<Desk>,
    overflow: OverflowPolicy,
}

impl DeskSet {
    /// Create `count` idle desks, each with a queue built from `config`.
    pub fn new(count: usize, config: &SimConfig) -> SimResult<Self> {
        let mut desks = Vec::new();
        desks.try_reserve_exact(count)?;
        for _ in 0..count {
            desks.push(Desk {
                queue:           build_queue(config.backend, config.capacity)?,
                next_completion: None,
                holding:         VecDeque::new(),
            });
        }
        Ok(Self { desks, overflow: config.overflow })
    }

    pub fn len(&self) -> usize {
        self.desks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.desks.is_empty()
    }

    pub fn desk(&self, id: DeskId) -> &Desk {
        &self.desks[id.index()]
    }

    /// All desk ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = DeskId> + use<> {
        (0..self.desks.len() as u32).map(DeskId)
    }

    pub fn is_idle(&self, id: DeskId) -> bool {
        self.desks[id.index()].queue.is_empty()
    }

    /// True when no desk has anyone queued or held.
    pub fn all_idle(&self) -> bool {
        self.desks
            .iter()
            .all(|d| d.queue.is_empty() && d.holding.is_empty())
    }

    /// Earliest pending completion across all desks, `None` if all are idle.
    pub fn earliest_completion(&self) -> Option<Tick> {
        self.desks.iter().filter_map(|d| d.next_completion).min()
    }

    /// Overwrite `out` with each desk's current queue length.
    pub fn queue_lens_into(&self, out: &mut Vec<usize>) {
        out.clear();
        out.extend(self.desks.iter().map(|d| d.queue.len()));
    }

    /// Start the completion timer if the desk's queue holds exactly one
    /// passenger, i.e. the desk was idle before the last enqueue.
    ///
    /// Returns whether the timer was started.  Fails with
    /// [`SimError::TimeOverflow`] if the completion tick does not fit.
    pub fn start_service_if_idle(&mut self, id: DeskId, now: Tick) -> SimResult<bool> {
        let desk = &mut self.desks[id.index()];
        if desk.queue.len() != 1 {
            return Ok(false);
        }
        desk.next_completion = desk.head_completion(id, now)?;
        Ok(desk.next_completion.is_some())
    }

    /// Serve the head of desk `id` if its completion time is exactly `now`.
    ///
    /// Under `OverflowPolicy::Retry` the freed slot goes to the first held
    /// passenger.  The next head, if any, starts service at `now`.
    pub fn complete_if_due(&mut self, id: DeskId, now: Tick) -> SimResult<Option<Completion>> {
        let desk = &mut self.desks[id.index()];
        if desk.next_completion != Some(now) {
            return Ok(None);
        }
        let served = desk.queue.dequeue()?;

        let mut admitted = None;
        if let Some(waiting) = desk.holding.pop_front() {
            let waiting_id = waiting.id.clone();
            match desk.queue.enqueue(waiting) {
                Ok(()) => admitted = Some(waiting_id),
                Err(QueueError::Full { rejected, .. }) => desk.holding.push_front(rejected),
                Err(e) => return Err(e.into()),
            }
        }

        desk.next_completion = desk.head_completion(id, now)?;
        Ok(Some(Completion { served, admitted }))
    }

    /// Enqueue `entry` at desk `id`, starting service if the desk was idle.
    ///
    /// A full bounded queue is not an error: the outcome depends on the
    /// overflow policy and is reported through [`Admission`].
    pub fn admit(&mut self, id: DeskId, entry: QueueEntry, now: Tick) -> SimResult<Admission> {
        match self.desks[id.index()].queue.enqueue(entry) {
            Ok(()) => {
                let started = self.start_service_if_idle(id, now)?;
                Ok(Admission::Queued { started })
            }
            Err(QueueError::Full { rejected, .. }) => match self.overflow {
                OverflowPolicy::Drop => Ok(Admission::Refused(rejected)),
                OverflowPolicy::Retry => {
                    debug!(passenger = %rejected.id, desk = %id, "desk full, passenger held for retry");
                    self.desks[id.index()].holding.push_back(rejected);
                    Ok(Admission::Held)
                }
            },
            Err(e) => Err(e.into()),
        }
    }

    /// One snapshot row: every desk's rendered queue, in desk order.
    pub fn snapshot_row(&self) -> Vec<String> {
        self.desks.iter().map(Desk::render).collect()
    }
}
