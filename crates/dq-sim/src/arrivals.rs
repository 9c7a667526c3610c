//! `ArrivalSchedule`: passengers not yet routed, ordered by arrival time.

use std::collections::VecDeque;

use dq_core::{Passenger, Tick};

/// Pending arrivals, earliest first.
///
/// Built with a stable sort, so passengers sharing an arrival time keep
/// their input order.  That order decides who is routed first within one
/// instant.
#[derive(Debug, Default)]
pub struct ArrivalSchedule {
    pending: VecDeque<Passenger>,
}

impl ArrivalSchedule {
    pub fn new(mut passengers: Vec<Passenger>) -> Self {
        passengers.sort_by_key(|p| p.arrival_time);
        Self { pending: passengers.into() }
    }

    /// Arrival time of the next passenger, or `None` once all have arrived.
    pub fn next_time(&self) -> Option<Tick> {
        self.pending.front().map(|p| p.arrival_time)
    }

    /// Pop the next passenger if it arrives exactly at `now`.
    ///
    /// Call in a loop to drain every arrival for one instant.
    pub fn pop_due(&mut self, now: Tick) -> Option<Passenger> {
        if self.next_time() == Some(now) {
            self.pending.pop_front()
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
