//! Desk selection for arriving passengers.
//!
//! [`DeskSelector`] is the routing extension point; the simulator ships
//! [`PowerOfTwoChoices`].  Selectors see only queue lengths, never the
//! queues themselves.

use std::cmp::Ordering;

use dq_core::{DeskId, SimRng};

/// Pick the desk an arriving passenger joins.
///
/// `queue_lens[i]` is the current queue length of desk `i`; there are
/// always at least two desks.
pub trait DeskSelector {
    fn select(&mut self, queue_lens: &[usize], rng: &mut SimRng) -> DeskId;
}

/// Sample two distinct desks uniformly at random and join the shorter queue.
///
/// Equal lengths go to the lower desk index, so the choice depends only on
/// the pair drawn and not on the order it was drawn in.
#[derive(Debug, Default, Clone, Copy)]
pub struct PowerOfTwoChoices;

impl DeskSelector for PowerOfTwoChoices {
    fn select(&mut self, queue_lens: &[usize], rng: &mut SimRng) -> DeskId {
        let (a, b) = rng.pick_two_distinct(queue_lens.len());
        choose_shorter(a, b, queue_lens)
    }
}

/// The desk of `a` and `b` with the shorter queue; lower index on a tie.
pub fn choose_shorter(a: DeskId, b: DeskId, queue_lens: &[usize]) -> DeskId {
    match queue_lens[a.index()].cmp(&queue_lens[b.index()]) {
        Ordering::Less => a,
        Ordering::Greater => b,
        Ordering::Equal => a.min(b),
    }
}
