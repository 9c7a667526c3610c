//! The passenger record handed from the input loader to the simulation.

use crate::{CoreError, CoreResult, Tick};

/// Longest identifier kept, in characters.  The loader truncates longer ids.
pub const MAX_ID_LEN: usize = 31;

/// One arriving passenger.
///
/// Immutable once built.  The arrival schedule owns it until it is routed to
/// a desk; from then on only `id` and `service_time` live on, inside the
/// desk's queue entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passenger {
    pub id:           String,
    pub arrival_time: Tick,
    /// Time spent at the head of a desk's queue before leaving.
    pub service_time: u64,
}

impl Passenger {
    pub fn new(id: impl Into<String>, arrival_time: u64, service_time: u64) -> Self {
        Self {
            id: id.into(),
            arrival_time: Tick(arrival_time),
            service_time,
        }
    }

    /// Reject empty ids and ids longer than [`MAX_ID_LEN`] characters.
    pub fn validate(&self) -> CoreResult<()> {
        if self.id.is_empty() {
            return Err(CoreError::Passenger("empty identifier".into()));
        }
        let len = self.id.chars().count();
        if len > MAX_ID_LEN {
            return Err(CoreError::Passenger(format!(
                "identifier {:?} is {len} characters long (max {MAX_ID_LEN})",
                self.id
            )));
        }
        Ok(())
    }
}

/// Truncate `id` to at most [`MAX_ID_LEN`] characters, respecting char
/// boundaries.
pub fn truncate_id(id: &str) -> &str {
    match id.char_indices().nth(MAX_ID_LEN) {
        Some((byte_idx, _)) => &id[..byte_idx],
        None => id,
    }
}
