//! Error types for dq-sim.

use std::collections::TryReserveError;

use dq_core::{CoreError, DeskId, Tick};
use dq_queue::QueueError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("at least 2 desks are required, but N={0}")]
    TooFewDesks(i64),

    #[error("{got} passengers exceed the configured maximum of {max}")]
    TooManyPassengers {
        got: usize,
        max: usize,
    },

    /// A service would end past the last representable tick.
    #[error("completion time overflows at {desk} (service starting at tick {now})")]
    TimeOverflow {
        desk: DeskId,
        now:  Tick,
    },

    #[error("input error: {0}")]
    Parse(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("queue error: {0}")]
    Queue(#[from] QueueError),

    #[error("failed to allocate snapshot storage: {0}")]
    Allocation(#[from] TryReserveError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
