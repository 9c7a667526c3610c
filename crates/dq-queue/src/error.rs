//! Error types for dq-queue.

use std::collections::TryReserveError;

use thiserror::Error;

use crate::QueueEntry;

#[derive(Debug, Error)]
pub enum QueueError {
    /// A bounded queue is at capacity.  The refused entry is returned so the
    /// caller decides what happens to it.
    #[error("queue is full (capacity {capacity})")]
    Full {
        capacity: usize,
        rejected: QueueEntry,
    },

    #[error("queue is empty")]
    Empty,

    #[error("failed to allocate queue storage: {0}")]
    Allocation(#[from] TryReserveError),
}

pub type QueueResult<T> = Result<T, QueueError>;
