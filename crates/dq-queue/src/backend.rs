//! The `PassengerQueue` trait and the backend factory.

use std::fmt::Debug;

use dq_core::QueueBackend;

use crate::{LinkedQueue, QueueEntry, QueueResult, RingQueue};

/// FIFO queue of passengers waiting at one desk.
///
/// Implementations must keep entries in insertion order, remove only from
/// the front, and answer `len`/`is_empty` in O(1).
pub trait PassengerQueue: Debug + Send {
    /// Append `entry` at the tail.
    ///
    /// Bounded queues return [`QueueError::Full`][crate::QueueError::Full]
    /// carrying the refused entry and leave their state untouched.
    fn enqueue(&mut self, entry: QueueEntry) -> QueueResult<()>;

    /// Peek at the head without removing it.
    fn front(&self) -> Option<&QueueEntry>;

    /// Remove and return the head, or `QueueError::Empty`.
    fn dequeue(&mut self) -> QueueResult<QueueEntry>;

    fn len(&self) -> usize;

    /// `Some(capacity)` for bounded queues, `None` for unbounded ones.
    fn capacity(&self) -> Option<usize>;

    /// Identifiers from head to tail, in the order they would be dequeued.
    fn ids(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_full(&self) -> bool {
        self.capacity().is_some_and(|cap| self.len() >= cap)
    }

    fn front_id(&self) -> Option<&str> {
        self.front().map(|e| e.id.as_str())
    }

    fn front_service_time(&self) -> Option<u64> {
        self.front().map(|e| e.service_time)
    }

    /// Owned copy of [`ids`][Self::ids].
    fn dump_ids(&self) -> Vec<String> {
        self.ids().map(str::to_owned).collect()
    }
}

/// Create an empty queue of the requested kind.
///
/// `capacity` sizes the ring buffer; the linked list accepts and ignores it.
pub fn build_queue(backend: QueueBackend, capacity: usize) -> QueueResult<Box<dyn PassengerQueue>> {
    Ok(match backend {
        QueueBackend::Bounded => Box::new(RingQueue::with_capacity(capacity)?),
        QueueBackend::Unbounded => Box::new(LinkedQueue::new()),
    })
}
