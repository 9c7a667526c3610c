//! `dq-queue`: the FIFO queue each desk serves from.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`entry`]   | `QueueEntry` (id + service time)                           |
//! | [`backend`] | `PassengerQueue` trait, `build_queue` factory              |
//! | [`ring`]    | `RingQueue`: fixed-capacity ring buffer                   |
//! | [`list`]    | `LinkedQueue`: unbounded singly-linked list               |
//! | [`error`]   | `QueueError`, `QueueResult<T>`                             |
//!
//! Both backends honour the same contract.  The only observable difference
//! is that a full `RingQueue` refuses `enqueue` and hands the entry back in
//! [`QueueError::Full`]; callers pick a backend once via
//! [`dq_core::QueueBackend`] and otherwise only see `dyn PassengerQueue`.

pub mod backend;
pub mod entry;
pub mod error;
pub mod list;
pub mod ring;

#[cfg(test)]
mod tests;

pub use backend::{PassengerQueue, build_queue};
pub use entry::QueueEntry;
pub use error::{QueueError, QueueResult};
pub use list::LinkedQueue;
pub use ring::RingQueue;
