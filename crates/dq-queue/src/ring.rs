//! `RingQueue`: fixed-capacity circular buffer.
//!
//! Storage is allocated once, at construction, with `try_reserve_exact` so a
//! failed allocation surfaces as [`QueueError::Allocation`] instead of an
//! abort.  Slots hold `Option<QueueEntry>`; the live region is
//! `head .. head + len` modulo `capacity`.

use crate::{PassengerQueue, QueueEntry, QueueError, QueueResult};

#[derive(Debug)]
pub struct RingQueue {
    slots: Vec<Option<QueueEntry>>,
    head:  usize,
    len:   usize,
}

impl RingQueue {
    pub fn with_capacity(capacity: usize) -> QueueResult<Self> {
        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity)?;
        slots.resize_with(capacity, || None);
        Ok(Self { slots, head: 0, len: 0 })
    }

    #[inline]
    fn slot(&self, offset: usize) -> usize {
        (self.head + offset) % self.slots.len()
    }
}

impl PassengerQueue for RingQueue {
    fn enqueue(&mut self, entry: QueueEntry) -> QueueResult<()> {
        let capacity = self.slots.len();
        if self.len == capacity {
            return Err(QueueError::Full { capacity, rejected: entry });
        }
        let tail = self.slot(self.len);
        self.slots[tail] = Some(entry);
        self.len += 1;
        Ok(())
    }

    fn front(&self) -> Option<&QueueEntry> {
        if self.len == 0 {
            return None;
        }
        self.slots[self.head].as_ref()
    }

    fn dequeue(&mut self) -> QueueResult<QueueEntry> {
        if self.len == 0 {
            return Err(QueueError::Empty);
        }
        let entry = self.slots[self.head].take().ok_or(QueueError::Empty)?;
        self.head = self.slot(1);
        self.len -= 1;
        Ok(entry)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> Option<usize> {
        Some(self.slots.len())
    }

    fn ids(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(
            (0..self.len)
                .filter_map(move |i| self.slots[self.slot(i)].as_ref())
                .map(|e| e.id.as_str()),
        )
    }
}
