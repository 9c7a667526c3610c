//! `LinkedQueue`: unbounded singly-linked list.
//!
//! Nodes live in an index arena (`Vec<Option<Node>>`) and link to their
//! successor by slot index, which keeps the list in safe Rust while still
//! giving O(1) push-at-tail and pop-at-head.  Slots freed by `dequeue` go on
//! a free list and are reused before the arena grows.
//!
//! Arena growth uses `try_reserve`, so running out of memory surfaces as
//! [`QueueError::Allocation`].

use crate::{PassengerQueue, QueueEntry, QueueError, QueueResult};

#[derive(Debug)]
struct Node {
    entry: QueueEntry,
    next:  Option<usize>,
}

#[derive(Debug, Default)]
pub struct LinkedQueue {
    nodes: Vec<Option<Node>>,
    /// Indices of `None` slots in `nodes`.
    free:  Vec<usize>,
    head:  Option<usize>,
    tail:  Option<usize>,
    len:   usize,
}

impl LinkedQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn node(&self, idx: usize) -> &Node {
        match &self.nodes[idx] {
            Some(node) => node,
            None => unreachable!("linked queue slot {idx} is linked but free"),
        }
    }

    /// Place `node` in a free slot (or a new one) and return its index.
    fn alloc(&mut self, node: Node) -> QueueResult<usize> {
        if let Some(idx) = self.free.pop() {
            self.nodes[idx] = Some(node);
            return Ok(idx);
        }
        self.nodes.try_reserve(1)?;
        // Every slot may end up on the free list; reserve for that now so
        // `dequeue` never allocates.
        self.free.try_reserve(self.nodes.len() + 1)?;
        self.nodes.push(Some(node));
        Ok(self.nodes.len() - 1)
    }

    /// Number of arena slots ever allocated (live + free).
    pub fn allocated_slots(&self) -> usize {
        self.nodes.len()
    }
}

impl PassengerQueue for LinkedQueue {
    fn enqueue(&mut self, entry: QueueEntry) -> QueueResult<()> {
        let idx = self.alloc(Node { entry, next: None })?;
        match self.tail {
            Some(tail) => {
                if let Some(node) = self.nodes[tail].as_mut() {
                    node.next = Some(idx);
                }
            }
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
        Ok(())
    }

    fn front(&self) -> Option<&QueueEntry> {
        self.head.map(|idx| &self.node(idx).entry)
    }

    fn dequeue(&mut self) -> QueueResult<QueueEntry> {
        let idx = self.head.ok_or(QueueError::Empty)?;
        let node = self.nodes[idx].take().ok_or(QueueError::Empty)?;
        self.free.push(idx);
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Ok(node.entry)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> Option<usize> {
        None
    }

    fn ids(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        let mut cursor = self.head;
        Box::new(std::iter::from_fn(move || {
            let node = self.node(cursor?);
            cursor = node.next;
            Some(node.entry.id.as_str())
        }))
    }
}
