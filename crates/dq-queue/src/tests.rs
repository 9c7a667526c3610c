//! Unit tests for dq-queue.

use dq_core::QueueBackend;

use crate::{PassengerQueue, QueueEntry, build_queue};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn entry(id: &str, service: u64) -> QueueEntry {
    QueueEntry::new(id, service)
}

/// Both backends, large enough that the bounded one never fills in
/// the shared-contract tests.
fn both_backends() -> Vec<Box<dyn PassengerQueue>> {
    vec![
        build_queue(QueueBackend::Bounded, 64).unwrap(),
        build_queue(QueueBackend::Unbounded, 64).unwrap(),
    ]
}

// ── Shared contract ───────────────────────────────────────────────────────────

#[cfg(test)]
mod contract {
    use super::*;
    use crate::QueueError;

    #[test]
    fn new_queue_is_empty() {
        for q in both_backends() {
            assert!(q.is_empty());
            assert_eq!(q.len(), 0);
            assert!(q.front().is_none());
            assert_eq!(q.front_id(), None);
            assert_eq!(q.front_service_time(), None);
            assert!(q.dump_ids().is_empty());
        }
    }

    #[test]
    fn fifo_order() {
        for mut q in both_backends() {
            for (i, id) in ["a", "b", "c", "d"].iter().enumerate() {
                q.enqueue(entry(id, i as u64)).unwrap();
            }
            let out: Vec<String> = (0..4).map(|_| q.dequeue().unwrap().id).collect();
            assert_eq!(out, ["a", "b", "c", "d"], "{q:?}");
            assert!(q.is_empty());
        }
    }

    #[test]
    fn front_peeks_without_removing() {
        for mut q in both_backends() {
            q.enqueue(entry("x", 7)).unwrap();
            q.enqueue(entry("y", 3)).unwrap();
            assert_eq!(q.front_id(), Some("x"));
            assert_eq!(q.front_service_time(), Some(7));
            assert_eq!(q.len(), 2);
            q.dequeue().unwrap();
            assert_eq!(q.front_id(), Some("y"));
            assert_eq!(q.front_service_time(), Some(3));
        }
    }

    #[test]
    fn dequeue_empty_is_an_error() {
        for mut q in both_backends() {
            assert!(matches!(q.dequeue(), Err(QueueError::Empty)));
            q.enqueue(entry("only", 1)).unwrap();
            q.dequeue().unwrap();
            assert!(matches!(q.dequeue(), Err(QueueError::Empty)));
        }
    }

    #[test]
    fn dump_ids_does_not_mutate() {
        for mut q in both_backends() {
            q.enqueue(entry("p1", 1)).unwrap();
            q.enqueue(entry("p2", 2)).unwrap();
            assert_eq!(q.dump_ids(), ["p1", "p2"]);
            assert_eq!(q.dump_ids(), ["p1", "p2"]);
            assert_eq!(q.len(), 2);
        }
    }

    #[test]
    fn capacity_reported_per_backend() {
        let bounded = build_queue(QueueBackend::Bounded, 3).unwrap();
        let unbounded = build_queue(QueueBackend::Unbounded, 3).unwrap();
        assert_eq!(bounded.capacity(), Some(3));
        assert_eq!(unbounded.capacity(), None);
        assert!(!unbounded.is_full());
    }
}

// ── RingQueue ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ring {
    use super::*;
    use crate::{QueueError, RingQueue};

    #[test]
    fn capacity_one_refuses_second_enqueue() {
        let mut q = RingQueue::with_capacity(1).unwrap();
        q.enqueue(entry("first", 5)).unwrap();
        match q.enqueue(entry("second", 9)) {
            Err(QueueError::Full { capacity, rejected }) => {
                assert_eq!(capacity, 1);
                assert_eq!(rejected, entry("second", 9));
            }
            other => panic!("expected Full, got {other:?}"),
        }
        assert_eq!(q.len(), 1);
        assert!(q.is_full());
        assert_eq!(q.front_id(), Some("first"));
    }

    #[test]
    fn wraps_around_preserving_order() {
        let mut q = RingQueue::with_capacity(3).unwrap();
        q.enqueue(entry("a", 1)).unwrap();
        q.enqueue(entry("b", 1)).unwrap();
        q.enqueue(entry("c", 1)).unwrap();
        q.dequeue().unwrap();
        q.dequeue().unwrap();
        q.enqueue(entry("d", 1)).unwrap();
        q.enqueue(entry("e", 1)).unwrap();
        // Head is now at slot 2 and the tail has wrapped to slot 1.
        assert_eq!(q.dump_ids(), ["c", "d", "e"]);
        assert!(q.is_full());
        assert_eq!(q.dequeue().unwrap().id, "c");
        assert_eq!(q.dequeue().unwrap().id, "d");
        assert_eq!(q.dequeue().unwrap().id, "e");
        assert!(q.is_empty());
    }

    #[test]
    fn zero_capacity_is_always_full() {
        let mut q = RingQueue::with_capacity(0).unwrap();
        assert!(q.is_full());
        assert!(matches!(q.enqueue(entry("a", 1)), Err(QueueError::Full { .. })));
        assert!(q.ids().next().is_none());
    }

    #[test]
    fn refill_after_drain() {
        let mut q = RingQueue::with_capacity(2).unwrap();
        for round in 0..5 {
            q.enqueue(entry(&format!("r{round}a"), 1)).unwrap();
            q.enqueue(entry(&format!("r{round}b"), 1)).unwrap();
            assert_eq!(q.dequeue().unwrap().id, format!("r{round}a"));
            assert_eq!(q.dequeue().unwrap().id, format!("r{round}b"));
        }
    }
}

// ── LinkedQueue ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod list {
    use super::*;
    use crate::LinkedQueue;

    #[test]
    fn never_full() {
        let mut q = LinkedQueue::new();
        for i in 0..2_000 {
            q.enqueue(entry(&i.to_string(), 1)).unwrap();
        }
        assert_eq!(q.len(), 2_000);
        assert!(!q.is_full());
    }

    #[test]
    fn freed_slots_are_reused() {
        let mut q = LinkedQueue::new();
        for round in 0..10 {
            q.enqueue(entry(&format!("a{round}"), 1)).unwrap();
            q.enqueue(entry(&format!("b{round}"), 1)).unwrap();
            q.dequeue().unwrap();
            q.dequeue().unwrap();
        }
        assert!(q.is_empty());
        assert_eq!(q.allocated_slots(), 2);
    }

    #[test]
    fn interleaved_ops_keep_links_consistent() {
        let mut q = LinkedQueue::new();
        q.enqueue(entry("a", 1)).unwrap();
        q.enqueue(entry("b", 1)).unwrap();
        q.dequeue().unwrap();
        q.enqueue(entry("c", 1)).unwrap(); // reuses a's slot
        q.enqueue(entry("d", 1)).unwrap();
        assert_eq!(q.dump_ids(), ["b", "c", "d"]);
        q.dequeue().unwrap();
        q.dequeue().unwrap();
        q.dequeue().unwrap();
        assert!(q.front().is_none());
        q.enqueue(entry("e", 1)).unwrap();
        assert_eq!(q.dump_ids(), ["e"]);
    }
}

// ── Model-based properties ────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use std::collections::VecDeque;

    use proptest::prelude::*;

    use super::*;
    use crate::QueueError;

    #[derive(Clone, Debug)]
    enum Op {
        Push(u64),
        Pop,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![(0u64..100).prop_map(Op::Push), Just(Op::Pop)]
    }

    /// Replay `ops` against `q` and a `VecDeque` model, checking every
    /// observable after each step.  Pushes beyond `cap` must be refused.
    fn check_against_model(mut q: Box<dyn PassengerQueue>, cap: Option<usize>, ops: &[Op]) {
        let mut model: VecDeque<QueueEntry> = VecDeque::new();
        for (n, op) in ops.iter().enumerate() {
            match op {
                Op::Push(service) => {
                    let e = entry(&format!("p{n}"), *service);
                    let before = q.len();
                    let result = q.enqueue(e.clone());
                    if cap.is_some_and(|c| model.len() >= c) {
                        assert!(matches!(result, Err(QueueError::Full { .. })));
                        assert_eq!(q.len(), before);
                    } else {
                        assert!(result.is_ok());
                        model.push_back(e);
                    }
                }
                Op::Pop => match model.pop_front() {
                    Some(expected) => assert_eq!(q.dequeue().unwrap(), expected),
                    None => assert!(matches!(q.dequeue(), Err(QueueError::Empty))),
                },
            }
            assert_eq!(q.len(), model.len());
            assert_eq!(q.is_empty(), q.len() == 0);
            if let Some(c) = cap {
                assert!(q.len() <= c);
            }
            assert_eq!(q.front(), model.front());
            let ids: Vec<&str> = model.iter().map(|e| e.id.as_str()).collect();
            assert_eq!(q.ids().collect::<Vec<_>>(), ids);
        }
    }

    proptest! {
        #[test]
        fn ring_matches_model(cap in 1usize..6, ops in prop::collection::vec(op(), 0..80)) {
            let q = build_queue(QueueBackend::Bounded, cap).unwrap();
            check_against_model(q, Some(cap), &ops);
        }

        #[test]
        fn list_matches_model(ops in prop::collection::vec(op(), 0..80)) {
            let q = build_queue(QueueBackend::Unbounded, 0).unwrap();
            check_against_model(q, None, &ops);
        }
    }
}
