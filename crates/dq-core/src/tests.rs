//! Unit tests for dq-core primitives.

#[cfg(test)]
mod ids {
    use crate::DeskId;

    #[test]
    fn index_roundtrip() {
        let id = DeskId(3);
        assert_eq!(id.index(), 3);
        assert_eq!(DeskId::try_from(3usize).unwrap(), id);
    }

    #[test]
    fn label_is_one_based() {
        assert_eq!(DeskId(0).label(), "№1");
        assert_eq!(DeskId(9).label(), "№10");
        assert_eq!(DeskId(1).to_string(), "desk 2");
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn checked_offset() {
        assert_eq!(Tick(10).checked_offset(7), Some(Tick(17)));
        assert_eq!(Tick(10).checked_offset(0), Some(Tick(10)));
        assert_eq!(Tick(u64::MAX - 1).checked_offset(1), Some(Tick(u64::MAX)));
    }

    #[test]
    fn checked_offset_overflow_is_none() {
        assert_eq!(Tick(u64::MAX).checked_offset(1), None);
        assert_eq!(Tick(18_446_744_073_709_551_610).checked_offset(100), None);
    }

    #[test]
    fn earliest_treats_none_as_infinite() {
        assert_eq!(Tick::earliest(None, None), None);
        assert_eq!(Tick::earliest(Some(Tick(4)), None), Some(Tick(4)));
        assert_eq!(Tick::earliest(None, Some(Tick(9))), Some(Tick(9)));
        assert_eq!(Tick::earliest(Some(Tick(4)), Some(Tick(2))), Some(Tick(2)));
    }

    #[test]
    fn display_is_bare_number() {
        assert_eq!(Tick(17).to_string(), "17");
    }
}

#[cfg(test)]
mod passenger {
    use crate::{MAX_ID_LEN, Passenger, truncate_id};

    #[test]
    fn validate_accepts_normal_id() {
        assert!(Passenger::new("p1", 0, 5).validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_and_long_ids() {
        assert!(Passenger::new("", 0, 5).validate().is_err());
        let long = "x".repeat(MAX_ID_LEN + 1);
        assert!(Passenger::new(long, 0, 5).validate().is_err());
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let id = "ж".repeat(40);
        let cut = truncate_id(&id);
        assert_eq!(cut.chars().count(), MAX_ID_LEN);
        assert_eq!(truncate_id("short"), "short");
    }
}

#[cfg(test)]
mod config {
    use crate::{QueueBackend, SimConfig};

    #[test]
    fn default_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn bounded_zero_capacity_rejected() {
        let config = SimConfig { backend: QueueBackend::Bounded, capacity: 0, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn unbounded_ignores_capacity() {
        let config = SimConfig { backend: QueueBackend::Unbounded, capacity: 0, ..Default::default() };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_max_passengers_rejected() {
        let config = SimConfig { max_passengers: 0, ..Default::default() };
        assert!(config.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(99);
        let mut b = SimRng::new(99);
        for _ in 0..100 {
            assert_eq!(a.pick_two_distinct(5), b.pick_two_distinct(5));
        }
    }

    #[test]
    fn picks_are_distinct_and_in_range() {
        let mut rng = SimRng::new(7);
        for n in 2..8 {
            for _ in 0..200 {
                let (a, b) = rng.pick_two_distinct(n);
                assert_ne!(a, b);
                assert!(a.index() < n && b.index() < n);
            }
        }
    }

    #[test]
    fn two_desks_always_yields_both() {
        let mut rng = SimRng::new(1);
        for _ in 0..50 {
            let (a, b) = rng.pick_two_distinct(2);
            assert_eq!(a.index() + b.index(), 1);
        }
    }

    #[test]
    #[should_panic]
    fn single_desk_panics() {
        SimRng::new(1).pick_two_distinct(1);
    }
}
