//! Unit tests for dk-core primitives.

#[cfg(test)]
mod ids {
    use crate::ItemId;

    #[test]
    fn next_increments() {
        assert_eq!(ItemId(0).next(), ItemId(1));
        assert_eq!(ItemId(41).next(), ItemId(42));
    }

    #[test]
    fn ordering() {
        assert!(ItemId(0) < ItemId(1));
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(ItemId::default(), ItemId::INVALID);
        assert_eq!(ItemId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(ItemId(7).to_string(), "ItemId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::Rect;

    #[test]
    fn edges() {
        let r = Rect::new(10.0, 5.0, 50.0, 20.0);
        assert_eq!(r.min_x(), 10.0);
        assert_eq!(r.max_x(), 60.0);
        assert_eq!(r.mid_y(), 15.0);
    }

    #[test]
    fn with_x_keeps_size() {
        let r = Rect::new(0.0, 3.0, 12.0, 4.0).with_x(-12.0);
        assert_eq!(r, Rect::new(-12.0, 3.0, 12.0, 4.0));
        assert_eq!(r.max_x(), 0.0);
    }
}

#[cfg(test)]
mod time {
    use crate::{ManualClock, MediaClock, MediaTime, SystemClock};

    #[test]
    fn media_time_arithmetic() {
        let t = MediaTime(1.5);
        assert_eq!(t + 2.0, MediaTime(3.5));
        assert_eq!(MediaTime(4.0) - MediaTime(1.0), 3.0);
    }

    #[test]
    fn since_floors_at_zero() {
        assert_eq!(MediaTime(5.0).since(MediaTime(2.0)), 3.0);
        assert_eq!(MediaTime(2.0).since(MediaTime(5.0)), 0.0);
    }

    #[test]
    fn system_clock_starts_near_zero_and_never_goes_back() {
        let clock = SystemClock::new();
        let first = clock.now();
        let second = clock.now();
        assert!(first.as_secs() >= 0.0 && first.as_secs() < 1.0);
        assert!(second >= first);
    }

    #[test]
    fn manual_clock_advances() {
        let mut clock = ManualClock::new(MediaTime(10.0));
        assert_eq!(clock.now(), MediaTime(10.0));
        clock.advance(0.25);
        clock.advance(0.25);
        assert_eq!(clock.now(), MediaTime(10.5));
    }

    #[test]
    #[should_panic]
    fn manual_clock_rejects_negative_step() {
        let mut clock = ManualClock::default();
        clock.advance(-1.0);
    }

    #[test]
    fn display() {
        assert_eq!(MediaTime(1.25).to_string(), "1.250s");
    }
}

#[cfg(test)]
mod config {
    use crate::{DEFAULT_SAFETY_GAP, DkError, LaneConfig};

    #[test]
    fn default_is_valid() {
        let cfg = LaneConfig::default();
        assert_eq!(cfg.safety_gap, DEFAULT_SAFETY_GAP);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn with_viewport_overrides_width_only() {
        let cfg = LaneConfig::with_viewport(300.0);
        assert_eq!(cfg.viewport_width, 300.0);
        assert_eq!(cfg.safety_gap, DEFAULT_SAFETY_GAP);
    }

    #[test]
    fn negative_viewport_rejected() {
        let cfg = LaneConfig::with_viewport(-1.0);
        assert!(matches!(cfg.validate(), Err(DkError::Config(_))));
    }

    #[test]
    fn nan_gap_rejected() {
        let cfg = LaneConfig { safety_gap: f64::NAN, ..LaneConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::LaneRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = LaneRng::new(12345);
        let mut r2 = LaneRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.gen_range(0.0..1.0);
            let b: f64 = r2.gen_range(0.0..1.0);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let a: Vec<u64> = {
            let mut rng = LaneRng::new(1);
            (0..8).map(|_| rng.gen_range(0..u64::MAX)).collect()
        };
        let b: Vec<u64> = {
            let mut rng = LaneRng::new(2);
            (0..8).map(|_| rng.gen_range(0..u64::MAX)).collect()
        };
        assert_ne!(a, b);
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = LaneRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(2.0f64..8.0);
            assert!((2.0..8.0).contains(&v));
        }
    }
}
