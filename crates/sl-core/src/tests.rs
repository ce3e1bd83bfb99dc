//! Unit tests for sl-core primitives.

#[cfg(test)]
mod ids {
    use crate::{BuildingId, CarriageId, ResourceId};

    #[test]
    fn index_roundtrip() {
        let id = CarriageId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(CarriageId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(CarriageId::INVALID.0, u32::MAX);
        assert_eq!(ResourceId::INVALID.0, u16::MAX);
        assert_eq!(BuildingId::default(), BuildingId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(ResourceId(7).to_string(), "ResourceId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::{Point, Rect};

    #[test]
    fn rect_is_inclusive() {
        let r = Rect::new(Point::new(4, 4), 2, 3);
        assert_eq!(r.right, 5);
        assert_eq!(r.bottom, 6);
        assert_eq!(r.width(), 2);
        assert_eq!(r.height(), 3);
        assert!(r.contains(Point::new(5, 6)));
        assert!(!r.contains(Point::new(6, 6)));
        assert_eq!(r.tiles().count(), 6);
    }

    #[test]
    fn zero_size_covers_one_tile() {
        let r = Rect::new(Point::new(1, 1), 0, 0);
        assert_eq!(r, Rect::from_point(Point::new(1, 1)));
    }

    #[test]
    fn overlapping_rects_have_zero_distance() {
        let a = Rect::new(Point::new(0, 0), 3, 3);
        let b = Rect::new(Point::new(2, 2), 3, 3);
        assert_eq!(a.distance(&b), 0.0);
        assert_eq!(a.distance_to_point(Point::new(1, 1)), 0.0);
    }

    #[test]
    fn horizontal_gap() {
        // a covers x 0..=1, b starts at x 3 → gap of 2 tiles.
        let a = Rect::new(Point::new(0, 0), 2, 2);
        let b = Rect::new(Point::new(3, 0), 2, 2);
        assert_eq!(a.distance(&b), 2.0);
        assert_eq!(b.distance(&a), 2.0);
    }

    #[test]
    fn diagonal_gap_is_euclidean() {
        let a = Rect::from_point(Point::new(0, 0));
        let b = Rect::from_point(Point::new(3, 4));
        assert!((a.distance(&b) - 5.0).abs() < 1e-9);
    }
}

#[cfg(test)]
mod time {
    use crate::{LogisticsConfig, SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(3).since(Tick(5)), 0);
    }

    #[test]
    fn clock_elapsed_secs() {
        let mut clock = SimClock::new(16);
        for _ in 0..40 {
            clock.advance();
        }
        assert_eq!(clock.current_tick, Tick(40));
        assert_eq!(clock.elapsed_secs(), 2);
    }

    #[test]
    fn secs_to_ticks_uses_ticks_per_second() {
        let cfg = LogisticsConfig { ticks_per_second: 16, ..LogisticsConfig::default() };
        assert_eq!(cfg.secs_to_ticks(2), 32);
        assert_eq!(cfg.secs_to_ticks(10), 160);
    }

    #[test]
    fn validate_rejects_zero_rates() {
        let cfg = LogisticsConfig { ticks_per_second: 0, ..LogisticsConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = LogisticsConfig { ticks_per_tile: 0, ..LogisticsConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = LogisticsConfig { animal_ticks_per_tile: 0, ..LogisticsConfig::default() };
        assert!(cfg.validate().is_err());
        assert!(LogisticsConfig::default().validate().is_ok());
    }

    #[test]
    fn end_tick() {
        let cfg = LogisticsConfig { total_ticks: 500, ..LogisticsConfig::default() };
        assert_eq!(cfg.end_tick(), Tick(500));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.gen_range(0..1000u32), r2.gen_range(0..1000u32));
        }
    }

    #[test]
    fn children_diverge() {
        let mut root = SimRng::new(1);
        let mut a = root.child(0);
        let mut b = root.child(1);
        let xs: Vec<u32> = (0..8).map(|_| a.gen_range(0..u32::MAX)).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.gen_range(0..u32::MAX)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}

#[cfg(test)]
mod movement {
    use crate::MovementKind;

    #[test]
    fn display() {
        assert_eq!(MovementKind::Radius.to_string(), "radius");
        assert_eq!(MovementKind::Road.to_string(), "road");
        assert_eq!(MovementKind::default(), MovementKind::Radius);
    }
}
