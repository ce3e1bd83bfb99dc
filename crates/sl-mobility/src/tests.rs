//! Unit tests for sl-mobility.

use sl_core::{AnimalId, CarriageId, Point, Tick};
use sl_spatial::{GridRouter, MovementDomain, TileMap};

use crate::{MobilityEngine, MobilityError, Mover};

// ── Helpers ───────────────────────────────────────────────────────────────────

const CART: Mover = Mover::Carriage(CarriageId(0));
const SHEEP: Mover = Mover::Animal(AnimalId(0));

/// 8×1 road strip.
fn strip() -> TileMap {
    let mut map = TileMap::new(8, 1);
    map.lay_road(Point::new(0, 0), Point::new(7, 0));
    map
}

fn engine() -> MobilityEngine<GridRouter> {
    MobilityEngine::new(GridRouter)
}

// ── Travel ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod travel {
    use super::*;

    #[test]
    fn teleport_at_arrival() {
        let map = strip();
        let mut eng = engine();
        eng.place(CART, Point::new(0, 0), Tick(0));

        let path = eng.find_path(&map, CART, Point::new(3, 0), &MovementDomain::Road).unwrap();
        let arrival = eng.begin_travel(CART, path, Tick(10), 4).unwrap();
        assert_eq!(arrival, Tick(22));
        assert!(eng.in_transit(CART));
        assert_eq!(eng.position(CART), Some(Point::new(0, 0)), "still at departure");

        assert!(eng.tick_arrivals(Tick(21)).is_empty());
        assert_eq!(eng.tick_arrivals(Tick(22)), vec![(CART, Point::new(3, 0))]);
        assert!(!eng.in_transit(CART));
        assert_eq!(eng.position(CART), Some(Point::new(3, 0)));
        assert!(eng.store.paths.is_empty());
    }

    #[test]
    fn trivial_path_takes_one_tick() {
        let map = strip();
        let mut eng = engine();
        eng.place(CART, Point::new(2, 0), Tick(0));
        let path = eng.find_path(&map, CART, Point::new(2, 0), &MovementDomain::Road).unwrap();
        assert_eq!(eng.begin_travel(CART, path, Tick(5), 4).unwrap(), Tick(6));
    }

    #[test]
    fn arrivals_are_ordered_carriages_first() {
        let map = strip();
        let mut eng = engine();
        eng.place(SHEEP, Point::new(0, 0), Tick(0));
        eng.place(CART, Point::new(7, 0), Tick(0));
        let p1 = eng.find_path(&map, SHEEP, Point::new(1, 0), &MovementDomain::Road).unwrap();
        let p2 = eng.find_path(&map, CART, Point::new(6, 0), &MovementDomain::Road).unwrap();
        eng.begin_travel(SHEEP, p1, Tick(0), 1).unwrap();
        eng.begin_travel(CART, p2, Tick(0), 1).unwrap();

        let order: Vec<Mover> = eng.tick_arrivals(Tick(1)).into_iter().map(|(m, _)| m).collect();
        assert_eq!(order, vec![CART, SHEEP]);
    }

    #[test]
    fn progress_interpolates() {
        let map = strip();
        let mut eng = engine();
        eng.place(CART, Point::new(0, 0), Tick(0));
        let path = eng.find_path(&map, CART, Point::new(4, 0), &MovementDomain::Road).unwrap();
        eng.begin_travel(CART, path, Tick(0), 1).unwrap();
        let (from, to, progress) = eng.visual_position(CART, Tick(2)).unwrap();
        assert_eq!((from, to), (Point::new(0, 0), Point::new(4, 0)));
        assert!((progress - 0.5).abs() < f32::EPSILON);
    }
}

// ── Errors ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod errors {
    use super::*;

    #[test]
    fn unplaced_mover() {
        let map = strip();
        let eng = engine();
        let err = eng.find_path(&map, CART, Point::new(1, 0), &MovementDomain::Road).unwrap_err();
        assert!(matches!(err, MobilityError::NotPlaced(CART)));
    }

    #[test]
    fn already_in_transit() {
        let map = strip();
        let mut eng = engine();
        eng.place(CART, Point::new(0, 0), Tick(0));
        let path = eng.find_path(&map, CART, Point::new(2, 0), &MovementDomain::Road).unwrap();
        eng.begin_travel(CART, path.clone(), Tick(0), 1).unwrap();
        assert!(matches!(
            eng.begin_travel(CART, path, Tick(0), 1),
            Err(MobilityError::AlreadyInTransit(CART))
        ));
    }

    #[test]
    fn path_must_start_at_mover() {
        let map = strip();
        let mut eng = engine();
        eng.place(CART, Point::new(0, 0), Tick(0));
        eng.place(SHEEP, Point::new(5, 0), Tick(0));
        let sheep_path = eng.find_path(&map, SHEEP, Point::new(6, 0), &MovementDomain::Road).unwrap();
        assert!(matches!(
            eng.begin_travel(CART, sheep_path, Tick(0), 1),
            Err(MobilityError::PathStart { .. })
        ));
    }

    #[test]
    fn routing_failure_is_wrapped() {
        let map = TileMap::new(4, 4);
        let mut eng = engine();
        eng.place(CART, Point::new(0, 0), Tick(0));
        let err = eng.find_path(&map, CART, Point::new(3, 3), &MovementDomain::Road).unwrap_err();
        assert!(matches!(err, MobilityError::Routing(_)));
    }
}
