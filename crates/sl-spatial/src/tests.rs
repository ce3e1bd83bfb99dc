//! Unit tests for sl-spatial.
//!
//! All tests use small hand-drawn maps.

#[cfg(test)]
mod helpers {
    use sl_core::Point;
    use crate::{TileKind, TileMap};

    /// 7×5 map:
    ///
    /// ```text
    ///   x 0 1 2 3 4 5 6
    /// y0  . . . . . . .
    /// y1  . # # # # . .
    /// y2  R R R R R R R
    /// y3  . . . ~ . . .
    /// y4  . . . ~ . . .
    /// ```
    ///
    /// `R` road, `#` building, `~` water, `.` grass.
    pub fn village() -> TileMap {
        let mut map = TileMap::new(7, 5);
        map.lay_road(Point::new(0, 2), Point::new(6, 2));
        for x in 1..=4 {
            map.set(Point::new(x, 1), TileKind::Building);
        }
        map.set(Point::new(3, 3), TileKind::Water);
        map.set(Point::new(3, 4), TileKind::Water);
        map
    }
}

// ── Map ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod map {
    use sl_core::{Point, Rect};
    use crate::{TileKind, TileMap};

    #[test]
    fn bounds_and_lookup() {
        let map = TileMap::new(3, 2);
        assert!(map.in_bounds(Point::new(2, 1)));
        assert!(!map.in_bounds(Point::new(3, 0)));
        assert!(!map.in_bounds(Point::new(-1, 0)));
        assert_eq!(map.tile(Point::new(0, 0)), Some(TileKind::Grass));
        assert_eq!(map.tile(Point::new(0, 5)), None);
    }

    #[test]
    fn set_outside_is_ignored() {
        let mut map = TileMap::new(2, 2);
        assert!(!map.set(Point::new(5, 5), TileKind::Road));
        assert!(map.set(Point::new(1, 1), TileKind::Road));
        assert_eq!(map.tile(Point::new(1, 1)), Some(TileKind::Road));
    }

    #[test]
    fn lay_road_keeps_buildings() {
        let mut map = TileMap::new(5, 5);
        map.fill(Rect::new(Point::new(2, 0), 1, 1), TileKind::Building);
        map.lay_road(Point::new(0, 0), Point::new(4, 3));
        assert_eq!(map.tile(Point::new(2, 0)), Some(TileKind::Building));
        assert_eq!(map.tile(Point::new(4, 0)), Some(TileKind::Road));
        assert_eq!(map.tile(Point::new(4, 3)), Some(TileKind::Road));
        assert_eq!(map.tile(Point::new(0, 3)), Some(TileKind::Grass));
    }

    #[test]
    fn neighbours_are_clipped() {
        let map = TileMap::new(3, 3);
        let corner: Vec<_> = map.neighbours(Point::new(0, 0)).collect();
        assert_eq!(corner, vec![Point::new(1, 0), Point::new(0, 1)]);
        assert_eq!(map.neighbours(Point::new(1, 1)).count(), 4);
    }
}

// ── Domains ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod domain {
    use sl_core::{MovementKind, Point, Rect};
    use crate::MovementDomain;

    #[test]
    fn road_domain_rejects_grass() {
        let map = super::helpers::village();
        let road = MovementDomain::for_kind(MovementKind::Road, Rect::from_point(Point::new(0, 0)), 0);
        assert!(road.admits(&map, Point::new(0, 2)));
        assert!(road.admits(&map, Point::new(2, 1)), "building floors connect to roads");
        assert!(!road.admits(&map, Point::new(0, 0)));
    }

    #[test]
    fn radius_domain_limits_distance() {
        let map = super::helpers::village();
        let area = Rect::new(Point::new(1, 1), 4, 1);
        let dom = MovementDomain::for_kind(MovementKind::Radius, area, 1);
        assert!(dom.admits(&map, Point::new(1, 2)));
        assert!(!dom.admits(&map, Point::new(0, 2)), "diagonal distance exceeds 1");
        assert!(!dom.admits(&map, Point::new(1, 4)), "three rows below the area");
        assert!(!dom.admits(&map, Point::new(3, 3)), "water is never admissible");
    }
}

// ── Routing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod routing {
    use sl_core::{Point, Rect};
    use crate::{GridRouter, MovementDomain, PathFinder, SpatialError, TileMap};

    fn open(map: &TileMap) -> MovementDomain {
        MovementDomain::Radius {
            area:   Rect::new(Point::new(0, 0), map.width(), map.height()),
            radius: 0,
        }
    }

    #[test]
    fn trivial_path() {
        let map = super::helpers::village();
        let p = Point::new(2, 2);
        let path = GridRouter.find_path(&map, p, p, &MovementDomain::Road).unwrap();
        assert!(path.is_trivial());
        assert_eq!(path.cost, 0);
        assert_eq!(path.destination(), p);
        assert_eq!(path.travel_ticks(4), 1, "travel always takes at least one tick");
    }

    #[test]
    fn road_path_follows_road() {
        let map = super::helpers::village();
        let path = GridRouter
            .find_path(&map, Point::new(0, 2), Point::new(6, 2), &MovementDomain::Road)
            .unwrap();
        assert_eq!(path.steps(), 6);
        assert_eq!(path.cost, 6);
        assert_eq!(path.destination(), Point::new(6, 2));
        assert!(path.tiles.iter().all(|t| t.y == 2));
        assert_eq!(path.travel_ticks(4), 24);
    }

    #[test]
    fn prefers_road_over_grass() {
        let map = super::helpers::village();
        // Straight along row 3 is 6 grass steps (cost 12) but is cut by
        // water; the road detour costs less.
        let path = GridRouter
            .find_path(&map, Point::new(0, 3), Point::new(6, 3), &open(&map))
            .unwrap();
        assert!(path.tiles.contains(&Point::new(3, 2)));
        assert!(!path.tiles.contains(&Point::new(3, 3)));
        // Seven road tiles then one grass tile.
        assert_eq!(path.cost, 9);
    }

    #[test]
    fn goal_outside_domain_is_still_reachable() {
        let map = super::helpers::village();
        // The goal is grass; every tile before it is road.
        let path = GridRouter
            .find_path(&map, Point::new(0, 2), Point::new(0, 3), &MovementDomain::Road)
            .unwrap();
        assert_eq!(path.tiles, vec![Point::new(0, 3)]);
        assert_eq!(path.cost, 2);
    }

    #[test]
    fn no_path_on_disconnected_roads() {
        let map = super::helpers::village();
        let err = GridRouter
            .find_path(&map, Point::new(0, 2), Point::new(0, 4), &MovementDomain::Road)
            .unwrap_err();
        assert!(matches!(err, SpatialError::NoPath { .. }));
    }

    #[test]
    fn out_of_bounds_endpoint() {
        let map = super::helpers::village();
        let err = GridRouter
            .find_path(&map, Point::new(0, 2), Point::new(9, 9), &MovementDomain::Road)
            .unwrap_err();
        assert!(matches!(err, SpatialError::OutOfBounds(p) if p == Point::new(9, 9)));
    }

    #[test]
    fn identical_queries_return_identical_paths() {
        let map = TileMap::new(6, 6);
        let dom = open(&map);
        let a = GridRouter.find_path(&map, Point::new(0, 0), Point::new(5, 5), &dom).unwrap();
        let b = GridRouter.find_path(&map, Point::new(0, 0), Point::new(5, 5), &dom).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.cost, 20);
    }
}
