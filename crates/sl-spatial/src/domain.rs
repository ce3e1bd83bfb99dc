//! Movement domains: the set of tiles a unit may traverse on one trip.

use sl_core::{MovementKind, Point, Rect};

use crate::TileMap;

/// Tiles admissible for one path request.
///
/// The start and goal tiles of a request are always admissible; the domain
/// only restricts the tiles in between.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum MovementDomain {
    /// Any passable tile whose distance to `area` is at most `radius`.
    Radius { area: Rect, radius: u32 },
    /// Road and building tiles only.
    Road,
}

impl MovementDomain {
    /// Build the domain for a unit of `kind` anchored at `area`.
    pub fn for_kind(kind: MovementKind, area: Rect, radius: u32) -> Self {
        match kind {
            MovementKind::Radius => MovementDomain::Radius { area, radius },
            MovementKind::Road   => MovementDomain::Road,
        }
    }

    /// May a unit step onto `p`?
    pub fn admits(&self, map: &TileMap, p: Point) -> bool {
        let Some(tile) = map.tile(p) else {
            return false;
        };
        if !tile.is_passable() {
            return false;
        }
        match self {
            MovementDomain::Radius { area, radius } => area.distance_to_point(p) <= *radius as f64,
            MovementDomain::Road => tile.is_road_connected(),
        }
    }
}
