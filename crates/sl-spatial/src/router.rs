//! Path-finding trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The mobility engine calls path finding through the [`PathFinder`] trait,
//! so applications can swap in A*, hierarchical, or cached implementations
//! without touching the carriage logic.  The default [`GridRouter`] runs
//! Dijkstra over 4-neighbour tiles.
//!
//! # Cost units
//!
//! A step costs [`TileKind::step_cost`](crate::TileKind::step_cost) units
//! (1 on roads and building floors, 2 on grass).  `Path::travel_ticks`
//! multiplies by the configured ticks per tile.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use sl_core::Point;

use crate::{MovementDomain, SpatialError, TileMap};

// ── Path ──────────────────────────────────────────────────────────────────────

/// The result of a path query: the tiles to step on, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    /// Tile the unit starts on.
    pub from: Point,
    /// Tiles after `from`, ending with the goal.  Empty for a trivial path.
    pub tiles: Vec<Point>,
    /// Summed step cost.
    pub cost: u32,
}

impl Path {
    /// Number of steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.tiles.len()
    }

    /// Final tile (equals `from` for a trivial path).
    #[inline]
    pub fn destination(&self) -> Point {
        self.tiles.last().copied().unwrap_or(self.from)
    }

    /// `true` if the start and goal are the same tile.
    #[inline]
    pub fn is_trivial(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Travel time in ticks.  Always at least 1 so arrival is never reported
    /// in the tick the journey started.
    #[inline]
    pub fn travel_ticks(&self, ticks_per_tile: u64) -> u64 {
        (self.cost as u64 * ticks_per_tile).max(1)
    }
}

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Pluggable path finding.
pub trait PathFinder: Send + Sync {
    /// Compute a path from `from` to `to` restricted to `domain`.
    ///
    /// `from == to` yields a trivial path rather than an error.
    fn find_path(
        &self,
        map:    &TileMap,
        from:   Point,
        to:     Point,
        domain: &MovementDomain,
    ) -> Result<Path, SpatialError>;
}

// ── GridRouter ────────────────────────────────────────────────────────────────

/// Dijkstra over the tile grid.
///
/// Ties are broken by `(cost, point)` so identical queries always return the
/// same path.
pub struct GridRouter;

impl PathFinder for GridRouter {
    fn find_path(
        &self,
        map:    &TileMap,
        from:   Point,
        to:     Point,
        domain: &MovementDomain,
    ) -> Result<Path, SpatialError> {
        dijkstra(map, from, to, domain)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

fn dijkstra(
    map:    &TileMap,
    from:   Point,
    to:     Point,
    domain: &MovementDomain,
) -> Result<Path, SpatialError> {
    for p in [from, to] {
        if !map.in_bounds(p) {
            return Err(SpatialError::OutOfBounds(p));
        }
    }
    if from == to {
        return Ok(Path { from, tiles: vec![], cost: 0 });
    }

    let index = |p: Point| p.y as usize * map.width() as usize + p.x as usize;
    let n = map.width() as usize * map.height() as usize;
    // dist[i] = best known cost to reach tile i.
    let mut dist = vec![u32::MAX; n];
    // prev[i] = tile we reached i from; None for unreached tiles and `from`.
    let mut prev: Vec<Option<Point>> = vec![None; n];

    dist[index(from)] = 0;

    // Reverse turns the max-heap into a min-heap.
    let mut heap: BinaryHeap<Reverse<(u32, Point)>> = BinaryHeap::new();
    heap.push(Reverse((0, from)));

    while let Some(Reverse((cost, tile))) = heap.pop() {
        if tile == to {
            return Ok(reconstruct(&prev, index, from, to, cost));
        }

        // Skip stale heap entries.
        if cost > dist[index(tile)] {
            continue;
        }

        for next in map.neighbours(tile) {
            let Some(kind) = map.tile(next) else { continue };
            // The goal skips the domain check but must still be enterable.
            let admitted = if next == to { kind.is_passable() } else { domain.admits(map, next) };
            if !admitted {
                continue;
            }
            let new_cost = cost.saturating_add(kind.step_cost());
            if new_cost < dist[index(next)] {
                dist[index(next)] = new_cost;
                prev[index(next)] = Some(tile);
                heap.push(Reverse((new_cost, next)));
            }
        }
    }

    Err(SpatialError::NoPath { from, to })
}

fn reconstruct(
    prev:  &[Option<Point>],
    index: impl Fn(Point) -> usize,
    from:  Point,
    to:    Point,
    cost:  u32,
) -> Path {
    let mut tiles = Vec::new();
    let mut cur = to;
    while cur != from {
        tiles.push(cur);
        match prev[index(cur)] {
            Some(p) => cur = p,
            None => break,
        }
    }
    tiles.reverse();
    Path { from, tiles, cost }
}
