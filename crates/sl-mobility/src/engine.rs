//! High-level mobility engine: path requests, travel, and arrivals.

use sl_core::{Point, Tick};
use sl_spatial::{MovementDomain, Path, PathFinder, TileMap};

use crate::{MobilityError, MobilityResult, MobilityStore, MovementState, Mover};

/// Wraps a [`PathFinder`] and a [`MobilityStore`].
///
/// # Type parameter
///
/// `R` must implement [`PathFinder`] (e.g. [`sl_spatial::GridRouter`]).
/// Swap it at compile time for a different routing algorithm with no runtime
/// overhead.
pub struct MobilityEngine<R: PathFinder> {
    pub router: R,
    pub store:  MobilityStore,
}

impl<R: PathFinder> MobilityEngine<R> {
    pub fn new(router: R) -> Self {
        Self { router, store: MobilityStore::new() }
    }

    /// Put `mover` on `at` without routing (initial placement, or an
    /// out-of-band relocation).
    pub fn place(&mut self, mover: Mover, at: Point, tick: Tick) {
        self.store.states.insert(mover, MovementState::stationary(at, tick));
    }

    /// Current logical tile of `mover` (its departure tile while travelling).
    pub fn position(&self, mover: Mover) -> Option<Point> {
        self.store.states.get(&mover).map(|s| s.departure)
    }

    #[inline]
    pub fn in_transit(&self, mover: Mover) -> bool {
        self.store.in_transit(mover)
    }

    /// Ask the router for a path from `mover`'s tile to `to`.
    ///
    /// Has no side effects; a failure only means the caller should try
    /// something else.
    pub fn find_path(
        &self,
        map:    &TileMap,
        mover:  Mover,
        to:     Point,
        domain: &MovementDomain,
    ) -> MobilityResult<Path> {
        let from = self.position(mover).ok_or(MobilityError::NotPlaced(mover))?;
        Ok(self.router.find_path(map, from, to, domain)?)
    }

    /// Start `mover` along `path`.  Returns the arrival tick.
    pub fn begin_travel(
        &mut self,
        mover:          Mover,
        path:           Path,
        now:            Tick,
        ticks_per_tile: u64,
    ) -> MobilityResult<Tick> {
        let state = self.store.states.get(&mover).ok_or(MobilityError::NotPlaced(mover))?;
        if state.in_transit {
            return Err(MobilityError::AlreadyInTransit(mover));
        }
        if state.departure != path.from {
            return Err(MobilityError::PathStart { mover, at: state.departure, start: path.from });
        }
        Ok(self.store.begin_travel(mover, path, now, ticks_per_tile))
    }

    /// Complete every journey whose `arrival_tick <= now`.
    ///
    /// Returns `(Mover, Point)` for each arrival, in ascending `Mover` order.
    pub fn tick_arrivals(&mut self, now: Tick) -> Vec<(Mover, Point)> {
        // Collect arriving movers first (immutable scan) then mutate.
        let arriving: Vec<Mover> = self.store.states
            .iter()
            .filter(|(_, s)| s.in_transit && s.arrival_tick <= now)
            .map(|(&m, _)| m)
            .collect();

        arriving
            .into_iter()
            .filter_map(|m| self.store.arrive(m, now).map(|at| (m, at)))
            .collect()
    }

    /// `(departure, destination, progress)` for drawing `mover` between tiles.
    pub fn visual_position(&self, mover: Mover, now: Tick) -> Option<(Point, Point, f32)> {
        self.store
            .states
            .get(&mover)
            .map(|s| (s.departure, s.destination, s.progress(now)))
    }
}
