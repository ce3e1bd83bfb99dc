//! The `MobilityStore` — movement state per mover and sparse path cache.

use std::collections::{BTreeMap, HashMap};

use sl_core::{Point, Tick};
use sl_spatial::Path;

use crate::{Mover, MovementState};

/// Movement state for every placed mover plus paths for movers in transit.
///
/// `states` is a `BTreeMap` so scans visit movers in `Mover` order.  `paths`
/// is sparse: entries are removed on arrival.
#[derive(Default)]
pub struct MobilityStore {
    pub states: BTreeMap<Mover, MovementState>,
    pub paths:  HashMap<Mover, Path>,
}

impl MobilityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `mover` as travelling along `path` from `now`.  Returns the
    /// arrival tick (at least one tick after `now`).
    pub fn begin_travel(&mut self, mover: Mover, path: Path, now: Tick, ticks_per_tile: u64) -> Tick {
        let arrival_tick = now + path.travel_ticks(ticks_per_tile);
        self.states.insert(mover, MovementState {
            in_transit:     true,
            departure:      path.from,
            destination:    path.destination(),
            departure_tick: now,
            arrival_tick,
        });
        self.paths.insert(mover, path);
        arrival_tick
    }

    /// Complete travel for `mover`, returning the tile it arrived on.
    pub fn arrive(&mut self, mover: Mover, now: Tick) -> Option<Point> {
        let dest = self.states.get(&mover)?.destination;
        self.states.insert(mover, MovementState::stationary(dest, now));
        self.paths.remove(&mover);
        Some(dest)
    }

    #[inline]
    pub fn in_transit(&self, mover: Mover) -> bool {
        self.states.get(&mover).is_some_and(|s| s.in_transit)
    }
}
