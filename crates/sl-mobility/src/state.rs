//! Per-mover movement state.

use sl_core::{Point, Tick};

/// The movement state for a single mover.
///
/// A mover is either **stationary** (`in_transit = false`) or **in transit**
/// towards `destination`.  Under the teleport-at-arrival model it logically
/// stays at `departure` until `arrival_tick`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementState {
    pub in_transit: bool,

    /// Tile the mover departed from (or stands on if `!in_transit`).
    pub departure: Point,

    /// Tile the mover is heading to.  Equals `departure` when stationary.
    pub destination: Point,

    pub departure_tick: Tick,

    /// Equals `departure_tick` when stationary.
    pub arrival_tick: Tick,
}

impl MovementState {
    #[inline]
    pub fn stationary(at: Point, tick: Tick) -> Self {
        Self {
            in_transit:     false,
            departure:      at,
            destination:    at,
            departure_tick: tick,
            arrival_tick:   tick,
        }
    }

    /// Fraction of the journey completed at `now`, in `[0.0, 1.0]`.
    pub fn progress(&self, now: Tick) -> f32 {
        if !self.in_transit || self.arrival_tick <= self.departure_tick {
            return 1.0;
        }
        let elapsed = now.since(self.departure_tick) as f32;
        let total   = self.arrival_tick.since(self.departure_tick) as f32;
        (elapsed / total).min(1.0)
    }
}
