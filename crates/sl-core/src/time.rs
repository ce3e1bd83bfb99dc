//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter driven by the scheduler.
//! Game rules are written in **seconds** (a carriage re-searches every 2 s,
//! an animal carriage every 10 s) and converted with the configured
//! `ticks_per_second`:
//!
//!   delay_ticks = interval_secs * ticks_per_second
//!
//! The conversion factor is injected through [`LogisticsConfig`]; nothing in
//! the workspace reads it from global state.

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self` (zero if `earlier` is later).
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Current tick plus the seconds ↔ ticks conversion.
#[derive(Clone, Debug)]
pub struct SimClock {
    /// Scheduler ticks per simulated second.
    pub ticks_per_second: u32,
    /// The current tick, advanced by `SimClock::advance()` each iteration.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(ticks_per_second: u32) -> Self {
        Self { ticks_per_second, current_tick: Tick::ZERO }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Whole simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> u64 {
        self.current_tick.0 / self.ticks_per_second.max(1) as u64
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} s)", self.current_tick, self.elapsed_secs())
    }
}

// ── LogisticsConfig ───────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Built in code or loaded from JSON by the application (with the `serde`
/// feature) and passed to the simulation builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LogisticsConfig {
    /// Scheduler ticks per simulated second.  Default: 16.
    pub ticks_per_second: u32,

    /// Ticks needed to cross one road tile.  Off-road tiles cost twice as
    /// much.  Default: 4.
    pub ticks_per_tile: u64,

    /// Ticks a herded animal needs per road tile.  Animals are slower than
    /// carriages, so a herder usually waits at home.  Default: 8.
    pub animal_ticks_per_tile: u64,

    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Seed for generated settlements.
    pub seed: u64,
}

impl LogisticsConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Convert a rule interval in seconds to scheduler ticks.
    #[inline]
    pub fn secs_to_ticks(&self, secs: u64) -> u64 {
        secs * self.ticks_per_second as u64
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.ticks_per_second)
    }

    /// Reject configurations the tick loop cannot honour.
    pub fn validate(&self) -> CoreResult<()> {
        if self.ticks_per_second == 0 {
            return Err(CoreError::Config("ticks_per_second must be at least 1".into()));
        }
        if self.ticks_per_tile == 0 {
            return Err(CoreError::Config("ticks_per_tile must be at least 1".into()));
        }
        if self.animal_ticks_per_tile == 0 {
            return Err(CoreError::Config("animal_ticks_per_tile must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for LogisticsConfig {
    fn default() -> Self {
        Self {
            ticks_per_second:      16,
            ticks_per_tile:        4,
            animal_ticks_per_tile: 8,
            total_ticks:           16 * 600,
            seed:                  0,
        }
    }
}
