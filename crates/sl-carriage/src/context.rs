//! Mutable simulation handles passed into every carriage entry point.

use sl_core::{LogisticsConfig, Tick};
use sl_mobility::MobilityEngine;
use sl_schedule::Scheduler;
use sl_spatial::PathFinder;
use sl_world::World;

use crate::{LogisticsEvent, ReservationLedger};

/// Everything a carriage may touch during one call.
///
/// The simulation loop builds one per tick by splitting its own fields, so a
/// carriage never reaches into global state: the scheduler handle and the
/// ticks-per-second constant arrive here explicitly.
pub struct LogisticsContext<'a, R: PathFinder> {
    pub now:       Tick,
    pub config:    &'a LogisticsConfig,
    pub world:     &'a mut World,
    pub ledger:    &'a mut ReservationLedger,
    pub mobility:  &'a mut MobilityEngine<R>,
    pub scheduler: &'a mut Scheduler,
    /// Events emitted this tick, in order.
    pub events:    &'a mut Vec<LogisticsEvent>,
}
