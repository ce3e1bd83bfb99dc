//! `sl-sim` — tick loop orchestrator for the settlement logistics workspace.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Arrivals: movers reaching their destination (ascending Mover):
//!                 animals get their new position; carriages run their
//!                 arrival step; a herded animal's arrival wakes its herder.
//!   ② Jobs:     drain the scheduler for this tick, in insertion order:
//!                 SendCarriage(id) → Carriage::send
//!                 Produce(id)      → one production step, then re-arm
//!   ③ Observe:  every event of the tick goes to SimObserver::on_event.
//! ```
//!
//! Everything runs on one thread in a fixed order, so a run is fully
//! determined by the world, the carriage list, and the config.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sl_core::LogisticsConfig;
//! use sl_sim::{NoopObserver, SimBuilder};
//! use sl_spatial::GridRouter;
//!
//! let mut sim = SimBuilder::new(LogisticsConfig::default(), world, GridRouter)
//!     .building_carriage(mill)
//!     .animal_carriage(farm)
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{EventRecorder, NoopObserver, SimObserver};
pub use sim::Sim;
