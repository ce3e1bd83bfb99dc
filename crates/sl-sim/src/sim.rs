//! The `Sim` struct and its tick loop.

use sl_carriage::{Carriage, LogisticsContext, LogisticsEvent, ReservationLedger};
use sl_core::{CarriageId, LogisticsConfig, ProducerId, SimClock, Tick};
use sl_mobility::{MobilityEngine, Mover};
use sl_schedule::{Job, Scheduler};
use sl_spatial::PathFinder;
use sl_world::World;
use tracing::info;

use crate::{SimError, SimObserver, SimResult};

/// The main simulation runner.
///
/// Owns the world and every carriage.  Carriages never hold references into
/// the world; each call receives a [`LogisticsContext`] split off from the
/// `Sim`'s own fields for the duration of that call.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<R: PathFinder> {
    pub config:    LogisticsConfig,
    pub clock:     SimClock,
    pub world:     World,
    /// Indexed by `CarriageId`.
    pub carriages: Vec<Carriage>,
    pub ledger:    ReservationLedger,
    pub scheduler: Scheduler,
    pub mobility:  MobilityEngine<R>,
    /// Events of the tick being processed; reused between ticks.
    events:        Vec<LogisticsEvent>,
}

impl<R: PathFinder> Sim<R> {
    pub(crate) fn new(
        config:   LogisticsConfig,
        world:    World,
        carriages: Vec<Carriage>,
        mobility: MobilityEngine<R>,
    ) -> Self {
        Self {
            clock: config.make_clock(),
            config,
            world,
            carriages,
            ledger: ReservationLedger::new(),
            scheduler: Scheduler::new(),
            mobility,
            events: Vec::new(),
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`.
    ///
    /// Stops at the first error; carriage invariant violations are never
    /// skipped over.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        info!(
            carriages = self.carriages.len(),
            from = %self.clock.current_tick,
            to = %self.config.end_tick(),
            "simulation start"
        );
        while self.clock.current_tick < self.config.end_tick() {
            self.step(observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        info!(tick = %self.clock.current_tick, "simulation end");
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    pub fn carriage(&self, id: CarriageId) -> SimResult<&Carriage> {
        self.carriages.get(id.index()).ok_or(SimError::UnknownCarriage(id))
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        self.process_tick(now)?;
        for event in &self.events {
            observer.on_event(now, event);
        }
        observer.on_tick_end(now, self.events.len());
        self.clock.advance();
        Ok(())
    }

    fn process_tick(&mut self, now: Tick) -> SimResult<()> {
        self.events.clear();

        // ── Phase 1: arrivals ─────────────────────────────────────────────
        //
        // Animal positions are written back first so every carriage sees
        // where the animals stand at the end of this tick's movement.
        let arrived = self.mobility.tick_arrivals(now);
        for &(mover, at) in &arrived {
            if let Mover::Animal(a) = mover {
                self.world.animal_mut(a)?.position = at;
            }
        }
        for (mover, at) in arrived {
            match mover {
                Mover::Carriage(id) => {
                    let (carriages, mut ctx) = self.split(now);
                    carriage_mut(carriages, id)?.on_arrival(&mut ctx, at)?;
                }
                Mover::Animal(a) => {
                    if let Some(by) = self.world.animal(a)?.herder() {
                        let (carriages, mut ctx) = self.split(now);
                        carriage_mut(carriages, by)?.on_escort_arrived(&mut ctx)?;
                    }
                }
            }
        }

        // ── Phase 2: scheduled jobs ───────────────────────────────────────
        let Some(jobs) = self.scheduler.drain_tick(now) else {
            return Ok(());
        };
        for job in jobs {
            match job {
                Job::SendCarriage(id) => {
                    let (carriages, mut ctx) = self.split(now);
                    carriage_mut(carriages, id)?.send(&mut ctx)?;
                }
                Job::Produce(id) => self.produce(now, id)?,
            }
        }
        Ok(())
    }

    /// One production step for `id`, then queue the next one.
    fn produce(&mut self, now: Tick, id: ProducerId) -> SimResult<()> {
        let amount = self.world.step_production(id)?;
        let Some(line) = self.world.producer(id)?.line else {
            return Ok(());
        };
        if amount > 0 {
            self.events.push(LogisticsEvent::Produced { producer: id, resource: line.resource, amount });
        }
        let delay = self.config.secs_to_ticks(line.interval_secs);
        self.scheduler.schedule_once(Job::Produce(id), now, delay);
        Ok(())
    }

    /// Borrow the carriages and a context over every other field at once.
    pub(crate) fn split(&mut self, now: Tick) -> (&mut [Carriage], LogisticsContext<'_, R>) {
        let ctx = LogisticsContext {
            now,
            config:    &self.config,
            world:     &mut self.world,
            ledger:    &mut self.ledger,
            mobility:  &mut self.mobility,
            scheduler: &mut self.scheduler,
            events:    &mut self.events,
        };
        (&mut self.carriages, ctx)
    }
}

fn carriage_mut(carriages: &mut [Carriage], id: CarriageId) -> SimResult<&mut Carriage> {
    carriages.get_mut(id.index()).ok_or(SimError::UnknownCarriage(id))
}
