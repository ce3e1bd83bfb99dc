//! Fluent builder for constructing a [`Sim`].

use sl_carriage::{AnimalPolicy, BuildingPolicy, Carriage, CarriageSpec, PickupPolicy, StoragePolicy};
use sl_core::{BuildingId, CarriageId, LogisticsConfig, Tick};
use sl_mobility::{MobilityEngine, Mover};
use sl_schedule::Job;
use sl_spatial::PathFinder;
use sl_world::World;
use tracing::info;

use crate::{Sim, SimResult};

/// Fluent builder for [`Sim<R>`].
///
/// # Required inputs
///
/// - [`LogisticsConfig`]: tick rates, run length, seed
/// - [`World`]: map, buildings, producers, animals
/// - `R: PathFinder`: the routing algorithm (e.g. [`sl_spatial::GridRouter`])
///
/// Carriages are added one at a time; their ids follow insertion order.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, world, GridRouter)
///     .storage_carriage(warehouse)
///     .carriage(BuildingPolicy, CarriageSpec::new(mill).capacity(2, 4))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<R: PathFinder> {
    config:    LogisticsConfig,
    world:     World,
    router:    R,
    carriages: Vec<(Box<dyn PickupPolicy>, CarriageSpec)>,
}

impl<R: PathFinder> SimBuilder<R> {
    pub fn new(config: LogisticsConfig, world: World, router: R) -> Self {
        Self { config, world, router, carriages: Vec::new() }
    }

    /// Add a carriage with an explicit policy and spec.
    pub fn carriage<P: PickupPolicy + 'static>(mut self, policy: P, spec: CarriageSpec) -> Self {
        self.carriages.push((Box::new(policy), spec));
        self
    }

    pub fn building_carriage(self, consumer: BuildingId) -> Self {
        self.carriage(BuildingPolicy, CarriageSpec::new(consumer))
    }

    pub fn storage_carriage(self, consumer: BuildingId) -> Self {
        self.carriage(StoragePolicy, CarriageSpec::new(consumer))
    }

    pub fn animal_carriage(self, farm: BuildingId) -> Self {
        self.carriage(AnimalPolicy, CarriageSpec::new(farm))
    }

    /// Validate inputs, place every mover, arm every carriage and production
    /// line, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<R>> {
        self.config.validate()?;

        let carriages = self
            .carriages
            .into_iter()
            .enumerate()
            .map(|(i, (policy, spec))| Carriage::new(CarriageId(i as u32), &self.world, policy, spec))
            .collect::<Result<Vec<_>, _>>()?;

        // ── Place movers ──────────────────────────────────────────────────
        let mut mobility = MobilityEngine::new(self.router);
        for c in &carriages {
            mobility.place(Mover::Carriage(c.id), c.position, Tick::ZERO);
        }
        for a in &self.world.animals {
            mobility.place(Mover::Animal(a.id), a.position, Tick::ZERO);
        }

        let mut sim = Sim::new(self.config, self.world, carriages, mobility);

        // ── Arm carriages and production lines ────────────────────────────
        let (carriages, mut ctx) = sim.split(Tick::ZERO);
        for c in carriages.iter_mut() {
            c.arm(&mut ctx);
        }
        let lines: Vec<_> = sim
            .world
            .producers
            .iter()
            .filter_map(|p| p.line.map(|l| (p.id, l.interval_secs)))
            .collect();
        for &(id, secs) in &lines {
            let delay = sim.config.secs_to_ticks(secs);
            sim.scheduler.schedule_once(Job::Produce(id), Tick::ZERO, delay);
        }

        info!(
            carriages = sim.carriages.len(),
            production_lines = lines.len(),
            buildings = sim.world.buildings.len(),
            "simulation built"
        );
        Ok(sim)
    }
}
