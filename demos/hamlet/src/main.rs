//! hamlet — small end-to-end run of the settlement logistics workspace.
//!
//! A road-side warehouse, a toolmaker fed by a lumberjack and a quarry, and a
//! sheep farm whose herder walks grazing sheep home to be shorn.
//!
//! ```text
//! hamlet [config.json] [settlement.csv]
//! ```
//!
//! `config.json` is a serialized `LogisticsConfig`.  With `settlement.csv` the
//! built-in hamlet is replaced by the loaded buildings, one carriage per
//! consuming building.  Log verbosity follows `RUST_LOG` (default `info`).

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::prelude::*;

use sl_carriage::{BuildingPolicy, CarriageSpec, LogisticsEvent};
use sl_core::{BuildingId, CarriageId, LogisticsConfig, Point, Rect, ResourceId, Tick};
use sl_sim::{SimBuilder, SimObserver};
use sl_spatial::{GridRouter, TileMap};
use sl_world::{load_settlement_csv, BuildingSpec, ProducerSpec, Storage, World, WorldBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const WOOD:  ResourceId = ResourceId(0);
const STONE: ResourceId = ResourceId(1);
const WOOL:  ResourceId = ResourceId(2);

const RESOURCE_NAMES: [&str; 3] = ["wood", "stone", "wool"];

const MAP_WIDTH:  u32 = 40;
const MAP_HEIGHT: u32 = 24;
const SIM_MINUTES: u64 = 10;

// ── World ─────────────────────────────────────────────────────────────────────

struct Hamlet {
    world:      World,
    warehouse:  BuildingId,
    toolmaker:  BuildingId,
    sheep_farm: BuildingId,
}

fn build_hamlet() -> Result<Hamlet> {
    let mut b = WorldBuilder::new(TileMap::new(MAP_WIDTH, MAP_HEIGHT));
    // Main street along y = 10 with a lane up to the quarry.
    b.map_mut().lay_road(Point::new(0, 10), Point::new(MAP_WIDTH as i32 - 1, 10));
    b.map_mut().lay_road(Point::new(24, 2), Point::new(24, 10));

    let warehouse = b.add_building(
        BuildingSpec::new("warehouse", Rect::new(Point::new(10, 11), 4, 3))
            .radius(30)
            .consumes(WOOD, 40)
            .consumes(STONE, 40),
    );
    let toolmaker = b.add_building(
        BuildingSpec::new("toolmaker", Rect::new(Point::new(16, 7), 3, 3))
            .radius(14)
            .consumes(WOOD, 10)
            .consumes(STONE, 10),
    );

    let lumberjack = b.add_building(BuildingSpec::new("lumberjack", Rect::new(Point::new(4, 8), 2, 2)));
    b.add_producer(
        lumberjack,
        ProducerSpec::new().produces(WOOD, 30).stock(WOOD, 10).line(WOOD, 2, 4),
    )?;
    let quarry = b.add_building(BuildingSpec::new("quarry", Rect::new(Point::new(25, 2), 3, 2)));
    b.add_producer(
        quarry,
        ProducerSpec::new().produces(STONE, 30).stock(STONE, 6).line(STONE, 1, 5),
    )?;

    let sheep_farm = b.add_building(
        BuildingSpec::new("sheep farm", Rect::new(Point::new(30, 14), 3, 3))
            .radius(8)
            .consumes(WOOL, 20)
            .farm(),
    );
    for at in [Point::new(35, 18), Point::new(28, 20), Point::new(36, 13)] {
        b.add_animal(
            sheep_farm,
            at,
            ProducerSpec::new().produces(WOOL, 5).stock(WOOL, 2).line(WOOL, 1, 8),
        )?;
    }

    Ok(Hamlet { world: b.build(), warehouse, toolmaker, sheep_farm })
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Tally {
    trips:          u32,
    failed_search:  u32,
    unreachable:    u32,
    herded:         u32,
    delivered:      BTreeMap<ResourceId, u32>,
    spilled:        u32,
    produced:       u32,
    last_delivery:  Option<Tick>,
    /// Events per carriage.
    per_carriage:   BTreeMap<CarriageId, u32>,
}

impl SimObserver for Tally {
    fn on_event(&mut self, tick: Tick, event: &LogisticsEvent) {
        if let Some(id) = event.carriage() {
            *self.per_carriage.entry(id).or_default() += 1;
        }
        match *event {
            LogisticsEvent::PickupCommitted { .. } => self.trips += 1,
            LogisticsEvent::SearchFailed { .. } => self.failed_search += 1,
            LogisticsEvent::CandidateUnreachable { .. } => self.unreachable += 1,
            LogisticsEvent::AnimalHerded { .. } => self.herded += 1,
            LogisticsEvent::Delivered { resource, amount, spilled, .. } => {
                *self.delivered.entry(resource).or_default() += amount;
                self.spilled += spilled;
                self.last_delivery = Some(tick);
            }
            LogisticsEvent::Produced { amount, .. } => self.produced += amount,
            LogisticsEvent::Transferred { .. } | LogisticsEvent::AnimalResumed { .. } => {}
        }
    }
}

fn resource_name(res: ResourceId) -> String {
    RESOURCE_NAMES
        .get(res.index())
        .map_or_else(|| res.to_string(), |name| (*name).to_string())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    // 1. Config: JSON file if given, otherwise ten minutes at the defaults.
    let config = match args.first() {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening config {path}"))?;
            serde_json::from_reader::<_, LogisticsConfig>(file)
                .with_context(|| format!("parsing config {path}"))?
        }
        None => {
            let defaults = LogisticsConfig::default();
            LogisticsConfig { total_ticks: SIM_MINUTES * 60 * defaults.ticks_per_second as u64, ..defaults }
        }
    };
    info!(?config, "configuration");

    // 2. World and carriages.
    let builder = match args.get(1) {
        Some(csv) => {
            let world = load_settlement_csv(Path::new(csv), TileMap::new(MAP_WIDTH * 2, MAP_HEIGHT * 2))
                .with_context(|| format!("loading settlement {csv}"))?;
            let consumers: Vec<BuildingId> = world
                .buildings
                .iter()
                .filter(|b| !b.consumes.is_empty())
                .map(|b| b.id)
                .collect();
            info!(buildings = world.buildings.len(), consumers = consumers.len(), "settlement loaded");
            consumers
                .into_iter()
                .fold(SimBuilder::new(config, world, GridRouter), |b, id| b.building_carriage(id))
        }
        None => {
            let hamlet = build_hamlet()?;
            SimBuilder::new(config, hamlet.world, GridRouter)
                .storage_carriage(hamlet.warehouse)
                .carriage(BuildingPolicy, CarriageSpec::new(hamlet.toolmaker).capacity(1, 4))
                .building_carriage(hamlet.toolmaker)
                .animal_carriage(hamlet.sheep_farm)
        }
    };
    let mut sim = builder.build()?;

    // 3. Run.
    let mut tally = Tally::default();
    let t0 = Instant::now();
    sim.run(&mut tally)?;
    let elapsed = t0.elapsed();

    // 4. Summary.
    println!();
    println!("Simulated {} in {:.3} s", sim.clock, elapsed.as_secs_f64());
    println!("  trips started     : {}", tally.trips);
    println!("  searches failed   : {}", tally.failed_search);
    println!("  unreachable picks : {}", tally.unreachable);
    println!("  animals herded    : {}", tally.herded);
    println!("  units produced    : {}", tally.produced);
    println!("  units spilled     : {}", tally.spilled);
    if let Some(t) = tally.last_delivery {
        println!("  last delivery     : {t}");
    }
    for (res, amount) in &tally.delivered {
        println!("  delivered {:<8}: {amount}", resource_name(*res));
    }
    println!();

    println!("{:<10} {:<10} {:<24} {:>6}", "Carriage", "Policy", "State", "Events");
    println!("{}", "-".repeat(53));
    for c in &sim.carriages {
        let events = tally.per_carriage.get(&c.id).copied().unwrap_or(0);
        println!("{:<10} {:<10} {:<24} {:>6}", c.id.0, c.policy().name(), format!("{:?}", c.state), events);
    }
    println!();

    println!("{:<14} {:<8} {:>6}", "Building", "Resource", "Stock");
    println!("{}", "-".repeat(30));
    for b in &sim.world.buildings {
        for &res in &b.consumes {
            println!("{:<14} {:<8} {:>6}", b.name, resource_name(res), b.inventory.get_value(res));
        }
    }

    Ok(())
}
