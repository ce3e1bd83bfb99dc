//! Pickup policies: what a carriage consumes, where it may fetch from, and
//! how it moves.
//!
//! Every carriage kind must say which resources its consumer wants and which
//! places are worth scanning; those two methods have no default so a new
//! kind cannot silently do nothing.  The rest are tunables with defaults.
//!
//! | Policy           | Sources                              | Movement | Interval |
//! |------------------|--------------------------------------|----------|----------|
//! | `BuildingPolicy` | settlement producers except anchor   | radius   | 2 s      |
//! | `StoragePolicy`  | same as `BuildingPolicy`             | roads    | 2 s      |
//! | `AnimalPolicy`   | grazing animals of the anchor farm   | radius   | 10 s     |

use sl_core::{BuildingId, MovementKind, ProducerId, ResourceId};
use sl_world::{ProducerOwner, Storage, World};

use crate::{CarriageError, CarriageResult};

/// A producer worth scanning and the kinds it can supply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickupPlace {
    pub source:    ProducerId,
    pub resources: Vec<ResourceId>,
}

pub trait PickupPolicy: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Consumed kinds of `consumer` paired with its current stock of each.
    fn consumed_resources(&self, world: &World, consumer: BuildingId) -> CarriageResult<Vec<(ResourceId, u32)>>;

    /// Places to scan, in the order the scan should visit them.
    fn pickup_places(&self, world: &World, anchor: BuildingId) -> CarriageResult<Vec<PickupPlace>>;

    /// Seconds between failed searches.
    fn search_interval_secs(&self) -> u64 {
        2
    }

    fn movement(&self) -> MovementKind {
        MovementKind::Radius
    }

    /// `true` if the source itself must be escorted home (animals).
    fn escorts_source(&self) -> bool {
        false
    }

    /// Reject anchors this policy cannot work from.  Called once at
    /// carriage construction.
    fn check_anchor(&self, _world: &World, _anchor: BuildingId) -> CarriageResult<()> {
        Ok(())
    }
}

// ── Shared helpers ────────────────────────────────────────────────────────────

fn consumer_stock(world: &World, consumer: BuildingId) -> CarriageResult<Vec<(ResourceId, u32)>> {
    let b = world.building(consumer)?;
    Ok(b.consumes.iter().map(|&r| (r, b.inventory.get_value(r))).collect())
}

fn settlement_places(world: &World, anchor: BuildingId) -> CarriageResult<Vec<PickupPlace>> {
    let settlement = world.building(anchor)?.settlement;
    Ok(world
        .settlement_producers(settlement)
        .filter(|p| p.owner != ProducerOwner::Building(anchor))
        .map(|p| PickupPlace { source: p.id, resources: p.produces.clone() })
        .collect())
}

// ── BuildingPolicy ────────────────────────────────────────────────────────────

/// Fetches for an ordinary consumer from any producer in its settlement.
#[derive(Copy, Clone, Debug, Default)]
pub struct BuildingPolicy;

impl PickupPolicy for BuildingPolicy {
    fn name(&self) -> &'static str {
        "building"
    }

    fn consumed_resources(&self, world: &World, consumer: BuildingId) -> CarriageResult<Vec<(ResourceId, u32)>> {
        consumer_stock(world, consumer)
    }

    fn pickup_places(&self, world: &World, anchor: BuildingId) -> CarriageResult<Vec<PickupPlace>> {
        settlement_places(world, anchor)
    }
}

// ── StoragePolicy ─────────────────────────────────────────────────────────────

/// Storage tents and branch offices: a building carriage bound to roads.
#[derive(Copy, Clone, Debug, Default)]
pub struct StoragePolicy;

impl PickupPolicy for StoragePolicy {
    fn name(&self) -> &'static str {
        "storage"
    }

    fn consumed_resources(&self, world: &World, consumer: BuildingId) -> CarriageResult<Vec<(ResourceId, u32)>> {
        consumer_stock(world, consumer)
    }

    fn pickup_places(&self, world: &World, anchor: BuildingId) -> CarriageResult<Vec<PickupPlace>> {
        settlement_places(world, anchor)
    }

    fn movement(&self) -> MovementKind {
        MovementKind::Road
    }
}

// ── AnimalPolicy ──────────────────────────────────────────────────────────────

/// Herder: collects from the animals of its farm and walks them home.
#[derive(Copy, Clone, Debug, Default)]
pub struct AnimalPolicy;

impl PickupPolicy for AnimalPolicy {
    fn name(&self) -> &'static str {
        "animal"
    }

    fn consumed_resources(&self, world: &World, consumer: BuildingId) -> CarriageResult<Vec<(ResourceId, u32)>> {
        consumer_stock(world, consumer)
    }

    /// Grazing animals only: a herded animal is already someone's cargo.
    fn pickup_places(&self, world: &World, anchor: BuildingId) -> CarriageResult<Vec<PickupPlace>> {
        let mut places = Vec::new();
        for source in world.farm_producers(anchor)? {
            let producer = world.producer(source)?;
            if let ProducerOwner::Animal(a) = producer.owner {
                if !world.animal(a)?.is_grazing() {
                    continue;
                }
            }
            places.push(PickupPlace { source, resources: producer.produces.clone() });
        }
        Ok(places)
    }

    fn search_interval_secs(&self) -> u64 {
        10
    }

    fn escorts_source(&self) -> bool {
        true
    }

    fn check_anchor(&self, world: &World, anchor: BuildingId) -> CarriageResult<()> {
        if world.building(anchor)?.is_farm() {
            Ok(())
        } else {
            Err(CarriageError::NotAFarm(anchor))
        }
    }
}
