//! Producer sites: the pickup sources carriages fetch from.
//!
//! A producer is owned either by a building (a lumberjack's log pile) or by
//! an animal (a sheep's wool).  Its stock lives in its own
//! [`SpecializedStorage`], separate from the owning building's consumer
//! inventory.

use sl_core::{AnimalId, BuildingId, ProducerId, ResourceId};

use crate::{SpecializedStorage, Storage};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ProducerOwner {
    Building(BuildingId),
    Animal(AnimalId),
}

/// Periodic output: `amount` units of `resource` every `interval_secs`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ProductionLine {
    pub resource:      ResourceId,
    pub amount:        u32,
    pub interval_secs: u64,
}

#[derive(Clone, Debug)]
pub struct Producer {
    pub id:        ProducerId,
    pub owner:     ProducerOwner,
    /// Producible kinds, in the order carriages scan them.
    pub produces:  Vec<ResourceId>,
    pub inventory: SpecializedStorage,
    pub line:      Option<ProductionLine>,
}

impl Producer {
    /// Take up to `requested` units of `res`.  Returns the amount actually
    /// removed, which is less than requested when stock ran low.
    pub fn remove_resource(&mut self, res: ResourceId, requested: u32) -> u32 {
        (-self.inventory.alter_inventory(res, -(requested as i64))) as u32
    }

    /// Run one production step.  Returns the units added (0 when full or
    /// without a production line).
    pub fn produce(&mut self) -> u32 {
        match self.line {
            Some(line) => self.inventory.alter_inventory(line.resource, line.amount as i64) as u32,
            None => 0,
        }
    }

    #[inline]
    pub fn stock(&self, res: ResourceId) -> u32 {
        self.inventory.get_value(res)
    }
}

// ── ProducerSpec ──────────────────────────────────────────────────────────────

/// Fluent description of a producer.
#[derive(Clone, Debug, Default)]
pub struct ProducerSpec {
    pub(crate) produces:  Vec<ResourceId>,
    pub(crate) inventory: SpecializedStorage,
    pub(crate) line:      Option<ProductionLine>,
}

impl ProducerSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce `res`, holding up to `capacity` units.
    pub fn produces(mut self, res: ResourceId, capacity: u32) -> Self {
        if !self.produces.contains(&res) {
            self.produces.push(res);
        }
        self.inventory.set_limit(res, capacity);
        self
    }

    /// Initial stock.  Clamped to the capacity given in [`produces`](Self::produces).
    pub fn stock(mut self, res: ResourceId, amount: u32) -> Self {
        self.inventory.alter_inventory(res, amount as i64);
        self
    }

    pub fn line(mut self, resource: ResourceId, amount: u32, interval_secs: u64) -> Self {
        self.line = Some(ProductionLine { resource, amount, interval_secs });
        self
    }
}
