//! Buildings: consumers, producer sites, and farms.

use sl_core::{AnimalId, BuildingId, ProducerId, Rect, ResourceId, SettlementId};

use crate::SpecializedStorage;

/// A placed building.
///
/// A building consumes the kinds in `consumes` into its own `inventory`,
/// may own one producer site, and, when `animals` is `Some`, acts as a farm
/// whose grazing animals are pickup sources for an animal carriage.
#[derive(Clone, Debug)]
pub struct Building {
    pub id:         BuildingId,
    pub settlement: SettlementId,
    pub name:       String,
    pub footprint:  Rect,
    /// Movement radius for carriages anchored here, in tiles.
    pub radius:     u32,
    pub inventory:  SpecializedStorage,
    /// Consumed resource kinds, in the order carriages scan them.
    pub consumes:   Vec<ResourceId>,
    pub producer:   Option<ProducerId>,
    pub animals:    Option<Vec<AnimalId>>,
}

impl Building {
    #[inline]
    pub fn is_farm(&self) -> bool {
        self.animals.is_some()
    }
}

// ── BuildingSpec ──────────────────────────────────────────────────────────────

/// Fluent description of a building, consumed by
/// [`WorldBuilder::add_building`](crate::WorldBuilder::add_building).
///
/// # Usage
///
/// ```rust
/// use sl_core::{Point, Rect, ResourceId};
/// use sl_world::BuildingSpec;
///
/// let spec = BuildingSpec::new("toolmaker", Rect::new(Point::new(4, 4), 2, 2))
///     .radius(12)
///     .consumes(ResourceId(0), 8);
/// assert_eq!(spec.consumed(), &[ResourceId(0)]);
/// ```
#[derive(Clone, Debug)]
pub struct BuildingSpec {
    pub(crate) name:       String,
    pub(crate) footprint:  Rect,
    pub(crate) settlement: SettlementId,
    pub(crate) radius:     u32,
    pub(crate) inventory:  SpecializedStorage,
    pub(crate) consumes:   Vec<ResourceId>,
    pub(crate) farm:       bool,
}

impl BuildingSpec {
    pub fn new(name: impl Into<String>, footprint: Rect) -> Self {
        Self {
            name: name.into(),
            footprint,
            settlement: SettlementId(0),
            radius:     0,
            inventory:  SpecializedStorage::new(),
            consumes:   Vec::new(),
            farm:       false,
        }
    }

    pub fn settlement(mut self, id: SettlementId) -> Self {
        self.settlement = id;
        self
    }

    pub fn radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    /// Consume `res`, storing up to `capacity` units.
    pub fn consumes(mut self, res: ResourceId, capacity: u32) -> Self {
        if !self.consumes.contains(&res) {
            self.consumes.push(res);
        }
        self.inventory.set_limit(res, capacity);
        self
    }

    /// Mark the building as a farm.  Animals are attached afterwards with
    /// [`WorldBuilder::add_animal`](crate::WorldBuilder::add_animal).
    pub fn farm(mut self) -> Self {
        self.farm = true;
        self
    }

    pub fn consumed(&self) -> &[ResourceId] {
        &self.consumes
    }
}
