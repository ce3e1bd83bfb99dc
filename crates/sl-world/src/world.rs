//! `World`: the tile map plus the building, producer, and animal arenas.

use sl_core::{AnimalId, BuildingId, Point, ProducerId, Rect, SettlementId};
use sl_spatial::{TileKind, TileMap};

use crate::{
    Animal, AnimalState, Building, BuildingSpec, Producer, ProducerOwner, ProducerSpec,
    WorldError, WorldResult,
};

// ── World ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct World {
    pub map:       TileMap,
    pub buildings: Vec<Building>,
    pub producers: Vec<Producer>,
    pub animals:   Vec<Animal>,
}

impl World {
    pub fn building(&self, id: BuildingId) -> WorldResult<&Building> {
        self.buildings.get(id.index()).ok_or(WorldError::BuildingNotFound(id))
    }

    pub fn building_mut(&mut self, id: BuildingId) -> WorldResult<&mut Building> {
        self.buildings.get_mut(id.index()).ok_or(WorldError::BuildingNotFound(id))
    }

    pub fn producer(&self, id: ProducerId) -> WorldResult<&Producer> {
        self.producers.get(id.index()).ok_or(WorldError::ProducerNotFound(id))
    }

    pub fn producer_mut(&mut self, id: ProducerId) -> WorldResult<&mut Producer> {
        self.producers.get_mut(id.index()).ok_or(WorldError::ProducerNotFound(id))
    }

    pub fn animal(&self, id: AnimalId) -> WorldResult<&Animal> {
        self.animals.get(id.index()).ok_or(WorldError::AnimalNotFound(id))
    }

    pub fn animal_mut(&mut self, id: AnimalId) -> WorldResult<&mut Animal> {
        self.animals.get_mut(id.index()).ok_or(WorldError::AnimalNotFound(id))
    }

    /// Footprint a carriage must reach to load from `id`: the owning
    /// building's footprint, or the single tile the animal stands on.
    pub fn source_footprint(&self, id: ProducerId) -> WorldResult<Rect> {
        match self.producer(id)?.owner {
            ProducerOwner::Building(b) => Ok(self.building(b)?.footprint),
            ProducerOwner::Animal(a)   => Ok(Rect::from_point(self.animal(a)?.position)),
        }
    }

    /// Buildings of settlement `id`, in id order.
    pub fn settlement_buildings(&self, id: SettlementId) -> impl Iterator<Item = &Building> + '_ {
        self.buildings.iter().filter(move |b| b.settlement == id)
    }

    /// Building-owned producers of settlement `id`, in producer id order.
    pub fn settlement_producers(&self, id: SettlementId) -> impl Iterator<Item = &Producer> + '_ {
        self.producers.iter().filter(move |p| match p.owner {
            ProducerOwner::Building(b) => {
                self.buildings.get(b.index()).is_some_and(|b| b.settlement == id)
            }
            ProducerOwner::Animal(_) => false,
        })
    }

    /// Producers of the animals living on `farm`.
    pub fn farm_producers(&self, farm: BuildingId) -> WorldResult<Vec<ProducerId>> {
        let animals = self
            .building(farm)?
            .animals
            .as_ref()
            .ok_or(WorldError::NotAFarm(farm))?;
        animals.iter().map(|&a| Ok(self.animal(a)?.producer)).collect()
    }

    /// The animal owning producer `id`, if it is an animal producer.
    pub fn animal_for_producer(&self, id: ProducerId) -> WorldResult<Option<AnimalId>> {
        Ok(match self.producer(id)?.owner {
            ProducerOwner::Animal(a)   => Some(a),
            ProducerOwner::Building(_) => None,
        })
    }

    /// Run one production step for `id`.  Herded animals produce nothing.
    pub fn step_production(&mut self, id: ProducerId) -> WorldResult<u32> {
        if let Some(a) = self.animal_for_producer(id)? {
            if self.animal(a)?.state != AnimalState::Grazing {
                return Ok(0);
            }
        }
        Ok(self.producer_mut(id)?.produce())
    }
}

// ── WorldBuilder ──────────────────────────────────────────────────────────────

/// Incremental construction of a [`World`].
///
/// # Usage
///
/// ```rust
/// use sl_core::{Point, Rect, ResourceId};
/// use sl_spatial::TileMap;
/// use sl_world::{BuildingSpec, ProducerSpec, WorldBuilder};
///
/// let wood = ResourceId(0);
/// let mut b = WorldBuilder::new(TileMap::new(16, 16));
/// let mill = b.add_building(BuildingSpec::new("mill", Rect::new(Point::new(2, 2), 2, 2))
///     .radius(8)
///     .consumes(wood, 10));
/// let camp = b.add_building(BuildingSpec::new("camp", Rect::new(Point::new(8, 2), 2, 2)));
/// b.add_producer(camp, ProducerSpec::new().produces(wood, 20).stock(wood, 5)).unwrap();
/// let world = b.build();
/// assert_eq!(world.buildings.len(), 2);
/// assert_eq!(world.building(mill).unwrap().consumes, vec![wood]);
/// ```
pub struct WorldBuilder {
    world: World,
}

impl WorldBuilder {
    pub fn new(map: TileMap) -> Self {
        Self {
            world: World {
                map,
                buildings: Vec::new(),
                producers: Vec::new(),
                animals:   Vec::new(),
            },
        }
    }

    /// Direct map access, e.g. for laying roads between buildings.
    pub fn map_mut(&mut self) -> &mut TileMap {
        &mut self.world.map
    }

    /// Place a building and mark its footprint on the map.
    pub fn add_building(&mut self, spec: BuildingSpec) -> BuildingId {
        let id = BuildingId(self.world.buildings.len() as u32);
        self.world.map.fill(spec.footprint, TileKind::Building);
        self.world.buildings.push(Building {
            id,
            settlement: spec.settlement,
            name:       spec.name,
            footprint:  spec.footprint,
            radius:     spec.radius,
            inventory:  spec.inventory,
            consumes:   spec.consumes,
            producer:   None,
            animals:    spec.farm.then(Vec::new),
        });
        id
    }

    /// Attach a producer site to `building`, replacing any earlier one.
    pub fn add_producer(&mut self, building: BuildingId, spec: ProducerSpec) -> WorldResult<ProducerId> {
        self.world.building(building)?;
        let id = self.push_producer(ProducerOwner::Building(building), spec);
        self.world.building_mut(building)?.producer = Some(id);
        Ok(id)
    }

    /// Put a grazing animal on `farm` at `position`.
    pub fn add_animal(&mut self, farm: BuildingId, position: Point, spec: ProducerSpec) -> WorldResult<AnimalId> {
        if !self.world.building(farm)?.is_farm() {
            return Err(WorldError::NotAFarm(farm));
        }
        let id = AnimalId(self.world.animals.len() as u32);
        let producer = self.push_producer(ProducerOwner::Animal(id), spec);
        self.world.animals.push(Animal {
            id,
            farm,
            producer,
            position,
            state: AnimalState::Grazing,
        });
        if let Some(list) = self.world.building_mut(farm)?.animals.as_mut() {
            list.push(id);
        }
        Ok(id)
    }

    pub fn build(self) -> World {
        self.world
    }

    fn push_producer(&mut self, owner: ProducerOwner, spec: ProducerSpec) -> ProducerId {
        let id = ProducerId(self.world.producers.len() as u32);
        self.world.producers.push(Producer {
            id,
            owner,
            produces:  spec.produces,
            inventory: spec.inventory,
            line:      spec.line,
        });
        id
    }
}
