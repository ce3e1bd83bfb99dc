//! Farm animals.  Each animal carries its own producer; an animal carriage
//! herds it back to the farm to collect.

use sl_core::{AnimalId, BuildingId, CarriageId, Point, ProducerId};

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum AnimalState {
    /// Roaming and producing on its own.
    #[default]
    Grazing,
    /// Being escorted home by a carriage; produces nothing.
    Herded { by: CarriageId },
}

#[derive(Clone, Debug)]
pub struct Animal {
    pub id:       AnimalId,
    pub farm:     BuildingId,
    pub producer: ProducerId,
    pub position: Point,
    pub state:    AnimalState,
}

impl Animal {
    pub fn herd(&mut self, by: CarriageId) {
        self.state = AnimalState::Herded { by };
    }

    /// Release the animal back to its own behaviour.
    pub fn resume(&mut self) {
        self.state = AnimalState::Grazing;
    }

    #[inline]
    pub fn is_grazing(&self) -> bool {
        self.state == AnimalState::Grazing
    }

    /// The carriage currently escorting this animal, if any.
    pub fn herder(&self) -> Option<CarriageId> {
        match self.state {
            AnimalState::Herded { by } => Some(by),
            AnimalState::Grazing => None,
        }
    }
}
