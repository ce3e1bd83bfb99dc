use sl_core::{BuildingId, CarriageId, Point, ProducerId, Rect, ResourceId};
use sl_mobility::MobilityError;
use sl_world::WorldError;
use thiserror::Error;

use crate::CarriageState;

#[derive(Debug, Error)]
pub enum CarriageError {
    #[error("{0} still holds a target or cargo before starting a new trip")]
    CarryOver(CarriageId),

    #[error("{carriage} arrived at {at}, outside its pickup footprint {footprint}")]
    ArrivalMismatch { carriage: CarriageId, at: Point, footprint: Rect },

    #[error("{0} has no path back home")]
    NoReturnPath(CarriageId),

    #[error("{carriage} still holds {amount} of {resource} after unloading")]
    ResidualCargo { carriage: CarriageId, resource: ResourceId, amount: u32 },

    #[error("{carriage} loaded {received} of {resource} but its hold took only {stored}")]
    HoldOverflow { carriage: CarriageId, resource: ResourceId, received: u32, stored: u32 },

    #[error("{carriage} received an arrival while {state:?}")]
    UnexpectedArrival { carriage: CarriageId, state: CarriageState },

    #[error("{0} has no pickup target")]
    MissingTarget(CarriageId),

    #[error("{carriage} already holds a reservation at {producer}")]
    AlreadyReserved { carriage: CarriageId, producer: ProducerId },

    #[error("{0} consumes nothing; a carriage would never find work")]
    NoConsumedResources(BuildingId),

    #[error("{0} has no animal list")]
    NotAFarm(BuildingId),

    #[error("{0} is not owned by an animal")]
    NoAnimal(ProducerId),

    #[error("unknown building {0}")]
    UnknownBuilding(BuildingId),

    #[error(transparent)]
    World(#[from] WorldError),

    #[error(transparent)]
    Mobility(#[from] MobilityError),
}

pub type CarriageResult<T> = Result<T, CarriageError>;
