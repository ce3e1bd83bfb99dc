use sl_core::Point;
use sl_spatial::SpatialError;
use thiserror::Error;

use crate::Mover;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("{0} is already in transit")]
    AlreadyInTransit(Mover),

    #[error("{0} has not been placed on the map")]
    NotPlaced(Mover),

    #[error("{mover} is at {at} but its path starts at {start}")]
    PathStart { mover: Mover, at: Point, start: Point },

    #[error("routing failed: {0}")]
    Routing(#[from] SpatialError),
}

pub type MobilityResult<T> = Result<T, MobilityError>;
