use sl_carriage::CarriageError;
use sl_core::{CarriageId, CoreError};
use sl_mobility::MobilityError;
use sl_world::WorldError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("carriage error: {0}")]
    Carriage(#[from] CarriageError),

    #[error("world error: {0}")]
    World(#[from] WorldError),

    #[error("mobility error: {0}")]
    Mobility(#[from] MobilityError),

    #[error("job refers to unknown carriage {0}")]
    UnknownCarriage(CarriageId),
}

pub type SimResult<T> = Result<T, SimError>;
