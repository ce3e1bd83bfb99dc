use thiserror::Error;

use sl_core::{AnimalId, BuildingId, ProducerId};

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("unknown building {0}")]
    BuildingNotFound(BuildingId),

    #[error("unknown producer {0}")]
    ProducerNotFound(ProducerId),

    #[error("unknown animal {0}")]
    AnimalNotFound(AnimalId),

    #[error("{0} has no animal list")]
    NotAFarm(BuildingId),

    #[error("settlement layout error: {0}")]
    Layout(String),

    #[error("settlement parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type WorldResult<T> = Result<T, WorldError>;
