//! Spatial-subsystem error type.

use thiserror::Error;

use sl_core::Point;

/// Errors produced by `sl-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("no path from {from} to {to}")]
    NoPath { from: Point, to: Point },

    #[error("tile {0} is outside the map")]
    OutOfBounds(Point),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
