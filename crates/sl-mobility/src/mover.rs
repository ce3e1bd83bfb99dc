use std::fmt;

use sl_core::{AnimalId, CarriageId};

/// Anything the mobility engine moves.
///
/// The derived order (all carriages, then all animals, each by id) is the
/// order arrivals are reported in.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Mover {
    Carriage(CarriageId),
    Animal(AnimalId),
}

impl fmt::Display for Mover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mover::Carriage(id) => write!(f, "{id}"),
            Mover::Animal(id)   => write!(f, "{id}"),
        }
    }
}
