//! Movement kind shared by the carriage variants and the router.
//!
//! The router in `sl-spatial` turns a kind plus an anchor footprint into a
//! concrete `MovementDomain`.

/// Which tiles a unit may walk on.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MovementKind {
    /// Any passable tile within the anchor building's radius.
    #[default]
    Radius,
    /// Road tiles (and building footprints connected to them) only.
    Road,
}

impl MovementKind {
    /// Human-readable label used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            MovementKind::Radius => "radius",
            MovementKind::Road   => "road",
        }
    }
}

impl std::fmt::Display for MovementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
