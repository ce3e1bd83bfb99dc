//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub`; arenas
//! in `sl-world` and `sl-sim` index their `Vec`s with `.index()`.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a carriage in the simulation's carriage list.
    pub struct CarriageId(u32);
}

typed_id! {
    /// Index of a building in the world arena.
    pub struct BuildingId(u32);
}

typed_id! {
    /// Index of a producer (building workshop or animal production) in the
    /// world arena.  Reservations are keyed by this id.
    pub struct ProducerId(u32);
}

typed_id! {
    /// Index of an animal in the world arena.
    pub struct AnimalId(u32);
}

typed_id! {
    /// Settlement a building belongs to.  Building carriages only collect
    /// from producers of their own settlement.
    pub struct SettlementId(u16);
}

typed_id! {
    /// Resource kind (wood, wool, tools, ...).  `u16` keeps inventories compact.
    pub struct ResourceId(u16);
}
