//! `sl-spatial` — tile map, movement domains, and path finding.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`map`]     | `TileMap`, `TileKind`                                       |
//! | [`domain`]  | `MovementDomain` — which tiles a unit may enter             |
//! | [`router`]  | `PathFinder` trait, `Path`, `GridRouter`                    |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod domain;
pub mod error;
pub mod map;
pub mod router;

#[cfg(test)]
mod tests;

pub use domain::MovementDomain;
pub use error::{SpatialError, SpatialResult};
pub use map::{TileKind, TileMap};
pub use router::{GridRouter, Path, PathFinder};
