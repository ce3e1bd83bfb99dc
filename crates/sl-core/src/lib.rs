//! `sl-core` — foundational types for the settlement logistics workspace.
//!
//! This crate is a dependency of every other `sl-*` crate.  It has no `sl-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`ids`]         | `CarriageId`, `BuildingId`, `ProducerId`, `AnimalId`, `SettlementId`, `ResourceId` |
//! | [`geo`]         | `Point`, `Rect`, rectangle-to-rectangle distance           |
//! | [`time`]        | `Tick`, `SimClock`, `LogisticsConfig`                      |
//! | [`rng`]         | `SimRng` (seeded layout generation)                        |
//! | [`movement`]    | `MovementKind` enum                                        |
//! | [`error`]       | `CoreError`, `CoreResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod geo;
pub mod ids;
pub mod movement;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{Point, Rect};
pub use ids::{AnimalId, BuildingId, CarriageId, ProducerId, ResourceId, SettlementId};
pub use movement::MovementKind;
pub use rng::SimRng;
pub use time::{LogisticsConfig, SimClock, Tick};
