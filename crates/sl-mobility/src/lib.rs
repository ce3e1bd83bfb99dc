//! `sl-mobility` — who is where, who is travelling, and who arrives when.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                    |
//! |------------|-------------------------------------------------------------|
//! | [`mover`]  | `Mover` — a carriage or an animal                           |
//! | [`state`]  | `MovementState` (stationary / in transit)                   |
//! | [`store`]  | `MobilityStore` — states plus sparse path cache             |
//! | [`engine`] | `MobilityEngine<R>` — path requests, travel, arrivals       |
//! | [`error`]  | `MobilityError`, `MobilityResult<T>`                        |
//!
//! # Travel contract
//!
//! Travel is cooperative: [`MobilityEngine::begin_travel`] returns the arrival
//! tick immediately and the caller learns about the arrival later from
//! [`MobilityEngine::tick_arrivals`].  Movers teleport at arrival; until then
//! they logically remain at their departure tile.

pub mod engine;
pub mod error;
pub mod mover;
pub mod state;
pub mod store;

#[cfg(test)]
mod tests;

pub use engine::MobilityEngine;
pub use error::{MobilityError, MobilityResult};
pub use mover::Mover;
pub use state::MovementState;
pub use store::MobilityStore;
