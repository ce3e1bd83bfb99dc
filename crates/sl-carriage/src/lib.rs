//! `sl-carriage` — autonomous resource carriages.
//!
//! A carriage serves one consumer building.  Periodically it looks for a
//! producer holding something the consumer has room for, reserves that
//! pickup against other carriages, drives there, loads what is actually
//! available, drives home, unloads, and immediately searches again.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`policy`]   | `PickupPolicy` trait; `BuildingPolicy`, `StoragePolicy`, `AnimalPolicy` |
//! | [`scan`]     | `needed_resources`, `scan_candidates`, `Candidate`          |
//! | [`rating`]   | `rate_candidates`, `select_best`, `commit_amount`           |
//! | [`ledger`]   | `ReservationLedger` — who is en route to which producer     |
//! | [`carriage`] | `Carriage`, `CarriageSpec`, `CarriageState`, `PickupTarget` |
//! | [`context`]  | `LogisticsContext` — mutable world handles for one call     |
//! | [`event`]    | `LogisticsEvent`                                            |
//! | [`error`]    | `CarriageError`, `CarriageResult<T>`                        |
//!
//! # Trip lifecycle
//!
//! ```text
//! Idle ──arm──▶ SearchPending ──send──▶ TravelingToPickup ──arrive──▶ (transfer)
//!                  ▲      │ no candidate                                 │
//!                  └──────┘ re-arm after interval                        ▼
//!   send ◀── (unload) ◀──arrive── TravelingHome ◀────────────────────────┘
//! ```
//!
//! The animal variant replaces the pickup leg's tail: the carriage herds the
//! animal, both travel home independently (`TravelingToDropPoint`, possibly
//! `AwaitingAnimalArrival`), and the transfer and unload happen together.
//!
//! # Errors
//!
//! "Nothing to fetch" is not an error: `send` returns `Ok(false)` and re-arms.
//! Accounting violations (cargo left over before a new trip, arriving
//! somewhere other than the target, no way home) are [`CarriageError`]s that
//! the simulation loop propagates, aborting the run.

pub mod carriage;
pub mod context;
pub mod error;
pub mod event;
pub mod ledger;
pub mod policy;
pub mod rating;
pub mod scan;


pub use carriage::{Carriage, CarriageSpec, CarriageState, PickupTarget};
pub use context::LogisticsContext;
pub use error::{CarriageError, CarriageResult};
pub use event::LogisticsEvent;
pub use ledger::{Reservation, ReservationLedger};
pub use policy::{AnimalPolicy, BuildingPolicy, PickupPlace, PickupPolicy, StoragePolicy};
pub use rating::{commit_amount, rate_candidates, select_best};
pub use scan::{needed_resources, scan_candidates, Candidate};
