//! `sl-world` — the objects carriages move resources between.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`storage`]   | `Storage` trait, `ArbitraryStorage`, `SpecializedStorage`  |
//! | [`building`]  | `Building`, `BuildingSpec`                                 |
//! | [`producer`]  | `Producer`, `ProducerOwner`, `ProductionLine`, `ProducerSpec` |
//! | [`animal`]    | `Animal`, `AnimalState`                                    |
//! | [`world`]     | `World` (map + arenas), `WorldBuilder`                     |
//! | [`loader`]    | `load_settlement_csv`, `load_settlement_reader`            |
//! | [`generate`]  | `random_settlement`, `SettlementParams`                    |
//! | [`error`]     | `WorldError`, `WorldResult<T>`                             |
//!
//! # Arenas
//!
//! Buildings, producers, and animals live in plain `Vec`s inside [`World`]
//! and are addressed by their typed ids (`BuildingId(n)` is index `n`).
//! Nothing is ever removed during a run, so ids stay valid for its lifetime.

pub mod animal;
pub mod building;
pub mod error;
pub mod generate;
pub mod loader;
pub mod producer;
pub mod storage;
pub mod world;


pub use animal::{Animal, AnimalState};
pub use building::{Building, BuildingSpec};
pub use error::{WorldError, WorldResult};
pub use generate::{random_settlement, GeneratedSettlement, SettlementParams};
pub use loader::{load_settlement_csv, load_settlement_reader};
pub use producer::{Producer, ProducerOwner, ProducerSpec, ProductionLine};
pub use storage::{ArbitraryStorage, SpecializedStorage, Storage};
pub use world::{World, WorldBuilder};
