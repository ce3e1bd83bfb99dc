//! `sl-schedule` — one-shot delayed jobs keyed by tick.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`job`]       | `Job` — what to run when a tick comes due                 |
//! | [`scheduler`] | `Scheduler` (`BTreeMap<Tick, Vec<Job>>`)                  |
//!
//! # Timer model
//!
//! Every timer is one-shot: a carriage re-arms itself after each search, a
//! producer after each production step.  Jobs are plain data, so the owner of
//! the world (the simulation loop) decides how to run them and no callback
//! ever holds a borrow into the world.

pub mod job;
pub mod scheduler;


pub use job::Job;
pub use scheduler::Scheduler;
