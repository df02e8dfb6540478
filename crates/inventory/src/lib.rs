//! Inventory aging domain module.
//!
//! This crate contains the shop's aging rules, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod engine;
pub mod item;
pub mod kind;
pub mod roster;
pub mod rules;
pub mod simulation;

pub use engine::{GildedRose, advance_one_day};
pub use item::{Item, LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};
pub use kind::{ItemKind, registry};
pub use simulation::DaySnapshot;
