//! Playable races and the factory that builds them.
//!
//! A [`Race`] is a [`RaceKind`] plus the immutable ability bonus that kind
//! grants. [`select_race`] turns a numeric identifier (or "random") into a
//! freshly owned `Race`.

pub mod bonus;
pub mod factory;
pub mod kind;

pub use bonus::Race;
pub use factory::{random_race_id, select_race};
pub use kind::RaceKind;
