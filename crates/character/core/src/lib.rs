//! Ability scores, races, and character composition for tabletop RPGs.
//!
//! `character-core` models the six ability scores of a character, the playable
//! races that add fixed bonuses to them, and the factory that picks a race by
//! identifier or at random. Everything here is pure: randomness enters only
//! through an injected [`RandomSource`], and no function performs I/O.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`ability`] | `Ability` keys, single `AbilityScore`, the six-entry `AbilityScores` |
//! | [`race`] | `RaceKind` variants, `Race` bonus sets, and the race factory |
//! | [`character`] | A race combined with rolled ability scores |
//! | [`config`] | Tunable roll range and proficiency bonus |
//! | [`env`] | Random number sources |
//! | [`error`] | Error types and the shared `CoreError` trait |
pub mod ability;
pub mod character;
pub mod config;
pub mod env;
pub mod error;
pub mod race;

pub use ability::{Ability, AbilityScore, AbilityScores};
pub use character::Character;
pub use config::{CharacterConfig, ScoreRange};
pub use env::{PcgRng, RandomSource, ScriptedRng, SystemRng};
pub use error::{AbilityError, CharacterError, ConfigError, CoreError};
pub use race::{Race, RaceKind, random_race_id, select_race};
