//! External collaborators consumed by the character model.
//!
//! The only collaborator today is the random source used to roll default
//! ability scores and to pick a race at random.

pub mod rng;

pub use rng::{PcgRng, RandomSource, ScriptedRng, SystemRng};
