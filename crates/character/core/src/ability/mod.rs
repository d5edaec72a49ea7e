//! Ability scores.
//!
//! ```text
//! [ Ability ]        one of STR, DEX, CON, INT, WIS, CHA
//!      ↓
//! [ AbilityScore ]   score (0-255) + proficiency flag → modifier, save
//!      ↓
//! [ AbilityScores ]  six entries + shared proficiency bonus, closed under `+`
//! ```
//!
//! Races contribute to characters by adding an `AbilityScores` bonus set onto
//! the character's base scores; see [`crate::race`].

pub mod kind;
pub mod score;
pub mod scores;

pub use kind::Ability;
pub use score::{AbilityScore, modifier_for};
pub use scores::AbilityScores;
