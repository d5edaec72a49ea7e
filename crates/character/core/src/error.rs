//! Error types for character-core.
//!
//! Every failure in this crate is local and synchronous: the caller receives a
//! typed error and decides what to do. There are no transient failure modes,
//! so nothing here is retryable.
//!
//! An unrecognized race identifier is *not* an error at the factory level:
//! [`crate::race::select_race`] returns `None`. Only [`crate::Character::roll`]
//! lifts that case into [`CharacterError::UnknownRace`].

use crate::config::ScoreRange;

/// Common trait for all character-core errors.
///
/// Provides a stable string code per variant, useful for logs and for
/// matching in tests without depending on message wording.
pub trait CoreError: core::fmt::Display + core::fmt::Debug {
    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}

/// Errors raised when an ability key cannot be resolved.
///
/// Lookups never fabricate an entry for an unknown key.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AbilityError {
    /// The string does not name one of STR, DEX, CON, INT, WIS, CHA.
    #[error("unknown ability '{0}'")]
    UnknownAbility(String),

    /// The raw index is outside `0..=5`.
    #[error("ability index {0} is out of range (expected 0..=5)")]
    InvalidIndex(u8),
}

impl CoreError for AbilityError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownAbility(_) => "ABILITY_UNKNOWN",
            Self::InvalidIndex(_) => "ABILITY_INVALID_INDEX",
        }
    }
}

/// Errors raised by [`crate::CharacterConfig::validate`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("score roll range {}..={} is empty", .0.min, .0.max)]
    InvalidScoreRange(ScoreRange),
}

impl CoreError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidScoreRange(_) => "CONFIG_INVALID_SCORE_RANGE",
        }
    }
}

/// Errors raised while assembling a [`crate::Character`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CharacterError {
    /// The factory produced no race for this identifier.
    #[error("no race with identifier {0}")]
    UnknownRace(i32),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CoreError for CharacterError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownRace(_) => "CHARACTER_UNKNOWN_RACE",
            Self::Config(inner) => inner.error_code(),
        }
    }
}
