use crate::error::ConfigError;

/// Inclusive range for rolled ability scores.
///
/// A bound left out of a config file keeps its value from
/// [`CharacterConfig::DEFAULT_SCORE_ROLL`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScoreRange {
    pub min: u8,
    pub max: u8,
}

impl ScoreRange {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    /// Returns true if `score` lies within the range.
    pub const fn contains(&self, score: u8) -> bool {
        score >= self.min && score <= self.max
    }
}

impl Default for ScoreRange {
    fn default() -> Self {
        CharacterConfig::DEFAULT_SCORE_ROLL
    }
}

/// Character creation constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CharacterConfig {
    /// Range used when an ability score is rolled rather than given.
    pub score_roll: ScoreRange,
    /// Proficiency bonus assigned to freshly rolled characters.
    pub proficiency_bonus: u8,
}

impl CharacterConfig {
    // ===== ruleset constants =====
    /// Number of canonical abilities.
    pub const ABILITY_COUNT: usize = 6;
    /// Score whose modifier is zero.
    pub const MODIFIER_BASELINE: i32 = 10;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SCORE_ROLL: ScoreRange = ScoreRange::new(8, 18);
    pub const DEFAULT_PROFICIENCY_BONUS: u8 = 2;

    pub fn new() -> Self {
        Self {
            score_roll: Self::DEFAULT_SCORE_ROLL,
            proficiency_bonus: Self::DEFAULT_PROFICIENCY_BONUS,
        }
    }

    pub fn with_score_roll(mut self, min: u8, max: u8) -> Self {
        self.score_roll = ScoreRange::new(min, max);
        self
    }

    pub fn with_proficiency_bonus(mut self, bonus: u8) -> Self {
        self.proficiency_bonus = bonus;
        self
    }

    /// Rejects configurations that cannot produce a score.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.score_roll.min > self.score_roll.max {
            return Err(ConfigError::InvalidScoreRange(self.score_roll));
        }
        Ok(())
    }
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self::new()
    }
}
