//! A race combined with rolled ability scores.

use crate::ability::{Ability, AbilityScores};
use crate::config::CharacterConfig;
use crate::env::RandomSource;
use crate::error::CharacterError;
use crate::race::{Race, select_race};

/// Character ability profile: base scores, race, and the scores with the
/// racial bonus applied.
///
/// The base scores are kept so callers can show where a final score came
/// from; [`scores`](Self::scores) is always `base + race bonus`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Character {
    race: Race,
    base: AbilityScores,
    scores: AbilityScores,
}

impl Character {
    /// Build from explicit parts.
    pub fn new(race: Race, base: AbilityScores) -> Self {
        let mut scores = base;
        race.apply_racial_bonus(&mut scores);
        Self { race, base, scores }
    }

    /// Roll a new character.
    ///
    /// The race comes from [`select_race`] (`race_id < 0` picks at random),
    /// each ability is rolled within `config.score_roll`, and the
    /// proficiency bonus is taken from `config`.
    ///
    /// # Errors
    ///
    /// - [`CharacterError::Config`] if `config` is invalid
    /// - [`CharacterError::UnknownRace`] if no race uses `race_id`
    ///
    /// # Example
    /// ```
    /// # use character_core::{Ability, Character, CharacterConfig, PcgRng, RaceKind};
    /// let mut rng = PcgRng::new(9);
    /// let hero = Character::roll(2, &mut rng, &CharacterConfig::default()).unwrap();
    ///
    /// assert_eq!(hero.race().kind(), RaceKind::HighElf);
    /// assert_eq!(
    ///     hero.scores().score(Ability::Dexterity),
    ///     hero.base_scores().score(Ability::Dexterity) + 2,
    /// );
    /// ```
    pub fn roll<R: RandomSource + ?Sized>(
        race_id: i32,
        rng: &mut R,
        config: &CharacterConfig,
    ) -> Result<Self, CharacterError> {
        config.validate()?;

        let race = select_race(race_id, rng).ok_or(CharacterError::UnknownRace(race_id))?;
        let mut base = AbilityScores::roll_in(rng, config.score_roll);
        base.set_proficiency_bonus(config.proficiency_bonus);

        let character = Self::new(race, base);
        let rolled: Vec<(Ability, u8)> = character
            .scores
            .iter()
            .map(|(ability, entry)| (ability, entry.score()))
            .collect();
        tracing::info!(race = %character.race, scores = ?rolled, "rolled character");
        Ok(character)
    }

    #[inline]
    pub fn race(&self) -> &Race {
        &self.race
    }

    /// Scores before the racial bonus.
    #[inline]
    pub fn base_scores(&self) -> &AbilityScores {
        &self.base
    }

    /// Scores with the racial bonus applied.
    #[inline]
    pub fn scores(&self) -> &AbilityScores {
        &self.scores
    }
}
