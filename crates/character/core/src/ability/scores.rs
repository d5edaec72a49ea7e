//! The six ability scores of a character and their shared proficiency bonus.

use core::ops::{Add, AddAssign, Index, IndexMut};

use super::kind::Ability;
use super::score::AbilityScore;
use crate::config::{CharacterConfig, ScoreRange};
use crate::env::RandomSource;
use crate::error::AbilityError;

/// Exactly six [`AbilityScore`] entries, one per [`Ability`], plus the
/// proficiency bonus applied to every proficient save.
///
/// Entries are owned by value in canonical order; there is no way to add,
/// remove, or miss a key.
///
/// # Addition
///
/// `A + B` yields a new collection where, per ability, scores are summed
/// (saturating at 255) and proficiency flags are OR-ed. The proficiency bonus
/// of the result is taken from the left operand. Neither operand changes.
///
/// ```
/// # use character_core::{Ability, AbilityScores};
/// let mut base = AbilityScores::new(10);
/// base.set_proficiency_bonus(3);
///
/// let mut bonus = AbilityScores::new(0);
/// bonus.set(Ability::Constitution, 2, true);
///
/// let total = base + bonus;
/// assert_eq!(total.score(Ability::Constitution), 12);
/// assert_eq!(total.save(Ability::Constitution), 1 + 3);
/// assert_eq!(total.proficiency_bonus(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityScores {
    proficiency_bonus: u8,
    scores: [AbilityScore; CharacterConfig::ABILITY_COUNT],
}

impl AbilityScores {
    /// Every ability set to `default_score`, none proficient, bonus 0.
    pub const fn new(default_score: u8) -> Self {
        Self {
            proficiency_bonus: 0,
            scores: [AbilityScore::new(default_score, false); CharacterConfig::ABILITY_COUNT],
        }
    }

    /// Explicit scores in canonical order (STR, DEX, CON, INT, WIS, CHA).
    pub fn from_scores(scores: [u8; CharacterConfig::ABILITY_COUNT]) -> Self {
        Self {
            proficiency_bonus: 0,
            scores: scores.map(|score| AbilityScore::new(score, false)),
        }
    }

    /// Roll every ability in [8, 18].
    pub fn roll<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        Self::roll_in(rng, CharacterConfig::DEFAULT_SCORE_ROLL)
    }

    /// Roll every ability within `range`, in canonical order.
    pub fn roll_in<R: RandomSource + ?Sized>(rng: &mut R, range: ScoreRange) -> Self {
        let mut scores = Self::new(0);
        for entry in scores.scores.iter_mut() {
            *entry = AbilityScore::roll_in(rng, range);
        }
        scores
    }

    // ===== mutation =====

    /// Replace score and proficiency of `ability`.
    pub fn set(&mut self, ability: Ability, score: u8, proficient: bool) {
        self[ability].set(score, proficient);
    }

    /// Replace the score of `ability`.
    pub fn set_score(&mut self, ability: Ability, score: u8) {
        self[ability].set_score(score);
    }

    /// Mark `ability` as proficient or not.
    pub fn set_proficient(&mut self, ability: Ability, proficient: bool) {
        self[ability].set_proficient(proficient);
    }

    /// Set the bonus shared by every proficient save.
    pub fn set_proficiency_bonus(&mut self, bonus: u8) {
        self.proficiency_bonus = bonus;
    }

    // ===== reads =====

    /// Bonus added to the save of each proficient ability.
    #[inline]
    pub const fn proficiency_bonus(&self) -> u8 {
        self.proficiency_bonus
    }

    /// The entry for `ability`.
    #[inline]
    pub const fn get(&self, ability: Ability) -> &AbilityScore {
        &self.scores[ability.index()]
    }

    /// Raw score of `ability`.
    #[inline]
    pub const fn score(&self, ability: Ability) -> u8 {
        self.get(ability).score()
    }

    /// Modifier derived from the score of `ability`.
    #[inline]
    pub const fn modifier(&self, ability: Ability) -> i32 {
        self.get(ability).modifier()
    }

    /// Whether `ability` is proficient.
    #[inline]
    pub const fn is_proficient(&self, ability: Ability) -> bool {
        self.get(ability).is_proficient()
    }

    /// Modifier plus the proficiency bonus when `ability` is proficient.
    pub const fn save(&self, ability: Ability) -> i32 {
        self.get(ability).save(self.proficiency_bonus)
    }

    /// Entries paired with their keys, in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Ability, &AbilityScore)> {
        Ability::ALL.into_iter().zip(self.scores.iter())
    }

    // ===== untyped access =====

    /// Resolve an entry from a string key such as `"str"` or `"Wisdom"`.
    ///
    /// Unknown keys fail; no entry is ever created for them.
    ///
    /// ```
    /// # use character_core::{AbilityError, AbilityScores};
    /// let scores = AbilityScores::new(12);
    /// assert_eq!(scores.lookup("dex").unwrap().modifier(), 1);
    /// assert!(matches!(scores.lookup("luck"), Err(AbilityError::UnknownAbility(_))));
    /// ```
    pub fn lookup(&self, key: &str) -> Result<&AbilityScore, AbilityError> {
        Ability::parse(key).map(|ability| self.get(ability))
    }

    /// Mutable counterpart of [`lookup`](Self::lookup).
    pub fn lookup_mut(&mut self, key: &str) -> Result<&mut AbilityScore, AbilityError> {
        let ability = Ability::parse(key)?;
        Ok(&mut self[ability])
    }
}

impl Index<Ability> for AbilityScores {
    type Output = AbilityScore;

    fn index(&self, ability: Ability) -> &AbilityScore {
        &self.scores[ability.index()]
    }
}

impl IndexMut<Ability> for AbilityScores {
    fn index_mut(&mut self, ability: Ability) -> &mut AbilityScore {
        &mut self.scores[ability.index()]
    }
}

impl Add<&AbilityScores> for &AbilityScores {
    type Output = AbilityScores;

    fn add(self, rhs: &AbilityScores) -> AbilityScores {
        let mut scores = self.scores;
        for (entry, other) in scores.iter_mut().zip(rhs.scores.iter()) {
            *entry = *entry + *other;
        }
        AbilityScores {
            proficiency_bonus: self.proficiency_bonus,
            scores,
        }
    }
}

impl Add for AbilityScores {
    type Output = AbilityScores;

    fn add(self, rhs: AbilityScores) -> AbilityScores {
        &self + &rhs
    }
}

impl AddAssign<&AbilityScores> for AbilityScores {
    fn add_assign(&mut self, rhs: &AbilityScores) {
        *self = &*self + rhs;
    }
}

impl AddAssign for AbilityScores {
    fn add_assign(&mut self, rhs: AbilityScores) {
        *self += &rhs;
    }
}
