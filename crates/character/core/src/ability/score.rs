//! A single ability score and its derived values.
//!
//! Modifier = floor((score - 10) / 2)
//!
//! The modifier is never stored; every read recomputes it from the score.

use core::fmt;
use core::ops::Add;

use crate::config::{CharacterConfig, ScoreRange};
use crate::env::RandomSource;

/// Modifier for a raw score.
///
/// Rounds toward negative infinity, so odd scores below 10 round down:
///
/// - 10-11 → +0
/// - 12-13 → +1
/// - 8-9 → -1
/// - 0 → -5
/// - 255 → +122
#[inline]
pub const fn modifier_for(score: u8) -> i32 {
    (score as i32 - CharacterConfig::MODIFIER_BASELINE).div_euclid(2)
}

/// The score of one ability plus whether the character is proficient in its
/// saving throw.
///
/// Scores are unsigned 8-bit values. The ruleset only uses 1-30, but nothing
/// here rejects values outside that band.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityScore {
    score: u8,
    proficient: bool,
}

impl AbilityScore {
    /// Exact score and proficiency, no validation.
    pub const fn new(score: u8, proficient: bool) -> Self {
        Self { score, proficient }
    }

    /// Roll a score uniformly in [8, 18], not proficient.
    ///
    /// # Example
    /// ```
    /// # use character_core::{AbilityScore, PcgRng};
    /// let score = AbilityScore::roll(&mut PcgRng::new(5));
    /// assert!((8..=18).contains(&score.score()));
    /// assert!(!score.is_proficient());
    /// ```
    pub fn roll<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        Self::roll_in(rng, CharacterConfig::DEFAULT_SCORE_ROLL)
    }

    /// Roll a score uniformly within `range`, not proficient.
    pub fn roll_in<R: RandomSource + ?Sized>(rng: &mut R, range: ScoreRange) -> Self {
        let rolled = rng.random_int(i32::from(range.min), i32::from(range.max));
        Self::new(u8::try_from(rolled).unwrap_or(range.min), false)
    }

    /// Replace both the score and the proficiency flag.
    pub fn set(&mut self, score: u8, proficient: bool) {
        self.score = score;
        self.proficient = proficient;
    }

    /// Replace the score, keeping proficiency.
    pub fn set_score(&mut self, score: u8) {
        self.score = score;
    }

    /// Replace the proficiency flag, keeping the score.
    pub fn set_proficient(&mut self, proficient: bool) {
        self.proficient = proficient;
    }

    /// Raw score.
    #[inline]
    pub const fn score(&self) -> u8 {
        self.score
    }

    /// `floor((score - 10) / 2)`, recomputed on every call.
    #[inline]
    pub const fn modifier(&self) -> i32 {
        modifier_for(self.score)
    }

    /// Whether the proficiency bonus applies to this ability's save.
    #[inline]
    pub const fn is_proficient(&self) -> bool {
        self.proficient
    }

    /// Saving throw modifier: the ability modifier, plus `proficiency_bonus`
    /// only when proficient.
    pub const fn save(&self, proficiency_bonus: u8) -> i32 {
        if self.proficient {
            self.modifier() + proficiency_bonus as i32
        } else {
            self.modifier()
        }
    }
}

/// Scores add (saturating at 255); proficiency is kept if either side has it.
impl Add for AbilityScore {
    type Output = AbilityScore;

    fn add(self, rhs: AbilityScore) -> AbilityScore {
        AbilityScore::new(
            self.score.saturating_add(rhs.score),
            self.proficient || rhs.proficient,
        )
    }
}

impl fmt::Display for AbilityScore {
    /// `15 (+2)`, with a trailing `*` when proficient.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:+})", self.score, self.modifier())?;
        if self.proficient {
            f.write_str("*")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgRng, ScriptedRng};

    #[test]
    fn modifier_floors_toward_negative_infinity() {
        assert_eq!(modifier_for(0), -5);
        assert_eq!(modifier_for(1), -5);
        assert_eq!(modifier_for(8), -1);
        assert_eq!(modifier_for(9), -1);
        assert_eq!(modifier_for(10), 0);
        assert_eq!(modifier_for(11), 0);
        assert_eq!(modifier_for(12), 1);
        assert_eq!(modifier_for(20), 5);
        assert_eq!(modifier_for(30), 10);
        assert_eq!(modifier_for(255), 122);
    }

    #[test]
    fn modifier_matches_float_floor_over_full_domain() {
        for s in 0..=u8::MAX {
            let expected = ((f64::from(s) - 10.0) / 2.0).floor() as i32;
            assert_eq!(AbilityScore::new(s, false).modifier(), expected, "score {s}");
        }
    }

    #[test]
    fn save_adds_bonus_only_when_proficient() {
        for s in [0u8, 9, 10, 17, 30] {
            for bonus in [0u8, 2, 6] {
                let plain = AbilityScore::new(s, false);
                let trained = AbilityScore::new(s, true);
                assert_eq!(plain.save(bonus), modifier_for(s));
                assert_eq!(trained.save(bonus), modifier_for(s) + i32::from(bonus));
            }
        }
    }

    #[test]
    fn roll_stays_in_default_range() {
        let mut rng = PcgRng::new(2024);
        for _ in 0..10_000 {
            let score = AbilityScore::roll(&mut rng);
            assert!((8..=18).contains(&score.score()));
            assert!(!score.is_proficient());
        }
    }

    #[test]
    fn roll_in_uses_scripted_value() {
        let mut rng = ScriptedRng::new([14]);
        let score = AbilityScore::roll_in(&mut rng, ScoreRange::new(3, 18));
        assert_eq!(score, AbilityScore::new(14, false));
    }

    #[test]
    fn setters_touch_only_their_field() {
        let mut score = AbilityScore::new(10, false);
        score.set_proficient(true);
        assert_eq!(score, AbilityScore::new(10, true));
        score.set_score(16);
        assert_eq!(score, AbilityScore::new(16, true));
        score.set(7, false);
        assert_eq!(score, AbilityScore::new(7, false));
        assert_eq!(score.modifier(), -2);
    }

    #[test]
    fn addition_saturates_and_ors_proficiency() {
        let sum = AbilityScore::new(250, false) + AbilityScore::new(10, true);
        assert_eq!(sum, AbilityScore::new(255, true));
    }

    #[test]
    fn display_shows_signed_modifier() {
        assert_eq!(AbilityScore::new(15, false).to_string(), "15 (+2)");
        assert_eq!(AbilityScore::new(9, true).to_string(), "9 (-1)*");
    }
}
