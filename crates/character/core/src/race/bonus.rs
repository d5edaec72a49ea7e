//! Racial bonus sets.
//!
//! A race's bonus is a flat score delta stored as an [`AbilityScores`] so it
//! can be added directly onto a character's base scores. The set is built once
//! from an all-zero baseline and never changes afterwards.

use core::fmt;

use super::kind::RaceKind;
use crate::ability::{Ability, AbilityScores};

/// Score deltas a race adds beyond its parent's.
const fn own_bonuses(kind: RaceKind) -> &'static [(Ability, u8)] {
    match kind {
        RaceKind::Human => &[
            (Ability::Strength, 1),
            (Ability::Dexterity, 1),
            (Ability::Constitution, 1),
            (Ability::Intelligence, 1),
            (Ability::Wisdom, 1),
            (Ability::Charisma, 1),
        ],
        RaceKind::Dwarf => &[(Ability::Constitution, 2)],
        RaceKind::HillDwarf => &[(Ability::Wisdom, 1)],
        RaceKind::Elf => &[(Ability::Dexterity, 2)],
        RaceKind::HighElf => &[(Ability::Intelligence, 1)],
    }
}

/// Parent's bonus set (if any) with this race's own deltas set on top.
fn bonus_set(kind: RaceKind) -> AbilityScores {
    let mut bonus = kind.parent().map_or(AbilityScores::new(0), bonus_set);
    for &(ability, delta) in own_bonuses(kind) {
        bonus.set_score(ability, delta);
    }
    bonus
}

/// A race together with its fixed ability bonus.
///
/// # Example
/// ```
/// # use character_core::{Ability, AbilityScores, Race, RaceKind};
/// let dwarf = Race::new(RaceKind::Dwarf);
/// let mut scores = AbilityScores::new(10);
/// dwarf.apply_racial_bonus(&mut scores);
///
/// assert_eq!(scores.score(Ability::Constitution), 12);
/// assert_eq!(scores.modifier(Ability::Constitution), 1);
/// assert_eq!(scores.modifier(Ability::Strength), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Race {
    kind: RaceKind,
    bonus: AbilityScores,
}

impl Race {
    pub fn new(kind: RaceKind) -> Self {
        Self {
            kind,
            bonus: bonus_set(kind),
        }
    }

    #[inline]
    pub const fn kind(&self) -> RaceKind {
        self.kind
    }

    #[inline]
    pub const fn id(&self) -> u32 {
        self.kind.id()
    }

    /// Read-only view of the bonus set.
    #[inline]
    pub const fn bonus(&self) -> &AbilityScores {
        &self.bonus
    }

    /// Replace `base` with `base + bonus`.
    ///
    /// The caller's scores are modified in place and keep their proficiency
    /// bonus; this race's bonus set is unaffected. Each call adds the bonus
    /// again, so applying twice doubles the delta.
    pub fn apply_racial_bonus(&self, base: &mut AbilityScores) {
        *base += &self.bonus;
    }
}

impl From<RaceKind> for Race {
    fn from(kind: RaceKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.name())
    }
}
