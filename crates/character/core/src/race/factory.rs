//! Race selection by identifier or at random.

use super::bonus::Race;
use super::kind::RaceKind;
use crate::env::RandomSource;

/// Pick a race identifier uniformly from [`RaceKind::RANDOM_POOL`].
pub fn random_race_id<R: RandomSource + ?Sized>(rng: &mut R) -> u32 {
    let last = RaceKind::RANDOM_POOL.len() as i32 - 1;
    let roll = rng.random_int(0, last);
    let kind = usize::try_from(roll)
        .ok()
        .and_then(|index| RaceKind::RANDOM_POOL.get(index).copied())
        .unwrap_or(RaceKind::Human);
    kind.id()
}

/// Build a race from its identifier.
///
/// A negative `identifier` means "any": one is drawn with
/// [`random_race_id`]. Non-negative identifiers dispatch over all five
/// variants. An identifier no race uses yields `None`.
///
/// # Example
/// ```
/// # use character_core::{PcgRng, RaceKind, select_race};
/// let mut rng = PcgRng::new(1);
/// assert_eq!(select_race(1, &mut rng).unwrap().kind(), RaceKind::HillDwarf);
/// assert!(select_race(-1, &mut rng).is_some());
/// assert!(select_race(99, &mut rng).is_none());
/// ```
pub fn select_race<R: RandomSource + ?Sized>(identifier: i32, rng: &mut R) -> Option<Race> {
    let id = if identifier < 0 {
        let drawn = random_race_id(rng);
        tracing::debug!(race_id = drawn, "drew random race");
        drawn as i32
    } else {
        identifier
    };

    match RaceKind::from_id(id) {
        Some(kind) => {
            tracing::debug!(race_id = id, race = %kind, "selected race");
            Some(Race::new(kind))
        }
        None => {
            tracing::warn!(race_id = id, "no race with this identifier");
            None
        }
    }
}
