//! The six canonical ability keys.

use crate::error::AbilityError;

/// One of the six abilities every character has.
///
/// The set is closed: a value of this type can only name a key that exists in
/// every [`AbilityScores`](super::AbilityScores). Untyped input (strings from
/// a file, raw indices) goes through [`Ability::parse`] or `TryFrom<u8>`,
/// which reject anything outside the six.
///
/// - **STR** (Strength): Physical power
/// - **DEX** (Dexterity): Agility, reflexes, balance
/// - **CON** (Constitution): Health, stamina, vital force
/// - **INT** (Intelligence): Reasoning and memory
/// - **WIS** (Wisdom): Perception and insight
/// - **CHA** (Charisma): Force of personality
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Ability {
    #[strum(to_string = "STR", serialize = "strength")]
    Strength = 0,
    #[strum(to_string = "DEX", serialize = "dexterity")]
    Dexterity = 1,
    #[strum(to_string = "CON", serialize = "constitution")]
    Constitution = 2,
    #[strum(to_string = "INT", serialize = "intelligence")]
    Intelligence = 3,
    #[strum(to_string = "WIS", serialize = "wisdom")]
    Wisdom = 4,
    #[strum(to_string = "CHA", serialize = "charisma")]
    Charisma = 5,
}

impl Ability {
    /// All abilities in canonical order (STR, DEX, CON, INT, WIS, CHA).
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];

    /// Position of this ability in canonical order.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Parse a short code (`"con"`) or full name (`"Constitution"`).
    ///
    /// # Example
    /// ```
    /// # use character_core::Ability;
    /// assert_eq!(Ability::parse("wis").unwrap(), Ability::Wisdom);
    /// assert_eq!(Ability::parse("Charisma").unwrap(), Ability::Charisma);
    /// assert!(Ability::parse("luck").is_err());
    /// ```
    pub fn parse(key: &str) -> Result<Self, AbilityError> {
        key.trim()
            .parse()
            .map_err(|_| AbilityError::UnknownAbility(key.to_owned()))
    }
}

impl TryFrom<u8> for Ability {
    type Error = AbilityError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(AbilityError::InvalidIndex(index))
    }
}
