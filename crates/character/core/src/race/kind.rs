//! Race identity.

/// Playable races and the base races they descend from.
///
/// Subraces inherit their parent's bonuses and add their own:
///
/// ```text
/// Human
/// Dwarf ─→ HillDwarf
/// Elf   ─→ HighElf
/// ```
///
/// Each variant has a stable numeric identifier used by
/// [`select_race`](super::select_race):
///
/// | Variant | ID |
/// |---------|----|
/// | Human | 0 |
/// | HillDwarf | 1 |
/// | HighElf | 2 |
/// | Dwarf | 3 |
/// | Elf | 4 |
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RaceKind {
    /// Versatile; +1 to every ability
    Human,
    /// Stout and hardy; +2 CON
    Dwarf,
    /// Dwarf with keen senses; +1 WIS on top of Dwarf
    HillDwarf,
    /// Graceful; +2 DEX
    Elf,
    /// Elf with a trained mind; +1 INT on top of Elf
    HighElf,
}

impl RaceKind {
    pub const ALL: [RaceKind; 5] = [
        RaceKind::Human,
        RaceKind::Dwarf,
        RaceKind::HillDwarf,
        RaceKind::Elf,
        RaceKind::HighElf,
    ];

    /// Races eligible for random selection.
    ///
    /// Base races with a subrace (Dwarf, Elf) are left out: a random
    /// character always gets a concrete playable choice.
    pub const RANDOM_POOL: [RaceKind; 3] =
        [RaceKind::Human, RaceKind::HillDwarf, RaceKind::HighElf];

    pub const fn id(self) -> u32 {
        match self {
            RaceKind::Human => 0,
            RaceKind::HillDwarf => 1,
            RaceKind::HighElf => 2,
            RaceKind::Dwarf => 3,
            RaceKind::Elf => 4,
        }
    }

    /// Inverse of [`id`](Self::id). Negative or unassigned identifiers yield `None`.
    pub const fn from_id(id: i32) -> Option<Self> {
        match id {
            0 => Some(RaceKind::Human),
            1 => Some(RaceKind::HillDwarf),
            2 => Some(RaceKind::HighElf),
            3 => Some(RaceKind::Dwarf),
            4 => Some(RaceKind::Elf),
            _ => None,
        }
    }

    /// The base race a subrace builds on.
    pub const fn parent(self) -> Option<Self> {
        match self {
            RaceKind::HillDwarf => Some(RaceKind::Dwarf),
            RaceKind::HighElf => Some(RaceKind::Elf),
            RaceKind::Human | RaceKind::Dwarf | RaceKind::Elf => None,
        }
    }

    /// Human-readable name, e.g. "Hill Dwarf".
    pub const fn name(self) -> &'static str {
        match self {
            RaceKind::Human => "Human",
            RaceKind::Dwarf => "Dwarf",
            RaceKind::HillDwarf => "Hill Dwarf",
            RaceKind::Elf => "Elf",
            RaceKind::HighElf => "High Elf",
        }
    }
}
