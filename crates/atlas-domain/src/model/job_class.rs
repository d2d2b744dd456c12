//! JobClass - The playable archetype of a hero
//!
//! JobClass is a Value Object - two classes with the same variant are equal.
//! The set is closed: a hero is always exactly one of these.

use core::str::FromStr;

use super::UnknownVariantError;

/// The eight playable archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum JobClass {
    #[default]
    Warrior,
    Mage,
    Archer,
    Rogue,
    Paladin,
    Cleric,
    Necromancer,
    Barbarian,
}

impl JobClass {
    /// Stored value, as used in query parameters and payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            JobClass::Warrior => "warrior",
            JobClass::Mage => "mage",
            JobClass::Archer => "archer",
            JobClass::Rogue => "rogue",
            JobClass::Paladin => "paladin",
            JobClass::Cleric => "cleric",
            JobClass::Necromancer => "necromancer",
            JobClass::Barbarian => "barbarian",
        }
    }

    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            JobClass::Warrior => "Warrior",
            JobClass::Mage => "Mage",
            JobClass::Archer => "Archer",
            JobClass::Rogue => "Rogue",
            JobClass::Paladin => "Paladin",
            JobClass::Cleric => "Cleric",
            JobClass::Necromancer => "Necromancer",
            JobClass::Barbarian => "Barbarian",
        }
    }

    /// Get all classes (useful for iteration)
    pub fn all() -> &'static [JobClass] {
        &[
            JobClass::Warrior,
            JobClass::Mage,
            JobClass::Archer,
            JobClass::Rogue,
            JobClass::Paladin,
            JobClass::Cleric,
            JobClass::Necromancer,
            JobClass::Barbarian,
        ]
    }
}

impl FromStr for JobClass {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobClass::all()
            .iter()
            .copied()
            .find(|class| class.as_str() == s)
            .ok_or_else(|| UnknownVariantError {
                kind: "job class",
                value: s.to_string(),
            })
    }
}

impl core::fmt::Display for JobClass {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
