//! DamageType - The category of effect a skill produces

use core::str::FromStr;

use super::UnknownVariantError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum DamageType {
    #[default]
    Physical,
    Magical,
    Healing,
    Mixed,
}

impl DamageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DamageType::Physical => "physical",
            DamageType::Magical => "magical",
            DamageType::Healing => "healing",
            DamageType::Mixed => "mixed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DamageType::Physical => "Physical",
            DamageType::Magical => "Magical",
            DamageType::Healing => "Healing",
            DamageType::Mixed => "Mixed",
        }
    }

    pub fn all() -> &'static [DamageType] {
        &[
            DamageType::Physical,
            DamageType::Magical,
            DamageType::Healing,
            DamageType::Mixed,
        ]
    }
}

impl FromStr for DamageType {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DamageType::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownVariantError {
                kind: "damage type",
                value: s.to_string(),
            })
    }
}

impl core::fmt::Display for DamageType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
