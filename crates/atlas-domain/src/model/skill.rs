//! Skill - An ability shared by any number of heroes
//!
//! Skill names are not unique: two skills may share a name and differ in
//! damage type or cost. Identity is the id alone.

use super::damage_type::DamageType;

/// Unique identifier for a Skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SkillId(u64);

impl SkillId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for SkillId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Skill {
    id: SkillId,
    name: String,
    damage_type: DamageType,
    mana_cost: u32,
}

impl Skill {
    /// Create a physical skill with no mana cost
    pub fn new(id: SkillId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            damage_type: DamageType::default(),
            mana_cost: 0,
        }
    }

    /// Builder: set damage type
    pub fn with_damage_type(mut self, damage_type: DamageType) -> Self {
        self.damage_type = damage_type;
        self
    }

    /// Builder: set mana cost
    pub fn with_mana_cost(mut self, mana_cost: u32) -> Self {
        self.mana_cost = mana_cost;
        self
    }

    // ========== Getters ==========

    pub fn id(&self) -> SkillId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn damage_type(&self) -> DamageType {
        self.damage_type
    }

    pub fn mana_cost(&self) -> u32 {
        self.mana_cost
    }
}

impl PartialEq for Skill {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Skill {}
