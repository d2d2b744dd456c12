//! Hero - A playable character in the atlas
//!
//! Hero is an Entity (has identity that persists through changes).
//! It points weakly at one Region and shares membership in many Skills;
//! neither relation owns the other side.
//!
//! HP is bounded by `max_hp`, which is derived from level. That bound is
//! only honored by `heal` and `take_damage`; builders and direct saves
//! accept any value.

use chrono::{DateTime, Utc};

use super::job_class::JobClass;
use super::region::RegionId;
use super::round_to;
use super::skill::SkillId;

/// HP granted per level
pub const HP_PER_LEVEL: u64 = 100;

/// Unique identifier for a Hero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HeroId(u64);

impl HeroId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for HeroId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Hero {
    /// Unique identifier (Entity identity)
    id: HeroId,
    /// Unique display name
    nickname: String,
    job_class: JobClass,
    level: u32,
    hp_current: u32,
    xp: u64,
    gold: u64,
    is_active: bool,
    biography: String,
    /// Set once, on first save
    created_at: DateTime<Utc>,
    /// Refreshed on every save
    updated_at: DateTime<Utc>,
    /// Weak reference; nulled when the region is deleted
    region: Option<RegionId>,
    /// Shared membership; an edge disappears when the skill is deleted
    skills: Vec<SkillId>,
}

impl Hero {
    /// Create a level 1 warrior with full HP and nothing else
    pub fn new(id: HeroId, nickname: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            nickname: nickname.into(),
            job_class: JobClass::default(),
            level: 1,
            hp_current: 100,
            xp: 0,
            gold: 0,
            is_active: true,
            biography: String::new(),
            created_at,
            updated_at: created_at,
            region: None,
            skills: Vec::new(),
        }
    }

    /// Builder: set job class
    pub fn with_job_class(mut self, job_class: JobClass) -> Self {
        self.job_class = job_class;
        self
    }

    /// Builder: set level (HP is left untouched)
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Builder: set current HP (not clamped)
    pub fn with_hp(mut self, hp_current: u32) -> Self {
        self.hp_current = hp_current;
        self
    }

    pub fn with_xp(mut self, xp: u64) -> Self {
        self.xp = xp;
        self
    }

    pub fn with_gold(mut self, gold: u64) -> Self {
        self.gold = gold;
        self
    }

    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn with_biography(mut self, biography: impl Into<String>) -> Self {
        self.biography = biography.into();
        self
    }

    /// Builder: place the hero in a region
    pub fn with_region(mut self, region: RegionId) -> Self {
        self.region = Some(region);
        self
    }

    /// Builder: add skills (duplicates are ignored)
    pub fn with_skills(mut self, skills: impl IntoIterator<Item = SkillId>) -> Self {
        for skill in skills {
            if !self.skills.contains(&skill) {
                self.skills.push(skill);
            }
        }
        self
    }

    // ========== Getters ==========

    pub fn id(&self) -> HeroId {
        self.id
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn job_class(&self) -> JobClass {
        self.job_class
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn hp_current(&self) -> u32 {
        self.hp_current
    }

    pub fn xp(&self) -> u64 {
        self.xp
    }

    pub fn gold(&self) -> u64 {
        self.gold
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn biography(&self) -> &str {
        &self.biography
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn region(&self) -> Option<RegionId> {
        self.region
    }

    pub fn skills(&self) -> &[SkillId] {
        &self.skills
    }

    pub fn has_skill(&self, skill: SkillId) -> bool {
        self.skills.contains(&skill)
    }

    // ========== Derived Attributes ==========

    /// Maximum HP for the current level
    pub fn max_hp(&self) -> u64 {
        u64::from(self.level) * HP_PER_LEVEL
    }

    /// Remaining HP as a percentage of `max_hp`, one decimal place.
    ///
    /// A level 0 hero has no maximum; the percentage is 0 rather than NaN.
    pub fn hp_percentage(&self) -> f64 {
        let max_hp = self.max_hp();
        if max_hp == 0 {
            return 0.0;
        }
        round_to(f64::from(self.hp_current) / max_hp as f64 * 100.0, 1)
    }

    // ========== HP Mutations ==========

    /// Restore up to `amount` HP without going past `max_hp`.
    ///
    /// Returns the applied delta, so `new_hp == old_hp + delta`. The delta
    /// is negative only when the hero already sat above `max_hp`: the clamp
    /// pulls HP down to the bound in that case.
    pub fn heal(&mut self, amount: u32) -> i64 {
        let old_hp = i64::from(self.hp_current);
        let raised = old_hp + i64::from(amount);
        let max_hp = i64::try_from(self.max_hp()).unwrap_or(i64::MAX);
        let new_hp = raised.min(max_hp);
        self.hp_current = u32::try_from(new_hp).unwrap_or(u32::MAX);
        i64::from(self.hp_current) - old_hp
    }

    /// Remove up to `amount` HP without going below zero.
    ///
    /// Returns the HP actually lost, so `old_hp == new_hp + lost`.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let old_hp = self.hp_current;
        self.hp_current = old_hp.saturating_sub(amount);
        old_hp - self.hp_current
    }

    // ========== Relations ==========

    /// Drop the region reference if it points at `region`
    pub fn detach_region(&mut self, region: RegionId) -> bool {
        if self.region == Some(region) {
            self.region = None;
            true
        } else {
            false
        }
    }

    /// Remove one skill membership edge
    pub fn detach_skill(&mut self, skill: SkillId) -> bool {
        let before = self.skills.len();
        self.skills.retain(|s| *s != skill);
        self.skills.len() != before
    }

    // ========== Persistence ==========

    /// Record a save: `created_at` comes from the first save (or stays as is
    /// for a new hero) and `updated_at` becomes `now`.
    pub fn mark_saved(&mut self, first_saved_at: Option<DateTime<Utc>>, now: DateTime<Utc>) {
        if let Some(created_at) = first_saved_at {
            self.created_at = created_at;
        }
        self.updated_at = now;
    }
}

impl PartialEq for Hero {
    fn eq(&self, other: &Self) -> bool {
        // Entity equality: same ID = same entity
        self.id == other.id
    }
}

impl Eq for Hero {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn hero(level: u32, hp: u32) -> Hero {
        let created = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        Hero::new(HeroId::new(1), "Aria", created)
            .with_level(level)
            .with_hp(hp)
    }

    #[test]
    fn test_hero_defaults() {
        let h = Hero::new(HeroId::new(7), "Rook", Utc::now());
        assert_eq!(h.job_class(), JobClass::Warrior);
        assert_eq!(h.level(), 1);
        assert_eq!(h.hp_current(), 100);
        assert!(h.is_active());
        assert!(h.biography().is_empty());
        assert_eq!(h.created_at(), h.updated_at());
        assert!(h.region().is_none());
    }

    #[test]
    fn test_max_hp_and_percentage() {
        let h = hero(3, 100);
        assert_eq!(h.max_hp(), 300);
        assert_eq!(h.hp_percentage(), 33.3);

        assert_eq!(hero(2, 200).hp_percentage(), 100.0);
        assert_eq!(hero(3, 200).hp_percentage(), 66.7);
    }

    #[test]
    fn test_percentage_of_level_zero_is_zero() {
        let h = hero(0, 50);
        assert_eq!(h.max_hp(), 0);
        assert_eq!(h.hp_percentage(), 0.0);
    }

    #[test]
    fn test_heal_clamps_to_max() {
        let mut h = hero(2, 150);
        let delta = h.heal(100);
        assert_eq!(delta, 50);
        assert_eq!(h.hp_current(), 200);

        assert_eq!(h.heal(10), 0);
        assert_eq!(h.hp_current(), 200);
    }

    #[test]
    fn test_heal_within_bounds_applies_full_amount() {
        let mut h = hero(5, 100);
        let old = h.hp_current();
        let delta = h.heal(40);
        assert_eq!(delta, 40);
        assert_eq!(i64::from(h.hp_current()), i64::from(old) + delta);
    }

    #[test]
    fn test_heal_above_max_pulls_down_to_bound() {
        // Direct assignment may exceed the bound; heal's clamp still applies
        let mut h = hero(1, 250);
        let delta = h.heal(10);
        assert_eq!(delta, -150);
        assert_eq!(h.hp_current(), 100);
    }

    #[test]
    fn test_take_damage_clamps_to_zero() {
        let mut h = hero(1, 30);
        let lost = h.take_damage(50);
        assert_eq!(lost, 30);
        assert_eq!(h.hp_current(), 0);

        assert_eq!(h.take_damage(5), 0);
    }

    #[test]
    fn test_take_damage_delta_identity() {
        let mut h = hero(4, 320);
        let old = h.hp_current();
        let lost = h.take_damage(120);
        assert_eq!(old, h.hp_current() + lost);
        assert_eq!(h.hp_current(), 200);
    }

    #[test]
    fn test_detach_relations() {
        let mut h = hero(1, 100)
            .with_region(RegionId::new(4))
            .with_skills([SkillId::new(1), SkillId::new(2), SkillId::new(1)]);
        assert_eq!(h.skills().len(), 2);

        assert!(!h.detach_region(RegionId::new(5)));
        assert!(h.detach_region(RegionId::new(4)));
        assert!(h.region().is_none());

        assert!(h.detach_skill(SkillId::new(1)));
        assert!(!h.has_skill(SkillId::new(1)));
        assert!(h.has_skill(SkillId::new(2)));
    }

    #[test]
    fn test_mark_saved_keeps_first_creation_time() {
        let first = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2025, 2, 1, 12, 0, 0).unwrap();
        let mut h = hero(1, 100);

        h.mark_saved(Some(first), later);
        assert_eq!(h.created_at(), first);
        assert_eq!(h.updated_at(), later);
    }
}
