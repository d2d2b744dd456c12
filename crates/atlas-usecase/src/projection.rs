//! Projections - The two shapes a hero is served in
//!
//! `HeroSummary` for listings, `HeroDetail` for everything else. Both are
//! flat serializable structs built from a hero plus a [`RelatedIndex`]
//! holding the regions and skills it may point at.

use std::collections::HashMap;

use atlas_domain::{
    ClassShare, Counted, Hero, HeroStatistics, Region, RegionId, RegionShare, Skill, SkillId,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Regions and skills keyed by id, annotated with their hero counts
#[derive(Debug, Clone, Default)]
pub struct RelatedIndex {
    regions: HashMap<RegionId, Counted<Region>>,
    skills: HashMap<SkillId, Counted<Skill>>,
}

impl RelatedIndex {
    pub fn new(regions: Vec<Counted<Region>>, skills: Vec<Counted<Skill>>) -> Self {
        Self {
            regions: regions.into_iter().map(|r| (r.entity.id(), r)).collect(),
            skills: skills.into_iter().map(|s| (s.entity.id(), s)).collect(),
        }
    }

    pub fn region(&self, id: RegionId) -> Option<&Counted<Region>> {
        self.regions.get(&id)
    }

    pub fn skill(&self, id: SkillId) -> Option<&Counted<Skill>> {
        self.skills.get(&id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionView {
    pub id: u64,
    pub name: String,
    pub environment_type: String,
    pub heroes_count: usize,
}

impl From<&Counted<Region>> for RegionView {
    fn from(counted: &Counted<Region>) -> Self {
        let region = &counted.entity;
        Self {
            id: region.id().value(),
            name: region.name().to_string(),
            environment_type: region.environment_type().to_string(),
            heroes_count: counted.heroes_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillView {
    pub id: u64,
    pub name: String,
    pub damage_type: &'static str,
    pub damage_type_display: &'static str,
    pub mana_cost: u32,
    pub heroes_count: usize,
}

impl From<&Counted<Skill>> for SkillView {
    fn from(counted: &Counted<Skill>) -> Self {
        let skill = &counted.entity;
        Self {
            id: skill.id().value(),
            name: skill.name().to_string(),
            damage_type: skill.damage_type().as_str(),
            damage_type_display: skill.damage_type().display_name(),
            mana_cost: skill.mana_cost(),
            heroes_count: counted.heroes_count,
        }
    }
}

/// Light shape used by the plain hero listing
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroSummary {
    pub id: u64,
    pub nickname: String,
    pub job_class: &'static str,
    pub job_class_display: &'static str,
    pub level: u32,
    pub hp_current: u32,
    pub max_hp: u64,
    pub hp_percentage: f64,
    pub xp: u64,
    pub gold: u64,
    pub is_active: bool,
    pub region: Option<u64>,
    pub region_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl HeroSummary {
    pub fn from_hero(hero: &Hero, related: &RelatedIndex) -> Self {
        let region = hero.region().and_then(|id| related.region(id));
        Self {
            id: hero.id().value(),
            nickname: hero.nickname().to_string(),
            job_class: hero.job_class().as_str(),
            job_class_display: hero.job_class().display_name(),
            level: hero.level(),
            hp_current: hero.hp_current(),
            max_hp: hero.max_hp(),
            hp_percentage: hero.hp_percentage(),
            xp: hero.xp(),
            gold: hero.gold(),
            is_active: hero.is_active(),
            region: hero.region().map(|id| id.value()),
            region_name: region.map(|r| r.entity.name().to_string()),
            created_at: hero.created_at(),
        }
    }
}

/// Full shape, with the region and skills nested
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroDetail {
    pub id: u64,
    pub nickname: String,
    pub job_class: &'static str,
    pub job_class_display: &'static str,
    pub level: u32,
    pub hp_current: u32,
    pub max_hp: u64,
    pub hp_percentage: f64,
    pub xp: u64,
    pub gold: u64,
    pub is_active: bool,
    pub biography: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub region: Option<u64>,
    pub region_name: Option<String>,
    pub region_data: Option<RegionView>,
    pub skills: Vec<SkillView>,
    pub skills_count: usize,
}

impl HeroDetail {
    pub fn from_hero(hero: &Hero, related: &RelatedIndex) -> Self {
        let region = hero.region().and_then(|id| related.region(id));
        let skills: Vec<SkillView> = hero
            .skills()
            .iter()
            .filter_map(|id| related.skill(*id))
            .map(SkillView::from)
            .collect();

        Self {
            id: hero.id().value(),
            nickname: hero.nickname().to_string(),
            job_class: hero.job_class().as_str(),
            job_class_display: hero.job_class().display_name(),
            level: hero.level(),
            hp_current: hero.hp_current(),
            max_hp: hero.max_hp(),
            hp_percentage: hero.hp_percentage(),
            xp: hero.xp(),
            gold: hero.gold(),
            is_active: hero.is_active(),
            biography: hero.biography().to_string(),
            created_at: hero.created_at(),
            updated_at: hero.updated_at(),
            region: hero.region().map(|id| id.value()),
            region_name: region.map(|r| r.entity.name().to_string()),
            region_data: region.map(RegionView::from),
            skills_count: skills.len(),
            skills,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassShareView {
    pub job_class: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionShareView {
    pub region_name: String,
    pub count: usize,
    pub average_level: f64,
}

/// Wire shape of the statistics endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsView {
    pub total_heroes: usize,
    pub average_level: f64,
    pub total_gold: u64,
    pub total_xp: u64,
    pub average_gold: f64,
    pub class_distribution: Vec<ClassShareView>,
    pub region_distribution: Vec<RegionShareView>,
}

impl From<&HeroStatistics> for StatsView {
    fn from(stats: &HeroStatistics) -> Self {
        Self {
            total_heroes: stats.total_heroes,
            average_level: stats.average_level,
            total_gold: stats.total_gold,
            total_xp: stats.total_xp,
            average_gold: stats.average_gold,
            class_distribution: stats
                .class_distribution
                .iter()
                .map(|ClassShare { job_class, count }| ClassShareView {
                    job_class: job_class.as_str(),
                    count: *count,
                })
                .collect(),
            region_distribution: stats
                .region_distribution
                .iter()
                .map(|share: &RegionShare| RegionShareView {
                    region_name: share.region_name.clone(),
                    count: share.count,
                    average_level: share.average_level,
                })
                .collect(),
        }
    }
}
