//! Seeding - Writers that fill a store before it is served
//!
//! - `generator` - Random dataset with fixed regions and skills
//! - `dataset` - JSON file of regions, skills and heroes

pub mod dataset;
pub mod generator;

use std::sync::Arc;

use atlas_domain::{
    DamageType, HeroRepository, Region, RegionRepository, RepositoryError, Skill,
    SkillRepository,
};

use crate::repository::in_memory::InMemoryAtlasStore;

/// The repositories a seeder writes through
#[derive(Clone)]
pub struct Repositories {
    pub heroes: Arc<dyn HeroRepository>,
    pub regions: Arc<dyn RegionRepository>,
    pub skills: Arc<dyn SkillRepository>,
}

impl From<&InMemoryAtlasStore> for Repositories {
    fn from(store: &InMemoryAtlasStore) -> Self {
        Self {
            heroes: store.heroes(),
            regions: store.regions(),
            skills: store.skills(),
        }
    }
}

impl Repositories {
    /// Region named `name`, created with `environment_type` when missing
    pub fn region_named(&self, name: &str, environment_type: &str) -> Result<Region, RepositoryError> {
        match self.regions.find_by_name(name)? {
            Some(region) => Ok(region),
            None => self
                .regions
                .save(Region::new(self.regions.next_id()?, name, environment_type)),
        }
    }

    /// Skill named `name`, created with the given attributes when missing
    pub fn skill_named(
        &self,
        name: &str,
        damage_type: DamageType,
        mana_cost: u32,
    ) -> Result<Skill, RepositoryError> {
        match self.skills.find_by_name(name)? {
            Some(skill) => Ok(skill),
            None => self.skills.save(
                Skill::new(self.skills.next_id()?, name)
                    .with_damage_type(damage_type)
                    .with_mana_cost(mana_cost),
            ),
        }
    }
}
