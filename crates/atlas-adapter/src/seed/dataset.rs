//! Dataset Loader - Seed a store from a JSON file
//!
//! ```json
//! {
//!   "regions": [{ "name": "Iron Mountains", "environment_type": "mountain" }],
//!   "skills":  [{ "name": "Fireball", "damage_type": "magical", "mana_cost": 25 }],
//!   "heroes":  [{ "nickname": "Aria", "job_class": "mage", "level": 12,
//!                 "region": "Iron Mountains", "skills": ["Fireball"] }]
//! }
//! ```
//!
//! Heroes reference regions and skills by name. Regions and skills that
//! already exist are reused; heroes are always created.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use atlas_domain::{DamageType, Hero, JobClass, RepositoryError, UnknownVariantError};

use super::Repositories;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    UnknownVariant(#[from] UnknownVariantError),

    #[error("Hero '{hero}' references unknown {kind} '{name}'")]
    UnknownReference {
        hero: String,
        kind: &'static str,
        name: String,
    },

    #[error(transparent)]
    Store(#[from] RepositoryError),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Dataset {
    #[serde(default)]
    regions: Vec<RegionRecord>,
    #[serde(default)]
    skills: Vec<SkillRecord>,
    #[serde(default)]
    heroes: Vec<HeroRecord>,
}

#[derive(Debug, Deserialize)]
struct RegionRecord {
    name: String,
    #[serde(default)]
    environment_type: String,
}

#[derive(Debug, Deserialize)]
struct SkillRecord {
    name: String,
    #[serde(default)]
    damage_type: Option<String>,
    #[serde(default)]
    mana_cost: u32,
}

#[derive(Debug, Deserialize)]
struct HeroRecord {
    nickname: String,
    #[serde(default)]
    job_class: Option<String>,
    #[serde(default = "default_level")]
    level: u32,
    #[serde(default)]
    hp_current: Option<u32>,
    #[serde(default)]
    xp: u64,
    #[serde(default)]
    gold: u64,
    #[serde(default = "default_active")]
    is_active: bool,
    #[serde(default)]
    biography: String,
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    skills: Vec<String>,
}

fn default_level() -> u32 {
    1
}

fn default_active() -> bool {
    true
}

/// Counts of what a load wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetSummary {
    pub regions: usize,
    pub skills: usize,
    pub heroes: usize,
}

/// Load a dataset file into `repos`
pub fn load_dataset(path: &Path, repos: &Repositories) -> Result<DatasetSummary, DatasetError> {
    let content = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let summary = load_dataset_str(&content, repos)?;
    info!(
        path = %path.display(),
        regions = summary.regions,
        skills = summary.skills,
        heroes = summary.heroes,
        "dataset loaded"
    );
    Ok(summary)
}

/// Load a dataset from its JSON text
pub fn load_dataset_str(json: &str, repos: &Repositories) -> Result<DatasetSummary, DatasetError> {
    let dataset: Dataset = serde_json::from_str(json)?;

    for record in &dataset.regions {
        repos.region_named(&record.name, &record.environment_type)?;
    }
    for record in &dataset.skills {
        let damage_type = match &record.damage_type {
            Some(raw) => raw.parse::<DamageType>()?,
            None => DamageType::default(),
        };
        repos.skill_named(&record.name, damage_type, record.mana_cost)?;
    }
    for record in &dataset.heroes {
        let hero = hero_from_record(record, repos)?;
        repos.heroes.save(hero)?;
    }

    Ok(DatasetSummary {
        regions: dataset.regions.len(),
        skills: dataset.skills.len(),
        heroes: dataset.heroes.len(),
    })
}

fn hero_from_record(record: &HeroRecord, repos: &Repositories) -> Result<Hero, DatasetError> {
    let unknown = |kind: &'static str, name: &str| DatasetError::UnknownReference {
        hero: record.nickname.clone(),
        kind,
        name: name.to_string(),
    };

    let job_class = match &record.job_class {
        Some(raw) => raw.parse::<JobClass>()?,
        None => JobClass::default(),
    };

    let mut hero = Hero::new(repos.heroes.next_id()?, record.nickname.as_str(), Utc::now())
        .with_job_class(job_class)
        .with_level(record.level)
        .with_xp(record.xp)
        .with_gold(record.gold)
        .with_active(record.is_active)
        .with_biography(record.biography.as_str());
    if let Some(hp) = record.hp_current {
        hero = hero.with_hp(hp);
    }

    if let Some(name) = &record.region {
        let region = repos
            .regions
            .find_by_name(name)?
            .ok_or_else(|| unknown("region", name))?;
        hero = hero.with_region(region.id());
    }

    let mut skills = Vec::with_capacity(record.skills.len());
    for name in &record.skills {
        let skill = repos
            .skills
            .find_by_name(name)?
            .ok_or_else(|| unknown("skill", name))?;
        skills.push(skill.id());
    }
    Ok(hero.with_skills(skills))
}
