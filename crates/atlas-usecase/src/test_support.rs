//! Read-only fixture store shared by the catalog tests

use std::sync::Arc;

use atlas_domain::{
    Counted, DamageType, Hero, HeroId, HeroRepository, JobClass, Region, RegionId,
    RegionRepository, RepositoryError, Skill, SkillId, SkillRepository,
};
use chrono::{Duration, TimeZone, Utc};

/// Plain vectors behind all three repository traits.
///
/// Writes are refused; the catalogs never write.
#[derive(Debug, Default)]
pub struct Fixture {
    heroes: Vec<Hero>,
    regions: Vec<Region>,
    skills: Vec<Skill>,
}

#[derive(Clone)]
pub struct FixtureStore {
    fixture: Arc<Fixture>,
}

impl FixtureStore {
    pub fn empty() -> Self {
        Self {
            fixture: Arc::new(Fixture::default()),
        }
    }

    /// Only `heroes`, with no regions or skills
    pub fn with_heroes(heroes: Vec<Hero>) -> Self {
        Self {
            fixture: Arc::new(Fixture {
                heroes,
                ..Fixture::default()
            }),
        }
    }

    /// Six heroes over three regions and three skills
    pub fn roster() -> Self {
        let base = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let hero = |id: u64, nickname: &str, class: JobClass, level: u32| {
            Hero::new(HeroId::new(id), nickname, base + Duration::hours(id as i64))
                .with_job_class(class)
                .with_level(level)
                .with_hp(level * 100)
        };

        let regions = vec![
            Region::new(RegionId::new(1), "Iron Mountains", "mountain"),
            Region::new(RegionId::new(2), "Ashen Desert", "desert"),
            Region::new(RegionId::new(3), "Sunken Isles", "island"),
        ];
        let skills = vec![
            Skill::new(SkillId::new(1), "Fireball")
                .with_damage_type(DamageType::Magical)
                .with_mana_cost(30),
            Skill::new(SkillId::new(2), "Healing Light")
                .with_damage_type(DamageType::Healing)
                .with_mana_cost(20),
            Skill::new(SkillId::new(3), "Backstab").with_mana_cost(10),
        ];
        let heroes = vec![
            hero(1, "Aria", JobClass::Mage, 50)
                .with_xp(5000)
                .with_region(RegionId::new(1))
                .with_skills([SkillId::new(1), SkillId::new(2)])
                .with_biography("Exiled from her tower"),
            hero(2, "Borin", JobClass::Warrior, 12)
                .with_active(false)
                .with_region(RegionId::new(1)),
            hero(3, "ShadowFox", JobClass::Rogue, 50)
                .with_xp(9000)
                .with_region(RegionId::new(2))
                .with_skills([SkillId::new(3)]),
            hero(4, "Celes", JobClass::Mage, 71)
                .with_xp(1000)
                .with_region(RegionId::new(2))
                .with_skills([SkillId::new(1)]),
            hero(5, "Dorn", JobClass::Paladin, 49).with_gold(900),
            hero(6, "Fenn", JobClass::Cleric, 3),
        ];

        Self {
            fixture: Arc::new(Fixture {
                heroes,
                regions,
                skills,
            }),
        }
    }

    pub fn heroes(&self) -> Arc<dyn HeroRepository> {
        self.fixture.clone()
    }

    pub fn regions(&self) -> Arc<dyn RegionRepository> {
        self.fixture.clone()
    }

    pub fn skills(&self) -> Arc<dyn SkillRepository> {
        self.fixture.clone()
    }
}

fn read_only() -> RepositoryError {
    RepositoryError::Persistence {
        message: "fixture is read-only".to_string(),
    }
}

impl HeroRepository for Fixture {
    fn save(&self, _hero: Hero) -> Result<Hero, RepositoryError> {
        Err(read_only())
    }

    fn find_by_id(&self, id: HeroId) -> Result<Option<Hero>, RepositoryError> {
        Ok(self.heroes.iter().find(|h| h.id() == id).cloned())
    }

    fn find_by_nickname(&self, nickname: &str) -> Result<Option<Hero>, RepositoryError> {
        Ok(self.heroes.iter().find(|h| h.nickname() == nickname).cloned())
    }

    fn list_all(&self) -> Result<Vec<Hero>, RepositoryError> {
        Ok(self.heroes.clone())
    }

    fn delete(&self, _id: HeroId) -> Result<(), RepositoryError> {
        Err(read_only())
    }

    fn next_id(&self) -> Result<HeroId, RepositoryError> {
        Err(read_only())
    }
}

impl RegionRepository for Fixture {
    fn save(&self, _region: Region) -> Result<Region, RepositoryError> {
        Err(read_only())
    }

    fn find_by_id(&self, id: RegionId) -> Result<Option<Region>, RepositoryError> {
        Ok(self.regions.iter().find(|r| r.id() == id).cloned())
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Region>, RepositoryError> {
        Ok(self.regions.iter().find(|r| r.name() == name).cloned())
    }

    fn list_all(&self) -> Result<Vec<Region>, RepositoryError> {
        Ok(self.regions.clone())
    }

    fn delete(&self, _id: RegionId) -> Result<(), RepositoryError> {
        Err(read_only())
    }

    fn next_id(&self) -> Result<RegionId, RepositoryError> {
        Err(read_only())
    }

    fn list_counted(&self) -> Result<Vec<Counted<Region>>, RepositoryError> {
        Ok(self
            .regions
            .iter()
            .map(|region| {
                let count = self
                    .heroes
                    .iter()
                    .filter(|h| h.region() == Some(region.id()))
                    .count();
                Counted::new(region.clone(), count)
            })
            .collect())
    }
}

impl SkillRepository for Fixture {
    fn save(&self, _skill: Skill) -> Result<Skill, RepositoryError> {
        Err(read_only())
    }

    fn find_by_id(&self, id: SkillId) -> Result<Option<Skill>, RepositoryError> {
        Ok(self.skills.iter().find(|s| s.id() == id).cloned())
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Skill>, RepositoryError> {
        Ok(self.skills.iter().find(|s| s.name() == name).cloned())
    }

    fn list_all(&self) -> Result<Vec<Skill>, RepositoryError> {
        Ok(self.skills.clone())
    }

    fn delete(&self, _id: SkillId) -> Result<(), RepositoryError> {
        Err(read_only())
    }

    fn next_id(&self) -> Result<SkillId, RepositoryError> {
        Err(read_only())
    }

    fn list_counted(&self) -> Result<Vec<Counted<Skill>>, RepositoryError> {
        Ok(self
            .skills
            .iter()
            .map(|skill| {
                let count = self.heroes.iter().filter(|h| h.has_skill(skill.id())).count();
                Counted::new(skill.clone(), count)
            })
            .collect())
    }
}
