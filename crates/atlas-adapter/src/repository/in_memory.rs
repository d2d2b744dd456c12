//! In-Memory Repository Implementations
//!
//! One set of relational tables behind a single RwLock, shared by the
//! three repositories so that cross-table rules (unique names, dangling
//! references, detaching on delete) are checked under one lock.
//! Useful for testing, development and seeded demo servers.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use atlas_domain::{
    Counted, Hero, HeroId, HeroRepository, Region, RegionId, RegionRepository, RepositoryError,
    Skill, SkillId, SkillRepository,
};
use chrono::Utc;

#[derive(Debug, Default)]
struct AtlasTables {
    heroes: BTreeMap<HeroId, Hero>,
    regions: BTreeMap<RegionId, Region>,
    skills: BTreeMap<SkillId, Skill>,
    // Highest id handed out or stored, per table
    last_hero: u64,
    last_region: u64,
    last_skill: u64,
}

impl AtlasTables {
    fn heroes_in(&self, region: RegionId) -> usize {
        self.heroes
            .values()
            .filter(|h| h.region() == Some(region))
            .count()
    }

    fn heroes_with(&self, skill: SkillId) -> usize {
        self.heroes.values().filter(|h| h.has_skill(skill)).count()
    }
}

/// Handle to the shared tables
#[derive(Debug, Clone, Default)]
struct Tables(Arc<RwLock<AtlasTables>>);

impl Tables {
    fn read(&self) -> Result<RwLockReadGuard<'_, AtlasTables>, RepositoryError> {
        self.0.read().map_err(|_| RepositoryError::Persistence {
            message: "Failed to acquire read lock".to_string(),
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, AtlasTables>, RepositoryError> {
        self.0.write().map_err(|_| RepositoryError::Persistence {
            message: "Failed to acquire write lock".to_string(),
        })
    }
}

/// In-memory relational store
///
/// Thread-safe implementation using RwLock. Clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAtlasStore {
    tables: Tables,
}

impl InMemoryAtlasStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn heroes(&self) -> Arc<dyn HeroRepository> {
        Arc::new(InMemoryHeroRepository {
            tables: self.tables.clone(),
        })
    }

    pub fn regions(&self) -> Arc<dyn RegionRepository> {
        Arc::new(InMemoryRegionRepository {
            tables: self.tables.clone(),
        })
    }

    pub fn skills(&self) -> Arc<dyn SkillRepository> {
        Arc::new(InMemorySkillRepository {
            tables: self.tables.clone(),
        })
    }

    /// Empty every table; ids keep counting up
    pub fn clear(&self) -> Result<(), RepositoryError> {
        let mut tables = self.tables.write()?;
        tables.heroes.clear();
        tables.regions.clear();
        tables.skills.clear();
        Ok(())
    }
}

/// In-memory Hero Repository
#[derive(Debug, Clone)]
pub struct InMemoryHeroRepository {
    tables: Tables,
}

impl HeroRepository for InMemoryHeroRepository {
    fn save(&self, mut hero: Hero) -> Result<Hero, RepositoryError> {
        let mut tables = self.tables.write()?;

        if tables
            .heroes
            .values()
            .any(|h| h.id() != hero.id() && h.nickname() == hero.nickname())
        {
            return Err(RepositoryError::Conflict {
                entity: "Hero",
                field: "nickname",
                value: hero.nickname().to_string(),
            });
        }
        if let Some(region) = hero.region() {
            if !tables.regions.contains_key(&region) {
                return Err(RepositoryError::DanglingReference {
                    entity: "Region",
                    id: region.value(),
                });
            }
        }
        if let Some(skill) = hero.skills().iter().find(|s| !tables.skills.contains_key(*s)) {
            return Err(RepositoryError::DanglingReference {
                entity: "Skill",
                id: skill.value(),
            });
        }

        let first_saved_at = tables.heroes.get(&hero.id()).map(|h| h.created_at());
        hero.mark_saved(first_saved_at, Utc::now());

        tables.last_hero = tables.last_hero.max(hero.id().value());
        tables.heroes.insert(hero.id(), hero.clone());
        Ok(hero)
    }

    fn find_by_id(&self, id: HeroId) -> Result<Option<Hero>, RepositoryError> {
        Ok(self.tables.read()?.heroes.get(&id).cloned())
    }

    fn find_by_nickname(&self, nickname: &str) -> Result<Option<Hero>, RepositoryError> {
        Ok(self
            .tables
            .read()?
            .heroes
            .values()
            .find(|h| h.nickname() == nickname)
            .cloned())
    }

    fn list_all(&self) -> Result<Vec<Hero>, RepositoryError> {
        Ok(self.tables.read()?.heroes.values().cloned().collect())
    }

    fn delete(&self, id: HeroId) -> Result<(), RepositoryError> {
        self.tables
            .write()?
            .heroes
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound {
                entity: "Hero",
                id: id.value(),
            })
    }

    fn next_id(&self) -> Result<HeroId, RepositoryError> {
        let mut tables = self.tables.write()?;
        tables.last_hero += 1;
        Ok(HeroId::new(tables.last_hero))
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.tables.read()?.heroes.len())
    }
}

/// In-memory Region Repository
#[derive(Debug, Clone)]
pub struct InMemoryRegionRepository {
    tables: Tables,
}

impl RegionRepository for InMemoryRegionRepository {
    fn save(&self, region: Region) -> Result<Region, RepositoryError> {
        let mut tables = self.tables.write()?;

        if tables
            .regions
            .values()
            .any(|r| r.id() != region.id() && r.name() == region.name())
        {
            return Err(RepositoryError::Conflict {
                entity: "Region",
                field: "name",
                value: region.name().to_string(),
            });
        }

        tables.last_region = tables.last_region.max(region.id().value());
        tables.regions.insert(region.id(), region.clone());
        Ok(region)
    }

    fn find_by_id(&self, id: RegionId) -> Result<Option<Region>, RepositoryError> {
        Ok(self.tables.read()?.regions.get(&id).cloned())
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Region>, RepositoryError> {
        Ok(self
            .tables
            .read()?
            .regions
            .values()
            .find(|r| r.name() == name)
            .cloned())
    }

    fn list_all(&self) -> Result<Vec<Region>, RepositoryError> {
        Ok(self.tables.read()?.regions.values().cloned().collect())
    }

    fn delete(&self, id: RegionId) -> Result<(), RepositoryError> {
        let mut tables = self.tables.write()?;
        if tables.regions.remove(&id).is_none() {
            return Err(RepositoryError::NotFound {
                entity: "Region",
                id: id.value(),
            });
        }
        for hero in tables.heroes.values_mut() {
            hero.detach_region(id);
        }
        Ok(())
    }

    fn next_id(&self) -> Result<RegionId, RepositoryError> {
        let mut tables = self.tables.write()?;
        tables.last_region += 1;
        Ok(RegionId::new(tables.last_region))
    }

    fn list_counted(&self) -> Result<Vec<Counted<Region>>, RepositoryError> {
        let tables = self.tables.read()?;
        Ok(tables
            .regions
            .values()
            .map(|r| Counted::new(r.clone(), tables.heroes_in(r.id())))
            .collect())
    }

    fn find_counted(&self, id: RegionId) -> Result<Option<Counted<Region>>, RepositoryError> {
        let tables = self.tables.read()?;
        Ok(tables
            .regions
            .get(&id)
            .map(|r| Counted::new(r.clone(), tables.heroes_in(id))))
    }
}

/// In-memory Skill Repository
#[derive(Debug, Clone)]
pub struct InMemorySkillRepository {
    tables: Tables,
}

impl SkillRepository for InMemorySkillRepository {
    fn save(&self, skill: Skill) -> Result<Skill, RepositoryError> {
        let mut tables = self.tables.write()?;
        tables.last_skill = tables.last_skill.max(skill.id().value());
        tables.skills.insert(skill.id(), skill.clone());
        Ok(skill)
    }

    fn find_by_id(&self, id: SkillId) -> Result<Option<Skill>, RepositoryError> {
        Ok(self.tables.read()?.skills.get(&id).cloned())
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Skill>, RepositoryError> {
        Ok(self
            .tables
            .read()?
            .skills
            .values()
            .find(|s| s.name() == name)
            .cloned())
    }

    fn list_all(&self) -> Result<Vec<Skill>, RepositoryError> {
        Ok(self.tables.read()?.skills.values().cloned().collect())
    }

    fn delete(&self, id: SkillId) -> Result<(), RepositoryError> {
        let mut tables = self.tables.write()?;
        if tables.skills.remove(&id).is_none() {
            return Err(RepositoryError::NotFound {
                entity: "Skill",
                id: id.value(),
            });
        }
        for hero in tables.heroes.values_mut() {
            hero.detach_skill(id);
        }
        Ok(())
    }

    fn next_id(&self) -> Result<SkillId, RepositoryError> {
        let mut tables = self.tables.write()?;
        tables.last_skill += 1;
        Ok(SkillId::new(tables.last_skill))
    }

    fn list_counted(&self) -> Result<Vec<Counted<Skill>>, RepositoryError> {
        let tables = self.tables.read()?;
        Ok(tables
            .skills
            .values()
            .map(|s| Counted::new(s.clone(), tables.heroes_with(s.id())))
            .collect())
    }

    fn find_counted(&self, id: SkillId) -> Result<Option<Counted<Skill>>, RepositoryError> {
        let tables = self.tables.read()?;
        Ok(tables
            .skills
            .get(&id)
            .map(|s| Counted::new(s.clone(), tables.heroes_with(id))))
    }
}
