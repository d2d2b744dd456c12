//! Hero Repository - Abstract persistence for Heroes
//!
//! The store owns identity allocation, nickname uniqueness and the
//! creation/update timestamps. Filtering is expressed as a [`HeroQuery`];
//! a store that can push it down (SQL) overrides `find_matching`.

use crate::model::hero::{Hero, HeroId};
use crate::query::HeroQuery;

use super::RepositoryError;

pub trait HeroRepository: Send + Sync {
    /// Save a hero (create or update) and return it as stored
    fn save(&self, hero: Hero) -> Result<Hero, RepositoryError>;

    /// Find a hero by ID
    fn find_by_id(&self, id: HeroId) -> Result<Option<Hero>, RepositoryError>;

    /// Find a hero by its unique nickname
    fn find_by_nickname(&self, nickname: &str) -> Result<Option<Hero>, RepositoryError>;

    /// List all heroes, in no particular order
    fn list_all(&self) -> Result<Vec<Hero>, RepositoryError>;

    /// Delete a hero (skill memberships go with it)
    fn delete(&self, id: HeroId) -> Result<(), RepositoryError>;

    /// Reserve the next free identity
    fn next_id(&self) -> Result<HeroId, RepositoryError>;

    /// Evaluate a query against the stored heroes
    fn find_matching(&self, query: &HeroQuery) -> Result<Vec<Hero>, RepositoryError> {
        Ok(query.evaluate(self.list_all()?))
    }

    /// Check if a hero exists
    fn exists(&self, id: HeroId) -> Result<bool, RepositoryError> {
        Ok(self.find_by_id(id)?.is_some())
    }

    /// Count all heroes
    fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.list_all()?.len())
    }
}
