//! Region Repository - Abstract persistence for Regions
//!
//! Deleting a region must never delete heroes: implementations null the
//! `region` reference of every hero that pointed at it.

use crate::model::region::{Region, RegionId};
use crate::query::RegionQuery;

use super::{Counted, RepositoryError};

pub trait RegionRepository: Send + Sync {
    /// Save a region (create or update); names are unique
    fn save(&self, region: Region) -> Result<Region, RepositoryError>;

    fn find_by_id(&self, id: RegionId) -> Result<Option<Region>, RepositoryError>;

    fn find_by_name(&self, name: &str) -> Result<Option<Region>, RepositoryError>;

    fn list_all(&self) -> Result<Vec<Region>, RepositoryError>;

    /// Delete a region, detaching it from its heroes
    fn delete(&self, id: RegionId) -> Result<(), RepositoryError>;

    fn next_id(&self) -> Result<RegionId, RepositoryError>;

    /// All regions annotated with their hero counts
    fn list_counted(&self) -> Result<Vec<Counted<Region>>, RepositoryError>;

    fn find_counted(&self, id: RegionId) -> Result<Option<Counted<Region>>, RepositoryError> {
        Ok(self
            .list_counted()?
            .into_iter()
            .find(|r| r.entity.id() == id))
    }

    fn find_matching(&self, query: &RegionQuery) -> Result<Vec<Counted<Region>>, RepositoryError> {
        Ok(query.evaluate(self.list_counted()?))
    }
}
