//! Skill Repository - Abstract persistence for Skills
//!
//! Deleting a skill removes only the membership edges; heroes stay.

use crate::model::skill::{Skill, SkillId};
use crate::query::SkillQuery;

use super::{Counted, RepositoryError};

pub trait SkillRepository: Send + Sync {
    fn save(&self, skill: Skill) -> Result<Skill, RepositoryError>;

    fn find_by_id(&self, id: SkillId) -> Result<Option<Skill>, RepositoryError>;

    /// First skill carrying `name` (names are not unique)
    fn find_by_name(&self, name: &str) -> Result<Option<Skill>, RepositoryError>;

    fn list_all(&self) -> Result<Vec<Skill>, RepositoryError>;

    /// Delete a skill and every hero membership edge pointing at it
    fn delete(&self, id: SkillId) -> Result<(), RepositoryError>;

    fn next_id(&self) -> Result<SkillId, RepositoryError>;

    /// All skills annotated with the number of heroes sharing them
    fn list_counted(&self) -> Result<Vec<Counted<Skill>>, RepositoryError>;

    fn find_counted(&self, id: SkillId) -> Result<Option<Counted<Skill>>, RepositoryError> {
        Ok(self
            .list_counted()?
            .into_iter()
            .find(|s| s.entity.id() == id))
    }

    fn find_matching(&self, query: &SkillQuery) -> Result<Vec<Counted<Skill>>, RepositoryError> {
        Ok(query.evaluate(self.list_counted()?))
    }
}
