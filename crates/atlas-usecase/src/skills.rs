//! Skill Catalog - Skills with the number of heroes sharing them

use std::sync::Arc;

use atlas_domain::{SkillId, SkillQuery, SkillRepository};
use tracing::debug;

use crate::error::UseCaseError;
use crate::pagination::{paginate, Page, PageRequest};
use crate::projection::SkillView;

pub struct SkillCatalog {
    skills: Arc<dyn SkillRepository>,
}

impl SkillCatalog {
    pub fn new(skills: Arc<dyn SkillRepository>) -> Self {
        Self { skills }
    }

    pub fn list(&self, request: PageRequest<'_>) -> Result<Page<SkillView>, UseCaseError> {
        let query = SkillQuery::build(request.params())?;
        debug!(filters = query.fingerprint(), "listing skills");

        let page = paginate(self.skills.find_matching(&query)?, request)?;
        Ok(page.map(|skill| SkillView::from(&skill)))
    }

    pub fn retrieve(&self, id: SkillId) -> Result<SkillView, UseCaseError> {
        self.skills
            .find_counted(id)?
            .map(|skill| SkillView::from(&skill))
            .ok_or_else(|| UseCaseError::not_found("Skill", id.value()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FixtureStore;
    use atlas_domain::QueryParams;

    fn list(params: QueryParams) -> Result<Page<SkillView>, UseCaseError> {
        let store = FixtureStore::roster();
        SkillCatalog::new(store.skills()).list(PageRequest::new("/skills/", &params))
    }

    #[test]
    fn test_default_order_is_name() {
        let page = list(QueryParams::new()).unwrap();
        let names: Vec<&str> = page.results.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Backstab", "Fireball", "Healing Light"]);
    }

    #[test]
    fn test_damage_type_filter() {
        let page = list(QueryParams::new().with("damage_type", "magical")).unwrap();
        assert_eq!(page.count, 1);
        assert_eq!(page.results[0].name, "Fireball");
        assert_eq!(page.results[0].heroes_count, 2);

        assert!(matches!(
            list(QueryParams::new().with("damage_type", "fire")),
            Err(UseCaseError::Validation(_))
        ));
    }

    #[test]
    fn test_order_by_mana_cost_descending() {
        let page = list(QueryParams::new().with("ordering", "-mana_cost")).unwrap();
        let costs: Vec<u32> = page.results.iter().map(|s| s.mana_cost).collect();
        assert_eq!(costs, vec![30, 20, 10]);
    }

    #[test]
    fn test_search_matches_damage_type() {
        let page = list(QueryParams::new().with("search", "heal")).unwrap();
        assert_eq!(page.count, 1);
        assert_eq!(page.results[0].damage_type, "healing");
    }

    #[test]
    fn test_retrieve_unknown() {
        let store = FixtureStore::roster();
        assert!(matches!(
            SkillCatalog::new(store.skills()).retrieve(SkillId::new(77)),
            Err(UseCaseError::NotFound { entity: "Skill", id: 77 })
        ));
    }
}
