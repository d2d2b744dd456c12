//! Region Catalog - Regions with their hero counts

use std::sync::Arc;

use atlas_domain::{RegionId, RegionQuery, RegionRepository};
use tracing::debug;

use crate::error::UseCaseError;
use crate::pagination::{paginate, Page, PageRequest};
use crate::projection::RegionView;

pub struct RegionCatalog {
    regions: Arc<dyn RegionRepository>,
}

impl RegionCatalog {
    pub fn new(regions: Arc<dyn RegionRepository>) -> Self {
        Self { regions }
    }

    pub fn list(&self, request: PageRequest<'_>) -> Result<Page<RegionView>, UseCaseError> {
        let query = RegionQuery::build(request.params())?;
        debug!(filters = query.fingerprint(), "listing regions");

        let page = paginate(self.regions.find_matching(&query)?, request)?;
        Ok(page.map(|region| RegionView::from(&region)))
    }

    pub fn retrieve(&self, id: RegionId) -> Result<RegionView, UseCaseError> {
        self.regions
            .find_counted(id)?
            .map(|region| RegionView::from(&region))
            .ok_or_else(|| UseCaseError::not_found("Region", id.value()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FixtureStore;
    use atlas_domain::QueryParams;

    fn names(page: &Page<RegionView>) -> Vec<&str> {
        page.results.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_list_by_name_with_counts() {
        let store = FixtureStore::roster();
        let params = QueryParams::new();
        let page = RegionCatalog::new(store.regions())
            .list(PageRequest::new("/regions/", &params))
            .unwrap();

        assert_eq!(names(&page), vec!["Ashen Desert", "Iron Mountains", "Sunken Isles"]);
        let counts: Vec<usize> = page.results.iter().map(|r| r.heroes_count).collect();
        assert_eq!(counts, vec![2, 2, 0]);
    }

    #[test]
    fn test_order_by_heroes_count_then_search() {
        let store = FixtureStore::roster();
        let catalog = RegionCatalog::new(store.regions());

        let params = QueryParams::new().with("ordering", "heroes_count");
        let page = catalog.list(PageRequest::new("/regions/", &params)).unwrap();
        assert_eq!(page.results[0].name, "Sunken Isles");

        let params = QueryParams::new().with("search", "DESERT");
        let page = catalog.list(PageRequest::new("/regions/", &params)).unwrap();
        assert_eq!(names(&page), vec!["Ashen Desert"]);

        let params = QueryParams::new().with("ordering", "level");
        let result = catalog.list(PageRequest::new("/regions/", &params));
        assert!(matches!(result, Err(UseCaseError::Validation(_))));
    }

    #[test]
    fn test_retrieve() {
        let store = FixtureStore::roster();
        let catalog = RegionCatalog::new(store.regions());
        assert_eq!(catalog.retrieve(RegionId::new(1)).unwrap().heroes_count, 2);
        assert!(matches!(
            catalog.retrieve(RegionId::new(42)),
            Err(UseCaseError::NotFound { entity: "Region", .. })
        ));
    }
}
