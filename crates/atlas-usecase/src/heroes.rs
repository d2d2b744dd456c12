//! Hero Catalog - Read use cases over heroes
//!
//! ```text
//! QueryParams ──▶ HeroQuery ──▶ HeroRepository::find_matching
//!                                   │
//!                  ┌────────────────┼─────────────────┐
//!                  ▼                ▼                 ▼
//!              paginate        statistics          ranking
//!                  │           (StatsCache)           │
//!                  ▼                ▼                 ▼
//!             Page<Summary>     StatsView      Vec<HeroDetail>
//! ```

use std::sync::Arc;

use atlas_domain::query::{HeroField, Operand, Predicate, ValueParser, ORDERING_PARAM};
use atlas_domain::service::ranking::{clamp_top_limit, top_heroes};
use atlas_domain::{
    HeroId, HeroQuery, HeroRepository, HeroStatistics, QueryError, QueryParams,
    RegionRepository, SkillRepository,
};
use tracing::debug;

use crate::cache::StatsCache;
use crate::error::UseCaseError;
use crate::pagination::{paginate, Page, PageRequest};
use crate::projection::{HeroDetail, HeroSummary, RelatedIndex, StatsView};

/// Required parameter of the by-class listing
pub const CLASS_PARAM: &str = "class";
/// Size parameter of the ranking
pub const LIMIT_PARAM: &str = "limit";

pub struct HeroCatalog {
    heroes: Arc<dyn HeroRepository>,
    regions: Arc<dyn RegionRepository>,
    skills: Arc<dyn SkillRepository>,
    stats_cache: StatsCache,
}

impl HeroCatalog {
    pub fn new(
        heroes: Arc<dyn HeroRepository>,
        regions: Arc<dyn RegionRepository>,
        skills: Arc<dyn SkillRepository>,
        stats_cache: StatsCache,
    ) -> Self {
        Self {
            heroes,
            regions,
            skills,
            stats_cache,
        }
    }

    /// Paginated listing in the summary projection
    pub fn list(&self, request: PageRequest<'_>) -> Result<Page<HeroSummary>, UseCaseError> {
        let query = HeroQuery::build(request.params())?;
        debug!(filters = query.fingerprint(), "listing heroes");

        let page = paginate(self.heroes.find_matching(&query)?, request)?;
        let related = RelatedIndex::new(self.regions.list_counted()?, Vec::new());
        Ok(page.map(|hero| HeroSummary::from_hero(&hero, &related)))
    }

    pub fn retrieve(&self, id: HeroId) -> Result<HeroDetail, UseCaseError> {
        let hero = self
            .heroes
            .find_by_id(id)?
            .ok_or_else(|| UseCaseError::not_found("Hero", id.value()))?;
        Ok(HeroDetail::from_hero(&hero, &self.related()?))
    }

    /// Heroes of one job class, on top of the usual list constraints
    pub fn by_class(&self, request: PageRequest<'_>) -> Result<Page<HeroDetail>, UseCaseError> {
        let raw = request
            .params()
            .get_non_empty(CLASS_PARAM)
            .ok_or(QueryError::MissingParameter { param: CLASS_PARAM })?;
        let class = ValueParser::JobClass.parse(CLASS_PARAM, raw)?;

        let query =
            HeroQuery::build(request.params())?.and_where(Predicate::exact(HeroField::JobClass, class));
        debug!(filters = query.fingerprint(), "listing heroes by class");

        let page = paginate(self.heroes.find_matching(&query)?, request)?;
        let related = self.related()?;
        Ok(page.map(|hero| HeroDetail::from_hero(&hero, &related)))
    }

    /// Aggregates over the heroes selected by the list filters.
    ///
    /// Ordering does not change an aggregate, so it is ignored; the result
    /// may be up to one cache TTL old.
    pub fn stats(&self, params: &QueryParams) -> Result<StatsView, UseCaseError> {
        let query = HeroQuery::build(&params.without(ORDERING_PARAM))?;

        let stats = self.stats_cache.get_or_compute(query.fingerprint(), || {
            let heroes = self.heroes.find_matching(&query)?;
            let regions = self.regions.list_all()?;
            Ok::<_, UseCaseError>(HeroStatistics::compute(&heroes, &regions))
        })?;
        Ok(StatsView::from(stats.as_ref()))
    }

    /// Strongest heroes first, at most `limit` of them (default 10, 1..=100)
    pub fn top(&self, params: &QueryParams) -> Result<Vec<HeroDetail>, UseCaseError> {
        let limit = match params.get_non_empty(LIMIT_PARAM) {
            None => None,
            Some(raw) => match ValueParser::Integer.parse(LIMIT_PARAM, raw)? {
                Operand::Int(n) => Some(n),
                _ => None,
            },
        };
        let limit = clamp_top_limit(limit);

        let query = HeroQuery::build(&params.without(ORDERING_PARAM))?;
        let heroes = top_heroes(self.heroes.find_matching(&query)?, limit);

        let related = self.related()?;
        Ok(heroes
            .iter()
            .map(|hero| HeroDetail::from_hero(hero, &related))
            .collect())
    }

    fn related(&self) -> Result<RelatedIndex, UseCaseError> {
        Ok(RelatedIndex::new(
            self.regions.list_counted()?,
            self.skills.list_counted()?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FixtureStore;
    use atlas_domain::Hero;
    use chrono::Utc;

    fn catalog(store: &FixtureStore) -> HeroCatalog {
        HeroCatalog::new(
            store.heroes(),
            store.regions(),
            store.skills(),
            StatsCache::default(),
        )
    }

    fn nicknames<T>(items: &[T], name: impl Fn(&T) -> &str) -> Vec<String> {
        items.iter().map(|i| name(i).to_string()).collect()
    }

    #[test]
    fn test_list_defaults_to_newest_first() {
        let store = FixtureStore::roster();
        let params = QueryParams::new();
        let page = catalog(&store)
            .list(PageRequest::new("/heroes/", &params))
            .unwrap();

        assert_eq!(page.count, 6);
        assert_eq!(page.results[0].nickname, "Fenn");
        assert_eq!(page.results[5].nickname, "Aria");
        assert_eq!(page.results[0].region_name, None);
        assert_eq!(page.results[5].region_name.as_deref(), Some("Iron Mountains"));
    }

    #[test]
    fn test_list_rejects_bad_parameters() {
        let store = FixtureStore::roster();
        for (key, value) in [
            ("min_level", "high"),
            ("ordering", "nickname"),
            ("job_class", "bard"),
            ("region", "north"),
        ] {
            let params = QueryParams::new().with(key, value);
            let result = catalog(&store).list(PageRequest::new("/heroes/", &params));
            assert!(
                matches!(result, Err(UseCaseError::Validation(_))),
                "{key}={value} should be rejected"
            );
        }
    }

    #[test]
    fn test_level_window() {
        let store = FixtureStore::roster();
        let params = QueryParams::new().with("min_level", "50").with("max_level", "50");
        let page = catalog(&store)
            .list(PageRequest::new("/heroes/", &params))
            .unwrap();
        assert!(page.results.iter().all(|h| h.level == 50));
        assert_eq!(page.count, 2);
    }

    #[test]
    fn test_retrieve() {
        let store = FixtureStore::roster();
        let catalog = catalog(&store);

        let aria = catalog.retrieve(HeroId::new(1)).unwrap();
        assert_eq!(aria.nickname, "Aria");
        assert_eq!(aria.skills_count, 2);
        assert_eq!(aria.region_data.as_ref().map(|r| r.heroes_count), Some(2));

        assert!(matches!(
            catalog.retrieve(HeroId::new(999)),
            Err(UseCaseError::NotFound { entity: "Hero", id: 999 })
        ));
    }

    #[test]
    fn test_by_class_requires_class() {
        let store = FixtureStore::roster();
        for params in [QueryParams::new(), QueryParams::new().with("class", "")] {
            let result = catalog(&store).by_class(PageRequest::new("/heroes/by_class/", &params));
            assert!(matches!(
                result,
                Err(UseCaseError::Validation(QueryError::MissingParameter { param: "class" }))
            ));
        }
    }

    #[test]
    fn test_by_class_filters_and_uses_detail() {
        let store = FixtureStore::roster();
        let params = QueryParams::new().with("class", "mage");
        let page = catalog(&store)
            .by_class(PageRequest::new("/heroes/by_class/", &params))
            .unwrap();
        assert_eq!(page.count, 2);
        assert!(page.results.iter().all(|h| h.job_class == "mage"));
        assert_eq!(nicknames(&page.results, |h| h.nickname.as_str()), vec!["Celes", "Aria"]);

        let params = QueryParams::new().with("class", "bard");
        let result = catalog(&store).by_class(PageRequest::new("/heroes/by_class/", &params));
        assert!(matches!(result, Err(UseCaseError::Validation(_))));
    }

    #[test]
    fn test_stats_honor_filters() {
        let store = FixtureStore::roster();
        let catalog = catalog(&store);

        let all = catalog.stats(&QueryParams::new()).unwrap();
        assert_eq!(all.total_heroes, 6);
        let class_sum: usize = all.class_distribution.iter().map(|c| c.count).sum();
        assert_eq!(class_sum, 6);

        let mages = catalog
            .stats(&QueryParams::new().with("job_class", "mage"))
            .unwrap();
        assert_eq!(mages.total_heroes, 2);
        assert_eq!(mages.average_level, 60.5);
    }

    #[test]
    fn test_stats_cache_keeps_lookalike_queries_apart() {
        let store = FixtureStore::roster();
        let catalog = catalog(&store);

        let active_mages = QueryParams::new()
            .with("is_active", "true")
            .with("job_class", "mage");
        let lookalike = QueryParams::new().with("is_active", "true&job_class=mage");

        let first = catalog.stats(&active_mages).unwrap();
        assert_eq!(first.total_heroes, 2);

        // Not a valid flag, so it selects the inactive heroes: Borin alone
        let second = catalog.stats(&lookalike).unwrap();
        assert_eq!(second.total_heroes, 1);
        assert_eq!(second.class_distribution.len(), 1);
        assert_eq!(second.class_distribution[0].job_class, "warrior");
    }

    #[test]
    fn test_stats_ignore_ordering() {
        let store = FixtureStore::roster();
        let stats = catalog(&store)
            .stats(&QueryParams::new().with("ordering", "not_a_field"))
            .unwrap();
        assert_eq!(stats.total_heroes, 6);
    }

    #[test]
    fn test_stats_of_empty_store() {
        let store = FixtureStore::empty();
        let stats = catalog(&store).stats(&QueryParams::new()).unwrap();
        assert_eq!(stats.total_heroes, 0);
        assert_eq!(stats.average_level, 0.0);
        assert_eq!(stats.average_gold, 0.0);
        assert!(stats.class_distribution.is_empty());
        assert!(stats.region_distribution.is_empty());
    }

    #[test]
    fn test_top() {
        let store = FixtureStore::roster();
        let catalog = catalog(&store);

        let top = catalog.top(&QueryParams::new().with("limit", "2")).unwrap();
        assert_eq!(nicknames(&top, |h| h.nickname.as_str()), vec!["Celes", "ShadowFox"]);

        let all = catalog.top(&QueryParams::new()).unwrap();
        assert_eq!(all.len(), 6);
        for pair in all.windows(2) {
            assert!((pair[0].level, pair[0].xp) >= (pair[1].level, pair[1].xp));
        }

        let clamped = catalog.top(&QueryParams::new().with("limit", "0")).unwrap();
        assert_eq!(clamped.len(), 1);

        assert!(matches!(
            catalog.top(&QueryParams::new().with("limit", "ten")),
            Err(UseCaseError::Validation(_))
        ));
    }

    #[test]
    fn test_top_breaks_level_ties_by_xp() {
        let store = FixtureStore::with_heroes(vec![
            Hero::new(HeroId::new(1), "A", Utc::now()).with_level(10).with_xp(100),
            Hero::new(HeroId::new(2), "B", Utc::now()).with_level(10).with_xp(200),
            Hero::new(HeroId::new(3), "C", Utc::now()).with_level(5).with_xp(500),
        ]);
        let top = catalog(&store)
            .top(&QueryParams::new().with("limit", "2"))
            .unwrap();
        assert_eq!(nicknames(&top, |h| h.nickname.as_str()), vec!["B", "A"]);
    }

    #[test]
    fn test_top_honors_filters() {
        let store = FixtureStore::roster();
        let top = catalog(&store)
            .top(&QueryParams::new().with("job_class", "mage").with("ordering", "level"))
            .unwrap();
        assert_eq!(nicknames(&top, |h| h.nickname.as_str()), vec!["Celes", "Aria"]);
    }
}
