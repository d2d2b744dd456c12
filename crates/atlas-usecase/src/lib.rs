//! # Atlas Use Case Layer
//!
//! Application-specific read rules.
//! This layer orchestrates the flow of data between the domain and adapters:
//! it builds queries, asks the repositories, aggregates, paginates and
//! shapes the result into a projection.
//!
//! Every use case is synchronous and read-only. Adapters call them from
//! whatever runtime they live in.

pub mod cache;
pub mod error;
pub mod heroes;
pub mod pagination;
pub mod projection;
pub mod regions;
pub mod skills;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

pub use atlas_domain;

use atlas_domain::{HeroRepository, RegionRepository, SkillRepository};

pub use cache::StatsCache;
pub use error::UseCaseError;
pub use heroes::HeroCatalog;
pub use pagination::{Page, PageRequest, PAGE_SIZE};
pub use regions::RegionCatalog;
pub use skills::SkillCatalog;

/// Every read use case, wired to one set of repositories
pub struct AtlasCatalogs {
    pub heroes: HeroCatalog,
    pub regions: RegionCatalog,
    pub skills: SkillCatalog,
}

impl AtlasCatalogs {
    pub fn new(
        heroes: Arc<dyn HeroRepository>,
        regions: Arc<dyn RegionRepository>,
        skills: Arc<dyn SkillRepository>,
        stats_cache: StatsCache,
    ) -> Self {
        Self {
            heroes: HeroCatalog::new(heroes, Arc::clone(&regions), Arc::clone(&skills), stats_cache),
            regions: RegionCatalog::new(regions),
            skills: SkillCatalog::new(skills),
        }
    }
}
