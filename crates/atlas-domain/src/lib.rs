//! # Atlas Domain Layer
//!
//! Heroes, the regions they come from and the skills they share, plus the
//! rules for querying and aggregating them.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Entities & Value Objects                      ││
//! │  │  query/     - Filter / search / ordering builder            ││
//! │  │  repository/- Trait definitions (not implementations)       ││
//! │  │  service/   - Statistics & ranking                          ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Rule
//!
//! No I/O in here. Timestamps and error derives are the only things this
//! crate borrows from outside; stores, HTTP and serialization live in the
//! adapter crates.

pub mod model;
pub mod query;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use model::{
    damage_type::DamageType,
    hero::{Hero, HeroId, HP_PER_LEVEL},
    job_class::JobClass,
    region::{Region, RegionId},
    skill::{Skill, SkillId},
    UnknownVariantError,
};

pub use query::{HeroQuery, QueryError, QueryParams, RegionQuery, SkillQuery};

pub use repository::{
    hero_repository::HeroRepository,
    region_repository::RegionRepository,
    skill_repository::SkillRepository,
    Counted, RepositoryError,
};

pub use service::statistics::{ClassShare, HeroStatistics, RegionShare};
