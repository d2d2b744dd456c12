//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! These traits define WHAT the domain needs from a relational store,
//! but NOT how it's done. That's the adapter's job.
//!
//! ```text
//! Domain Layer              │  Adapter Layer
//! ──────────────────────────┼────────────────────────
//! trait HeroRepository      │  InMemoryHeroRepository
//!   fn find_matching()      │  (SQL store, ...)
//! ```
//!
//! Implementations must be shareable across request handlers, hence the
//! `Send + Sync` bound and `&self` receivers (interior mutability).

pub mod hero_repository;
pub mod region_repository;
pub mod skill_repository;

use thiserror::Error;

/// Errors that can occur during repository operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: u64 },

    /// A uniqueness constraint would be violated
    #[error("{entity} with {field} '{value}' already exists")]
    Conflict {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// A reference points at an entity that does not exist
    #[error("{entity} {id} referenced but not found")]
    DanglingReference { entity: &'static str, id: u64 },

    /// The store itself failed
    #[error("Persistence error: {message}")]
    Persistence { message: String },
}

/// An entity annotated with the number of heroes related to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counted<T> {
    pub entity: T,
    pub heroes_count: usize,
}

impl<T> Counted<T> {
    pub fn new(entity: T, heroes_count: usize) -> Self {
        Self {
            entity,
            heroes_count,
        }
    }
}
