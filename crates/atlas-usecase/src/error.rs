//! Use case errors
//!
//! Every failure a read can end in. The HTTP adapter maps these onto
//! status codes; nothing here knows about HTTP.

use atlas_domain::{QueryError, RepositoryError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UseCaseError {
    /// Malformed or missing request parameter
    #[error(transparent)]
    Validation(#[from] QueryError),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: u64 },

    /// Page number that is not a number, or lies outside the result
    #[error("Invalid page.")]
    InvalidPage,

    #[error("Store failure: {0}")]
    Store(#[from] RepositoryError),
}

impl UseCaseError {
    pub fn not_found(entity: &'static str, id: u64) -> Self {
        UseCaseError::NotFound { entity, id }
    }
}
