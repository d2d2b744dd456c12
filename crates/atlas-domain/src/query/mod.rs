//! Query Building - Request parameters to composed predicates
//!
//! A listing request carries an unordered bag of optional parameters.
//! This module turns that bag into a [`ListQuery`]: the AND of every
//! recognized filter, an optional free-text search, and an ordering.
//!
//! The mapping from parameter to predicate lives in static tables
//! (see [`fields`]), not in ad-hoc lookups.

pub mod fields;
pub mod filter;
pub mod list;
pub mod ordering;
pub mod params;
pub mod search;

use thiserror::Error;

use crate::model::hero::Hero;
use crate::model::region::Region;
use crate::model::skill::Skill;
use crate::repository::Counted;

pub use fields::{HeroField, RegionField, SkillField};
pub use filter::{Comparison, FieldValue, FilterSpec, Operand, Predicate, ValueParser};
pub use list::{ListQuery, QuerySchema, Record, ORDERING_PARAM, SEARCH_PARAM};
pub use ordering::OrderKey;
pub use params::QueryParams;
pub use search::SearchTerms;

pub type HeroQuery = ListQuery<Hero>;
pub type RegionQuery = ListQuery<Counted<Region>>;
pub type SkillQuery = ListQuery<Counted<Skill>>;

/// Validation failures while building a query
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Invalid value '{value}' for '{param}': expected {expected}")]
    InvalidValue {
        param: String,
        value: String,
        expected: &'static str,
    },

    #[error("Cannot order by '{field}'. Allowed fields: {}", allowed.join(", "))]
    UnknownOrderingField {
        field: String,
        allowed: Vec<&'static str>,
    },

    #[error("The '{param}' parameter is required")]
    MissingParameter { param: &'static str },
}
