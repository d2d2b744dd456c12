//! Domain Models - The vocabulary of the atlas
//!
//! Heroes live in (at most one) Region and share Skills with each other.
//! Every name here should match how the game talks about its world.

pub mod damage_type;
pub mod hero;
pub mod job_class;
pub mod region;
pub mod skill;

use thiserror::Error;

/// Returned when a string does not name any variant of a closed set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind}: '{value}'")]
pub struct UnknownVariantError {
    pub kind: &'static str,
    pub value: String,
}

/// Round to a fixed number of decimal places.
///
/// Rounds the exact binary value, ties to even: `0.125` becomes `0.12`
/// and `2.675` (stored just below) becomes `2.67`. Float formatting is
/// exact, so going through it avoids the error of scaling by `10^n`.
pub(crate) fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}
