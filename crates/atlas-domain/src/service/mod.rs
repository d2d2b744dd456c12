//! Domain Services - Computations over many heroes at once
//!
//! Neither belongs to a single entity: statistics aggregate a selection,
//! ranking orders one.

pub mod ranking;
pub mod statistics;
