//! Persistence Adapters - Repository implementations
//!
//! These implement the repository traits from atlas-domain.

pub mod in_memory;
