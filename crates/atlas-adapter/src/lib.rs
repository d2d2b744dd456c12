//! # Atlas Adapter Layer
//!
//! External system integrations (Hexagonal Architecture adapters).
//!
//! ## Structure
//!
//! - `controller/` - Inbound adapters (HTTP)
//! - `repository/` - Persistence implementations
//! - `seed/` - Dataset generation and loading

pub mod controller;
pub mod repository;
pub mod seed;
