//! Inbound Adapters - How requests reach the catalogs

pub mod http;
