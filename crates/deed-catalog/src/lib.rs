//! Read-only wall, ground, and cave catalogs loaded at startup.
#![forbid(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod types;

pub use catalog::{CaveData, Catalog, GroundData, Table, WallData};
pub use types::{CatalogId, CaveId, GroundId, WallId, WallRef};
