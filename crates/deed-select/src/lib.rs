//! Tile, border, and corner picking plus stable element addresses.
#![forbid(unsafe_code)]

pub mod address;
pub mod classify;

pub use address::{ElementAddress, ElementKind, resolve_address};
pub use classify::{Classifier, MapBounds, TileSelectionHit, TileSelectionMode, TileSelectionTarget};
