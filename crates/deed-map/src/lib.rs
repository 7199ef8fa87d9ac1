//! Map dimensions, per-floor tile arena, and the shared height grid.
#![forbid(unsafe_code)]

pub mod error;
mod grid;
pub mod map;
pub mod tile;

pub use error::MapError;
pub use map::Map;
pub use tile::{Tile, TileWalls};

/// Lowest cave level.
pub const MIN_FLOOR: i32 = -6;
/// Highest building level.
pub const MAX_FLOOR: i32 = 15;
pub const FLOOR_COUNT: usize = (MAX_FLOOR - MIN_FLOOR + 1) as usize;

#[inline]
pub fn floor_in_range(floor: i32) -> bool {
    (MIN_FLOOR..=MAX_FLOOR).contains(&floor)
}
