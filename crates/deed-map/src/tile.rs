use deed_catalog::{CaveId, GroundId, WallRef};

/// Per-floor content of one grid cell.
///
/// A tile owns only its bottom ("horizontal") and left ("vertical") borders.
/// Top and right borders belong to the neighbours above and to the right.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tile {
    pub ground: Option<GroundId>,
    pub cave: Option<CaveId>,
    pub horizontal_wall: Option<WallRef>,
    pub vertical_wall: Option<WallRef>,
}

/// Walls around a tile seen from inside it, resolved through border ownership.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TileWalls {
    pub north: Option<WallRef>,
    pub east: Option<WallRef>,
    pub south: Option<WallRef>,
    pub west: Option<WallRef>,
}

impl TileWalls {
    pub fn count(&self) -> usize {
        [self.north, self.east, self.south, self.west]
            .iter()
            .filter(|w| w.is_some())
            .count()
    }
}
