use crate::classify::{TileSelectionHit, TileSelectionTarget};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKind {
    Tile,
    BottomBorder,
    LeftBorder,
    Corner,
}

/// Stable key of one editable map element. Equal iff all four fields are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementAddress {
    pub x: i32,
    pub y: i32,
    pub floor: i32,
    pub kind: ElementKind,
}

impl ElementAddress {
    #[inline]
    pub const fn new(x: i32, y: i32, floor: i32, kind: ElementKind) -> Self {
        Self { x, y, floor, kind }
    }

    #[inline]
    pub const fn tile(x: i32, y: i32, floor: i32) -> Self {
        Self::new(x, y, floor, ElementKind::Tile)
    }

    #[inline]
    pub const fn corner(x: i32, y: i32, floor: i32) -> Self {
        Self::new(x, y, floor, ElementKind::Corner)
    }

    #[inline]
    pub const fn bottom_border(x: i32, y: i32, floor: i32) -> Self {
        Self::new(x, y, floor, ElementKind::BottomBorder)
    }

    #[inline]
    pub const fn left_border(x: i32, y: i32, floor: i32) -> Self {
        Self::new(x, y, floor, ElementKind::LeftBorder)
    }

    #[inline]
    pub fn is_border(&self) -> bool {
        matches!(self.kind, ElementKind::BottomBorder | ElementKind::LeftBorder)
    }

    /// Tiles whose look depends on this element: the tile itself, both sides of a
    /// border, or the up to four tiles sharing a corner. May include coordinates
    /// just outside the map.
    pub fn touched_tiles(&self) -> Vec<(i32, i32)> {
        let (x, y) = (self.x, self.y);
        match self.kind {
            ElementKind::Tile => vec![(x, y)],
            ElementKind::BottomBorder => vec![(x, y - 1), (x, y)],
            ElementKind::LeftBorder => vec![(x - 1, y), (x, y)],
            ElementKind::Corner => vec![(x - 1, y - 1), (x, y - 1), (x - 1, y), (x, y)],
        }
    }
}

/// Address of the element a hit refers to on `floor`. Tile and inner-tile hits
/// name the same element; `Nothing` has no address.
pub fn resolve_address(hit: TileSelectionHit, floor: i32) -> Option<ElementAddress> {
    let kind = match hit.target {
        TileSelectionTarget::Nothing => return None,
        TileSelectionTarget::Tile | TileSelectionTarget::InnerTile => ElementKind::Tile,
        TileSelectionTarget::BottomBorder => ElementKind::BottomBorder,
        TileSelectionTarget::LeftBorder => ElementKind::LeftBorder,
        TileSelectionTarget::Corner => ElementKind::Corner,
    };
    Some(ElementAddress::new(hit.x, hit.y, floor, kind))
}
