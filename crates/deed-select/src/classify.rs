use deed_geom::{TILE_SIZE, Vec3, tile_fraction, world_to_tile};
use deed_map::Map;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TileSelectionMode {
    #[default]
    Nothing,
    Tiles,
    /// Borders and corners.
    Borders,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileSelectionTarget {
    Nothing,
    Tile,
    /// Inside the tile and clear of every border band.
    InnerTile,
    BottomBorder,
    LeftBorder,
    Corner,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TileSelectionHit {
    pub x: i32,
    pub y: i32,
    pub target: TileSelectionTarget,
}

impl TileSelectionHit {
    pub const NOTHING: TileSelectionHit = TileSelectionHit {
        x: 0,
        y: 0,
        target: TileSelectionTarget::Nothing,
    };

    #[inline]
    pub const fn new(x: i32, y: i32, target: TileSelectionTarget) -> Self {
        Self { x, y, target }
    }

    #[inline]
    pub fn is_nothing(&self) -> bool {
        self.target == TileSelectionTarget::Nothing
    }
}

/// Tile extent of a map, used to reject hits on elements that do not exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapBounds {
    pub width: usize,
    pub height: usize,
}

impl MapBounds {
    #[inline]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn of(map: &Map) -> Self {
        Self::new(map.width(), map.height())
    }

    // extra = 1 admits the edge column/row past the last tile
    #[inline]
    fn allows(&self, x: i32, y: i32, extra_x: usize, extra_y: usize) -> bool {
        x >= 0
            && y >= 0
            && (x as usize) < self.width + extra_x
            && (y as usize) < self.height + extra_y
    }

    /// Whether a world point lies on the map plane area `[0, 4w] x [0, 4h]`.
    #[inline]
    pub fn contains_point(&self, point: Vec3) -> bool {
        let max_x = self.width as f32 * TILE_SIZE;
        let max_z = self.height as f32 * TILE_SIZE;
        (0.0..=max_x).contains(&point.x) && (0.0..=max_z).contains(&point.z)
    }

    pub fn contains(&self, hit: &TileSelectionHit) -> bool {
        use TileSelectionTarget as T;
        match hit.target {
            T::Nothing => false,
            T::Tile | T::InnerTile => self.allows(hit.x, hit.y, 0, 0),
            T::LeftBorder => self.allows(hit.x, hit.y, 1, 0),
            T::BottomBorder => self.allows(hit.x, hit.y, 0, 1),
            T::Corner => self.allows(hit.x, hit.y, 1, 1),
        }
    }
}

/// Maps world points to tiles, borders, and corners.
///
/// Only bottom and left borders exist: the band along a tile's top or right edge
/// resolves to the bottom/left border of the neighbour on that side, so every
/// border has exactly one owner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classifier {
    border: f32,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            border: Self::DEFAULT_BORDER,
        }
    }
}

impl Classifier {
    /// Border band width as a fraction of the tile edge.
    pub const DEFAULT_BORDER: f32 = 0.1;

    /// `None` unless `0 < border < 0.5`; wider bands would overlap.
    pub fn with_border(border: f32) -> Option<Self> {
        if border > 0.0 && border < 0.5 {
            Some(Self { border })
        } else {
            None
        }
    }

    #[inline]
    pub fn border(&self) -> f32 {
        self.border
    }

    pub fn classify(&self, point: Vec3, mode: TileSelectionMode, bounds: MapBounds) -> TileSelectionHit {
        if mode == TileSelectionMode::Nothing || !point.is_finite() || !bounds.contains_point(point) {
            return TileSelectionHit::NOTHING;
        }
        let (x, y) = world_to_tile(point);
        let hit = match mode {
            TileSelectionMode::Nothing => return TileSelectionHit::NOTHING,
            TileSelectionMode::Tiles => TileSelectionHit::new(x, y, TileSelectionTarget::Tile),
            TileSelectionMode::Borders => {
                let (fx, fy) = tile_fraction(point);
                self.classify_fraction(x, y, fx, fy)
            }
        };
        if bounds.contains(&hit) {
            hit
        } else {
            TileSelectionHit::NOTHING
        }
    }

    /// Border-mode decision for offset `(fx, fy)` inside tile `(x, y)`.
    /// Corner beats border, border beats inner tile.
    pub fn classify_fraction(&self, x: i32, y: i32, fx: f32, fy: f32) -> TileSelectionHit {
        let b = self.border;
        let near_left = fx < b;
        let near_right = fx > 1.0 - b;
        let near_bottom = fy < b;
        let near_top = fy > 1.0 - b;
        let near_x = near_left || near_right;
        let near_y = near_bottom || near_top;

        // Right/top bands belong to the neighbour on that side.
        let bx = if near_right { x + 1 } else { x };
        let by = if near_top { y + 1 } else { y };

        if near_x && near_y {
            TileSelectionHit::new(bx, by, TileSelectionTarget::Corner)
        } else if near_x {
            TileSelectionHit::new(bx, y, TileSelectionTarget::LeftBorder)
        } else if near_y {
            TileSelectionHit::new(x, by, TileSelectionTarget::BottomBorder)
        } else {
            TileSelectionHit::new(x, y, TileSelectionTarget::InnerTile)
        }
    }
}
