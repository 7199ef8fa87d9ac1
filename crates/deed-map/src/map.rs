use deed_catalog::{CaveId, GroundId, WallRef};
use deed_geom::{TILE_SIZE, bilinear};

use crate::error::MapError;
use crate::grid::FloorGrid;
use crate::tile::{Tile, TileWalls};
use crate::{MAX_FLOOR, MIN_FLOOR, floor_in_range};

/// A map of `width x height` tiles across every floor.
///
/// Tiles and heights are both stored at vertex resolution, `(width+1) x (height+1)`
/// per floor. The extra column and row hold the map's right and top edge borders
/// and the last row of height samples; they never carry ground.
#[derive(Clone, Debug)]
pub struct Map {
    width: usize,
    height: usize,
    tiles: FloorGrid<Tile>,
    heights: FloorGrid<i32>,
}

impl Map {
    pub fn new(width: usize, height: usize) -> Result<Self, MapError> {
        if width == 0 || height == 0 || width > i32::MAX as usize / 8 || height > i32::MAX as usize / 8
        {
            return Err(MapError::InvalidDimensions {
                width: width as i64,
                height: height as i64,
            });
        }
        log::debug!("creating {}x{} map", width, height);
        Ok(Self {
            width,
            height,
            tiles: FloorGrid::filled(width + 1, height + 1, Tile::default()),
            heights: FloorGrid::filled(width + 1, height + 1, 0),
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn contains_tile(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    #[inline]
    pub fn contains_vertex(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) <= self.width && (y as usize) <= self.height
    }

    /// Clamp vertex coordinates into `[0, width] x [0, height]`.
    #[inline]
    pub fn clamp_vertex(&self, x: i32, y: i32) -> (i32, i32) {
        (
            x.clamp(0, self.width as i32),
            y.clamp(0, self.height as i32),
        )
    }

    /// Clamp tile coordinates into `[0, width) x [0, height)`.
    #[inline]
    pub fn clamp_tile(&self, x: i32, y: i32) -> (i32, i32) {
        (
            x.clamp(0, self.width as i32 - 1),
            y.clamp(0, self.height as i32 - 1),
        )
    }

    #[inline]
    fn layer(floor: i32) -> Result<usize, MapError> {
        if floor_in_range(floor) {
            Ok((floor - MIN_FLOOR) as usize)
        } else {
            Err(MapError::FloorOutOfRange(floor))
        }
    }

    /// Storage slot for an element whose valid range is `[0, max_x] x [0, max_y]`.
    #[inline]
    fn slot(
        &self,
        x: i32,
        y: i32,
        floor: i32,
        max_x: usize,
        max_y: usize,
    ) -> Result<(usize, usize, usize), MapError> {
        let layer = Self::layer(floor)?;
        if x < 0 || y < 0 || x as usize > max_x || y as usize > max_y {
            return Err(MapError::OutOfRange { x, y, floor });
        }
        Ok((x as usize, y as usize, layer))
    }

    #[inline]
    fn vertex_slot(&self, x: i32, y: i32, floor: i32) -> Result<(usize, usize, usize), MapError> {
        self.slot(x, y, floor, self.width, self.height)
    }

    #[inline]
    fn tile_slot(&self, x: i32, y: i32, floor: i32) -> Result<(usize, usize, usize), MapError> {
        self.slot(x, y, floor, self.width - 1, self.height - 1)
    }

    // --- Heights ---

    /// Raw height sample at vertex `(x, y)`. Rejects anything outside
    /// `[0, width] x [0, height]`; clamp with [`Map::clamp_vertex`] first.
    pub fn height_at(&self, x: i32, y: i32, floor: i32) -> Result<i32, MapError> {
        let (x, y, l) = self.vertex_slot(x, y, floor)?;
        Ok(*self.heights.get(x, y, l))
    }

    /// Store a height sample and return the previous one.
    pub fn set_height_at(&mut self, x: i32, y: i32, floor: i32, value: i32) -> Result<i32, MapError> {
        let (x, y, l) = self.vertex_slot(x, y, floor)?;
        Ok(std::mem::replace(self.heights.get_mut(x, y, l), value))
    }

    /// Corner samples of tile `(x, y)` as `[h00, h10, h01, h11]`.
    pub fn corner_heights(&self, x: i32, y: i32, floor: i32) -> Result<[i32; 4], MapError> {
        let (tx, ty, l) = self.tile_slot(x, y, floor)?;
        Ok([
            *self.heights.get(tx, ty, l),
            *self.heights.get(tx + 1, ty, l),
            *self.heights.get(tx, ty + 1, l),
            *self.heights.get(tx + 1, ty + 1, l),
        ])
    }

    /// Interpolated height inside tile `(x, y)` at fractional offset `(fx, fy)`.
    pub fn quad_height(&self, x: i32, y: i32, fx: f32, fy: f32, floor: i32) -> Result<f32, MapError> {
        let [h00, h10, h01, h11] = self.corner_heights(x, y, floor)?;
        Ok(bilinear(
            h00 as f32, h10 as f32, h01 as f32, h11 as f32, fx, fy,
        ))
    }

    /// Height in stored units at a continuous world position on the map plane.
    ///
    /// The point is clamped onto the map. On the far edges the last quad is used
    /// with a fraction of 1, so every vertex reads back its exact sample.
    pub fn bilinear_height(&self, world_x: f32, world_y: f32, floor: i32) -> Result<f32, MapError> {
        if !world_x.is_finite() || !world_y.is_finite() {
            return Err(MapError::NonFinitePoint);
        }
        let max_x = self.width as f32 * TILE_SIZE;
        let max_y = self.height as f32 * TILE_SIZE;
        let gx = world_x.clamp(0.0, max_x) / TILE_SIZE;
        let gy = world_y.clamp(0.0, max_y) / TILE_SIZE;
        let tx = (gx.floor() as usize).min(self.width - 1);
        let ty = (gy.floor() as usize).min(self.height - 1);
        let fx = (gx - tx as f32).clamp(0.0, 1.0);
        let fy = (gy - ty as f32).clamp(0.0, 1.0);
        self.quad_height(tx as i32, ty as i32, fx, fy, floor)
    }

    // --- Tiles ---

    pub fn tile(&self, x: i32, y: i32, floor: i32) -> Result<&Tile, MapError> {
        let (x, y, l) = self.tile_slot(x, y, floor)?;
        Ok(self.tiles.get(x, y, l))
    }

    pub fn ground(&self, x: i32, y: i32, floor: i32) -> Result<Option<GroundId>, MapError> {
        Ok(self.tile(x, y, floor)?.ground)
    }

    pub fn set_ground(
        &mut self,
        x: i32,
        y: i32,
        floor: i32,
        ground: Option<GroundId>,
    ) -> Result<Option<GroundId>, MapError> {
        let (x, y, l) = self.tile_slot(x, y, floor)?;
        Ok(std::mem::replace(&mut self.tiles.get_mut(x, y, l).ground, ground))
    }

    pub fn cave(&self, x: i32, y: i32, floor: i32) -> Result<Option<CaveId>, MapError> {
        Ok(self.tile(x, y, floor)?.cave)
    }

    pub fn set_cave(
        &mut self,
        x: i32,
        y: i32,
        floor: i32,
        cave: Option<CaveId>,
    ) -> Result<Option<CaveId>, MapError> {
        let (x, y, l) = self.tile_slot(x, y, floor)?;
        if floor >= 0 {
            return Err(MapError::NotUnderground(floor));
        }
        Ok(std::mem::replace(&mut self.tiles.get_mut(x, y, l).cave, cave))
    }

    /// Wall on the bottom border of `(x, y)`; `y` may equal `height` for the map's top edge.
    pub fn horizontal_wall(&self, x: i32, y: i32, floor: i32) -> Result<Option<WallRef>, MapError> {
        let (x, y, l) = self.slot(x, y, floor, self.width - 1, self.height)?;
        Ok(self.tiles.get(x, y, l).horizontal_wall)
    }

    pub fn set_horizontal_wall(
        &mut self,
        x: i32,
        y: i32,
        floor: i32,
        wall: Option<WallRef>,
    ) -> Result<Option<WallRef>, MapError> {
        let (x, y, l) = self.slot(x, y, floor, self.width - 1, self.height)?;
        Ok(std::mem::replace(
            &mut self.tiles.get_mut(x, y, l).horizontal_wall,
            wall,
        ))
    }

    /// Wall on the left border of `(x, y)`; `x` may equal `width` for the map's right edge.
    pub fn vertical_wall(&self, x: i32, y: i32, floor: i32) -> Result<Option<WallRef>, MapError> {
        let (x, y, l) = self.slot(x, y, floor, self.width, self.height - 1)?;
        Ok(self.tiles.get(x, y, l).vertical_wall)
    }

    pub fn set_vertical_wall(
        &mut self,
        x: i32,
        y: i32,
        floor: i32,
        wall: Option<WallRef>,
    ) -> Result<Option<WallRef>, MapError> {
        let (x, y, l) = self.slot(x, y, floor, self.width, self.height - 1)?;
        Ok(std::mem::replace(
            &mut self.tiles.get_mut(x, y, l).vertical_wall,
            wall,
        ))
    }

    pub fn walls_around(&self, x: i32, y: i32, floor: i32) -> Result<TileWalls, MapError> {
        self.tile_slot(x, y, floor)?;
        Ok(TileWalls {
            north: self.horizontal_wall(x, y + 1, floor)?,
            east: self.vertical_wall(x + 1, y, floor)?,
            south: self.horizontal_wall(x, y, floor)?,
            west: self.vertical_wall(x, y, floor)?,
        })
    }

    // --- Lifecycle ---

    /// Fresh map with the same dimensions.
    pub fn cleared(&self) -> Map {
        Map {
            width: self.width,
            height: self.height,
            tiles: FloorGrid::filled(self.width + 1, self.height + 1, Tile::default()),
            heights: FloorGrid::filled(self.width + 1, self.height + 1, 0),
        }
    }

    /// Grow (positive) or shrink (negative) the map on each side. Content keeps its
    /// position relative to the old map; anything pushed past the new edges is dropped.
    pub fn resized(&self, left: i32, right: i32, bottom: i32, top: i32) -> Result<Map, MapError> {
        let new_w = self.width as i64 + i64::from(left) + i64::from(right);
        let new_h = self.height as i64 + i64::from(bottom) + i64::from(top);
        if new_w <= 0 || new_h <= 0 {
            return Err(MapError::InvalidDimensions {
                width: new_w,
                height: new_h,
            });
        }
        let mut out = Map::new(new_w as usize, new_h as usize)?;
        for layer in 0..crate::FLOOR_COUNT {
            for ny in 0..=out.height {
                for nx in 0..=out.width {
                    let ox = nx as i64 - i64::from(left);
                    let oy = ny as i64 - i64::from(bottom);
                    if ox < 0 || oy < 0 || ox > self.width as i64 || oy > self.height as i64 {
                        continue;
                    }
                    let (ox, oy) = (ox as usize, oy as usize);
                    *out.heights.get_mut(nx, ny, layer) = *self.heights.get(ox, oy, layer);
                    let mut tile = *self.tiles.get(ox, oy, layer);
                    // Edge cells only keep the border that still lies on the map.
                    if nx == out.width {
                        tile.ground = None;
                        tile.cave = None;
                        tile.horizontal_wall = None;
                    }
                    if ny == out.height {
                        tile.ground = None;
                        tile.cave = None;
                        tile.vertical_wall = None;
                    }
                    *out.tiles.get_mut(nx, ny, layer) = tile;
                }
            }
        }
        log::debug!(
            "resized map {}x{} -> {}x{} (left={} right={} bottom={} top={})",
            self.width,
            self.height,
            out.width,
            out.height,
            left,
            right,
            bottom,
            top
        );
        Ok(out)
    }

    /// Floors every map carries, lowest first.
    pub fn floors() -> std::ops::RangeInclusive<i32> {
        MIN_FLOOR..=MAX_FLOOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deed_catalog::WallId;

    #[test]
    fn zero_sized_map_is_rejected() {
        assert!(matches!(
            Map::new(0, 4),
            Err(MapError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn edge_column_has_no_ground() {
        let mut m = Map::new(3, 3).unwrap();
        assert!(m.set_ground(3, 0, 0, Some(GroundId(1))).is_err());
        assert!(m.set_vertical_wall(3, 0, 0, Some(WallRef::new(WallId(0), false))).is_ok());
        assert!(m.set_horizontal_wall(3, 0, 0, Some(WallRef::new(WallId(0), false))).is_err());
    }
}
