//! World-space points, tile/world unit conversion, and interpolation helpers.
#![forbid(unsafe_code)]

use core::ops::{Add, Mul, Sub};

/// Edge length of one map tile in world units.
pub const TILE_SIZE: f32 = 4.0;

/// World units per stored height step. Heights are kept as integers of this unit.
pub const HEIGHT_UNIT: f32 = 0.1;

/// World-space point. `y` is up; the map plane is `x`/`z`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Point on the map plane (`y = 0`) at world coordinates `(x, z)`.
    #[inline]
    pub const fn on_plane(x: f32, z: f32) -> Self {
        Self { x, y: 0.0, z }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Integer tile coordinates containing a world point: `floor(x / 4)`, `floor(z / 4)`.
///
/// Out-of-map results are allowed; clamp before indexing storage.
#[inline]
pub fn world_to_tile(point: Vec3) -> (i32, i32) {
    (
        (point.x / TILE_SIZE).floor() as i32,
        (point.z / TILE_SIZE).floor() as i32,
    )
}

/// World-space origin (lowest x/z corner) of tile `(x, y)`.
#[inline]
pub fn tile_to_world(x: i32, y: i32) -> Vec3 {
    Vec3::on_plane(x as f32, y as f32) * TILE_SIZE
}

/// World-space center of tile `(x, y)`.
#[inline]
pub fn tile_center(x: i32, y: i32) -> Vec3 {
    tile_to_world(x, y) + Vec3::on_plane(TILE_SIZE * 0.5, TILE_SIZE * 0.5)
}

/// Fractional position of a world point inside its tile, each axis in `[0, 1)`.
#[inline]
pub fn tile_fraction(point: Vec3) -> (f32, f32) {
    let tx = point.x / TILE_SIZE;
    let ty = point.z / TILE_SIZE;
    (tx - tx.floor(), ty - ty.floor())
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Bilinear blend of four quad corners. `h10` sits at `+x`, `h01` at `+y`.
#[inline]
pub fn bilinear(h00: f32, h10: f32, h01: f32, h11: f32, fx: f32, fy: f32) -> f32 {
    lerp(lerp(h00, h10, fx), lerp(h01, h11, fx), fy)
}

#[inline]
pub fn height_to_world(units: i32) -> f32 {
    units as f32 * HEIGHT_UNIT
}
