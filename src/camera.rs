use deed_geom::{HEIGHT_UNIT, TILE_SIZE, Vec3};
use deed_map::{Map, MapError};

/// Eye height above the terrain in first-person ("Wurmian") mode.
pub const WURMIAN_EYE_HEIGHT: f32 = 1.4;
/// Lowest eye position, keeps the camera above water level.
pub const WURMIAN_MIN_HEIGHT: f32 = 0.3;

/// World-space eye height at `(x, z)` on `floor`. Uses the same bilinear query as
/// the height tooltip so what is shown matches where the camera stands.
pub fn wurmian_eye_height(map: &Map, x: f32, z: f32, floor: i32) -> Result<f32, MapError> {
    let ground = map.bilinear_height(x, z, floor)? * HEIGHT_UNIT;
    Ok((ground + WURMIAN_EYE_HEIGHT).max(WURMIAN_MIN_HEIGHT))
}

/// First-person camera walking on the terrain.
pub struct WurmianCamera {
    pub position: Vec3,
    pub yaw: f32,   // degrees
    pub pitch: f32, // degrees
}

impl WurmianCamera {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Keep the camera on the map and put its eye at terrain height.
    pub fn settle(&mut self, map: &Map, floor: i32) -> Result<(), MapError> {
        let max_x = map.width() as f32 * TILE_SIZE;
        let max_z = map.height() as f32 * TILE_SIZE;
        self.position.x = self.position.x.clamp(0.0, max_x);
        self.position.z = self.position.z.clamp(0.0, max_z);
        self.pitch = self.pitch.clamp(-90.0, 90.0);
        self.yaw %= 360.0;
        self.position.y = wurmian_eye_height(map, self.position.x, self.position.z, floor)?;
        Ok(())
    }
}
