#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapError {
    /// Coordinate outside the grid for the element being addressed.
    OutOfRange { x: i32, y: i32, floor: i32 },
    FloorOutOfRange(i32),
    InvalidDimensions { width: i64, height: i64 },
    /// Cave data only exists below the surface.
    NotUnderground(i32),
    NonFinitePoint,
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::OutOfRange { x, y, floor } => {
                write!(f, "({}, {}) on floor {} is outside the map", x, y, floor)
            }
            MapError::FloorOutOfRange(floor) => write!(f, "floor {} does not exist", floor),
            MapError::InvalidDimensions { width, height } => {
                write!(f, "invalid map dimensions {}x{}", width, height)
            }
            MapError::NotUnderground(floor) => {
                write!(f, "floor {} is not underground; caves need a negative floor", floor)
            }
            MapError::NonFinitePoint => write!(f, "point is not finite"),
        }
    }
}

impl std::error::Error for MapError {}
