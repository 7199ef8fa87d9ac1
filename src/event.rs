use deed_geom::Vec3;

use crate::tool::Tool;

#[derive(Debug)]
pub enum Event {
    // Time housekeeping
    Tick,

    // View state
    ToolSelected { tool: Tool },
    CameraFloorChanged { floor: i32 },

    // Input-derived intents. `floor` is the floor of the surface under the pointer.
    PointerMoved { point: Vec3, floor: i32 },
    PointerLeft,
    PrimaryPressed,
    SecondaryPressed,
    ButtonsReleased,
    UndoRequested,
    RedoRequested,

    // Map lifecycle
    MapCleared,
    MapResized {
        left: i32,
        right: i32,
        bottom: i32,
        top: i32,
    },
}
