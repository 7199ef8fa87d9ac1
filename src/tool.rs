use clap::ValueEnum;
use serde::Deserialize;

use deed_catalog::{CaveId, GroundId, WallId, WallRef};
use deed_select::TileSelectionMode;

/// Editing tab as picked from the command line or a script.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    Ground,
    Height,
    Walls,
    Caves,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tool {
    /// Primary paints `ground`, secondary clears.
    Ground { ground: Option<GroundId> },
    /// Primary raises the hovered corner by `step`, secondary lowers it.
    Height { step: i32 },
    /// Primary places `wall`, secondary removes (only on the camera's floor).
    Walls { wall: Option<WallId>, reversed: bool },
    Caves { cave: Option<CaveId> },
}

impl Default for Tool {
    fn default() -> Self {
        Tool::Height { step: 5 }
    }
}

impl Tool {
    pub fn kind(&self) -> ToolKind {
        match self {
            Tool::Ground { .. } => ToolKind::Ground,
            Tool::Height { .. } => ToolKind::Height,
            Tool::Walls { .. } => ToolKind::Walls,
            Tool::Caves { .. } => ToolKind::Caves,
        }
    }

    pub fn selection_mode(&self) -> TileSelectionMode {
        match self {
            Tool::Ground { .. } | Tool::Caves { .. } => TileSelectionMode::Tiles,
            Tool::Height { .. } | Tool::Walls { .. } => TileSelectionMode::Borders,
        }
    }

    /// Ground and height always edit the surface, whatever floor the camera shows.
    pub fn editing_floor(&self, camera_floor: i32) -> i32 {
        match self {
            Tool::Ground { .. } | Tool::Height { .. } => 0,
            Tool::Walls { .. } | Tool::Caves { .. } => camera_floor,
        }
    }

    pub fn wall_ref(&self) -> Option<WallRef> {
        match *self {
            Tool::Walls {
                wall: Some(id),
                reversed,
            } => Some(WallRef::new(id, reversed)),
            _ => None,
        }
    }
}
