use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use deed_catalog::{Catalog, CatalogId, Table};
use deed_geom::Vec3;

use crate::event::Event;
use crate::tool::{Tool, ToolKind};

/// One scripted input. `x`/`z` are world coordinates on the ground plane.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    Tool {
        kind: ToolKind,
        /// Catalog key of the ground, wall, or cave to paint.
        #[serde(default)]
        item: Option<String>,
        #[serde(default)]
        reversed: bool,
        #[serde(default)]
        step: Option<i32>,
    },
    Floor {
        floor: i32,
    },
    Hover {
        x: f32,
        z: f32,
        #[serde(default)]
        floor: i32,
    },
    Leave,
    Primary,
    Secondary,
    Release,
    Undo,
    Redo,
    Tick,
    Clear,
    Resize {
        #[serde(default)]
        left: i32,
        #[serde(default)]
        right: i32,
        #[serde(default)]
        bottom: i32,
        #[serde(default)]
        top: i32,
    },
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub steps: Vec<Step>,
}

fn lookup<I: CatalogId, T>(
    table: &Table<I, T>,
    what: &str,
    key: &Option<String>,
) -> Result<Option<I>, Box<dyn Error>> {
    match key {
        None => Ok(None),
        Some(k) => table
            .id_by_key(k)
            .map(Some)
            .ok_or_else(|| format!("unknown {} '{}'", what, k).into()),
    }
}

impl Script {
    pub fn from_toml_str(s: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    /// Turn the steps into session events, resolving catalog keys.
    pub fn events(&self, catalog: &Catalog) -> Result<Vec<Event>, Box<dyn Error>> {
        let mut out = Vec::with_capacity(self.steps.len());
        for step in &self.steps {
            let ev = match step {
                Step::Tool {
                    kind,
                    item,
                    reversed,
                    step,
                } => {
                    let tool = match kind {
                        ToolKind::Ground => Tool::Ground {
                            ground: lookup(&catalog.grounds, "ground", item)?,
                        },
                        ToolKind::Height => Tool::Height {
                            step: step.unwrap_or(5),
                        },
                        ToolKind::Walls => Tool::Walls {
                            wall: lookup(&catalog.walls, "wall", item)?,
                            reversed: *reversed,
                        },
                        ToolKind::Caves => Tool::Caves {
                            cave: lookup(&catalog.caves, "cave", item)?,
                        },
                    };
                    Event::ToolSelected { tool }
                }
                Step::Floor { floor } => Event::CameraFloorChanged { floor: *floor },
                Step::Hover { x, z, floor } => Event::PointerMoved {
                    point: Vec3::on_plane(*x, *z),
                    floor: *floor,
                },
                Step::Leave => Event::PointerLeft,
                Step::Primary => Event::PrimaryPressed,
                Step::Secondary => Event::SecondaryPressed,
                Step::Release => Event::ButtonsReleased,
                Step::Undo => Event::UndoRequested,
                Step::Redo => Event::RedoRequested,
                Step::Tick => Event::Tick,
                Step::Clear => Event::MapCleared,
                Step::Resize {
                    left,
                    right,
                    bottom,
                    top,
                } => Event::MapResized {
                    left: *left,
                    right: *right,
                    bottom: *bottom,
                    top: *top,
                },
            };
            out.push(ev);
        }
        Ok(out)
    }
}
