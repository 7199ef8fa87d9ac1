use std::collections::HashSet;

use deed_catalog::Catalog;
use deed_edit::{CommandManager, EditCommand, EditError};
use deed_geom::Vec3;
use deed_map::{Map, MapError, floor_in_range};
use deed_select::{Classifier, ElementAddress, ElementKind, MapBounds, TileSelectionHit, resolve_address};

use crate::camera::WurmianCamera;
use crate::event::Event;
use crate::tool::Tool;
use crate::tooltip::build_tooltip;

mod logging;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Button {
    Primary,
    Secondary,
}

/// What the pointer is over. `floor` is the floor of the surface that was hit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hover {
    pub point: Vec3,
    pub floor: i32,
    pub hit: TileSelectionHit,
}

/// Editing session: one map, its history, and the active tool.
pub struct Session {
    map: Map,
    catalog: Catalog,
    classifier: Classifier,
    commands: CommandManager,
    tool: Tool,
    camera_floor: i32,
    tick: u64,
    hover: Option<Hover>,
    held: Option<Button>,
    // elements edited during the current drag
    dragged: HashSet<ElementAddress>,
}

impl Session {
    pub fn new(map: Map, catalog: Catalog, classifier: Classifier, commands: CommandManager) -> Self {
        Self {
            map,
            catalog,
            classifier,
            commands,
            tool: Tool::default(),
            camera_floor: 0,
            tick: 0,
            hover: None,
            held: None,
            dragged: HashSet::new(),
        }
    }

    #[inline]
    pub fn map(&self) -> &Map {
        &self.map
    }

    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[inline]
    pub fn commands(&self) -> &CommandManager {
        &self.commands
    }

    #[inline]
    pub fn tool(&self) -> Tool {
        self.tool
    }

    #[inline]
    pub fn camera_floor(&self) -> i32 {
        self.camera_floor
    }

    #[inline]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    #[inline]
    pub fn hover(&self) -> Option<Hover> {
        self.hover
    }

    pub fn handle(&mut self, ev: Event) -> Result<(), EditError> {
        logging::log_event(self.tick, &ev);
        match ev {
            Event::Tick => {
                self.tick = self.tick.wrapping_add(1);
            }
            Event::ToolSelected { tool } => {
                self.release();
                self.tool = tool;
                self.reclassify();
            }
            Event::CameraFloorChanged { floor } => {
                self.camera_floor = floor;
            }
            Event::PointerMoved { point, floor } => {
                self.hover = Some(self.classify(point, floor));
                if let Some(button) = self.held {
                    self.apply(button)?;
                }
            }
            Event::PointerLeft => {
                self.hover = None;
            }
            Event::PrimaryPressed => self.press(Button::Primary)?,
            Event::SecondaryPressed => self.press(Button::Secondary)?,
            Event::ButtonsReleased => self.release(),
            Event::UndoRequested => {
                self.release();
                if !self.commands.undo(&mut self.map)? {
                    log::debug!("nothing to undo");
                }
            }
            Event::RedoRequested => {
                self.release();
                if !self.commands.redo(&mut self.map)? {
                    log::debug!("nothing to redo");
                }
            }
            Event::MapCleared => {
                let map = self.map.cleared();
                self.replace_map(map);
            }
            Event::MapResized {
                left,
                right,
                bottom,
                top,
            } => {
                let map = self.map.resized(left, right, bottom, top)?;
                self.replace_map(map);
            }
        }
        Ok(())
    }

    /// Hover text for the current pointer position; empty when nothing is hovered.
    pub fn tooltip(&self) -> Result<String, MapError> {
        let Some(hover) = self.hover else {
            return Ok(String::new());
        };
        let floor = match self.tool {
            Tool::Walls { .. } => self.wall_floor(hover.floor),
            _ => self.tool.editing_floor(self.camera_floor),
        };
        if !floor_in_range(floor) {
            return Ok(String::new());
        }
        build_tooltip(&self.map, &self.catalog, self.tool.kind(), hover.point, floor, hover.hit)
    }

    /// Put a first-person camera on the terrain of the camera's floor.
    pub fn settle_camera(&self, cam: &mut WurmianCamera) -> Result<(), MapError> {
        cam.settle(&self.map, self.camera_floor)
    }

    fn classify(&self, point: Vec3, floor: i32) -> Hover {
        let hit = self
            .classifier
            .classify(point, self.tool.selection_mode(), MapBounds::of(&self.map));
        Hover { point, floor, hit }
    }

    fn reclassify(&mut self) {
        if let Some(h) = self.hover {
            self.hover = Some(self.classify(h.point, h.floor));
        }
    }

    fn replace_map(&mut self, map: Map) {
        self.held = None;
        self.dragged.clear();
        self.map = map;
        self.commands.reset();
        self.reclassify();
    }

    fn press(&mut self, button: Button) -> Result<(), EditError> {
        if self.held != Some(button) {
            self.commands.finish_action();
        }
        self.held = Some(button);
        self.dragged.clear();
        self.apply(button)
    }

    fn release(&mut self) {
        self.held = None;
        self.dragged.clear();
        self.commands.finish_action();
    }

    /// Standing on top of a wall one floor below the camera edits the camera's floor.
    fn wall_floor(&self, hover_floor: i32) -> i32 {
        if self.camera_floor == hover_floor + 1 {
            hover_floor + 1
        } else {
            hover_floor
        }
    }

    fn apply(&mut self, button: Button) -> Result<(), EditError> {
        let Some(hover) = self.hover else {
            return Ok(());
        };
        let Some(cmd) = self.command_for(hover, button)? else {
            return Ok(());
        };
        // a drag edits each element once
        if !self.dragged.insert(cmd.target()) {
            return Ok(());
        }
        self.commands.execute(&mut self.map, cmd)?;
        Ok(())
    }

    fn command_for(&self, hover: Hover, button: Button) -> Result<Option<EditCommand>, EditError> {
        let primary = button == Button::Primary;
        match self.tool {
            Tool::Height { step } => {
                let Some(at) = resolve_address(hover.hit, 0) else {
                    return Ok(None);
                };
                if at.kind != ElementKind::Corner {
                    return Ok(None);
                }
                let current = self.map.height_at(at.x, at.y, at.floor)?;
                let delta = if primary { step } else { step.saturating_neg() };
                Ok(Some(EditCommand::set_height(at, current.saturating_add(delta))?))
            }
            Tool::Ground { ground } => {
                let Some(at) = resolve_address(hover.hit, 0) else {
                    return Ok(None);
                };
                let value = if primary { ground } else { None };
                if primary && value.is_none() {
                    return Ok(None);
                }
                Ok(Some(EditCommand::set_ground(at, value)?))
            }
            Tool::Caves { cave } => {
                if self.camera_floor >= 0 || !floor_in_range(self.camera_floor) {
                    return Ok(None);
                }
                let Some(at) = resolve_address(hover.hit, self.camera_floor) else {
                    return Ok(None);
                };
                let value = if primary { cave } else { None };
                if primary && value.is_none() {
                    return Ok(None);
                }
                Ok(Some(EditCommand::set_cave(at, value)?))
            }
            Tool::Walls { .. } => {
                let floor = self.wall_floor(hover.floor);
                if !floor_in_range(floor) {
                    return Ok(None);
                }
                let Some(at) = resolve_address(hover.hit, floor) else {
                    return Ok(None);
                };
                if !at.is_border() {
                    return Ok(None);
                }
                if primary {
                    match self.tool.wall_ref() {
                        Some(wall) => Ok(Some(EditCommand::set_wall(at, Some(wall))?)),
                        None => Ok(None),
                    }
                } else if floor == self.camera_floor {
                    Ok(Some(EditCommand::set_wall(at, None)?))
                } else {
                    Ok(None)
                }
            }
        }
    }
}
