use deed_catalog::{CaveId, GroundId, WallRef};
use deed_map::Map;
use deed_select::{ElementAddress, ElementKind};

use crate::EditError;

/// New value for one map element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edit {
    Height(i32),
    Ground(Option<GroundId>),
    Cave(Option<CaveId>),
    Wall(Option<WallRef>),
}

/// One element edit. Remembers the value it replaced once applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditCommand {
    target: ElementAddress,
    edit: Edit,
    previous: Option<Edit>,
}

impl EditCommand {
    fn checked(target: ElementAddress, edit: Edit) -> Result<Self, EditError> {
        let ok = match edit {
            Edit::Height(_) => target.kind == ElementKind::Corner,
            Edit::Ground(_) | Edit::Cave(_) => target.kind == ElementKind::Tile,
            Edit::Wall(_) => target.is_border(),
        };
        if !ok {
            let expected = match edit {
                Edit::Height(_) => "corner",
                Edit::Ground(_) | Edit::Cave(_) => "tile",
                Edit::Wall(_) => "border",
            };
            return Err(EditError::WrongTarget {
                expected,
                found: target.kind,
            });
        }
        Ok(Self {
            target,
            edit,
            previous: None,
        })
    }

    pub fn set_height(corner: ElementAddress, value: i32) -> Result<Self, EditError> {
        Self::checked(corner, Edit::Height(value))
    }

    pub fn set_ground(tile: ElementAddress, ground: Option<GroundId>) -> Result<Self, EditError> {
        Self::checked(tile, Edit::Ground(ground))
    }

    pub fn set_cave(tile: ElementAddress, cave: Option<CaveId>) -> Result<Self, EditError> {
        Self::checked(tile, Edit::Cave(cave))
    }

    /// Bottom borders take horizontal walls, left borders vertical ones.
    pub fn set_wall(border: ElementAddress, wall: Option<WallRef>) -> Result<Self, EditError> {
        Self::checked(border, Edit::Wall(wall))
    }

    #[inline]
    pub fn target(&self) -> ElementAddress {
        self.target
    }

    #[inline]
    pub fn edit(&self) -> Edit {
        self.edit
    }

    /// Write the new value. Returns `false` when the element already held it.
    pub fn apply(&mut self, map: &mut Map) -> Result<bool, EditError> {
        let previous = write(map, self.target, self.edit)?;
        self.previous = Some(previous);
        Ok(previous != self.edit)
    }

    /// Restore the value replaced by the last `apply`.
    pub fn revert(&self, map: &mut Map) -> Result<(), EditError> {
        if let Some(previous) = self.previous {
            write(map, self.target, previous)?;
        }
        Ok(())
    }
}

fn write(map: &mut Map, at: ElementAddress, edit: Edit) -> Result<Edit, EditError> {
    let ElementAddress { x, y, floor, kind } = at;
    let previous = match edit {
        Edit::Height(v) => Edit::Height(map.set_height_at(x, y, floor, v)?),
        Edit::Ground(g) => Edit::Ground(map.set_ground(x, y, floor, g)?),
        Edit::Cave(c) => Edit::Cave(map.set_cave(x, y, floor, c)?),
        Edit::Wall(w) => match kind {
            ElementKind::BottomBorder => Edit::Wall(map.set_horizontal_wall(x, y, floor, w)?),
            ElementKind::LeftBorder => Edit::Wall(map.set_vertical_wall(x, y, floor, w)?),
            found => {
                return Err(EditError::WrongTarget {
                    expected: "border",
                    found,
                });
            }
        },
    };
    Ok(previous)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deed_catalog::WallId;

    #[test]
    fn wall_commands_route_by_border_kind() {
        let mut map = Map::new(4, 4).unwrap();
        let wall = Some(WallRef::new(WallId(2), true));
        EditCommand::set_wall(ElementAddress::bottom_border(1, 2, 0), wall)
            .unwrap()
            .apply(&mut map)
            .unwrap();
        EditCommand::set_wall(ElementAddress::left_border(3, 1, 0), wall)
            .unwrap()
            .apply(&mut map)
            .unwrap();
        assert_eq!(map.horizontal_wall(1, 2, 0).unwrap(), wall);
        assert_eq!(map.vertical_wall(1, 2, 0).unwrap(), None);
        assert_eq!(map.vertical_wall(3, 1, 0).unwrap(), wall);
    }

    #[test]
    fn mismatched_targets_are_rejected() {
        assert_eq!(
            EditCommand::set_height(ElementAddress::tile(0, 0, 0), 5),
            Err(EditError::WrongTarget {
                expected: "corner",
                found: ElementKind::Tile
            })
        );
        assert!(EditCommand::set_wall(ElementAddress::corner(0, 0, 0), None).is_err());
        assert!(EditCommand::set_ground(ElementAddress::left_border(0, 0, 0), None).is_err());
    }
}
