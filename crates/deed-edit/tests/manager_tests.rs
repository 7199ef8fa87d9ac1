use deed_catalog::{GroundId, WallId, WallRef};
use deed_edit::{CommandManager, EditCommand, EditError};
use deed_map::{Map, MapError};
use deed_select::ElementAddress;

fn raise(m: &mut CommandManager, map: &mut Map, x: i32, y: i32, v: i32) -> bool {
    m.execute(map, EditCommand::set_height(ElementAddress::corner(x, y, 0), v).unwrap())
        .unwrap()
}

#[test]
fn undo_restores_and_redo_reapplies_an_action() {
    let mut map = Map::new(4, 4).unwrap();
    let mut mgr = CommandManager::default();
    raise(&mut mgr, &mut map, 1, 1, 20);
    raise(&mut mgr, &mut map, 2, 1, 30);
    mgr.execute(
        &mut map,
        EditCommand::set_ground(ElementAddress::tile(1, 1, 0), Some(GroundId(3))).unwrap(),
    )
    .unwrap();
    mgr.finish_action();
    assert_eq!(mgr.undo_len(), 1);

    assert!(mgr.undo(&mut map).unwrap());
    assert_eq!(map.height_at(1, 1, 0).unwrap(), 0);
    assert_eq!(map.height_at(2, 1, 0).unwrap(), 0);
    assert_eq!(map.ground(1, 1, 0).unwrap(), None);
    assert_eq!(mgr.redo_len(), 1);

    assert!(mgr.redo(&mut map).unwrap());
    assert_eq!(map.height_at(1, 1, 0).unwrap(), 20);
    assert_eq!(map.height_at(2, 1, 0).unwrap(), 30);
    assert_eq!(map.ground(1, 1, 0).unwrap(), Some(GroundId(3)));
    assert_eq!(mgr.redo_len(), 0);
}

#[test]
fn repeated_edits_of_one_element_unwind_in_order() {
    let mut map = Map::new(2, 2).unwrap();
    let mut mgr = CommandManager::default();
    raise(&mut mgr, &mut map, 1, 1, 5);
    raise(&mut mgr, &mut map, 1, 1, 9);
    mgr.finish_action();
    mgr.undo(&mut map).unwrap();
    assert_eq!(map.height_at(1, 1, 0).unwrap(), 0);
}

#[test]
fn undo_finishes_the_pending_action_first() {
    let mut map = Map::new(2, 2).unwrap();
    let mut mgr = CommandManager::default();
    raise(&mut mgr, &mut map, 0, 0, 5);
    assert!(mgr.has_pending());
    assert!(mgr.undo(&mut map).unwrap());
    assert_eq!(map.height_at(0, 0, 0).unwrap(), 0);
    assert!(!mgr.undo(&mut map).unwrap());
}

#[test]
fn new_edit_discards_redo() {
    let mut map = Map::new(2, 2).unwrap();
    let mut mgr = CommandManager::default();
    raise(&mut mgr, &mut map, 0, 0, 5);
    mgr.finish_action();
    mgr.undo(&mut map).unwrap();
    assert_eq!(mgr.redo_len(), 1);
    raise(&mut mgr, &mut map, 1, 0, 7);
    assert_eq!(mgr.redo_len(), 0);
    assert!(!mgr.redo(&mut map).unwrap());
}

#[test]
fn unchanged_values_are_not_recorded() {
    let mut map = Map::new(2, 2).unwrap();
    let mut mgr = CommandManager::default();
    assert!(!raise(&mut mgr, &mut map, 0, 0, 0));
    assert!(!mgr.has_pending());
    assert_eq!(mgr.revisions().current(), 0);
    mgr.finish_action();
    assert_eq!(mgr.undo_len(), 0);
}

#[test]
fn history_is_capped() {
    let mut map = Map::new(4, 4).unwrap();
    let mut mgr = CommandManager::new(3);
    for v in 1..=5 {
        raise(&mut mgr, &mut map, 0, 0, v * 10);
        mgr.finish_action();
    }
    assert_eq!(mgr.undo_len(), 3);
    while mgr.undo(&mut map).unwrap() {}
    // The two oldest actions fell off the history.
    assert_eq!(map.height_at(0, 0, 0).unwrap(), 20);
}

#[test]
fn failed_edit_leaves_history_untouched() {
    let mut map = Map::new(2, 2).unwrap();
    let mut mgr = CommandManager::default();
    let err = mgr
        .execute(&mut map, EditCommand::set_height(ElementAddress::corner(3, 0, 0), 1).unwrap())
        .unwrap_err();
    assert_eq!(err, EditError::Map(MapError::OutOfRange { x: 3, y: 0, floor: 0 }));
    assert!(!mgr.has_pending());
}

#[test]
fn edits_stamp_touched_tiles() {
    let mut map = Map::new(4, 4).unwrap();
    let mut mgr = CommandManager::default();
    let before = mgr.revisions().current();
    mgr.execute(
        &mut map,
        EditCommand::set_wall(
            ElementAddress::left_border(2, 1, 0),
            Some(WallRef::new(WallId(0), false)),
        )
        .unwrap(),
    )
    .unwrap();
    assert_eq!(mgr.revisions().dirty_since(before), vec![(1, 1, 0), (2, 1, 0)]);

    let after_edit = mgr.revisions().current();
    mgr.undo(&mut map).unwrap();
    assert_eq!(mgr.revisions().dirty_since(after_edit).len(), 2);
    assert_eq!(map.vertical_wall(2, 1, 0).unwrap(), None);
}

#[test]
fn reset_forgets_everything() {
    let mut map = Map::new(2, 2).unwrap();
    let mut mgr = CommandManager::default();
    raise(&mut mgr, &mut map, 0, 0, 5);
    mgr.finish_action();
    mgr.reset();
    assert_eq!(mgr.undo_len(), 0);
    assert!(mgr.revisions().dirty_since(0).is_empty());
}
