use deed_edit::{CommandManager, EditCommand};
use deed_map::Map;
use deed_select::ElementAddress;
use proptest::prelude::*;

const W: usize = 4;

fn snapshot(map: &Map) -> Vec<i32> {
    let mut out = Vec::new();
    for y in 0..=W as i32 {
        for x in 0..=W as i32 {
            out.push(map.height_at(x, y, 0).unwrap());
        }
    }
    out
}

fn edit() -> impl Strategy<Value = (i32, i32, i32, bool)> {
    (0i32..=W as i32, 0i32..=W as i32, -50i32..50, any::<bool>())
}

proptest! {
    // Undoing everything restores the starting map; redoing everything
    // reproduces the edited one.
    #[test]
    fn undo_all_then_redo_all(edits in prop::collection::vec(edit(), 1..40)) {
        let mut map = Map::new(W, W).unwrap();
        let mut mgr = CommandManager::new(1_000);
        let start = snapshot(&map);
        for (x, y, v, close) in edits {
            let cmd = EditCommand::set_height(ElementAddress::corner(x, y, 0), v).unwrap();
            mgr.execute(&mut map, cmd).unwrap();
            if close {
                mgr.finish_action();
            }
        }
        let end = snapshot(&map);
        while mgr.undo(&mut map).unwrap() {}
        prop_assert_eq!(snapshot(&map), start);
        while mgr.redo(&mut map).unwrap() {}
        prop_assert_eq!(snapshot(&map), end);
    }

    #[test]
    fn history_never_exceeds_cap(cap in 1usize..8, n in 0usize..20) {
        let mut map = Map::new(W, W).unwrap();
        let mut mgr = CommandManager::new(cap);
        for i in 0..n {
            let cmd = EditCommand::set_height(ElementAddress::corner(0, 0, 0), i as i32 + 1).unwrap();
            mgr.execute(&mut map, cmd).unwrap();
            mgr.finish_action();
            prop_assert!(mgr.undo_len() <= cap);
        }
    }
}
