use std::collections::HashMap;

use deed_select::ElementAddress;

#[derive(Default, Debug, Clone, Copy)]
pub struct RevisionStats {
    pub rev_entries: usize,
    pub built_entries: usize,
    pub counter: u64,
}

/// Per-tile change tracking. Each edit gets a new stamp, written to every tile
/// the edited element touches; a renderer rebuilds tiles whose stamp is newer
/// than the one it last built.
#[derive(Default, Debug, Clone)]
pub struct RevisionTracker {
    // key = (x, y, floor)
    rev: HashMap<(i32, i32, i32), u64>,
    built: HashMap<(i32, i32, i32), u64>,
    counter: u64,
}

impl RevisionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> RevisionStats {
        RevisionStats {
            rev_entries: self.rev.len(),
            built_entries: self.built.len(),
            counter: self.counter,
        }
    }

    /// Latest stamp handed out, 0 before any edit.
    #[inline]
    pub fn current(&self) -> u64 {
        self.counter
    }

    /// Stamp every tile around `at` with a new monotonically increasing revision.
    pub fn bump(&mut self, at: ElementAddress) -> u64 {
        self.counter = self.counter.wrapping_add(1).max(1);
        let stamp = self.counter;
        for (x, y) in at.touched_tiles() {
            self.rev.insert((x, y, at.floor), stamp);
        }
        stamp
    }

    pub fn get_rev(&self, x: i32, y: i32, floor: i32) -> u64 {
        self.rev.get(&(x, y, floor)).copied().unwrap_or(0)
    }

    pub fn mark_built(&mut self, x: i32, y: i32, floor: i32, rev: u64) {
        // Only update if this is a newer revision
        let e = self.built.entry((x, y, floor)).or_insert(0);
        if rev > *e {
            *e = rev;
        }
    }

    pub fn get_built_rev(&self, x: i32, y: i32, floor: i32) -> u64 {
        self.built.get(&(x, y, floor)).copied().unwrap_or(0)
    }

    pub fn needs_rebuild(&self, x: i32, y: i32, floor: i32) -> bool {
        self.get_rev(x, y, floor) > self.get_built_rev(x, y, floor)
    }

    /// Tiles stamped after `since`, sorted by floor then row then column.
    pub fn dirty_since(&self, since: u64) -> Vec<(i32, i32, i32)> {
        let mut out: Vec<(i32, i32, i32)> = self
            .rev
            .iter()
            .filter(|(_, r)| **r > since)
            .map(|(k, _)| *k)
            .collect();
        out.sort_by_key(|&(x, y, floor)| (floor, y, x));
        out
    }

    pub fn clear(&mut self) {
        self.rev.clear();
        self.built.clear();
    }
}
