use std::collections::VecDeque;

use deed_map::Map;

use crate::EditError;
use crate::command::EditCommand;
use crate::revisions::RevisionTracker;

/// A group of commands undone and redone together, e.g. one drag of a tool.
#[derive(Clone, Debug, Default)]
struct Action {
    commands: Vec<EditCommand>,
}

/// Applies commands to a map and keeps a bounded undo/redo history of actions.
///
/// Commands accumulate into a pending action until [`CommandManager::finish_action`].
/// The manager belongs to one map instance; call [`CommandManager::reset`] when the
/// map is replaced (cleared, resized, or loaded).
#[derive(Debug)]
pub struct CommandManager {
    undo: VecDeque<Action>,
    redo: Vec<Action>,
    pending: Action,
    max_undo: usize,
    revisions: RevisionTracker,
}

impl Default for CommandManager {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_UNDO)
    }
}

impl CommandManager {
    pub const DEFAULT_MAX_UNDO: usize = 100;

    pub fn new(max_undo: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            pending: Action::default(),
            max_undo: max_undo.max(1),
            revisions: RevisionTracker::new(),
        }
    }

    #[inline]
    pub fn revisions(&self) -> &RevisionTracker {
        &self.revisions
    }

    #[inline]
    pub fn revisions_mut(&mut self) -> &mut RevisionTracker {
        &mut self.revisions
    }

    #[inline]
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    #[inline]
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    #[inline]
    pub fn has_pending(&self) -> bool {
        !self.pending.commands.is_empty()
    }

    /// Apply `cmd` and add it to the pending action. Unchanged values are not
    /// recorded. Any new change discards the redo history.
    pub fn execute(&mut self, map: &mut Map, mut cmd: EditCommand) -> Result<bool, EditError> {
        let changed = cmd.apply(map)?;
        if !changed {
            return Ok(false);
        }
        log::trace!("edit {:?} -> {:?}", cmd.target(), cmd.edit());
        self.revisions.bump(cmd.target());
        self.pending.commands.push(cmd);
        self.redo.clear();
        Ok(true)
    }

    /// Close the pending action as one undo step.
    pub fn finish_action(&mut self) {
        if self.pending.commands.is_empty() {
            return;
        }
        let action = std::mem::take(&mut self.pending);
        self.push_undo(action);
    }

    fn push_undo(&mut self, action: Action) {
        self.undo.push_back(action);
        while self.undo.len() > self.max_undo {
            self.undo.pop_front();
        }
    }

    /// Revert the most recent action. Returns `false` when there is nothing to undo.
    pub fn undo(&mut self, map: &mut Map) -> Result<bool, EditError> {
        self.finish_action();
        let Some(action) = self.undo.pop_back() else {
            return Ok(false);
        };
        for cmd in action.commands.iter().rev() {
            cmd.revert(map)?;
            self.revisions.bump(cmd.target());
        }
        log::debug!("undo: {} command(s)", action.commands.len());
        self.redo.push(action);
        Ok(true)
    }

    /// Reapply the most recently undone action.
    pub fn redo(&mut self, map: &mut Map) -> Result<bool, EditError> {
        self.finish_action();
        let Some(mut action) = self.redo.pop() else {
            return Ok(false);
        };
        for cmd in action.commands.iter_mut() {
            cmd.apply(map)?;
            self.revisions.bump(cmd.target());
        }
        log::debug!("redo: {} command(s)", action.commands.len());
        self.push_undo(action);
        Ok(true)
    }

    /// Drop all history and change tracking.
    pub fn reset(&mut self) {
        self.undo.clear();
        self.redo.clear();
        self.pending = Action::default();
        self.revisions.clear();
    }
}
