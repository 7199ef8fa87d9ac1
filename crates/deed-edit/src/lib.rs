//! Undoable map edits and per-tile change tracking.
#![forbid(unsafe_code)]

pub mod command;
pub mod manager;
pub mod revisions;

pub use command::{Edit, EditCommand};
pub use manager::CommandManager;
pub use revisions::{RevisionStats, RevisionTracker};

use deed_map::MapError;
use deed_select::ElementKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditError {
    Map(MapError),
    /// The edit cannot be applied to this kind of element.
    WrongTarget {
        expected: &'static str,
        found: ElementKind,
    },
}

impl From<MapError> for EditError {
    fn from(e: MapError) -> Self {
        EditError::Map(e)
    }
}

impl std::fmt::Display for EditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EditError::Map(e) => write!(f, "{}", e),
            EditError::WrongTarget { expected, found } => {
                write!(f, "edit needs a {} but targets a {:?}", expected, found)
            }
        }
    }
}

impl std::error::Error for EditError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EditError::Map(e) => Some(e),
            EditError::WrongTarget { .. } => None,
        }
    }
}
