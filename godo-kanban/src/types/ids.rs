//! Identifier newtypes and the per-kind counters that mint them.
//!
//! Ids look like `task-12`: a fixed prefix per entity kind followed by the
//! counter value at the time of creation. Counters only move forward, so an
//! id is never handed out twice even after the entity it named is deleted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four kinds of entity that receive generated ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdKind {
    Board,
    Column,
    Task,
    Subtask,
}

impl IdKind {
    /// Prefix placed before the counter value
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Board => "board",
            Self::Column => "col",
            Self::Task => "task",
            Self::Subtask => "subtask",
        }
    }
}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing id string
            pub fn from_string(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the inner string value
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Numeric part after the last `-`, if there is one
            pub fn numeric_suffix(&self) -> Option<u64> {
                numeric_suffix(&self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&$name> for $name {
            fn from(id: &$name) -> Self {
                id.clone()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifier of a board
    BoardId
);
define_id!(
    /// Identifier of a column, unique across every board
    ColumnId
);
define_id!(
    /// Identifier of a task, unique across every board
    TaskId
);
define_id!(
    /// Identifier of a subtask, unique across every board
    SubtaskId
);

fn numeric_suffix(id: &str) -> Option<u64> {
    id.rsplit_once('-').and_then(|(_, n)| n.parse().ok())
}

/// Monotonic counters, one per entity kind.
///
/// Each counter holds the number the *next* id of its kind will carry.
/// They persist as four flat `next*Id` fields on the state record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdCounters {
    #[serde(rename = "nextBoardId")]
    pub board: u64,
    #[serde(rename = "nextColumnId")]
    pub column: u64,
    #[serde(rename = "nextTaskId")]
    pub task: u64,
    #[serde(rename = "nextSubTaskId")]
    pub subtask: u64,
}

impl Default for IdCounters {
    fn default() -> Self {
        Self {
            board: 1,
            column: 1,
            task: 1,
            subtask: 1,
        }
    }
}

impl IdCounters {
    /// Produce the next id string for `kind` and advance its counter
    pub fn next(&mut self, kind: IdKind) -> String {
        let slot = self.slot_mut(kind);
        let n = *slot;
        *slot = n.saturating_add(1);
        format!("{}-{}", kind.prefix(), n)
    }

    pub fn next_board(&mut self) -> BoardId {
        BoardId(self.next(IdKind::Board))
    }

    pub fn next_column(&mut self) -> ColumnId {
        ColumnId(self.next(IdKind::Column))
    }

    pub fn next_task(&mut self) -> TaskId {
        TaskId(self.next(IdKind::Task))
    }

    pub fn next_subtask(&mut self) -> SubtaskId {
        SubtaskId(self.next(IdKind::Subtask))
    }

    /// Current value of the counter for `kind`
    pub fn peek(&self, kind: IdKind) -> u64 {
        match kind {
            IdKind::Board => self.board,
            IdKind::Column => self.column,
            IdKind::Task => self.task,
            IdKind::Subtask => self.subtask,
        }
    }

    /// Raise the counter for `kind` so it is strictly above `observed`.
    ///
    /// Never lowers a counter and never lets one drop below 1.
    pub fn observe(&mut self, kind: IdKind, observed: u64) {
        let slot = self.slot_mut(kind);
        *slot = (*slot).max(observed.saturating_add(1)).max(1);
    }

    fn slot_mut(&mut self, kind: IdKind) -> &mut u64 {
        match kind {
            IdKind::Board => &mut self.board,
            IdKind::Column => &mut self.column,
            IdKind::Task => &mut self.task,
            IdKind::Subtask => &mut self.subtask,
        }
    }
}
