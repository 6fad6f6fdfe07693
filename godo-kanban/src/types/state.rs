//! The root of the model: every board, the current selection, id counters, theme

use super::board::{Board, Column};
use super::ids::{BoardId, ColumnId, IdCounters, IdKind, SubtaskId, TaskId};
use super::task::Task;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Color scheme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(format!("unknown theme '{other}'")),
        }
    }
}

/// All application data.
///
/// Ownership is a strict tree: boards own columns, columns own tasks, tasks
/// own subtasks. `current_board_id` is a weak reference by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub boards: Vec<Board>,
    pub current_board_id: Option<BoardId>,
    #[serde(flatten)]
    pub counters: IdCounters,
    pub theme: Theme,
}

impl AppState {
    pub fn current_board(&self) -> Option<&Board> {
        let id = self.current_board_id.as_ref()?;
        self.find_board(id)
    }

    pub fn current_board_mut(&mut self) -> Option<&mut Board> {
        let id = self.current_board_id.clone()?;
        self.find_board_mut(&id)
    }

    pub fn find_board(&self, id: &BoardId) -> Option<&Board> {
        self.boards.iter().find(|b| &b.id == id)
    }

    pub fn find_board_mut(&mut self, id: &BoardId) -> Option<&mut Board> {
        self.boards.iter_mut().find(|b| &b.id == id)
    }

    /// Locate a column on any board
    pub fn find_column(&self, id: &ColumnId) -> Option<&Column> {
        self.boards.iter().find_map(|b| b.find_column(id))
    }

    /// Locate a column on any board (mutable)
    pub fn find_column_mut(&mut self, id: &ColumnId) -> Option<&mut Column> {
        self.boards.iter_mut().find_map(|b| b.find_column_mut(id))
    }

    /// Board that owns the column `id`
    pub fn board_of_column_mut(&mut self, id: &ColumnId) -> Option<&mut Board> {
        self.boards
            .iter_mut()
            .find(|b| b.find_column(id).is_some())
    }

    pub fn find_task(&self, column_id: &ColumnId, task_id: &TaskId) -> Option<&Task> {
        self.find_column(column_id)?.find_task(task_id)
    }

    pub fn find_task_mut(&mut self, column_id: &ColumnId, task_id: &TaskId) -> Option<&mut Task> {
        self.find_column_mut(column_id)?.find_task_mut(task_id)
    }

    /// Point `current_board_id` at an existing board.
    ///
    /// Keeps a valid selection, otherwise falls back to the first board, or
    /// `None` when there are no boards. Returns true if the selection changed.
    pub fn repair_current_board(&mut self) -> bool {
        let valid = self
            .current_board_id
            .as_ref()
            .is_some_and(|id| self.find_board(id).is_some());
        if valid {
            return false;
        }
        let repaired = self.boards.first().map(|b| b.id.clone());
        let changed = repaired != self.current_board_id;
        self.current_board_id = repaired;
        changed
    }

    /// Raise every counter above the highest numeric suffix in use.
    pub fn reconcile_counters(&mut self) {
        let mut counters = self.counters;
        for board in &self.boards {
            observe(&mut counters, IdKind::Board, board.id.numeric_suffix());
            for column in &board.columns {
                observe(&mut counters, IdKind::Column, column.id.numeric_suffix());
                for task in &column.tasks {
                    observe(&mut counters, IdKind::Task, task.id.numeric_suffix());
                    for subtask in &task.subtasks {
                        observe(&mut counters, IdKind::Subtask, subtask.id.numeric_suffix());
                    }
                }
            }
        }
        self.counters = counters;
    }

    /// Every task id reachable from the state, in display order
    pub fn task_ids(&self) -> Vec<TaskId> {
        self.boards
            .iter()
            .flat_map(|b| &b.columns)
            .flat_map(|c| &c.tasks)
            .map(|t| t.id.clone())
            .collect()
    }

    /// Every subtask id reachable from the state, in display order
    pub fn subtask_ids(&self) -> Vec<SubtaskId> {
        self.boards
            .iter()
            .flat_map(|b| &b.columns)
            .flat_map(|c| &c.tasks)
            .flat_map(|t| &t.subtasks)
            .map(|s| s.id.clone())
            .collect()
    }
}

fn observe(counters: &mut IdCounters, kind: IdKind, suffix: Option<u64>) {
    if let Some(n) = suffix {
        counters.observe(kind, n);
    }
}
