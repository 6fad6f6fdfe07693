//! Board-level types: Board, Column

use super::ids::{BoardId, ColumnId, TaskId};
use super::task::Task;
use crate::palette::DEFAULT_COLUMN_COLOR;
use crate::reorder::Keyed;
use serde::{Deserialize, Serialize};

/// Width in pixels given to columns that don't specify one
pub const DEFAULT_COLUMN_WIDTH: u32 = 300;

/// Title of the column every new board starts with
pub const DEFAULT_COLUMN_TITLE: &str = "To Do";

/// A named board owning an ordered list of columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    pub columns: Vec<Column>,
}

impl Board {
    /// Create an empty board
    pub fn new(id: BoardId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            columns: Vec::new(),
        }
    }

    /// Add a column at the end
    pub fn with_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    pub fn find_column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    pub fn find_column_mut(&mut self, id: &ColumnId) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| &c.id == id)
    }

    /// Column currently holding `task_id`
    pub fn column_of_task(&self, task_id: &TaskId) -> Option<&Column> {
        self.columns.iter().find(|c| c.find_task(task_id).is_some())
    }

    /// Total number of tasks across all columns
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }
}

impl Keyed for Board {
    type Key = BoardId;

    fn key(&self) -> &BoardId {
        &self.id
    }
}

/// A column defines a workflow stage and owns its tasks in display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub tasks: Vec<Task>,
    pub width: u32,
    pub color: String,
}

impl Column {
    /// Create an empty column with the default width and color
    pub fn new(id: ColumnId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            tasks: Vec::new(),
            width: DEFAULT_COLUMN_WIDTH,
            color: DEFAULT_COLUMN_COLOR.to_string(),
        }
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Add a task at the end
    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.push(task);
        self
    }

    pub fn find_task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    pub fn find_task_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| &t.id == id)
    }
}

impl Keyed for Column {
    type Key = ColumnId;

    fn key(&self) -> &ColumnId {
        &self.id
    }
}
