//! DuplicateTask command

use crate::context::KanbanContext;
use crate::error::Result;
use crate::operation::{operation, Execute, Outcome};
use crate::reorder::{place, Anchor};
use crate::types::{ColumnId, Subtask, Task, TaskId};
use serde::{Deserialize, Serialize};

/// Insert a copy of a task directly after it.
///
/// The copy keeps text, color and star. It gets a new id, a fresh
/// `created_at`, and copies of every subtask under new ids.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DuplicateTask {
    pub column: ColumnId,
    pub id: TaskId,
}

impl DuplicateTask {
    pub fn new(column: impl Into<ColumnId>, id: impl Into<TaskId>) -> Self {
        Self {
            column: column.into(),
            id: id.into(),
        }
    }
}

operation!(DuplicateTask, Duplicate, Task);

impl Execute for DuplicateTask {
    fn execute(&self, ctx: &mut KanbanContext) -> Result<Outcome> {
        let now = ctx.now();
        let state = ctx.state_mut();
        let Some(original) = state.find_task(&self.column, &self.id).cloned() else {
            return Ok(Outcome::Unchanged);
        };

        // Strictly newer than the original even if the clock has not moved
        let created_at = now.max(original.created_at.saturating_add(1));
        let mut copy = Task::new(state.counters.next_task(), original.text, created_at)
            .with_color(original.color)
            .with_starred(original.is_starred);
        for subtask in &original.subtasks {
            copy = copy.with_subtask(
                Subtask::new(state.counters.next_subtask(), subtask.text.clone())
                    .with_completed(subtask.completed),
            );
        }

        let value = serde_json::to_value(&copy)?;
        let Some(column) = state.find_column_mut(&self.column) else {
            return Ok(Outcome::Unchanged);
        };
        place(&mut column.tasks, copy, Anchor::After(&self.id));
        Ok(Outcome::Applied(value))
    }
}
