//! DuplicateSubtask command

use crate::context::KanbanContext;
use crate::error::Result;
use crate::operation::{operation, Execute, Outcome};
use crate::reorder::{place, Anchor};
use crate::types::{ColumnId, Subtask, SubtaskId, TaskId};
use serde::{Deserialize, Serialize};

/// Insert a copy of a subtask directly after it, under a new id
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DuplicateSubtask {
    pub column: ColumnId,
    pub task: TaskId,
    pub id: SubtaskId,
}

impl DuplicateSubtask {
    pub fn new(
        column: impl Into<ColumnId>,
        task: impl Into<TaskId>,
        id: impl Into<SubtaskId>,
    ) -> Self {
        Self {
            column: column.into(),
            task: task.into(),
            id: id.into(),
        }
    }
}

operation!(DuplicateSubtask, Duplicate, Subtask);

impl Execute for DuplicateSubtask {
    fn execute(&self, ctx: &mut KanbanContext) -> Result<Outcome> {
        let state = ctx.state_mut();
        let Some(original) = state
            .find_task(&self.column, &self.task)
            .and_then(|t| t.find_subtask(&self.id))
            .cloned()
        else {
            return Ok(Outcome::Unchanged);
        };

        let copy = Subtask::new(state.counters.next_subtask(), original.text)
            .with_completed(original.completed);
        let value = serde_json::to_value(&copy)?;
        let Some(task) = state.find_task_mut(&self.column, &self.task) else {
            return Ok(Outcome::Unchanged);
        };
        place(&mut task.subtasks, copy, Anchor::After(&self.id));
        Ok(Outcome::Applied(value))
    }
}
