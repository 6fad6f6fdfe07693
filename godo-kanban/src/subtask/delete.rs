//! DeleteSubtask command

use crate::context::KanbanContext;
use crate::error::Result;
use crate::operation::{operation, Execute, Outcome};
use crate::reorder::take;
use crate::types::{ColumnId, SubtaskId, TaskId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeleteSubtask {
    pub column: ColumnId,
    pub task: TaskId,
    pub id: SubtaskId,
}

impl DeleteSubtask {
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

operation!(DeleteSubtask, Delete, Subtask);

impl Execute for DeleteSubtask {
    fn execute(&self, ctx: &mut KanbanContext) -> Result<Outcome> {
        let Some(task) = ctx.state_mut().find_task_mut(&self.column, &self.task) else {
            return Ok(Outcome::Unchanged);
        };
        let Some((index, subtask)) = take(&mut task.subtasks, &self.id) else {
            return Ok(Outcome::Unchanged);
        };
        Ok(Outcome::Applied(serde_json::json!({
            "deleted": true,
            "id": subtask.id,
            "index": index,
        })))
    }
}
