//! ToggleSubtask command

use crate::context::KanbanContext;
use crate::error::Result;
use crate::operation::{operation, Execute, Outcome};
use crate::types::{ColumnId, SubtaskId, TaskId};
use serde::{Deserialize, Serialize};

/// Flip a subtask's completed flag.
///
/// This command does not snapshot on its own; the caller decides when to
/// persist (see [`KanbanSession::persist`](crate::KanbanSession::persist)).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToggleSubtask {
    pub column: ColumnId,
    pub task: TaskId,
    pub id: SubtaskId,
}

impl ToggleSubtask {
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

operation!(ToggleSubtask, Toggle, Subtask);

impl Execute for ToggleSubtask {
    fn execute(&self, ctx: &mut KanbanContext) -> Result<Outcome> {
        let Some(subtask) = ctx
            .state_mut()
            .find_task_mut(&self.column, &self.task)
            .and_then(|t| t.find_subtask_mut(&self.id))
        else {
            return Ok(Outcome::Unchanged);
        };
        subtask.completed = !subtask.completed;
        Ok(Outcome::Applied(serde_json::json!({
            "id": subtask.id,
            "completed": subtask.completed,
        })))
    }

    fn persists(&self) -> bool {
        false
    }
}
