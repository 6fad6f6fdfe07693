//! DeleteTask command

use crate::context::KanbanContext;
use crate::error::Result;
use crate::operation::{operation, Execute, Outcome};
use crate::reorder::take;
use crate::types::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// Remove a task and its subtasks
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeleteTask {
    pub column: ColumnId,
    pub id: TaskId,
}

impl DeleteTask {
    pub fn new(column: impl Into<ColumnId>, id: impl Into<TaskId>) -> Self {
        Self {
            column: column.into(),
            id: id.into(),
        }
    }
}

operation!(DeleteTask, Delete, Task);

impl Execute for DeleteTask {
    fn execute(&self, ctx: &mut KanbanContext) -> Result<Outcome> {
        let Some(column) = ctx.state_mut().find_column_mut(&self.column) else {
            return Ok(Outcome::Unchanged);
        };
        let Some((index, task)) = take(&mut column.tasks, &self.id) else {
            return Ok(Outcome::Unchanged);
        };
        Ok(Outcome::Applied(serde_json::json!({
            "deleted": true,
            "id": task.id,
            "index": index,
            "subtasks_removed": task.subtasks.len(),
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    #[test]
    fn test_delete_task() {
        let mut ctx = test_support::seeded();

        let result = DeleteTask::new("col-1", "task-1").execute(&mut ctx).unwrap();

        assert_eq!(result.value().unwrap()["subtasks_removed"], 2);
        assert_eq!(ctx.state().task_ids(), vec![TaskId::from("task-2")]);
        assert!(ctx.state().subtask_ids().is_empty());
    }

    #[test]
    fn test_delete_task_wrong_column_is_noop() {
        let mut ctx = test_support::seeded();
        let result = DeleteTask::new("col-2", "task-1").execute(&mut ctx).unwrap();
        assert_eq!(result, Outcome::Unchanged);
        assert_eq!(ctx.state().task_ids().len(), 2);
    }
}
