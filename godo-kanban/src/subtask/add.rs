//! AddSubtask command

use crate::context::KanbanContext;
use crate::error::Result;
use crate::operation::{non_empty, operation, Execute, Outcome};
use crate::types::{ColumnId, Subtask, TaskId};
use serde::{Deserialize, Serialize};

/// Append an open subtask to a task
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddSubtask {
    pub column: ColumnId,
    pub task: TaskId,
    pub text: String,
}

impl AddSubtask {
    pub fn new(
        column: impl Into<ColumnId>,
        task: impl Into<TaskId>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            column: column.into(),
            task: task.into(),
            text: text.into(),
        }
    }
}

operation!(AddSubtask, Add, Subtask);

impl Execute for AddSubtask {
    fn execute(&self, ctx: &mut KanbanContext) -> Result<Outcome> {
        let Some(text) = non_empty(&self.text) else {
            return Ok(Outcome::Unchanged);
        };
        let state = ctx.state_mut();
        if state.find_task(&self.column, &self.task).is_none() {
            return Ok(Outcome::Unchanged);
        }

        let subtask = Subtask::new(state.counters.next_subtask(), text);
        let value = serde_json::to_value(&subtask)?;
        if let Some(task) = state.find_task_mut(&self.column, &self.task) {
            task.subtasks.push(subtask);
        }
        Ok(Outcome::Applied(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    #[test]
    fn test_add_subtask() {
        let mut ctx = test_support::seeded();

        let result = AddSubtask::new("col-1", "task-2", " pick a theme ")
            .execute(&mut ctx)
            .unwrap();

        let value = result.value().unwrap();
        assert_eq!(value["id"], "subtask-3");
        assert_eq!(value["text"], "pick a theme");
        assert_eq!(value["completed"], false);

        let task = ctx
            .state()
            .find_task(&test_support::todo(), &TaskId::from("task-2"))
            .unwrap();
        assert_eq!(task.subtasks.len(), 1);
    }

    #[test]
    fn test_add_subtask_blank_is_noop() {
        let mut ctx = test_support::seeded();
        let result = AddSubtask::new("col-1", "task-1", "").execute(&mut ctx).unwrap();
        assert_eq!(result, Outcome::Unchanged);
        assert_eq!(ctx.state().subtask_ids().len(), 2);
    }

    #[test]
    fn test_add_subtask_missing_task_keeps_counter() {
        let mut ctx = test_support::seeded();
        let result = AddSubtask::new("col-2", "task-1", "x").execute(&mut ctx).unwrap();
        assert_eq!(result, Outcome::Unchanged);
        assert_eq!(ctx.state().counters.subtask, 3);
    }
}
