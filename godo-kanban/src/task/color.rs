//! SetTaskColor command

use crate::context::KanbanContext;
use crate::error::Result;
use crate::operation::{operation, Execute, Outcome};
use crate::types::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// Set a task's color
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SetTaskColor {
    pub column: ColumnId,
    pub id: TaskId,
    pub color: String,
}

impl SetTaskColor {
    pub fn new(
        column: impl Into<ColumnId>,
        id: impl Into<TaskId>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            column: column.into(),
            id: id.into(),
            color: color.into(),
        }
    }
}

operation!(SetTaskColor, Color, Task);

impl Execute for SetTaskColor {
    fn execute(&self, ctx: &mut KanbanContext) -> Result<Outcome> {
        let Some(task) = ctx.state_mut().find_task_mut(&self.column, &self.id) else {
            return Ok(Outcome::Unchanged);
        };
        task.color = self.color.clone();
        Ok(Outcome::Applied(serde_json::json!({
            "id": task.id,
            "color": task.color,
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::task_color;
    use crate::test_support;

    #[test]
    fn test_set_task_color() {
        let mut ctx = test_support::seeded();
        let red = task_color("Red").unwrap();

        SetTaskColor::new("col-1", "task-2", red).execute(&mut ctx).unwrap();

        let task = ctx
            .state()
            .find_task(&test_support::todo(), &TaskId::from("task-2"))
            .unwrap();
        assert_eq!(task.color, "#c24226");
    }

    #[test]
    fn test_set_task_color_missing_task() {
        let mut ctx = test_support::seeded();
        let result = SetTaskColor::new("col-1", "task-9", "#000000")
            .execute(&mut ctx)
            .unwrap();
        assert_eq!(result, Outcome::Unchanged);
    }
}
