//! ToggleStar command

use crate::context::KanbanContext;
use crate::error::Result;
use crate::operation::{operation, Execute, Outcome};
use crate::types::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// Flip a task's star
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToggleStar {
    pub column: ColumnId,
    pub id: TaskId,
}

impl ToggleStar {
    pub fn new(column: impl Into<ColumnId>, id: impl Into<TaskId>) -> Self {
        Self {
            column: column.into(),
            id: id.into(),
        }
    }
}

operation!(ToggleStar, Star, Task);

impl Execute for ToggleStar {
    fn execute(&self, ctx: &mut KanbanContext) -> Result<Outcome> {
        let Some(task) = ctx.state_mut().find_task_mut(&self.column, &self.id) else {
            return Ok(Outcome::Unchanged);
        };
        task.is_starred = !task.is_starred;
        Ok(Outcome::Applied(serde_json::json!({
            "id": task.id,
            "isStarred": task.is_starred,
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    #[test]
    fn test_toggle_star_twice() {
        let mut ctx = test_support::seeded();
        let cmd = ToggleStar::new("col-1", "task-1");

        let first = cmd.execute(&mut ctx).unwrap();
        assert_eq!(first.value().unwrap()["isStarred"], true);

        let second = cmd.execute(&mut ctx).unwrap();
        assert_eq!(second.value().unwrap()["isStarred"], false);
    }

    #[test]
    fn test_toggle_star_op_string() {
        use crate::operation::Operation;
        assert_eq!(ToggleStar::new("col-1", "task-1").op_string(), "star task");
    }
}
