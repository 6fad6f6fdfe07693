//! ClearCompleted command

use crate::context::KanbanContext;
use crate::error::Result;
use crate::operation::{operation, Execute, Outcome};
use crate::types::ColumnId;
use serde::{Deserialize, Serialize};

/// Remove every task whose subtasks are all done.
///
/// Only tasks with at least one subtask count as complete. A task with no
/// subtasks is never cleared.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClearCompleted {
    pub id: ColumnId,
}

impl ClearCompleted {
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self { id: id.into() }
    }
}

operation!(ClearCompleted, Clear, Column);

impl Execute for ClearCompleted {
    fn execute(&self, ctx: &mut KanbanContext) -> Result<Outcome> {
        let Some(column) = ctx.state_mut().find_column_mut(&self.id) else {
            return Ok(Outcome::Unchanged);
        };
        let (cleared, kept) = std::mem::take(&mut column.tasks)
            .into_iter()
            .partition::<Vec<_>, _>(|t| t.is_complete());
        column.tasks = kept;
        Ok(Outcome::Applied(serde_json::json!({
            "id": column.id,
            "cleared": cleared.iter().map(|t| &t.id).collect::<Vec<_>>(),
        })))
    }
}
