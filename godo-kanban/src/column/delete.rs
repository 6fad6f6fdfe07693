//! DeleteColumn command

use crate::context::KanbanContext;
use crate::error::Result;
use crate::operation::{operation, Execute, Outcome};
use crate::reorder::take;
use crate::types::ColumnId;
use serde::{Deserialize, Serialize};

/// Remove a column along with its tasks and their subtasks
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeleteColumn {
    pub id: ColumnId,
}

impl DeleteColumn {
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self { id: id.into() }
    }
}

operation!(DeleteColumn, Delete, Column);

impl Execute for DeleteColumn {
    fn execute(&self, ctx: &mut KanbanContext) -> Result<Outcome> {
        let Some(board) = ctx.state_mut().board_of_column_mut(&self.id) else {
            return Ok(Outcome::Unchanged);
        };
        let Some((index, column)) = take(&mut board.columns, &self.id) else {
            return Ok(Outcome::Unchanged);
        };
        Ok(Outcome::Applied(serde_json::json!({
            "deleted": true,
            "id": column.id,
            "index": index,
            "tasks_removed": column.tasks.len(),
        })))
    }
}
