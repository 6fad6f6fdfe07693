//! DeleteBoard command

use crate::context::KanbanContext;
use crate::error::Result;
use crate::operation::{operation, Execute, Outcome};
use crate::reorder::take;
use crate::types::BoardId;
use serde::{Deserialize, Serialize};

/// Remove a board with everything it owns.
///
/// Deleting the current board moves the selection to the first remaining
/// board, or clears it when none remain.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeleteBoard {
    pub id: BoardId,
}

impl DeleteBoard {
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self { id: id.into() }
    }
}

operation!(DeleteBoard, Delete, Board);

impl Execute for DeleteBoard {
    fn execute(&self, ctx: &mut KanbanContext) -> Result<Outcome> {
        let state = ctx.state_mut();
        let Some((_, board)) = take(&mut state.boards, &self.id) else {
            return Ok(Outcome::Unchanged);
        };
        state.repair_current_board();

        Ok(Outcome::Applied(serde_json::json!({
            "deleted": true,
            "id": board.id,
            "columns_removed": board.columns.len(),
            "tasks_removed": board.task_count(),
            "current_board_id": state.current_board_id,
        })))
    }
}
