//! MoveColumn command

use crate::context::KanbanContext;
use crate::error::Result;
use crate::operation::{operation, Execute, Outcome};
use crate::reorder::{move_within, Anchor};
use crate::types::ColumnId;
use serde::{Deserialize, Serialize};

/// Reposition a column on its board: before `before`, or at the end.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MoveColumn {
    pub id: ColumnId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<ColumnId>,
}

impl MoveColumn {
    /// Move the column to the end of its board
    pub fn to_end(id: impl Into<ColumnId>) -> Self {
        Self {
            id: id.into(),
            before: None,
        }
    }

    /// Move the column directly in front of `before`
    pub fn before(id: impl Into<ColumnId>, before: impl Into<ColumnId>) -> Self {
        Self {
            id: id.into(),
            before: Some(before.into()),
        }
    }
}

operation!(MoveColumn, Move, Column);

impl Execute for MoveColumn {
    fn execute(&self, ctx: &mut KanbanContext) -> Result<Outcome> {
        let Some(board) = ctx.state_mut().board_of_column_mut(&self.id) else {
            return Ok(Outcome::Unchanged);
        };
        let anchor = match &self.before {
            Some(before) => Anchor::Before(before),
            None => Anchor::End,
        };
        let Some(index) = move_within(&mut board.columns, &self.id, anchor) else {
            return Ok(Outcome::Unchanged);
        };
        Ok(Outcome::Applied(serde_json::json!({
            "id": self.id,
            "index": index,
        })))
    }
}
