//! AddColumn command

use crate::context::KanbanContext;
use crate::error::Result;
use crate::operation::{non_empty, operation, Execute, Outcome};
use crate::types::{BoardId, Column};
use serde::{Deserialize, Serialize};

/// Append an empty column to a board
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddColumn {
    pub board_id: BoardId,
    pub title: String,
}

impl AddColumn {
    pub fn new(board_id: impl Into<BoardId>, title: impl Into<String>) -> Self {
        Self {
            board_id: board_id.into(),
            title: title.into(),
        }
    }
}

operation!(AddColumn, Add, Column);

impl Execute for AddColumn {
    fn execute(&self, ctx: &mut KanbanContext) -> Result<Outcome> {
        let Some(title) = non_empty(&self.title) else {
            return Ok(Outcome::Unchanged);
        };
        let state = ctx.state_mut();
        if state.find_board(&self.board_id).is_none() {
            return Ok(Outcome::Unchanged);
        }

        // Mint only once the board is known so a miss never burns an id
        let column = Column::new(state.counters.next_column(), title);
        let value = serde_json::to_value(&column)?;
        if let Some(board) = state.find_board_mut(&self.board_id) {
            board.columns.push(column);
        }
        Ok(Outcome::Applied(value))
    }
}
