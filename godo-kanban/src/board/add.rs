//! AddBoard command

use crate::context::KanbanContext;
use crate::error::Result;
use crate::operation::{non_empty, operation, Execute, Outcome};
use crate::types::{Board, Column, DEFAULT_COLUMN_TITLE};
use serde::{Deserialize, Serialize};

/// Create a board with a single "To Do" column and make it current
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddBoard {
    /// The board title (required, trimmed)
    pub title: String,
}

impl AddBoard {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

operation!(AddBoard, Add, Board);

impl Execute for AddBoard {
    fn execute(&self, ctx: &mut KanbanContext) -> Result<Outcome> {
        let Some(title) = non_empty(&self.title) else {
            return Ok(Outcome::Unchanged);
        };

        let state = ctx.state_mut();
        let board_id = state.counters.next_board();
        let column = Column::new(state.counters.next_column(), DEFAULT_COLUMN_TITLE);
        let board = Board::new(board_id.clone(), title).with_column(column);

        let value = serde_json::to_value(&board)?;
        state.boards.push(board);
        state.current_board_id = Some(board_id);
        Ok(Outcome::Applied(value))
    }
}
