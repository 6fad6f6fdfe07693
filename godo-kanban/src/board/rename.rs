//! RenameBoard command

use crate::context::KanbanContext;
use crate::error::Result;
use crate::operation::{non_empty, operation, Execute, Outcome};
use crate::types::BoardId;
use serde::{Deserialize, Serialize};

/// Replace a board's title; blank titles keep the old one
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RenameBoard {
    pub id: BoardId,
    pub title: String,
}

impl RenameBoard {
    pub fn new(id: impl Into<BoardId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

operation!(RenameBoard, Rename, Board);

impl Execute for RenameBoard {
    fn execute(&self, ctx: &mut KanbanContext) -> Result<Outcome> {
        let Some(title) = non_empty(&self.title) else {
            return Ok(Outcome::Unchanged);
        };
        let Some(board) = ctx.state_mut().find_board_mut(&self.id) else {
            return Ok(Outcome::Unchanged);
        };
        board.title = title.to_string();
        Ok(Outcome::Applied(serde_json::json!({
            "id": board.id,
            "title": board.title,
        })))
    }
}
