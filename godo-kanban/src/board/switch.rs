//! SwitchBoard command

use crate::context::KanbanContext;
use crate::error::Result;
use crate::operation::{operation, Execute, Outcome};
use crate::types::BoardId;
use serde::{Deserialize, Serialize};

/// Make another board the current one
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SwitchBoard {
    pub id: BoardId,
}

impl SwitchBoard {
    pub fn new(id: impl Into<BoardId>) -> Self {
        Self { id: id.into() }
    }
}

operation!(SwitchBoard, Switch, Board);

impl Execute for SwitchBoard {
    fn execute(&self, ctx: &mut KanbanContext) -> Result<Outcome> {
        let state = ctx.state_mut();
        if state.find_board(&self.id).is_none() {
            return Ok(Outcome::Unchanged);
        }
        state.current_board_id = Some(self.id.clone());
        Ok(Outcome::Applied(serde_json::json!({ "current_board_id": self.id })))
    }
}
