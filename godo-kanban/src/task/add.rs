//! AddTask command

use crate::context::KanbanContext;
use crate::error::Result;
use crate::operation::{non_empty, operation, Execute, Outcome};
use crate::types::{ColumnId, Task};
use serde::{Deserialize, Serialize};

/// Append a new task to the bottom of a column
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AddTask {
    pub column: ColumnId,
    /// Card text (required, trimmed)
    pub text: String,
}

impl AddTask {
    pub fn new(column: impl Into<ColumnId>, text: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            text: text.into(),
        }
    }
}

operation!(AddTask, Add, Task);

impl Execute for AddTask {
    fn execute(&self, ctx: &mut KanbanContext) -> Result<Outcome> {
        let Some(text) = non_empty(&self.text) else {
            return Ok(Outcome::Unchanged);
        };
        let now = ctx.now();
        let state = ctx.state_mut();
        if state.find_column(&self.column).is_none() {
            return Ok(Outcome::Unchanged);
        }

        let task = Task::new(state.counters.next_task(), text, now);
        let value = serde_json::to_value(&task)?;
        if let Some(column) = state.find_column_mut(&self.column) {
            column.tasks.push(task);
        }
        Ok(Outcome::Applied(value))
    }
}
