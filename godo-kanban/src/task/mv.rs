//! MoveTask command

use crate::context::KanbanContext;
use crate::error::Result;
use crate::operation::{operation, Execute, Outcome};
use crate::reorder::{anchors_to_self, place, take, Anchor};
use crate::types::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};
use tracing::error;

/// Move a task to a position in the same or another column.
///
/// The task is taken out of `from` first and then placed in `to` before
/// `before`, or at the end. Same-column moves therefore never duplicate or
/// drop the task.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MoveTask {
    pub id: TaskId,
    pub from: ColumnId,
    pub to: ColumnId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<TaskId>,
}

impl MoveTask {
    /// Move to the end of `to`
    pub fn to_column(
        id: impl Into<TaskId>,
        from: impl Into<ColumnId>,
        to: impl Into<ColumnId>,
    ) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
            before: None,
        }
    }

    /// Insert in front of `before`
    pub fn before(mut self, before: impl Into<TaskId>) -> Self {
        self.before = Some(before.into());
        self
    }
}

operation!(MoveTask, Move, Task);

impl Execute for MoveTask {
    fn execute(&self, ctx: &mut KanbanContext) -> Result<Outcome> {
        let state = ctx.state_mut();
        let Some(source) = state.find_column_mut(&self.from) else {
            return Ok(Outcome::Unchanged);
        };
        let Some((from_index, task)) = take(&mut source.tasks, &self.id) else {
            return Ok(Outcome::Unchanged);
        };

        let anchor = match &self.before {
            Some(before) => Anchor::Before(before),
            None => Anchor::End,
        };
        let same_column = self.from == self.to;

        let Some(target) = state.find_column_mut(&self.to) else {
            error!(
                "Target column {} not found, putting task {} back",
                self.to, self.id
            );
            if let Some(source) = state.find_column_mut(&self.from) {
                source.tasks.insert(from_index, task);
            }
            return Ok(Outcome::Unchanged);
        };

        let index = if same_column && anchors_to_self(&anchor, &self.id) {
            target.tasks.insert(from_index, task);
            from_index
        } else {
            place(&mut target.tasks, task, anchor)
        };

        Ok(Outcome::Applied(serde_json::json!({
            "id": self.id,
            "from": self.from,
            "to": self.to,
            "index": index,
        })))
    }
}
