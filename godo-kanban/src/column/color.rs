//! SetColumnColor command

use crate::context::KanbanContext;
use crate::error::Result;
use crate::operation::{operation, Execute, Outcome};
use crate::types::ColumnId;
use serde::{Deserialize, Serialize};

/// Set a column's color.
///
/// The value is stored as given even when it is not a palette color;
/// rendering falls back to the default entry for values it does not know.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SetColumnColor {
    pub id: ColumnId,
    pub color: String,
}

impl SetColumnColor {
    pub fn new(id: impl Into<ColumnId>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            color: color.into(),
        }
    }
}

operation!(SetColumnColor, Color, Column);

impl Execute for SetColumnColor {
    fn execute(&self, ctx: &mut KanbanContext) -> Result<Outcome> {
        let Some(column) = ctx.state_mut().find_column_mut(&self.id) else {
            return Ok(Outcome::Unchanged);
        };
        column.color = self.color.clone();
        Ok(Outcome::Applied(serde_json::json!({
            "id": column.id,
            "color": column.color,
        })))
    }
}
