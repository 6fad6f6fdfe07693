//! RenameColumn command

use crate::context::KanbanContext;
use crate::error::Result;
use crate::operation::{non_empty, operation, Execute, Outcome};
use crate::types::ColumnId;
use serde::{Deserialize, Serialize};

/// Replace a column's title; blank titles keep the old one
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RenameColumn {
    pub id: ColumnId,
    pub title: String,
}

impl RenameColumn {
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

operation!(RenameColumn, Rename, Column);

impl Execute for RenameColumn {
    fn execute(&self, ctx: &mut KanbanContext) -> Result<Outcome> {
        let Some(title) = non_empty(&self.title) else {
            return Ok(Outcome::Unchanged);
        };
        let Some(column) = ctx.state_mut().find_column_mut(&self.id) else {
            return Ok(Outcome::Unchanged);
        };
        column.title = title.to_string();
        Ok(Outcome::Applied(serde_json::json!({
            "id": column.id,
            "title": column.title,
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support;

    #[test]
    fn test_rename_column() {
        let mut ctx = test_support::seeded();
        RenameColumn::new("col-2", "Shipped").execute(&mut ctx).unwrap();
        let column = ctx.state().find_column(&test_support::done()).unwrap();
        assert_eq!(column.title, "Shipped");
    }

    #[test]
    fn test_rename_column_blank_keeps_title() {
        let mut ctx = test_support::seeded();
        let result = RenameColumn::new("col-2", "   ").execute(&mut ctx).unwrap();
        assert_eq!(result, Outcome::Unchanged);
        let column = ctx.state().find_column(&test_support::done()).unwrap();
        assert_eq!(column.title, "Done");
    }
}
