//! SortColumn command

use crate::context::KanbanContext;
use crate::error::Result;
use crate::operation::{operation, Execute, Outcome};
use crate::types::{ColumnId, Task};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// How to order a column's tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortMode {
    /// Text ascending, ignoring case
    #[serde(rename = "name-az")]
    NameAz,
    /// Newest `created_at` first
    #[serde(rename = "date-new")]
    DateNew,
}

impl SortMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NameAz => "name-az",
            Self::DateNew => "date-new",
        }
    }

    fn compare(self, a: &Task, b: &Task) -> Ordering {
        match self {
            Self::NameAz => a
                .text
                .to_lowercase()
                .cmp(&b.text.to_lowercase()),
            Self::DateNew => b.created_at.cmp(&a.created_at),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "name-az" => Ok(Self::NameAz),
            "date-new" => Ok(Self::DateNew),
            other => Err(format!("unknown sort mode '{other}'")),
        }
    }
}

/// Reorder a column's tasks in place. Ties keep their relative order.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SortColumn {
    pub id: ColumnId,
    pub mode: SortMode,
}

impl SortColumn {
    pub fn new(id: impl Into<ColumnId>, mode: SortMode) -> Self {
        Self { id: id.into(), mode }
    }
}

operation!(SortColumn, Sort, Column);

impl Execute for SortColumn {
    fn execute(&self, ctx: &mut KanbanContext) -> Result<Outcome> {
        let Some(column) = ctx.state_mut().find_column_mut(&self.id) else {
            return Ok(Outcome::Unchanged);
        };
        column.tasks.sort_by(|a, b| self.mode.compare(a, b));
        Ok(Outcome::Applied(serde_json::json!({
            "id": column.id,
            "mode": self.mode,
            "order": column.tasks.iter().map(|t| &t.id).collect::<Vec<_>>(),
        })))
    }
}
