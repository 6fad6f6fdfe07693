//! Pointer geometry for picking an insertion point

use crate::types::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// Extent of a rendered item along the drag axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemBox<K> {
    pub id: K,
    /// Top edge for tasks, left edge for columns
    pub start: f64,
    /// Height for tasks, width for columns
    pub size: f64,
}

impl<K> ItemBox<K> {
    pub fn new(id: impl Into<K>, start: f64, size: f64) -> Self {
        Self {
            id: id.into(),
            start,
            size,
        }
    }

    pub fn center(&self) -> f64 {
        self.start + self.size / 2.0
    }
}

/// A pointer position over a column's task list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDrop {
    pub target_column: ColumnId,
    pub pointer_y: f64,
    /// Task directly under the pointer, if any
    #[serde(default)]
    pub hovered_task: Option<TaskId>,
    /// Boxes of the tasks rendered in the target column, in display order
    #[serde(default)]
    pub task_boxes: Vec<ItemBox<TaskId>>,
}

impl TaskDrop {
    pub fn new(target_column: impl Into<ColumnId>, pointer_y: f64) -> Self {
        Self {
            target_column: target_column.into(),
            pointer_y,
            hovered_task: None,
            task_boxes: Vec::new(),
        }
    }

    pub fn hovering(mut self, task: impl Into<TaskId>) -> Self {
        self.hovered_task = Some(task.into());
        self
    }

    pub fn with_box(mut self, task: impl Into<TaskId>, top: f64, height: f64) -> Self {
        self.task_boxes.push(ItemBox::new(task, top, height));
        self
    }
}

/// A pointer position over the board's column strip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDrop {
    pub pointer_x: f64,
    /// Boxes of the board's columns, in display order
    #[serde(default)]
    pub column_boxes: Vec<ItemBox<ColumnId>>,
}

impl ColumnDrop {
    pub fn new(pointer_x: f64) -> Self {
        Self {
            pointer_x,
            column_boxes: Vec::new(),
        }
    }

    pub fn with_box(mut self, column: impl Into<ColumnId>, left: f64, width: f64) -> Self {
        self.column_boxes.push(ItemBox::new(column, left, width));
        self
    }
}

/// The task the dragged one should land in front of; `None` means the end.
///
/// Over a task, the upper half inserts before it and the lower half before
/// its next sibling. Elsewhere, the first task whose midpoint is below the
/// pointer wins. The dragged task never counts as a sibling.
pub fn task_drop_target(dragged: &TaskId, drop: &TaskDrop) -> Option<TaskId> {
    let siblings: Vec<&ItemBox<TaskId>> = drop
        .task_boxes
        .iter()
        .filter(|b| &b.id != dragged)
        .collect();

    let hovered = drop
        .hovered_task
        .as_ref()
        .filter(|h| *h != dragged)
        .and_then(|h| siblings.iter().position(|b| &b.id == h));

    let target = match hovered {
        Some(i) if drop.pointer_y < siblings[i].center() => Some(siblings[i]),
        Some(i) => siblings.get(i + 1).copied(),
        None => siblings
            .iter()
            .copied()
            .find(|b| drop.pointer_y < b.center()),
    };
    target.map(|b| b.id.clone())
}

/// The column the dragged one should land in front of; `None` means the end.
///
/// Among the other columns whose center lies right of the pointer, the one
/// with the nearest center wins. Ties go to the earlier column.
pub fn column_drop_target(dragged: &ColumnId, drop: &ColumnDrop) -> Option<ColumnId> {
    drop.column_boxes
        .iter()
        .filter(|b| &b.id != dragged)
        .map(|b| (drop.pointer_x - b.center(), b))
        .filter(|(offset, _)| *offset < 0.0)
        .fold(None, |best: Option<(f64, &ItemBox<ColumnId>)>, candidate| match best {
            Some((offset, _)) if offset >= candidate.0 => best,
            _ => Some(candidate),
        })
        .map(|(_, b)| b.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Three 100px cards stacked with no gaps: centers at 50, 150, 250
    fn list(pointer_y: f64) -> TaskDrop {
        TaskDrop::new("col-1", pointer_y)
            .with_box("task-1", 0.0, 100.0)
            .with_box("task-2", 100.0, 100.0)
            .with_box("task-3", 200.0, 100.0)
    }

    fn dragged(id: &str) -> TaskId {
        TaskId::from(id)
    }

    #[test]
    fn test_hover_upper_half_inserts_before() {
        let drop = list(120.0).hovering("task-2");
        assert_eq!(task_drop_target(&dragged("task-9"), &drop), Some(dragged("task-2")));
    }

    #[test]
    fn test_hover_lower_half_inserts_before_next() {
        let drop = list(180.0).hovering("task-2");
        assert_eq!(task_drop_target(&dragged("task-9"), &drop), Some(dragged("task-3")));
    }

    #[test]
    fn test_hover_lower_half_of_last_appends() {
        let drop = list(290.0).hovering("task-3");
        assert_eq!(task_drop_target(&dragged("task-9"), &drop), None);
    }

    #[test]
    fn test_next_sibling_skips_dragged_task() {
        let drop = list(80.0).hovering("task-1");
        assert_eq!(task_drop_target(&dragged("task-2"), &drop), Some(dragged("task-3")));
    }

    #[test]
    fn test_no_hover_uses_first_midpoint_below() {
        assert_eq!(task_drop_target(&dragged("task-9"), &list(10.0)), Some(dragged("task-1")));
        assert_eq!(task_drop_target(&dragged("task-9"), &list(160.0)), Some(dragged("task-3")));
        assert_eq!(task_drop_target(&dragged("task-9"), &list(260.0)), None);
    }

    #[test]
    fn test_hovering_dragged_task_falls_back_to_scan() {
        let drop = list(60.0).hovering("task-1");
        assert_eq!(task_drop_target(&dragged("task-1"), &drop), Some(dragged("task-2")));
    }

    #[test]
    fn test_empty_column_appends() {
        let drop = TaskDrop::new("col-2", 40.0);
        assert_eq!(task_drop_target(&dragged("task-1"), &drop), None);
    }

    // Columns 300 wide with 20px gaps: centers at 150, 470, 790
    fn strip(pointer_x: f64) -> ColumnDrop {
        ColumnDrop::new(pointer_x)
            .with_box("col-1", 0.0, 300.0)
            .with_box("col-2", 320.0, 300.0)
            .with_box("col-3", 640.0, 300.0)
    }

    #[test]
    fn test_column_target_nearest_center_to_the_right() {
        let col = |id: &str| ColumnId::from(id);
        assert_eq!(column_drop_target(&col("col-9"), &strip(100.0)), Some(col("col-1")));
        assert_eq!(column_drop_target(&col("col-9"), &strip(200.0)), Some(col("col-2")));
        assert_eq!(column_drop_target(&col("col-9"), &strip(500.0)), Some(col("col-3")));
        assert_eq!(column_drop_target(&col("col-9"), &strip(900.0)), None);
    }

    #[test]
    fn test_column_target_ignores_dragged_column() {
        let col = |id: &str| ColumnId::from(id);
        assert_eq!(column_drop_target(&col("col-2"), &strip(200.0)), Some(col("col-3")));
        assert_eq!(column_drop_target(&col("col-3"), &strip(700.0)), None);
    }

    #[test]
    fn test_pointer_on_center_is_not_left_of_it() {
        let col = |id: &str| ColumnId::from(id);
        assert_eq!(column_drop_target(&col("col-9"), &strip(150.0)), Some(col("col-2")));
    }
}
