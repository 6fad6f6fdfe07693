//! The drag state machine: Idle, then a task or column drag, then Idle again

use super::geometry::{column_drop_target, task_drop_target, ColumnDrop, TaskDrop};
use crate::column::MoveColumn;
use crate::error::{KanbanError, Result};
use crate::task::MoveTask;
use crate::types::{AppState, ColumnId, TaskId};
use serde::{Deserialize, Serialize};
use tracing::error;

/// Where on a task card the pointer went down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskGrip {
    /// The card itself
    Body,
    /// An input, button, subtask control or the star
    Control,
}

/// Where on a column the pointer went down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnGrip {
    /// The header strip
    Header,
    /// The header's menu button
    Menu,
    /// The task list area
    Body,
}

/// The single drag in flight, if any
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DragSession {
    #[default]
    Idle,
    Task {
        task_id: TaskId,
        source_column: ColumnId,
    },
    Column {
        column_id: ColumnId,
    },
}

impl DragSession {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    fn active_kind(&self) -> Option<&'static str> {
        match self {
            Self::Idle => None,
            Self::Task { .. } => Some("task"),
            Self::Column { .. } => Some("column"),
        }
    }

    /// Pick up a task
    pub fn begin_task(
        &mut self,
        task_id: impl Into<TaskId>,
        source_column: impl Into<ColumnId>,
        grip: TaskGrip,
    ) -> Result<()> {
        if let Some(active) = self.active_kind() {
            return Err(KanbanError::DragInProgress { active });
        }
        if grip == TaskGrip::Control {
            return Err(KanbanError::NotDraggable {
                origin: "a task control",
            });
        }
        *self = Self::Task {
            task_id: task_id.into(),
            source_column: source_column.into(),
        };
        Ok(())
    }

    /// Pick up a column by its header
    pub fn begin_column(&mut self, column_id: impl Into<ColumnId>, grip: ColumnGrip) -> Result<()> {
        if let Some(active) = self.active_kind() {
            return Err(KanbanError::DragInProgress { active });
        }
        match grip {
            ColumnGrip::Header => {}
            ColumnGrip::Menu => {
                return Err(KanbanError::NotDraggable {
                    origin: "the column menu",
                })
            }
            ColumnGrip::Body => {
                return Err(KanbanError::NotDraggable {
                    origin: "outside the column header",
                })
            }
        }
        *self = Self::Column {
            column_id: column_id.into(),
        };
        Ok(())
    }

    /// Abandon whatever drag is in flight
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    /// Where the dragged task would land if dropped now
    pub fn task_candidate(&self, drop: &TaskDrop) -> Result<Option<TaskId>> {
        match self {
            Self::Task { task_id, .. } => Ok(task_drop_target(task_id, drop)),
            _ => Err(KanbanError::NoActiveDrag { expected: "task" }),
        }
    }

    /// Where the dragged column would land if dropped now
    pub fn column_candidate(&self, drop: &ColumnDrop) -> Result<Option<ColumnId>> {
        match self {
            Self::Column { column_id } => Ok(column_drop_target(column_id, drop)),
            _ => Err(KanbanError::NoActiveDrag { expected: "column" }),
        }
    }

    /// End a task drag over `drop`.
    ///
    /// The session is Idle afterwards no matter what. Returns the move to
    /// apply, or `None` when the dragged task is no longer where the drag
    /// started.
    pub fn drop_task(&mut self, state: &AppState, drop: &TaskDrop) -> Result<Option<MoveTask>> {
        let Self::Task {
            task_id,
            source_column,
        } = std::mem::take(self)
        else {
            return Err(KanbanError::NoActiveDrag { expected: "task" });
        };

        if state.find_task(&source_column, &task_id).is_none() {
            error!(
                "Dragged task {} not found in column {}, dropping nothing",
                task_id, source_column
            );
            return Ok(None);
        }

        let mut command = MoveTask::to_column(
            task_id.clone(),
            source_column,
            drop.target_column.clone(),
        );
        command.before = task_drop_target(&task_id, drop);
        Ok(Some(command))
    }

    /// End a column drag over `drop`. The session is Idle afterwards.
    pub fn drop_column(&mut self, state: &AppState, drop: &ColumnDrop) -> Result<Option<MoveColumn>> {
        let Self::Column { column_id } = std::mem::take(self) else {
            return Err(KanbanError::NoActiveDrag { expected: "column" });
        };

        if state.find_column(&column_id).is_none() {
            error!("Dragged column {} not found, dropping nothing", column_id);
            return Ok(None);
        }

        let command = match column_drop_target(&column_id, drop) {
            Some(before) => MoveColumn::before(column_id, before),
            None => MoveColumn::to_end(column_id),
        };
        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::seed_state;
    use crate::types::Theme;

    #[test]
    fn test_begin_task_then_column_is_rejected() {
        let mut drag = DragSession::default();
        drag.begin_task("task-1", "col-1", TaskGrip::Body).unwrap();

        let err = drag.begin_column("col-2", ColumnGrip::Header).unwrap_err();

        assert!(matches!(err, KanbanError::DragInProgress { active: "task" }));
        assert!(matches!(drag, DragSession::Task { .. }));
    }

    #[test]
    fn test_begin_column_then_task_is_rejected() {
        let mut drag = DragSession::default();
        drag.begin_column("col-1", ColumnGrip::Header).unwrap();
        let err = drag.begin_task("task-1", "col-1", TaskGrip::Body).unwrap_err();
        assert!(matches!(err, KanbanError::DragInProgress { active: "column" }));
    }

    #[test]
    fn test_controls_are_not_grips() {
        let mut drag = DragSession::default();
        assert!(matches!(
            drag.begin_task("task-1", "col-1", TaskGrip::Control),
            Err(KanbanError::NotDraggable { .. })
        ));
        assert!(matches!(
            drag.begin_column("col-1", ColumnGrip::Menu),
            Err(KanbanError::NotDraggable { .. })
        ));
        assert!(drag.is_idle());
    }

    #[test]
    fn test_drop_task_builds_move_and_clears() {
        let state = seed_state(0, Theme::Dark);
        let mut drag = DragSession::default();
        drag.begin_task("task-2", "col-1", TaskGrip::Body).unwrap();
        let drop = TaskDrop::new("col-1", 10.0)
            .hovering("task-1")
            .with_box("task-1", 0.0, 80.0)
            .with_box("task-2", 80.0, 80.0);

        let command = drag.drop_task(&state, &drop).unwrap().unwrap();

        assert!(drag.is_idle());
        assert_eq!(command.id, TaskId::from("task-2"));
        assert_eq!(command.before, Some(TaskId::from("task-1")));
    }

    #[test]
    fn test_drop_stale_task_aborts_and_clears() {
        let state = seed_state(0, Theme::Dark);
        let mut drag = DragSession::default();
        drag.begin_task("task-2", "col-2", TaskGrip::Body).unwrap();

        let command = drag.drop_task(&state, &TaskDrop::new("col-1", 0.0)).unwrap();

        assert!(command.is_none());
        assert!(drag.is_idle());
    }

    #[test]
    fn test_drop_without_drag() {
        let state = seed_state(0, Theme::Dark);
        let mut drag = DragSession::default();
        assert!(matches!(
            drag.drop_column(&state, &ColumnDrop::new(0.0)),
            Err(KanbanError::NoActiveDrag { expected: "column" })
        ));
    }

    #[test]
    fn test_wrong_drop_kind_still_clears() {
        let state = seed_state(0, Theme::Dark);
        let mut drag = DragSession::default();
        drag.begin_column("col-1", ColumnGrip::Header).unwrap();

        assert!(drag.drop_task(&state, &TaskDrop::new("col-1", 0.0)).is_err());
        assert!(drag.is_idle());
    }

    #[test]
    fn test_drop_column_to_end() {
        let state = seed_state(0, Theme::Dark);
        let mut drag = DragSession::default();
        drag.begin_column("col-1", ColumnGrip::Header).unwrap();
        let drop = ColumnDrop::new(900.0)
            .with_box("col-1", 0.0, 320.0)
            .with_box("col-2", 340.0, 300.0);

        let command = drag.drop_column(&state, &drop).unwrap().unwrap();

        assert_eq!(command.before, None);
        assert!(drag.is_idle());
    }

    #[test]
    fn test_candidates_need_matching_drag() {
        let mut drag = DragSession::default();
        assert!(drag.task_candidate(&TaskDrop::new("col-1", 0.0)).is_err());
        drag.begin_column("col-2", ColumnGrip::Header).unwrap();
        let drop = ColumnDrop::new(10.0).with_box("col-1", 0.0, 320.0);
        assert_eq!(drag.column_candidate(&drop).unwrap(), Some(ColumnId::from("col-1")));
        drag.cancel();
        assert!(drag.is_idle());
    }
}
