//! The built-in board a first run starts with

use crate::palette::{task_color, DEFAULT_COLUMN_COLOR};
use crate::types::{
    AppState, Board, BoardId, Column, ColumnId, IdCounters, Subtask, SubtaskId, Task, TaskId,
    Theme,
};

pub const DEFAULT_BOARD_TITLE: &str = "My First Board";

/// Build the seed state: one board, "To Do" and "Done" columns, two sample
/// tasks, and two subtasks under the first task.
///
/// `now` stamps the first task; the second is a second older so a
/// newest-first sort keeps the seed order.
pub fn seed_state(now: i64, theme: Theme) -> AppState {
    let explore = Task::new(TaskId::from("task-1"), "Explore Go-do!", now)
        .with_color(task_color("Blue").unwrap_or_default())
        .with_subtask(Subtask::new(SubtaskId::from("subtask-1"), "Add a list"))
        .with_subtask(Subtask::new(SubtaskId::from("subtask-2"), "Star a card"));

    let dark_mode = Task::new(TaskId::from("task-2"), "Try Dark Mode!", now - 1000)
        .with_color(task_color("Amber").unwrap_or_default())
        .with_starred(true);

    let board = Board::new(BoardId::from("board-1"), DEFAULT_BOARD_TITLE)
        .with_column(
            Column::new(ColumnId::from("col-1"), "To Do")
                .with_width(320)
                .with_color(DEFAULT_COLUMN_COLOR)
                .with_task(explore)
                .with_task(dark_mode),
        )
        .with_column(Column::new(ColumnId::from("col-2"), "Done"));

    AppState {
        current_board_id: Some(board.id.clone()),
        boards: vec![board],
        counters: IdCounters {
            board: 2,
            column: 3,
            task: 3,
            subtask: 3,
        },
        theme,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let state = seed_state(10_000, Theme::Dark);
        let board = state.current_board().unwrap();
        assert_eq!(board.title, "My First Board");
        assert_eq!(board.columns.len(), 2);
        assert_eq!(board.columns[0].title, "To Do");
        assert_eq!(board.columns[0].width, 320);
        assert_eq!(board.columns[1].title, "Done");
        assert_eq!(board.columns[1].width, 300);

        let tasks = &board.columns[0].tasks;
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].color, "#3B82F6");
        assert_eq!(tasks[0].subtasks.len(), 2);
        assert_eq!(tasks[0].subtasks[0].text, "Add a list");
        assert!(tasks[1].is_starred);
        assert_eq!(tasks[1].created_at, 9_000);
    }

    #[test]
    fn test_seed_counters_are_past_seed_ids() {
        let mut state = seed_state(0, Theme::Light);
        let before = state.counters;
        state.reconcile_counters();
        assert_eq!(state.counters, before);
        assert_eq!(state.theme, Theme::Light);
    }
}
