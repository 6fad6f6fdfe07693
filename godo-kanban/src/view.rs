//! The current-board projection handed to the presentation layer.
//!
//! A view is rebuilt from the model after every mutation; it carries the
//! colors a renderer needs already resolved for the active theme.

use crate::palette::{column_background, contrasting_text_color, header_border_color};
use crate::types::{AppState, Board, BoardId, Column, ColumnId, Subtask, Task, TaskId, Theme};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardView {
    pub theme: Theme,
    /// Every board, for the sidebar
    pub boards: Vec<BoardSummary>,
    /// The current board, or `None` when there are no boards
    pub current: Option<CurrentBoard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardSummary {
    pub id: BoardId,
    pub title: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentBoard {
    pub id: BoardId,
    pub title: String,
    pub columns: Vec<ColumnView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnView {
    pub id: ColumnId,
    pub title: String,
    pub width: u32,
    /// Stored color reference
    pub color: String,
    /// Resolved background for the theme
    pub background: &'static str,
    pub header_text: &'static str,
    pub header_border: &'static str,
    pub tasks: Vec<TaskView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskView {
    pub id: TaskId,
    pub text: String,
    pub color: String,
    /// Readable text color on `color`, also used for subtask text
    pub text_color: &'static str,
    pub is_starred: bool,
    pub created_at: i64,
    pub completed: usize,
    pub total: usize,
    pub subtasks: Vec<Subtask>,
}

impl BoardView {
    pub fn build(state: &AppState) -> Self {
        let theme = state.theme;
        let boards = state
            .boards
            .iter()
            .map(|b| BoardSummary {
                id: b.id.clone(),
                title: b.title.clone(),
                active: state.current_board_id.as_ref() == Some(&b.id),
            })
            .collect();

        Self {
            theme,
            boards,
            current: state.current_board().map(|b| current_board(b, theme)),
        }
    }
}

fn current_board(board: &Board, theme: Theme) -> CurrentBoard {
    CurrentBoard {
        id: board.id.clone(),
        title: board.title.clone(),
        columns: board.columns.iter().map(|c| column_view(c, theme)).collect(),
    }
}

fn column_view(column: &Column, theme: Theme) -> ColumnView {
    let background = column_background(&column.color, theme);
    let header_text = contrasting_text_color(background, theme);
    ColumnView {
        id: column.id.clone(),
        title: column.title.clone(),
        width: column.width,
        color: column.color.clone(),
        background,
        header_text,
        header_border: header_border_color(header_text),
        tasks: column.tasks.iter().map(|t| task_view(t, theme)).collect(),
    }
}

fn task_view(task: &Task, theme: Theme) -> TaskView {
    let (completed, total) = task.progress();
    TaskView {
        id: task.id.clone(),
        text: task.text.clone(),
        color: task.color.clone(),
        text_color: contrasting_text_color(&task.color, theme),
        is_starred: task.is_starred,
        created_at: task.created_at,
        completed,
        total,
        subtasks: task.subtasks.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::AddBoard;
    use crate::operation::Execute;
    use crate::palette::{DARK_TEXT, LIGHT_TEXT};
    use crate::task::SetTaskColor;
    use crate::test_support;

    #[test]
    fn test_dark_view_of_seed() {
        let ctx = test_support::seeded();
        let view = BoardView::build(ctx.state());

        assert_eq!(view.boards.len(), 1);
        assert!(view.boards[0].active);

        let board = view.current.unwrap();
        assert_eq!(board.title, "My First Board");
        let todo = &board.columns[0];
        assert_eq!(todo.background, "#2d3748");
        assert_eq!(todo.header_text, LIGHT_TEXT);
        assert_eq!(todo.header_border, "#4b5563");
        assert_eq!(todo.tasks[0].total, 2);
        assert_eq!(todo.tasks[0].completed, 0);
    }

    #[test]
    fn test_light_view_uses_light_variants() {
        let mut ctx = test_support::seeded();
        ctx.state_mut().theme = Theme::Light;

        let view = BoardView::build(ctx.state());

        let todo = &view.current.unwrap().columns[0];
        assert_eq!(todo.background, "#e5e7eb");
        assert_eq!(todo.header_text, DARK_TEXT);
        assert_eq!(todo.header_border, "#d1d5db");
    }

    #[test]
    fn test_task_text_contrasts_with_card() {
        let ctx = test_support::seeded();
        let view = BoardView::build(ctx.state());
        let tasks = &view.current.unwrap().columns[0].tasks;
        // Blue is dark enough for light text, Amber is not
        assert_eq!(tasks[0].text_color, LIGHT_TEXT);
        assert_eq!(tasks[1].text_color, DARK_TEXT);
    }

    #[test]
    fn test_non_ascii_task_color_renders() {
        let mut ctx = test_support::seeded();
        SetTaskColor::new("col-1", "task-1", "#aé1234")
            .execute(&mut ctx)
            .unwrap();

        let view = BoardView::build(ctx.state());

        let task = &view.current.unwrap().columns[0].tasks[0];
        assert_eq!(task.color, "#aé1234");
        assert_eq!(task.text_color, LIGHT_TEXT);
    }

    #[test]
    fn test_sidebar_marks_only_current() {
        let mut ctx = test_support::seeded();
        AddBoard::new("Second").execute(&mut ctx).unwrap();

        let view = BoardView::build(ctx.state());

        let active: Vec<bool> = view.boards.iter().map(|b| b.active).collect();
        assert_eq!(active, vec![false, true]);
        assert_eq!(view.current.unwrap().columns.len(), 1);
    }

    #[test]
    fn test_empty_state_has_no_current_board() {
        let view = BoardView::build(test_support::empty().state());
        assert!(view.boards.is_empty());
        assert!(view.current.is_none());
    }
}
