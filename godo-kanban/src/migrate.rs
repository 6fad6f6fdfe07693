//! Versioned snapshot schema and the migration run once at load.
//!
//! Snapshots written before versioning carry no `schemaVersion`. Every field
//! below the root is optional on the way in; migration backfills the
//! defaults, mints ids for entities that lost theirs, and raises the id
//! counters past every id in use. The output is a fully populated
//! [`AppState`].

use crate::error::{KanbanError, Result};
use crate::palette::{DEFAULT_COLUMN_COLOR, DEFAULT_TASK_COLOR};
use crate::types::{
    AppState, Board, BoardId, Column, ColumnId, IdCounters, Subtask, SubtaskId, Task, TaskId,
    Theme, DEFAULT_COLUMN_WIDTH,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Version written into every new snapshot
pub const SCHEMA_VERSION: u32 = 1;

/// Title given to boards and columns saved without one
pub const UNTITLED: &str = "Untitled";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Versioned<'a> {
    schema_version: u32,
    #[serde(flatten)]
    state: &'a AppState,
}

/// Serialize `state` with the current schema version stamped in
pub fn snapshot(state: &AppState) -> Result<Value> {
    Ok(serde_json::to_value(Versioned {
        schema_version: SCHEMA_VERSION,
        state,
    })?)
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawState {
    schema_version: Option<u32>,
    boards: Option<Vec<RawBoard>>,
    current_board_id: Option<String>,
    next_board_id: Option<u64>,
    next_column_id: Option<u64>,
    next_task_id: Option<u64>,
    #[serde(rename = "nextSubTaskId")]
    next_subtask_id: Option<u64>,
    theme: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawBoard {
    id: Option<String>,
    title: Option<String>,
    columns: Option<Vec<RawColumn>>,
}

#[derive(Debug, Default, Deserialize)]
struct RawColumn {
    id: Option<String>,
    title: Option<String>,
    tasks: Option<Vec<RawTask>>,
    width: Option<u32>,
    color: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTask {
    id: Option<String>,
    text: Option<String>,
    color: Option<String>,
    #[serde(rename = "subTasks")]
    subtasks: Option<Vec<RawSubtask>>,
    is_starred: Option<bool>,
    created_at: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
struct RawSubtask {
    id: Option<String>,
    text: Option<String>,
    completed: Option<bool>,
}

/// Rebuild an [`AppState`] from saved snapshot data.
///
/// `now` stamps tasks with no `createdAt`; `fallback_theme` applies when the
/// snapshot has no readable theme. Fails only when the data is not a
/// snapshot at all or holds no boards, in which case the caller starts over
/// from the seed state.
pub fn restore(data: Value, now: i64, fallback_theme: Theme) -> Result<AppState> {
    let raw: RawState = serde_json::from_value(data)?;

    if let Some(version) = raw.schema_version {
        if version > SCHEMA_VERSION {
            tracing::warn!(
                "Snapshot schema version {} is newer than {}, reading what is understood",
                version,
                SCHEMA_VERSION
            );
        }
    }

    let boards = raw.boards.unwrap_or_default();
    if boards.is_empty() {
        return Err(KanbanError::malformed("snapshot holds no boards"));
    }

    let mut state = AppState {
        boards: boards.into_iter().map(|b| board(b, now)).collect(),
        current_board_id: raw.current_board_id.map(BoardId::from),
        counters: IdCounters {
            board: raw.next_board_id.unwrap_or(1),
            column: raw.next_column_id.unwrap_or(1),
            task: raw.next_task_id.unwrap_or(1),
            subtask: raw.next_subtask_id.unwrap_or(1),
        },
        theme: raw
            .theme
            .and_then(|t| t.parse().ok())
            .unwrap_or(fallback_theme),
    };

    state.reconcile_counters();
    mint_missing_ids(&mut state);
    state.repair_current_board();
    Ok(state)
}

fn board(raw: RawBoard, now: i64) -> Board {
    Board {
        id: BoardId::from(raw.id.unwrap_or_default()),
        title: text_or(raw.title, UNTITLED),
        columns: raw
            .columns
            .unwrap_or_default()
            .into_iter()
            .map(|c| column(c, now))
            .collect(),
    }
}

fn column(raw: RawColumn, now: i64) -> Column {
    Column {
        id: ColumnId::from(raw.id.unwrap_or_default()),
        title: text_or(raw.title, UNTITLED),
        tasks: raw
            .tasks
            .unwrap_or_default()
            .into_iter()
            .map(|t| task(t, now))
            .collect(),
        width: raw
            .width
            .filter(|w| *w > 0)
            .unwrap_or(DEFAULT_COLUMN_WIDTH),
        color: raw.color.unwrap_or_else(|| DEFAULT_COLUMN_COLOR.to_string()),
    }
}

fn task(raw: RawTask, now: i64) -> Task {
    Task {
        id: TaskId::from(raw.id.unwrap_or_default()),
        text: text_or(raw.text, UNTITLED),
        color: raw.color.unwrap_or_else(|| DEFAULT_TASK_COLOR.to_string()),
        subtasks: raw
            .subtasks
            .unwrap_or_default()
            .into_iter()
            .map(|s| Subtask {
                id: SubtaskId::from(s.id.unwrap_or_default()),
                text: text_or(s.text, UNTITLED),
                completed: s.completed.unwrap_or(false),
            })
            .collect(),
        is_starred: raw.is_starred.unwrap_or(false),
        created_at: raw.created_at.unwrap_or(now),
    }
}

fn text_or(text: Option<String>, fallback: &str) -> String {
    match text.as_deref().map(str::trim) {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => fallback.to_string(),
    }
}

/// Give every entity saved without an id a fresh one.
///
/// Runs after counter reconciliation so new ids cannot collide with saved ones.
fn mint_missing_ids(state: &mut AppState) {
    let counters = &mut state.counters;
    for board in &mut state.boards {
        if board.id.as_str().is_empty() {
            board.id = counters.next_board();
        }
        for column in &mut board.columns {
            if column.id.as_str().is_empty() {
                column.id = counters.next_column();
            }
            for task in &mut column.tasks {
                if task.id.as_str().is_empty() {
                    task.id = counters.next_task();
                }
                for subtask in &mut task.subtasks {
                    if subtask.id.as_str().is_empty() {
                        subtask.id = counters.next_subtask();
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::seed_state;
    use serde_json::json;

    #[test]
    fn test_snapshot_restores_unchanged() {
        let state = seed_state(1_000, Theme::Light);
        let restored = restore(snapshot(&state).unwrap(), 0, Theme::Dark).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn test_legacy_snapshot_is_backfilled() {
        let legacy = json!({
            "boards": [{
                "id": "board-1",
                "title": "Old",
                "columns": [{
                    "id": "col-4",
                    "title": "Backlog",
                    "tasks": [{ "id": "task-9", "text": "write docs" }]
                }]
            }],
            "currentBoardId": "board-1",
            "nextBoardId": 2,
            "nextColumnId": 2,
            "nextTaskId": 2,
            "nextSubTaskId": 1,
            "theme": "dark"
        });

        let state = restore(legacy, 77, Theme::Light).unwrap();

        let column = &state.boards[0].columns[0];
        assert_eq!(column.width, 300);
        assert_eq!(column.color, DEFAULT_COLUMN_COLOR);
        let task = &column.tasks[0];
        assert_eq!(task.color, DEFAULT_TASK_COLOR);
        assert!(task.subtasks.is_empty());
        assert!(!task.is_starred);
        assert_eq!(task.created_at, 77);
        assert_eq!(state.theme, Theme::Dark);
    }

    #[test]
    fn test_counters_never_go_backwards() {
        let data = json!({
            "boards": [{ "id": "board-3", "title": "B", "columns": [
                { "id": "col-12", "title": "C", "tasks": [
                    { "id": "task-40", "text": "t", "subTasks": [{ "id": "subtask-8", "text": "s" }] }
                ]}
            ]}],
            "nextBoardId": 10,
            "nextColumnId": 1,
            "nextTaskId": 2
        });

        let state = restore(data, 0, Theme::Dark).unwrap();

        assert_eq!(state.counters.board, 10);
        assert_eq!(state.counters.column, 13);
        assert_eq!(state.counters.task, 41);
        assert_eq!(state.counters.subtask, 9);
    }

    #[test]
    fn test_dangling_current_board_is_repaired() {
        let data = json!({
            "boards": [{ "id": "board-2", "title": "Only" }],
            "currentBoardId": "board-9"
        });
        let state = restore(data, 0, Theme::Dark).unwrap();
        assert_eq!(state.current_board_id, Some(BoardId::from("board-2")));
        assert!(state.boards[0].columns.is_empty());
    }

    #[test]
    fn test_missing_ids_are_minted_after_saved_ones() {
        let data = json!({
            "boards": [{ "id": "board-1", "title": "B", "columns": [
                { "id": "col-5", "title": "C", "tasks": [
                    { "text": "no id" },
                    { "id": "task-3", "text": "has id" }
                ]},
                { "title": "no id either" }
            ]}]
        });

        let state = restore(data, 0, Theme::Dark).unwrap();

        let columns = &state.boards[0].columns;
        assert_eq!(columns[1].id.as_str(), "col-6");
        assert_eq!(columns[0].tasks[0].id.as_str(), "task-4");
        assert_eq!(state.counters.task, 5);
    }

    #[test]
    fn test_unusable_data_is_rejected() {
        assert!(restore(json!({ "boards": [] }), 0, Theme::Dark).is_err());
        assert!(restore(json!({}), 0, Theme::Dark).is_err());
        assert!(restore(json!("GoDoAppState"), 0, Theme::Dark).is_err());
        assert!(restore(json!({ "boards": "many" }), 0, Theme::Dark).is_err());
    }

    #[test]
    fn test_unknown_theme_uses_fallback() {
        let data = json!({ "boards": [{ "id": "board-1", "title": "B" }], "theme": "sepia" });
        let state = restore(data, 0, Theme::Light).unwrap();
        assert_eq!(state.theme, Theme::Light);
    }

    #[test]
    fn test_blank_text_gets_placeholder() {
        let data = json!({ "boards": [{ "id": "board-1", "title": "  " }] });
        let state = restore(data, 0, Theme::Dark).unwrap();
        assert_eq!(state.boards[0].title, UNTITLED);
    }
}
