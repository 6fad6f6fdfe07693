//! Single-user kanban board engine
//!
//! This crate is the model behind a personal task board: boards hold ordered
//! columns, columns hold ordered colored tasks, tasks hold ordered subtasks
//! that can be checked off. Everything a presentation layer does goes through
//! commands executed against an explicitly owned model, and the model is
//! snapshotted to a pluggable store.
//!
//! ## Overview
//!
//! - **Commands are structs** - `AddTask::new(column, text)`, one file per command
//! - **Silent no-ops** - missing ids and blank text leave the model untouched
//! - **Monotonic ids** - `board-N`, `col-N`, `task-N`, `subtask-N`, never reused
//! - **One reorder primitive** - drops, column moves and duplication share it
//! - **Fire-and-forget saves** - a writer task persists snapshots in order
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use godo_kanban::{task::AddTask, KanbanConfig, KanbanSession};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = KanbanConfig::load(None)?;
//! config.init_logging();
//! let store = Arc::new(config.file_store());
//! let mut session = KanbanSession::open(store, &config).await;
//!
//! let result = session.process(&AddTask::new("col-1", "Buy milk"))?;
//! if let Some(task) = result.value() {
//!     println!("Created task: {}", task["id"]);
//! }
//!
//! session.close().await;
//! # Ok(())
//! # }
//! ```
//!
//! ## Storage Structure
//!
//! ```text
//! .godo/
//! ├── app_state.json   # {"id": "GoDoAppState", "data": {...}}
//! ├── theme            # "light" or "dark"
//! └── .lock
//! ```

pub mod config;
mod context;
pub mod defaults;
pub mod drag;
mod error;
pub mod logging;
pub mod migrate;
mod operation;
pub mod palette;
mod processor;
pub mod reorder;
pub mod store;
pub mod types;
pub mod view;

// Command modules
pub mod board;
pub mod column;
pub mod subtask;
pub mod task;
pub mod theme;

#[cfg(test)]
mod test_support;

pub use config::KanbanConfig;
pub use context::{Clock, KanbanContext, ManualClock, SystemClock};
pub use error::{KanbanError, Result};
pub use logging::init_logging;
pub use operation::{Execute, Operation, Outcome};
pub use processor::KanbanSession;
pub use store::{FileStore, MemoryStore, SnapshotRecord, StateStore, StoreLock};
pub use view::BoardView;

// Re-export commonly used types
pub use types::{
    AppState, Board, BoardId, Column, ColumnId, IdCounters, IdKind, Noun, Subtask, SubtaskId,
    Task, TaskId, Theme, Verb,
};
