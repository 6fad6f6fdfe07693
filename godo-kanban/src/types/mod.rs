//! Core types for the board model

mod board;
mod ids;
mod operation;
mod state;
mod task;

// Re-export all types
pub use board::{Board, Column, DEFAULT_COLUMN_TITLE, DEFAULT_COLUMN_WIDTH};
pub use ids::{BoardId, ColumnId, IdCounters, IdKind, SubtaskId, TaskId};
pub use operation::{Noun, Verb};
pub use state::{AppState, Theme};
pub use task::{Subtask, Task};
