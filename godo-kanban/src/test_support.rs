//! Shared fixtures for unit tests

use crate::context::{KanbanContext, ManualClock};
use crate::defaults::seed_state;
use crate::types::{AppState, ColumnId, Theme};
use std::sync::Arc;

pub const SEED_TIME: i64 = 1_700_000_000_000;

/// Context holding the built-in seed board, with time frozen at `SEED_TIME`
pub fn seeded() -> KanbanContext {
    KanbanContext::with_clock(
        seed_state(SEED_TIME, Theme::Dark),
        Arc::new(ManualClock::new(SEED_TIME)),
    )
}

/// Context with no boards at all
pub fn empty() -> KanbanContext {
    KanbanContext::with_clock(AppState::default(), Arc::new(ManualClock::new(SEED_TIME)))
}

pub fn todo() -> ColumnId {
    ColumnId::from("col-1")
}

pub fn done() -> ColumnId {
    ColumnId::from("col-2")
}
