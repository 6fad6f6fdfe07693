//! KanbanContext - the explicitly owned model handed to every command
//!
//! The context owns the [`AppState`] and a [`Clock`]. No business logic lives
//! here, only access. Commands do all the work.

use crate::types::AppState;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Source of creation timestamps
pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;
}

/// Wall-clock time via chrono
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// A clock that only moves when told to
#[derive(Debug, Default)]
pub struct ManualClock {
    millis: AtomicI64,
}

impl ManualClock {
    pub fn new(millis: i64) -> Self {
        Self {
            millis: AtomicI64::new(millis),
        }
    }

    pub fn set(&self, millis: i64) {
        self.millis.store(millis, Ordering::SeqCst);
    }

    pub fn advance(&self, delta: i64) {
        self.millis.fetch_add(delta, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.millis.load(Ordering::SeqCst)
    }
}

/// Context passed to every command - provides access, not logic
pub struct KanbanContext {
    state: AppState,
    clock: Arc<dyn Clock>,
}

impl KanbanContext {
    /// Wrap `state` using the system clock
    pub fn new(state: AppState) -> Self {
        Self::with_clock(state, Arc::new(SystemClock))
    }

    /// Wrap `state` with a specific clock
    pub fn with_clock(state: AppState, clock: Arc<dyn Clock>) -> Self {
        Self { state, clock }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn into_state(self) -> AppState {
        self.state
    }

    /// Current time in milliseconds since the Unix epoch
    pub fn now(&self) -> i64 {
        self.clock.now_millis()
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }
}

impl std::fmt::Debug for KanbanContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KanbanContext")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
