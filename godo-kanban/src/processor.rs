//! KanbanSession - runs commands against an owned model and keeps the store
//! in step.
//!
//! Mutation is synchronous. Every applied, persisting command queues a
//! snapshot on a single writer task, so writes reach the store in the order
//! the commands ran and `process` never waits on I/O. Write failures are
//! logged, never retried, and never reach the caller.

use crate::config::KanbanConfig;
use crate::context::{Clock, KanbanContext, SystemClock};
use crate::defaults::seed_state;
use crate::drag::{ColumnDrop, ColumnGrip, DragSession, TaskDrop, TaskGrip};
use crate::error::Result;
use crate::migrate;
use crate::operation::{Execute, Outcome};
use crate::store::{SnapshotRecord, StateStore, StoreLock};
use crate::types::{AppState, ColumnId, Noun, TaskId, Theme};
use crate::view::BoardView;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

enum WriteRequest {
    Save {
        record: SnapshotRecord,
        theme: Option<Theme>,
    },
    Flush(oneshot::Sender<()>),
}

struct Writer {
    tx: mpsc::UnboundedSender<WriteRequest>,
    handle: JoinHandle<()>,
}

impl Writer {
    fn spawn(store: Arc<dyn StateStore>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run_writer(store, rx));
        Self { tx, handle }
    }
}

async fn run_writer(store: Arc<dyn StateStore>, mut rx: mpsc::UnboundedReceiver<WriteRequest>) {
    while let Some(request) = rx.recv().await {
        match request {
            WriteRequest::Save { record, theme } => {
                if let Err(e) = store.save(&record).await {
                    error!("Failed to save board snapshot: {}", e);
                }
                if let Some(theme) = theme {
                    if let Err(e) = store.save_theme(theme).await {
                        error!("Failed to save theme preference: {}", e);
                    }
                }
            }
            WriteRequest::Flush(done) => {
                let _ = done.send(());
            }
        }
    }
}

/// One user's board session: the model, the drag in flight, and a writer
pub struct KanbanSession {
    ctx: KanbanContext,
    drag: DragSession,
    writer: Option<Writer>,
    // Released when the session is dropped or closed
    lock: Option<StoreLock>,
}

impl KanbanSession {
    /// Load from `store`, falling back to the seed board, and start the
    /// writer. Must be called within a tokio runtime.
    ///
    /// If the store is already claimed by another session the board is still
    /// loaded, but this session runs detached and saves nothing.
    pub async fn open(store: Arc<dyn StateStore>, config: &KanbanConfig) -> Self {
        Self::open_with_clock(store, config.theme, Arc::new(SystemClock)).await
    }

    /// [`open`](Self::open) with an explicit clock and fallback theme
    pub async fn open_with_clock(
        store: Arc<dyn StateStore>,
        fallback_theme: Theme,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let now = clock.now_millis();
        let claim = store.acquire().await;
        let state = load_state(store.as_ref(), now, fallback_theme).await;

        let (writer, lock) = match claim {
            Ok(lock) => (Some(Writer::spawn(store)), lock),
            Err(e) => {
                warn!("Store is in use, changes in this session will not be saved: {}", e);
                (None, None)
            }
        };
        Self {
            ctx: KanbanContext::with_clock(state, clock),
            drag: DragSession::default(),
            writer,
            lock,
        }
    }

    /// A session over `state` that never persists
    pub fn detached(state: AppState, clock: Arc<dyn Clock>) -> Self {
        Self {
            ctx: KanbanContext::with_clock(state, clock),
            drag: DragSession::default(),
            writer: None,
            lock: None,
        }
    }

    /// Whether applied changes reach the store
    pub fn is_persisting(&self) -> bool {
        self.writer.is_some()
    }

    pub fn state(&self) -> &AppState {
        self.ctx.state()
    }

    pub fn context(&self) -> &KanbanContext {
        &self.ctx
    }

    /// Projection of the current board for rendering
    pub fn view(&self) -> BoardView {
        BoardView::build(self.ctx.state())
    }

    /// Execute `cmd`, queueing a snapshot if it changed the model and persists
    pub fn process<C: Execute>(&mut self, cmd: &C) -> Result<Outcome> {
        let started = Instant::now();
        let outcome = cmd.execute(&mut self.ctx)?;

        if outcome.is_applied() {
            debug!(
                "Applied '{}' in {}us",
                cmd.op_string(),
                started.elapsed().as_micros()
            );
            if cmd.persists() {
                let theme = (cmd.noun() == Noun::Theme).then_some(self.ctx.state().theme);
                self.queue_save(theme);
            }
        }
        Ok(outcome)
    }

    /// Queue a snapshot of the model as it is now
    pub fn persist(&self) {
        self.queue_save(None);
    }

    /// Wait until every snapshot queued so far has been handed to the store
    pub async fn flush(&self) {
        let Some(writer) = &self.writer else {
            return;
        };
        let (done, wait) = oneshot::channel();
        if writer.tx.send(WriteRequest::Flush(done)).is_err() {
            return;
        }
        let _ = wait.await;
    }

    /// Flush, stop the writer, and hand back the model
    pub async fn close(mut self) -> AppState {
        if let Some(writer) = self.writer.take() {
            drop(writer.tx);
            if let Err(e) = writer.handle.await {
                error!("Snapshot writer stopped abnormally: {}", e);
            }
        }
        self.lock.take();
        self.ctx.into_state()
    }

    fn queue_save(&self, theme: Option<Theme>) {
        let Some(writer) = &self.writer else {
            return;
        };
        let record = match SnapshotRecord::from_state(self.ctx.state()) {
            Ok(record) => record,
            Err(e) => {
                error!("Failed to serialize board snapshot: {}", e);
                return;
            }
        };
        if writer.tx.send(WriteRequest::Save { record, theme }).is_err() {
            error!("Snapshot writer is gone, change not saved");
        }
    }

    // ---------------------------------------------------------------------
    // Drag and drop
    // ---------------------------------------------------------------------

    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    pub fn begin_task_drag(
        &mut self,
        task: impl Into<TaskId>,
        source_column: impl Into<ColumnId>,
        grip: TaskGrip,
    ) -> Result<()> {
        self.drag.begin_task(task, source_column, grip)
    }

    pub fn begin_column_drag(&mut self, column: impl Into<ColumnId>, grip: ColumnGrip) -> Result<()> {
        self.drag.begin_column(column, grip)
    }

    /// Task the dragged one would land in front of (`None` = end of column)
    pub fn task_drop_target(&self, drop: &TaskDrop) -> Result<Option<TaskId>> {
        self.drag.task_candidate(drop)
    }

    /// Column the dragged one would land in front of (`None` = end of board)
    pub fn column_drop_target(&self, drop: &ColumnDrop) -> Result<Option<ColumnId>> {
        self.drag.column_candidate(drop)
    }

    /// Finish a task drag; drag state is cleared whatever happens
    pub fn drop_task(&mut self, drop: &TaskDrop) -> Result<Outcome> {
        match self.drag.drop_task(self.ctx.state(), drop)? {
            Some(command) => self.process(&command),
            None => Ok(Outcome::Unchanged),
        }
    }

    /// Finish a column drag; drag state is cleared whatever happens
    pub fn drop_column(&mut self, drop: &ColumnDrop) -> Result<Outcome> {
        match self.drag.drop_column(self.ctx.state(), drop)? {
            Some(command) => self.process(&command),
            None => Ok(Outcome::Unchanged),
        }
    }

    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }
}

impl std::fmt::Debug for KanbanSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KanbanSession")
            .field("ctx", &self.ctx)
            .field("drag", &self.drag)
            .field("persisting", &self.writer.is_some())
            .field("locked", &self.lock.is_some())
            .finish()
    }
}

/// Read the saved model, falling back to the seed board on any problem.
///
/// A separately saved theme overrides the one inside the snapshot.
async fn load_state(store: &dyn StateStore, now: i64, fallback_theme: Theme) -> AppState {
    let saved_theme = match store.load_theme().await {
        Ok(theme) => theme,
        Err(e) => {
            warn!("Ignoring unreadable theme preference: {}", e);
            None
        }
    };

    let mut state = match store.load().await {
        Ok(Some(data)) => match migrate::restore(data, now, fallback_theme) {
            Ok(state) => state,
            Err(e) => {
                warn!("Saved board could not be restored, starting fresh: {}", e);
                seed_state(now, fallback_theme)
            }
        },
        Ok(None) => {
            debug!("No saved board, starting from defaults");
            seed_state(now, fallback_theme)
        }
        Err(e) => {
            warn!("Failed to read saved board, starting fresh: {}", e);
            seed_state(now, fallback_theme)
        }
    };

    if let Some(theme) = saved_theme {
        state.theme = theme;
    }
    state
}
