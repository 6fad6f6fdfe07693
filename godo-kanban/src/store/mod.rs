//! Persistence port.
//!
//! The model is saved as one snapshot record under [`SNAPSHOT_KEY`]. The theme
//! preference lives in a separate, smaller slot and wins over the theme
//! embedded in the snapshot when both exist.

mod file;
mod memory;

pub use file::{FileStore, StoreLock};
pub use memory::MemoryStore;

use crate::error::Result;
use crate::migrate;
use crate::types::{AppState, Theme};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifier of the root snapshot record
pub const SNAPSHOT_KEY: &str = "GoDoAppState";

/// Identifier of the standalone theme preference
pub const THEME_KEY: &str = "GoDoTheme";

/// The root record: a fixed id and the serialized model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    pub id: String,
    pub data: Value,
}

impl SnapshotRecord {
    /// Serialize `state` at the current schema version
    pub fn from_state(state: &AppState) -> Result<Self> {
        Ok(Self {
            id: SNAPSHOT_KEY.to_string(),
            data: migrate::snapshot(state)?,
        })
    }
}

/// Where snapshots go.
///
/// `load` hands back the raw record data so that migration, not the store,
/// decides how to read older or damaged snapshots.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// The saved snapshot data, or `None` if nothing was ever saved
    async fn load(&self) -> Result<Option<Value>>;

    async fn save(&self, record: &SnapshotRecord) -> Result<()>;

    /// The standalone theme preference, if one was saved
    async fn load_theme(&self) -> Result<Option<Theme>>;

    async fn save_theme(&self, theme: Theme) -> Result<()>;

    /// Claim the store for exclusive writing.
    ///
    /// `None` means the store has nothing to lock. Fails with
    /// [`KanbanError::LockBusy`](crate::KanbanError::LockBusy) while another
    /// writer holds it.
    async fn acquire(&self) -> Result<Option<StoreLock>> {
        Ok(None)
    }
}
