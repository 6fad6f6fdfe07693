//! In-memory store

use super::{SnapshotRecord, StateStore};
use crate::error::{KanbanError, Result};
use crate::types::Theme;
use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Slots {
    snapshot: Option<Value>,
    theme: Option<Theme>,
    saves: usize,
    unavailable: bool,
}

/// A store that keeps everything in process memory.
///
/// Clones share the same slots, so a test can keep a handle while a session
/// owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: Arc<Mutex<Slots>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with raw snapshot data already saved
    pub fn with_snapshot(self, data: Value) -> Self {
        self.slots().snapshot = Some(data);
        self
    }

    /// Start with a saved theme preference
    pub fn with_theme(self, theme: Theme) -> Self {
        self.slots().theme = Some(theme);
        self
    }

    /// Make every read and write fail, as if storage went away
    pub fn set_unavailable(&self, unavailable: bool) {
        self.slots().unavailable = unavailable;
    }

    /// The last saved snapshot data
    pub fn snapshot(&self) -> Option<Value> {
        self.slots().snapshot.clone()
    }

    pub fn theme(&self) -> Option<Theme> {
        self.slots().theme
    }

    /// Number of successful snapshot saves
    pub fn save_count(&self) -> usize {
        self.slots().saves
    }

    fn slots(&self) -> MutexGuard<'_, Slots> {
        self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check(&self) -> Result<MutexGuard<'_, Slots>> {
        let slots = self.slots();
        if slots.unavailable {
            return Err(KanbanError::StorageUnavailable {
                path: PathBuf::from("memory"),
            });
        }
        Ok(slots)
    }
}

#[async_trait]
impl StateStore for MemoryStore {
    async fn load(&self) -> Result<Option<Value>> {
        Ok(self.check()?.snapshot.clone())
    }

    async fn save(&self, record: &SnapshotRecord) -> Result<()> {
        let mut slots = self.check()?;
        slots.snapshot = Some(record.data.clone());
        slots.saves += 1;
        Ok(())
    }

    async fn load_theme(&self) -> Result<Option<Theme>> {
        Ok(self.check()?.theme)
    }

    async fn save_theme(&self, theme: Theme) -> Result<()> {
        self.check()?.theme = Some(theme);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::seed_state;

    #[tokio::test]
    async fn test_memory_round_trip() {
        let store = MemoryStore::new();
        assert!(store.load().await.unwrap().is_none());

        let record = SnapshotRecord::from_state(&seed_state(0, Theme::Dark)).unwrap();
        store.save(&record).await.unwrap();
        store.save_theme(Theme::Light).await.unwrap();

        let handle = store.clone();
        assert_eq!(handle.load().await.unwrap(), Some(record.data));
        assert_eq!(handle.load_theme().await.unwrap(), Some(Theme::Light));
        assert_eq!(handle.save_count(), 1);
    }

    #[tokio::test]
    async fn test_unavailable_store_errors() {
        let store = MemoryStore::new();
        store.set_unavailable(true);
        assert!(matches!(
            store.load().await,
            Err(KanbanError::StorageUnavailable { .. })
        ));
        assert!(store.save_theme(Theme::Dark).await.is_err());
    }
}
