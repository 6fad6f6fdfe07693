//! A store backed by a directory on disk

use super::{SnapshotRecord, StateStore, SNAPSHOT_KEY};
use crate::error::{KanbanError, Result};
use crate::types::Theme;
use async_trait::async_trait;
use fs2::FileExt;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Directory layout:
///
/// ```text
/// <root>/
///   app_state.json   the snapshot record
///   theme            "light" or "dark"
///   .lock            advisory lock
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.root.join("app_state.json")
    }

    pub fn theme_path(&self) -> PathBuf {
        self.root.join("theme")
    }

    pub fn lock_path(&self) -> PathBuf {
        self.root.join(".lock")
    }

    /// Try to take the store for this process (non-blocking)
    pub async fn lock(&self) -> Result<StoreLock> {
        ensure_dir(&self.root).await?;

        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(self.lock_path())?;

        match file.try_lock_exclusive() {
            Ok(()) => Ok(StoreLock { file }),
            Err(_) => Err(KanbanError::LockBusy),
        }
    }
}

/// RAII lock guard - releases on drop
#[derive(Debug)]
pub struct StoreLock {
    file: std::fs::File,
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

#[async_trait]
impl StateStore for FileStore {
    async fn load(&self) -> Result<Option<Value>> {
        let Some(content) = read_optional(&self.snapshot_path()).await? else {
            return Ok(None);
        };
        let record: SnapshotRecord = serde_json::from_str(&content)?;
        if record.id != SNAPSHOT_KEY {
            return Err(KanbanError::malformed(format!(
                "unexpected record id '{}'",
                record.id
            )));
        }
        Ok(Some(record.data))
    }

    async fn save(&self, record: &SnapshotRecord) -> Result<()> {
        let content = serde_json::to_string_pretty(record)?;
        atomic_write(&self.snapshot_path(), content.as_bytes()).await
    }

    async fn load_theme(&self) -> Result<Option<Theme>> {
        let Some(content) = read_optional(&self.theme_path()).await? else {
            return Ok(None);
        };
        content
            .parse::<Theme>()
            .map(Some)
            .map_err(KanbanError::malformed)
    }

    async fn save_theme(&self, theme: Theme) -> Result<()> {
        atomic_write(&self.theme_path(), theme.as_str().as_bytes()).await
    }

    async fn acquire(&self) -> Result<Option<StoreLock>> {
        self.lock().await.map(Some)
    }
}

async fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path).await {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

async fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .await
        .map_err(|_| KanbanError::StorageUnavailable {
            path: dir.to_path_buf(),
        })
}

/// Atomic write via temp file and rename
async fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent).await?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).await?;
    fs::rename(&temp_path, path).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::seed_state;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(temp.path().join(".godo"));
        (temp, store)
    }

    #[tokio::test]
    async fn test_load_from_empty_dir() {
        let (_temp, store) = setup();
        assert!(store.load().await.unwrap().is_none());
        assert!(store.load_theme().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_creates_root_and_round_trips() {
        let (_temp, store) = setup();
        let record = SnapshotRecord::from_state(&seed_state(5, Theme::Dark)).unwrap();

        store.save(&record).await.unwrap();
        store.save_theme(Theme::Light).await.unwrap();

        assert!(store.snapshot_path().exists());
        assert!(!store.snapshot_path().with_extension("tmp").exists());
        assert_eq!(store.load().await.unwrap(), Some(record.data));
        assert_eq!(store.load_theme().await.unwrap(), Some(Theme::Light));
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_is_an_error() {
        let (_temp, store) = setup();
        std::fs::create_dir_all(store.root()).unwrap();
        std::fs::write(store.snapshot_path(), "{ not json").unwrap();

        assert!(matches!(store.load().await, Err(KanbanError::Json(_))));
    }

    #[tokio::test]
    async fn test_foreign_record_is_malformed() {
        let (_temp, store) = setup();
        std::fs::create_dir_all(store.root()).unwrap();
        std::fs::write(store.snapshot_path(), r#"{"id":"Other","data":{}}"#).unwrap();

        assert!(matches!(
            store.load().await,
            Err(KanbanError::MalformedSnapshot { .. })
        ));
    }

    #[tokio::test]
    async fn test_bad_theme_file_is_malformed() {
        let (_temp, store) = setup();
        std::fs::create_dir_all(store.root()).unwrap();
        std::fs::write(store.theme_path(), "sepia").unwrap();

        assert!(store.load_theme().await.is_err());
    }

    #[tokio::test]
    async fn test_locking() {
        let (_temp, store) = setup();

        let lock1 = store.lock().await.unwrap();

        let result = store.lock().await;
        assert!(matches!(result, Err(KanbanError::LockBusy)));

        drop(lock1);
        let _lock2 = store.lock().await.unwrap();
    }

    #[tokio::test]
    async fn test_acquire_goes_through_lock() {
        let (_temp, store) = setup();

        let held = store.acquire().await.unwrap();
        assert!(held.is_some());
        assert!(store.lock_path().exists());
        assert!(matches!(store.acquire().await, Err(KanbanError::LockBusy)));
    }
}
