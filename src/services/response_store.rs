use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use tokio::sync::Mutex;

use crate::error::Result;
use crate::models::response::{Reaction, ResponseRecord};
use crate::storage::Storage;

/// Single source of truth for submitted responses. Every operation reloads
/// the full list from storage; mutations rewrite it wholesale. The write lock
/// serializes the load-mutate-persist cycle so concurrent appends cannot lose
/// each other's records.
#[derive(Clone)]
pub struct ResponseStore {
    storage: Arc<dyn Storage>,
    write_lock: Arc<Mutex<()>>,
}

impl ResponseStore {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Current record list, insertion order preserved.
    pub fn load(&self) -> Vec<ResponseRecord> {
        self.storage.load()
    }

    /// Append a validated response and persist. The id is derived from the
    /// current list length, so it restarts from 1 after a clear.
    pub async fn append(
        &self,
        reaction: Reaction,
        device_id: Option<String>,
        timestamp: String,
    ) -> Result<ResponseRecord> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.storage.load();
        let record = ResponseRecord {
            id: records.len() as u64 + 1,
            timestamp,
            reaction,
            device_id,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        records.push(record.clone());
        self.storage.replace(&records)?;
        Ok(record)
    }

    /// Drop all records, returning how many were removed.
    pub async fn clear(&self) -> Result<usize> {
        let _guard = self.write_lock.lock().await;
        let count = self.storage.load().len();
        self.storage.replace(&[])?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::json_file::JsonFileStorage;

    fn store(dir: &tempfile::TempDir) -> ResponseStore {
        ResponseStore::new(Arc::new(JsonFileStorage::new(dir.path().join("data.json"))))
    }

    #[tokio::test]
    async fn append_assigns_sequential_ids() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        let first = store
            .append(Reaction::Great, None, "2024-01-01T10:00:00Z".into())
            .await
            .unwrap();
        let second = store
            .append(Reaction::Bad, Some("kiosk-1".into()), "2024-01-01T11:00:00Z".into())
            .await
            .unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.load().len(), 2);
    }

    #[tokio::test]
    async fn clear_reports_count_and_resets_ids() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        for _ in 0..3 {
            store
                .append(Reaction::Ok, None, "2024-01-01T10:00:00Z".into())
                .await
                .unwrap();
        }
        assert_eq!(store.clear().await.unwrap(), 3);
        assert!(store.load().is_empty());

        let next = store
            .append(Reaction::Ok, None, "2024-01-02T10:00:00Z".into())
            .await
            .unwrap();
        assert_eq!(next.id, 1);
    }

    #[tokio::test]
    async fn concurrent_appends_do_not_lose_records() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir);
        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .append(Reaction::Great, None, "2024-01-01T10:00:00Z".into())
                    .await
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(store.load().len(), 8);
    }
}
