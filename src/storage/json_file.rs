use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::response::ResponseRecord;
use crate::storage::Storage;

/// On-disk layout: one JSON object `{"responses": [...]}`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredData {
    responses: Vec<ResponseRecord>,
}

/// Whole-file JSON persistence for the response list.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Vec<ResponseRecord> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "data file unreadable, treating as empty");
                return Vec::new();
            }
        };
        match serde_json::from_str::<StoredData>(&raw) {
            Ok(data) => data.responses,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "data file malformed, treating as empty");
                Vec::new()
            }
        }
    }

    fn replace(&self, records: &[ResponseRecord]) -> Result<()> {
        let data = StoredData {
            responses: records.to_vec(),
        };
        let raw = serde_json::to_string_pretty(&data)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::response::Reaction;

    fn record(id: u64) -> ResponseRecord {
        ResponseRecord {
            id,
            timestamp: "2024-01-01T10:00:00Z".into(),
            reaction: Reaction::Great,
            device_id: None,
            created_at: "2024-01-01T10:00:01Z".into(),
        }
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("nope.json"));
        assert!(storage.load().is_empty());
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        fs::write(&path, "{not json").unwrap();
        let storage = JsonFileStorage::new(path);
        assert!(storage.load().is_empty());
    }

    #[test]
    fn replace_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("data.json"));
        storage.replace(&[record(1), record(2)]).unwrap();
        let loaded = storage.load();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1].id, 2);
    }
}
