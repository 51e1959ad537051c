//! File-backed preset store.
//!
//! Persists the whole collection as one JSON array, the same layout the
//! frontend keeps under its local-storage key, so an exported file and the
//! store file are interchangeable.

use super::{assign_id, PresetStore, SavedRequestRecord, StoreError};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

pub struct JsonFileStore {
    path: PathBuf,
    records: Mutex<Vec<SavedRequestRecord>>,
}

impl JsonFileStore {
    /// Opens the store at `path`, loading any existing collection. A
    /// missing file is an empty collection, not an error.
    pub fn open(path: PathBuf) -> Result<Self, StoreError> {
        let records = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            records: Mutex::new(records),
        })
    }

    fn persist(&self, records: &[SavedRequestRecord]) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl PresetStore for JsonFileStore {
    fn list(&self) -> Result<Vec<SavedRequestRecord>, StoreError> {
        let records = self.records.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(records.clone())
    }

    fn put(&self, mut record: SavedRequestRecord) -> Result<SavedRequestRecord, StoreError> {
        if record.id.is_empty() {
            record.id = assign_id();
        }
        let mut records = self.records.lock().map_err(|_| StoreError::Poisoned)?;
        records.push(record.clone());
        self.persist(&records)?;
        Ok(record)
    }

    fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let mut records = self.records.lock().map_err(|_| StoreError::Poisoned)?;
        records.retain(|record| record.id != id);
        self.persist(&records)
    }

    fn replace_all(&self, new_records: Vec<SavedRequestRecord>) -> Result<(), StoreError> {
        let mut records = self.records.lock().map_err(|_| StoreError::Poisoned)?;
        *records = new_records;
        self.persist(&records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::Method;
    use crate::store::AuthMode;

    fn record(name: &str) -> SavedRequestRecord {
        SavedRequestRecord {
            id: String::new(),
            name: name.to_string(),
            url: "https://api.example.com/users".to_string(),
            method: Method::Get,
            headers: Vec::new(),
            body: String::new(),
            auth_type: AuthMode::None,
            bearer_token: String::new(),
            username: String::new(),
            password: String::new(),
        }
    }

    fn temp_store(tag: &str) -> JsonFileStore {
        let path = std::env::temp_dir().join(format!(
            "request-tester-store-{}-{}.json",
            tag,
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        JsonFileStore::open(path).unwrap()
    }

    #[test]
    fn put_assigns_id_and_appends() {
        let store = temp_store("put");
        let saved = store.put(record("a")).unwrap();
        assert!(!saved.id.is_empty());

        // Saving the same name again appends rather than updating.
        store.put(record("a")).unwrap();
        assert_eq!(store.list().unwrap().len(), 2);
    }

    #[test]
    fn delete_by_id_removes_only_that_record() {
        let store = temp_store("delete");
        let first = store.put(record("a")).unwrap();
        let mut second = record("b");
        second.id = "fixed-id".to_string();
        store.put(second).unwrap();

        store.delete_by_id(&first.id).unwrap();
        let remaining = store.list().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "b");

        // Unknown id is a no-op.
        store.delete_by_id("missing").unwrap();
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn collection_survives_reopen() {
        let path = std::env::temp_dir().join(format!(
            "request-tester-store-reopen-{}.json",
            std::process::id()
        ));
        let _ = fs::remove_file(&path);

        let store = JsonFileStore::open(path.clone()).unwrap();
        store.put(record("persisted")).unwrap();
        drop(store);

        let reopened = JsonFileStore::open(path).unwrap();
        let records = reopened.list().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "persisted");
    }

    #[test]
    fn export_import_round_trip_is_order_preserving() {
        let store = temp_store("roundtrip");
        for name in ["c", "a", "b"] {
            store.put(record(name)).unwrap();
        }

        // Export is the stored array; import replaces wholesale.
        let exported = serde_json::to_string(&store.list().unwrap()).unwrap();
        let other = temp_store("roundtrip-import");
        other
            .replace_all(serde_json::from_str(&exported).unwrap())
            .unwrap();

        assert_eq!(store.list().unwrap(), other.list().unwrap());
    }
}
