//! In-memory preset store, used by tests and anywhere persistence is not
//! wanted.

use super::{assign_id, PresetStore, SavedRequestRecord, StoreError};
use std::sync::Mutex;

#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<SavedRequestRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PresetStore for MemoryStore {
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
        Ok(record)
    }

    fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let mut records = self.records.lock().map_err(|_| StoreError::Poisoned)?;
        records.retain(|record| record.id != id);
        Ok(())
    }

    fn replace_all(&self, new_records: Vec<SavedRequestRecord>) -> Result<(), StoreError> {
        let mut records = self.records.lock().map_err(|_| StoreError::Poisoned)?;
        *records = new_records;
        Ok(())
    }
}
