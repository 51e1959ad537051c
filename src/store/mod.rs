//! Saved-request presets.
//!
//! The frontend keeps its own copy of this collection in browser local
//! storage; this module is the server-side rendition behind an explicit
//! injected interface, so routes depend on the trait rather than on any
//! particular backing.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::relay::{Method, RequestDescriptor};
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// One header row as edited in the form. Rows with an empty key or empty
/// value are dropped when the descriptor is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderRow {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    None,
    Bearer,
    Basic,
}

/// A named, persisted request preset. The field layout matches the JSON
/// array the frontend keeps under its local-storage key and exchanges via
/// export/import files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRequestRecord {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub url: String,
    pub method: Method,
    #[serde(default)]
    pub headers: Vec<HeaderRow>,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub auth_type: AuthMode,
    #[serde(default)]
    pub bearer_token: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl SavedRequestRecord {
    /// Builds the relay descriptor from this preset: header rows with an
    /// empty key or value are dropped, and an `Authorization` header is
    /// synthesized when an auth mode other than `none` is selected.
    pub fn to_descriptor(&self) -> RequestDescriptor {
        let mut headers: HashMap<String, String> = self
            .headers
            .iter()
            .filter(|row| !row.key.is_empty() && !row.value.is_empty())
            .map(|row| (row.key.clone(), row.value.clone()))
            .collect();

        match self.auth_type {
            AuthMode::None => {}
            AuthMode::Bearer => {
                headers.insert(
                    "Authorization".to_string(),
                    format!("Bearer {}", self.bearer_token),
                );
            }
            AuthMode::Basic => {
                let credentials = base64::engine::general_purpose::STANDARD
                    .encode(format!("{}:{}", self.username, self.password));
                headers.insert("Authorization".to_string(), format!("Basic {}", credentials));
            }
        }

        RequestDescriptor {
            url: self.url.clone(),
            method: self.method,
            headers,
            body: if self.body.is_empty() {
                None
            } else {
                Some(self.body.clone())
            },
            timeout: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store lock poisoned")]
    Poisoned,
}

/// Injected preset store interface. `put` always appends: saving under an
/// existing name duplicates rather than updating, since ids, not names, are
/// the identity.
pub trait PresetStore: Send + Sync {
    fn list(&self) -> Result<Vec<SavedRequestRecord>, StoreError>;
    fn put(&self, record: SavedRequestRecord) -> Result<SavedRequestRecord, StoreError>;
    fn delete_by_id(&self, id: &str) -> Result<(), StoreError>;
    fn replace_all(&self, records: Vec<SavedRequestRecord>) -> Result<(), StoreError>;
}

/// Millisecond-epoch ids with a process-wide sequence suffix, so two saves
/// landing in the same millisecond still get distinct ids and
/// `delete_by_id` removes exactly one record.
pub(crate) fn assign_id() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    static SEQ: AtomicU64 = AtomicU64::new(0);

    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("{}-{}", millis, SEQ.fetch_add(1, Ordering::Relaxed))
}
