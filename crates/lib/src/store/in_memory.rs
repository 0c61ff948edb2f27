//! In-memory page store with optional JSON file snapshots.
//!
//! The canonical store for tests and local development. Pages are held as
//! their persistence DTOs behind an async `RwLock`; `save_to_file` /
//! `load_from_file` snapshot the whole store to a versioned JSON document.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

use super::{Page, PageDto, PageStatus, PageStore, StoreError};
use crate::Result;

/// The current snapshot file format version.
/// v0 indicates this is an unstable format subject to breaking changes.
const SNAPSHOT_VERSION: u8 = 0;

/// Helper to check if version is default (0) for serde skip_serializing_if
fn is_v0(v: &u8) -> bool {
    *v == 0
}

/// Validates the snapshot version during deserialization.
fn validate_snapshot_version<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let version = u8::deserialize(deserializer)?;
    if version != SNAPSHOT_VERSION {
        return Err(serde::de::Error::custom(format!(
            "unsupported snapshot version {version}; only version {SNAPSHOT_VERSION} is supported"
        )));
    }
    Ok(version)
}

/// Serializable form of the store for file snapshots
#[derive(Serialize, Deserialize)]
struct SerializableStore {
    /// File format version for compatibility checking
    #[serde(
        rename = "_v",
        default,
        skip_serializing_if = "is_v0",
        deserialize_with = "validate_snapshot_version"
    )]
    version: u8,
    pages: HashMap<String, PageDto>,
}

/// An in-memory [`PageStore`].
#[derive(Debug, Default)]
pub struct InMemoryStore {
    pages: RwLock<HashMap<String, PageDto>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pages currently held.
    pub async fn len(&self) -> usize {
        self.pages.read().await.len()
    }

    /// Returns true if the store holds no pages.
    pub async fn is_empty(&self) -> bool {
        self.pages.read().await.is_empty()
    }

    /// Writes the whole store to a JSON snapshot file.
    pub async fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let pages = self.pages.read().await;
        let snapshot = SerializableStore {
            version: SNAPSHOT_VERSION,
            pages: pages.clone(),
        };
        let json = serde_json::to_string_pretty(&snapshot)?;
        std::fs::write(path.as_ref(), json)?;
        debug!(pages = pages.len(), path = %path.as_ref().display(), "store snapshot written");
        Ok(())
    }

    /// Reads a store back from a JSON snapshot file.
    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let snapshot: SerializableStore =
            serde_json::from_str(&json).map_err(|e| StoreError::InvalidSnapshot {
                reason: e.to_string(),
            })?;
        debug!(pages = snapshot.pages.len(), path = %path.as_ref().display(), "store snapshot loaded");
        Ok(Self {
            pages: RwLock::new(snapshot.pages),
        })
    }
}

#[async_trait]
impl PageStore for InMemoryStore {
    async fn load(&self, page_id: &str) -> Result<Page> {
        let pages = self.pages.read().await;
        let dto = pages.get(page_id).ok_or_else(|| StoreError::PageNotFound {
            page: page_id.to_string(),
        })?;
        Ok(Page::from_dto(dto))
    }

    async fn save(&self, page: &Page) -> Result<()> {
        let dto = page.to_dto();
        self.pages.write().await.insert(page.id.clone(), dto);
        Ok(())
    }

    async fn publish(&self, page_id: &str) -> Result<Page> {
        let mut pages = self.pages.write().await;
        let dto = pages
            .get_mut(page_id)
            .ok_or_else(|| StoreError::PageNotFound {
                page: page_id.to_string(),
            })?;
        dto.status = PageStatus::Published;
        dto.updated_at = Utc::now().timestamp_millis();
        Ok(Page::from_dto(dto))
    }
}
