//! Page persistence boundary.
//!
//! The editor core never performs I/O itself: loading and saving documents
//! goes through the [`PageStore`] collaborator, the one asynchronous seam
//! in the crate. A save replaces the whole page document (last-write-wins
//! at page granularity, no field-level merging), and always runs the
//! transport sanitization pass first so the persisted JSON carries explicit
//! nulls instead of absent values.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::component::Component;
use crate::transport::{self, ComponentDto};

pub mod errors;
mod in_memory;

pub use errors::StoreError;
pub use in_memory::InMemoryStore;

/// Publication state of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageStatus {
    Draft,
    Published,
}

/// A page document: the canvas tree plus its editing metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub id: String,
    pub name: String,
    pub project_id: String,
    pub status: PageStatus,
    pub components: Vec<Arc<Component>>,
    /// Creation time, unix millis.
    pub created_at: i64,
    /// Last modification time, unix millis.
    pub updated_at: i64,
}

impl Page {
    /// Creates a fresh draft page with an empty canvas.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        project_id: impl Into<String>,
    ) -> Self {
        let now = Utc::now().timestamp_millis();
        Self {
            id: id.into(),
            name: name.into(),
            project_id: project_id.into(),
            status: PageStatus::Draft,
            components: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Stamps the page as modified now.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now().timestamp_millis();
    }

    /// Converts to the persistence DTO, sanitizing the component tree.
    pub fn to_dto(&self) -> PageDto {
        let sanitized = transport::sanitize_for_persistence(&self.components);
        PageDto {
            id: self.id.clone(),
            name: self.name.clone(),
            project_id: self.project_id.clone(),
            status: self.status,
            components: transport::tree_to_transport(&sanitized),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Rebuilds a page from its persistence DTO.
    pub fn from_dto(dto: &PageDto) -> Self {
        Self {
            id: dto.id.clone(),
            name: dto.name.clone(),
            project_id: dto.project_id.clone(),
            status: dto.status,
            components: transport::tree_from_transport(&dto.components),
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}

/// Persistence shape of a [`Page`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDto {
    pub id: String,
    pub name: String,
    pub project_id: String,
    pub status: PageStatus,
    pub components: Vec<ComponentDto>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Storage abstraction for page documents.
///
/// Implementations handle where documents live (memory, disk, a remote
/// document store); the editor core only ever sees whole pages. All
/// implementations must be `Send + Sync` so a store can be shared with the
/// surrounding async page controller.
#[async_trait]
pub trait PageStore: Send + Sync {
    /// Loads a page by id.
    ///
    /// Returns a not-found error if the id is unknown.
    async fn load(&self, page_id: &str) -> Result<Page>;

    /// Saves a page, replacing any previous version wholesale.
    async fn save(&self, page: &Page) -> Result<()>;

    /// Marks a page as published and returns the updated page.
    async fn publish(&self, page_id: &str) -> Result<Page>;
}
