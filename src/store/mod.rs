//! Persistence collaborator interfaces
//!
//! The editor consumes persistence, conversation storage, and identity
//! as external collaborators behind these traits. The wire contract is
//! the persisted project shape `{name, lines}`; a loaded document,
//! re-saved unmodified, must yield byte-for-byte identical `lines`.

pub mod autosave;
pub mod memory;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::core::Line;
use crate::models::messages::ConversationMessage;

pub use autosave::{AutosaveScheduler, AUTOSAVE_DELAY_MS};
pub use memory::{FixedIdentity, MemoryConversationStore, MemoryProjectStore};

/// Opaque project identifier assigned by the store
pub type ProjectId = String;

/// Opaque user identifier from the identity provider
pub type UserId = String;

/// The persisted project payload
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProjectData {
    pub name: String,
    pub lines: Vec<Line>,
}

/// A stored project with its metadata
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub name: String,
    pub lines: Vec<Line>,
    pub owner_id: UserId,

    /// RFC 3339 timestamp of the last update
    pub updated_at: String,
}

/// Partial update for an existing project
///
/// `None` fields are left untouched by `update`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub lines: Option<Vec<Line>>,
}

/// Store errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// No record with the requested id
    #[error("project not found")]
    NotFound,

    /// Transient collaborator failure; retried on the next natural
    /// trigger, never corrupts in-memory state
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Remote project record store (CRUD)
pub trait ProjectStore {
    /// Create a project for an owner, returning its new id
    fn create(&mut self, owner_id: &str, data: ProjectData) -> Result<ProjectId, StoreError>;

    /// Fetch a project by id
    fn get(&self, id: &str) -> Result<ProjectRecord, StoreError>;

    /// Apply a partial update to a project
    fn update(&mut self, id: &str, patch: ProjectPatch) -> Result<(), StoreError>;

    /// Remove a project
    fn delete(&mut self, id: &str) -> Result<(), StoreError>;

    /// All projects owned by a user, newest-first by last update
    fn list(&self, owner_id: &str) -> Result<Vec<ProjectRecord>, StoreError>;
}

/// Per-project assistant conversation storage
pub trait ConversationStore {
    /// Persist the full message list for a project
    fn save(&mut self, project_id: &str, messages: &[ConversationMessage])
        -> Result<(), StoreError>;

    /// Load the message list; empty when none has been saved
    fn load(&self, project_id: &str) -> Result<Vec<ConversationMessage>, StoreError>;
}

/// Opaque current-user identity provider
pub trait Identity {
    fn current_user(&self) -> Option<UserId>;
}
