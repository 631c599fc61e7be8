//! In-memory collaborator implementations
//!
//! Back the native test suite and any session running without a remote
//! store. Ordering for `list` follows update recency via a monotonic
//! sequence number, so two writes within the same timestamp tick still
//! order deterministically.

use std::collections::HashMap;

use crate::models::messages::ConversationMessage;

use super::{
    ConversationStore, Identity, ProjectData, ProjectId, ProjectPatch, ProjectRecord,
    ProjectStore, StoreError, UserId,
};

/// In-memory project store
#[derive(Default)]
pub struct MemoryProjectStore {
    records: HashMap<ProjectId, (ProjectRecord, u64)>,
    next_id: u64,
    next_seq: u64,
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn bump_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }
}

impl ProjectStore for MemoryProjectStore {
    fn create(&mut self, owner_id: &str, data: ProjectData) -> Result<ProjectId, StoreError> {
        self.next_id += 1;
        let id = format!("p{}", self.next_id);
        let record = ProjectRecord {
            id: id.clone(),
            name: data.name,
            lines: data.lines,
            owner_id: owner_id.to_string(),
            updated_at: chrono::Utc::now().to_rfc3339(),
        };
        let seq = self.bump_seq();
        self.records.insert(id.clone(), (record, seq));
        Ok(id)
    }

    fn get(&self, id: &str) -> Result<ProjectRecord, StoreError> {
        self.records
            .get(id)
            .map(|(record, _)| record.clone())
            .ok_or(StoreError::NotFound)
    }

    fn update(&mut self, id: &str, patch: ProjectPatch) -> Result<(), StoreError> {
        let seq = self.bump_seq();
        let (record, stored_seq) = self.records.get_mut(id).ok_or(StoreError::NotFound)?;
        if let Some(name) = patch.name {
            record.name = name;
        }
        if let Some(lines) = patch.lines {
            record.lines = lines;
        }
        record.updated_at = chrono::Utc::now().to_rfc3339();
        *stored_seq = seq;
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        self.records
            .remove(id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }

    fn list(&self, owner_id: &str) -> Result<Vec<ProjectRecord>, StoreError> {
        let mut owned: Vec<&(ProjectRecord, u64)> = self
            .records
            .values()
            .filter(|(record, _)| record.owner_id == owner_id)
            .collect();
        owned.sort_by(|a, b| b.1.cmp(&a.1));
        Ok(owned.into_iter().map(|(record, _)| record.clone()).collect())
    }
}

/// In-memory conversation store
#[derive(Default)]
pub struct MemoryConversationStore {
    conversations: HashMap<ProjectId, Vec<ConversationMessage>>,
}

impl MemoryConversationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ConversationStore for MemoryConversationStore {
    fn save(
        &mut self,
        project_id: &str,
        messages: &[ConversationMessage],
    ) -> Result<(), StoreError> {
        self.conversations
            .insert(project_id.to_string(), messages.to_vec());
        Ok(())
    }

    fn load(&self, project_id: &str) -> Result<Vec<ConversationMessage>, StoreError> {
        Ok(self
            .conversations
            .get(project_id)
            .cloned()
            .unwrap_or_default())
    }
}

/// Identity provider with a fixed current user
pub struct FixedIdentity(pub Option<UserId>);

impl Identity for FixedIdentity {
    fn current_user(&self) -> Option<UserId> {
        self.0.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::core::Document;
    use crate::models::messages::MessageRole;

    fn data(name: &str) -> ProjectData {
        let doc = Document::seed(name);
        ProjectData {
            name: doc.name,
            lines: doc.lines,
        }
    }

    #[test]
    fn test_create_then_get() {
        let mut store = MemoryProjectStore::new();
        let id = store.create("u1", data("Pilot")).unwrap();

        let record = store.get(&id).unwrap();
        assert_eq!(record.name, "Pilot");
        assert_eq!(record.owner_id, "u1");
        assert_eq!(record.lines.len(), 8);
    }

    #[test]
    fn test_get_missing_is_not_found() {
        let store = MemoryProjectStore::new();
        assert_eq!(store.get("p404"), Err(StoreError::NotFound));
    }

    #[test]
    fn test_partial_update() {
        let mut store = MemoryProjectStore::new();
        let id = store.create("u1", data("Pilot")).unwrap();

        store
            .update(&id, ProjectPatch { name: Some("Pilot v2".into()), lines: None })
            .unwrap();

        let record = store.get(&id).unwrap();
        assert_eq!(record.name, "Pilot v2");
        assert_eq!(record.lines.len(), 8);
    }

    #[test]
    fn test_list_orders_newest_first_and_filters_owner() {
        let mut store = MemoryProjectStore::new();
        let a = store.create("u1", data("A")).unwrap();
        let b = store.create("u1", data("B")).unwrap();
        store.create("u2", data("C")).unwrap();

        // Touching A makes it the most recently updated
        store.update(&a, ProjectPatch::default()).unwrap();

        let listed = store.list("u1").unwrap();
        assert_eq!(
            listed.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            vec![a.as_str(), b.as_str()]
        );
    }

    #[test]
    fn test_delete_removes_record() {
        let mut store = MemoryProjectStore::new();
        let id = store.create("u1", data("Pilot")).unwrap();

        store.delete(&id).unwrap();
        assert_eq!(store.get(&id), Err(StoreError::NotFound));
        assert_eq!(store.delete(&id), Err(StoreError::NotFound));
    }

    #[test]
    fn test_conversation_load_defaults_empty() {
        let store = MemoryConversationStore::new();
        assert!(store.load("p1").unwrap().is_empty());
    }

    #[test]
    fn test_conversation_round_trip() {
        let mut store = MemoryConversationStore::new();
        let messages = vec![ConversationMessage::new(
            "m1",
            "Make the ending land harder.",
            MessageRole::User,
        )];

        store.save("p1", &messages).unwrap();
        assert_eq!(store.load("p1").unwrap(), messages);
    }
}
