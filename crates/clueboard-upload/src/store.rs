// Dweve Clueboard - Trivia Board Ingestion
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The Clue Store boundary and an in-memory implementation.

use crate::error::{StoreError, StoreResult};
use async_trait::async_trait;
use clueboard_core::GameDocument;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifier and display name of a stored document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Store-assigned identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// Persistence boundary for game documents.
///
/// Every operation is scoped to an owner and may fail. Implementations hold
/// whatever state they need; the upload workflow only calls these methods
/// and assumes nothing about idempotency.
#[async_trait]
pub trait ClueStore: Send + Sync {
    /// List the owner's documents.
    async fn list_documents(&self, owner: &str) -> StoreResult<Vec<DocumentSummary>>;

    /// Delete one of the owner's documents.
    async fn delete_document(&self, id: &str, owner: &str) -> StoreResult<()>;

    /// Store a new document and return its identifier.
    async fn create_document(&self, doc: &GameDocument, owner: &str) -> StoreResult<String>;

    /// Read a document back, or `None` if the owner has no such document.
    async fn get_document(&self, id: &str, owner: &str) -> StoreResult<Option<GameDocument>>;
}

#[derive(Debug, Clone)]
struct StoredDocument {
    owner: String,
    document: GameDocument,
}

/// Thread-safe in-memory [`ClueStore`].
///
/// Identifiers are `game-1`, `game-2`, ... in creation order and are never
/// reused. Listing returns documents in creation order.
///
/// # Examples
///
/// ```
/// use clueboard_core::{parse_board, template_csv, BoardShape};
/// use clueboard_upload::{ClueStore, MemoryStore};
///
/// let rt = tokio::runtime::Runtime::new().unwrap();
/// rt.block_on(async {
///     let store = MemoryStore::new();
///     let doc = parse_board(&template_csv(&BoardShape::default()).unwrap(), "Demo", "demo.csv").unwrap();
///     let id = store.create_document(&doc, "alice").await.unwrap();
///     assert_eq!(id, "game-1");
///     assert_eq!(store.list_documents("alice").await.unwrap().len(), 1);
///     assert!(store.list_documents("bob").await.unwrap().is_empty());
/// });
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: DashMap<String, StoredDocument>,
    next_id: AtomicU64,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents across all owners.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Numeric suffix of a `game-N` id, for ordering.
pub(crate) fn id_sequence(id: &str) -> u64 {
    id.strip_prefix("game-")
        .and_then(|n| n.parse().ok())
        .unwrap_or(0)
}

#[async_trait]
impl ClueStore for MemoryStore {
    async fn list_documents(&self, owner: &str) -> StoreResult<Vec<DocumentSummary>> {
        let mut summaries: Vec<DocumentSummary> = self
            .documents
            .iter()
            .filter(|entry| entry.value().owner == owner)
            .map(|entry| DocumentSummary {
                id: entry.key().clone(),
                name: entry.value().document.name.clone(),
            })
            .collect();
        summaries.sort_by_key(|summary| id_sequence(&summary.id));
        Ok(summaries)
    }

    async fn delete_document(&self, id: &str, owner: &str) -> StoreResult<()> {
        self.documents
            .remove_if(id, |_, stored| stored.owner == owner)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found(id))
    }

    async fn create_document(&self, doc: &GameDocument, owner: &str) -> StoreResult<String> {
        let id = format!("game-{}", self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        self.documents.insert(
            id.clone(),
            StoredDocument {
                owner: owner.to_string(),
                document: doc.clone(),
            },
        );
        Ok(id)
    }

    async fn get_document(&self, id: &str, owner: &str) -> StoreResult<Option<GameDocument>> {
        Ok(self
            .documents
            .get(id)
            .filter(|stored| stored.owner == owner)
            .map(|stored| stored.document.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clueboard_core::parse_board;
    use clueboard_test::valid_board_csv;

    fn doc(name: &str) -> GameDocument {
        parse_board(&valid_board_csv(), name, "test.csv").unwrap()
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = MemoryStore::new();
        assert_eq!(store.create_document(&doc("A"), "o").await.unwrap(), "game-1");
        assert_eq!(store.create_document(&doc("B"), "o").await.unwrap(), "game-2");
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_list_is_owner_scoped_and_ordered() {
        let store = MemoryStore::new();
        for i in 0..12 {
            store
                .create_document(&doc(&format!("Game {}", i)), "alice")
                .await
                .unwrap();
        }
        store.create_document(&doc("Other"), "bob").await.unwrap();

        let listed = store.list_documents("alice").await.unwrap();
        assert_eq!(listed.len(), 12);
        assert_eq!(listed[0].name, "Game 0");
        assert_eq!(listed[11].id, "game-12");
    }

    #[tokio::test]
    async fn test_delete_requires_owner() {
        let store = MemoryStore::new();
        let id = store.create_document(&doc("A"), "alice").await.unwrap();

        let err = store.delete_document(&id, "bob").await.unwrap_err();
        assert_eq!(err, StoreError::not_found(&id));
        assert_eq!(store.len(), 1);

        store.delete_document(&id, "alice").await.unwrap();
        assert!(store.is_empty());
        assert!(store.delete_document(&id, "alice").await.is_err());
    }

    #[tokio::test]
    async fn test_get_document_round_trips() {
        let store = MemoryStore::new();
        let original = doc("Round Trip");
        let id = store.create_document(&original, "alice").await.unwrap();

        assert_eq!(store.get_document(&id, "alice").await.unwrap(), Some(original));
        assert_eq!(store.get_document(&id, "bob").await.unwrap(), None);
        assert_eq!(store.get_document("game-99", "alice").await.unwrap(), None);
    }

    #[test]
    fn test_id_sequence() {
        assert_eq!(id_sequence("game-42"), 42);
        assert_eq!(id_sequence("other"), 0);
    }
}
