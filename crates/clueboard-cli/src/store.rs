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

//! A [`ClueStore`] backed by a directory of JSON files.
//!
//! Each document lives in `<id>.json` as `{"owner": ..., "document": ...}`.
//! Ids are `game-<n>`, with `n` one past the highest id already present.

use async_trait::async_trait;
use clueboard_core::GameDocument;
use clueboard_upload::{ClueStore, DocumentSummary, StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

const ID_PREFIX: &str = "game-";

#[derive(Debug, Serialize, Deserialize)]
struct StoredFile {
    owner: String,
    document: GameDocument,
}

/// Directory-backed document store.
///
/// Creation is serialized within one process. Separate processes writing the
/// same directory may race on id assignment.
#[derive(Debug)]
pub struct DirectoryStore {
    root: PathBuf,
    create_lock: Mutex<()>,
}

impl DirectoryStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root).map_err(|e| io_error(&root, e))?;
        Ok(Self {
            root,
            create_lock: Mutex::new(()),
        })
    }

    /// The store directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.root.join(format!("{}.json", id))
    }

    /// Ids of every stored document, in ascending sequence order.
    async fn ids(&self) -> StoreResult<Vec<(u64, String)>> {
        let mut entries = tokio::fs::read_dir(&self.root)
            .await
            .map_err(|e| io_error(&self.root, e))?;

        let mut ids = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| io_error(&self.root, e))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if let Some(seq) = sequence(stem) {
                ids.push((seq, stem.to_string()));
            }
        }
        ids.sort();
        Ok(ids)
    }

    /// Load a document file, or `None` if it does not exist.
    async fn load(&self, id: &str) -> StoreResult<Option<StoredFile>> {
        if sequence(id).is_none() {
            return Ok(None);
        }
        let path = self.path_for(id);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_error(&path, e)),
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| StoreError::new(format!("Corrupt document '{}': {}", path.display(), e)))
    }
}

#[async_trait]
impl ClueStore for DirectoryStore {
    async fn list_documents(&self, owner: &str) -> StoreResult<Vec<DocumentSummary>> {
        let mut summaries = Vec::new();
        for (_, id) in self.ids().await? {
            if let Some(stored) = self.load(&id).await? {
                if stored.owner == owner {
                    summaries.push(DocumentSummary {
                        id,
                        name: stored.document.name,
                    });
                }
            }
        }
        Ok(summaries)
    }

    async fn delete_document(&self, id: &str, owner: &str) -> StoreResult<()> {
        match self.load(id).await? {
            Some(stored) if stored.owner == owner => {
                let path = self.path_for(id);
                tokio::fs::remove_file(&path)
                    .await
                    .map_err(|e| io_error(&path, e))?;
                tracing::debug!(document_id = %id, "document file removed");
                Ok(())
            }
            _ => Err(StoreError::not_found(id)),
        }
    }

    async fn create_document(&self, doc: &GameDocument, owner: &str) -> StoreResult<String> {
        let _guard = self.create_lock.lock().await;

        let next = self
            .ids()
            .await?
            .last()
            .map_or(1, |(seq, _)| seq + 1);
        let id = format!("{}{}", ID_PREFIX, next);

        let stored = StoredFile {
            owner: owner.to_string(),
            document: doc.clone(),
        };
        let json = serde_json::to_string_pretty(&stored)
            .map_err(|e| StoreError::new(format!("Failed to serialize document: {}", e)))?;

        let path = self.path_for(&id);
        tokio::fs::write(&path, json)
            .await
            .map_err(|e| io_error(&path, e))?;
        tracing::debug!(document_id = %id, path = %path.display(), "document file written");
        Ok(id)
    }

    async fn get_document(&self, id: &str, owner: &str) -> StoreResult<Option<GameDocument>> {
        Ok(self
            .load(id)
            .await?
            .filter(|stored| stored.owner == owner)
            .map(|stored| stored.document))
    }
}

/// Numeric part of a `game-<n>` id.
fn sequence(id: &str) -> Option<u64> {
    id.strip_prefix(ID_PREFIX)?.parse().ok()
}

fn io_error(path: &Path, e: io::Error) -> StoreError {
    StoreError::new(format!("I/O error for '{}': {}", path.display(), e))
}
