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

//! The upload state machine.
//!
//! One call to [`Uploader::upload`] walks a single attempt through
//! validation, naming, duplicate handling, parsing and persistence, strictly
//! in that order. Nothing is written to the store before the persisting step,
//! so every abort before it leaves the store untouched.

use crate::config::UploadConfig;
use crate::error::{UploadError, UploadResult};
use crate::file::{validate_file, UploadFile};
use crate::prompt::{ConflictChoice, ConflictPrompt, NamePrompt};
use crate::store::{ClueStore, DocumentSummary};
use clueboard_core::parse_board_with_options;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use tracing::{debug, info, warn, Instrument};

/// Steps of an upload attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UploadState {
    /// Checking file type and size.
    ValidatingFile,
    /// Waiting for the display name.
    CollectingName,
    /// Looking for an existing document with the same name.
    CheckingDuplicate,
    /// Waiting for the user to resolve a name clash.
    ResolvingConflict,
    /// Parsing and validating the board.
    Parsing,
    /// Deleting the replaced document (if any) and creating the new one.
    Persisting,
    /// Finished successfully.
    Done,
    /// Stopped by an error or a cancellation.
    Aborted,
}

impl fmt::Display for UploadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ValidatingFile => "VALIDATING_FILE",
            Self::CollectingName => "COLLECTING_NAME",
            Self::CheckingDuplicate => "CHECKING_DUPLICATE",
            Self::ResolvingConflict => "RESOLVING_CONFLICT",
            Self::Parsing => "PARSING",
            Self::Persisting => "PERSISTING",
            Self::Done => "DONE",
            Self::Aborted => "ABORTED",
        };
        f.write_str(s)
    }
}

/// Working state of one attempt. Dropped when the attempt ends.
#[derive(Debug)]
struct UploadAttempt {
    state: UploadState,
    history: Vec<UploadState>,
    suggested_name: Option<String>,
    name: Option<String>,
    duplicate: Option<DocumentSummary>,
    choice: Option<ConflictChoice>,
}

impl UploadAttempt {
    fn new() -> Self {
        Self {
            state: UploadState::ValidatingFile,
            history: vec![UploadState::ValidatingFile],
            suggested_name: None,
            name: None,
            duplicate: None,
            choice: None,
        }
    }

    fn advance(&mut self, next: UploadState) {
        debug!(from = %self.state, to = %next, "upload state transition");
        self.state = next;
        self.history.push(next);
    }

    /// Id of the document to delete before creating the new one.
    fn replaced_id(&self) -> Option<&str> {
        match (self.choice, &self.duplicate) {
            (Some(ConflictChoice::Overwrite), Some(existing)) => Some(existing.id.as_str()),
            _ => None,
        }
    }
}

/// Runs uploads against a [`ClueStore`].
///
/// An `Uploader` holds no per-attempt state, so one instance may serve many
/// concurrent uploads.
///
/// # Examples
///
/// ```
/// use clueboard_upload::{
///     ConflictChoice, FixedChoice, FixedName, MemoryStore, UploadConfig, UploadFile, Uploader,
/// };
/// use std::sync::Arc;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let uploader = Uploader::new(Arc::new(MemoryStore::new()), UploadConfig::default());
/// let file = UploadFile::new("notes.txt", "hello");
///
/// let err = uploader
///     .upload(
///         "alice",
///         &file,
///         &FixedName::Suggested,
///         &FixedChoice(Some(ConflictChoice::Overwrite)),
///     )
///     .await
///     .unwrap_err();
/// assert!(err.to_string().contains(".csv"));
/// # });
/// ```
#[derive(Clone)]
pub struct Uploader {
    store: Arc<dyn ClueStore>,
    config: UploadConfig,
}

impl fmt::Debug for Uploader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uploader")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Uploader {
    /// Create an uploader.
    pub fn new(store: Arc<dyn ClueStore>, config: UploadConfig) -> Self {
        Self { store, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &UploadConfig {
        &self.config
    }

    /// Upload `file` on behalf of `owner` and return the new document id.
    ///
    /// `names` is asked for the display name; `conflicts` is asked only when
    /// the owner already has a document whose name matches
    /// case-insensitively. Answering `None` to either prompt aborts with
    /// "Upload cancelled by user". Choosing [`ConflictChoice::Overwrite`]
    /// deletes the existing document before the new one is created;
    /// [`ConflictChoice::Cancel`] keeps it and saves the upload alongside.
    ///
    /// # Errors
    ///
    /// Any step may abort the attempt; see [`UploadError`]. Failures of the
    /// duplicate lookup are not errors: the upload proceeds as if no
    /// duplicate existed.
    pub async fn upload(
        &self,
        owner: &str,
        file: &UploadFile,
        names: &dyn NamePrompt,
        conflicts: &dyn ConflictPrompt,
    ) -> UploadResult<String> {
        let span = tracing::info_span!("upload", owner = %owner, file = %file.file_name);

        async {
            let mut attempt = UploadAttempt::new();
            let result = self
                .run(&mut attempt, owner, file, names, conflicts)
                .await;

            match &result {
                Ok(id) => {
                    attempt.advance(UploadState::Done);
                    info!(document_id = %id, name = ?attempt.name, "upload complete");
                }
                Err(e) => {
                    attempt.advance(UploadState::Aborted);
                    info!(state = %e.state(), error = %e, "upload aborted");
                }
            }
            debug!(
                path = ?attempt.history,
                suggested = ?attempt.suggested_name,
                "attempt finished"
            );
            result
        }
        .instrument(span)
        .await
    }

    async fn run(
        &self,
        attempt: &mut UploadAttempt,
        owner: &str,
        file: &UploadFile,
        names: &dyn NamePrompt,
        conflicts: &dyn ConflictPrompt,
    ) -> UploadResult<String> {
        let suggested = validate_file(file, self.config.max_upload_bytes)?;
        attempt.suggested_name = Some(suggested.clone());

        attempt.advance(UploadState::CollectingName);
        let answer = self
            .ask(UploadState::CollectingName, names.request_name(&suggested))
            .await?;
        let name = match answer.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                return Err(UploadError::Cancelled {
                    state: UploadState::CollectingName,
                })
            }
        };
        attempt.name = Some(name.clone());

        attempt.advance(UploadState::CheckingDuplicate);
        attempt.duplicate = self.find_duplicate(owner, &name).await;

        if let Some(existing) = attempt.duplicate.clone() {
            attempt.advance(UploadState::ResolvingConflict);
            let choice = self
                .ask(
                    UploadState::ResolvingConflict,
                    conflicts.resolve_conflict(&existing.name),
                )
                .await?
                .ok_or(UploadError::Cancelled {
                    state: UploadState::ResolvingConflict,
                })?;
            debug!(existing = %existing.id, choice = %choice, "conflict resolved");
            attempt.choice = Some(choice);
        }

        attempt.advance(UploadState::Parsing);
        let text = file.text()?;
        let document =
            parse_board_with_options(text, &name, &file.file_name, &self.config.parse)?;

        attempt.advance(UploadState::Persisting);
        if let Some(id) = attempt.replaced_id() {
            self.store
                .delete_document(id, owner)
                .await
                .map_err(|source| UploadError::Store {
                    state: UploadState::Persisting,
                    source,
                })?;
            debug!(document_id = %id, "replaced document deleted");
        }

        self.store
            .create_document(&document, owner)
            .await
            .map_err(|source| UploadError::Store {
                state: UploadState::Persisting,
                source,
            })
    }

    /// First of the owner's documents whose name matches case-insensitively.
    async fn find_duplicate(&self, owner: &str, name: &str) -> Option<DocumentSummary> {
        let wanted = name.to_lowercase();
        match self.store.list_documents(owner).await {
            Ok(documents) => documents
                .into_iter()
                .find(|doc| doc.name.to_lowercase() == wanted),
            Err(e) => {
                warn!(error = %e, "duplicate lookup failed, continuing without it");
                None
            }
        }
    }

    async fn ask<T>(
        &self,
        state: UploadState,
        prompt: impl Future<Output = Option<T>>,
    ) -> UploadResult<Option<T>> {
        match self.config.prompt_timeout {
            Some(limit) => tokio::time::timeout(limit, prompt)
                .await
                .map_err(|_| UploadError::PromptTimedOut { state }),
            None => Ok(prompt.await),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{FixedChoice, FixedName};
    use crate::store::MemoryStore;
    use clueboard_test::valid_board_csv;

    fn board(name: &str) -> UploadFile {
        UploadFile::new(name, valid_board_csv())
    }

    async fn run_attempt(
        uploader: &Uploader,
        file: &UploadFile,
        choice: Option<ConflictChoice>,
    ) -> (UploadAttempt, UploadResult<String>) {
        let mut attempt = UploadAttempt::new();
        let result = uploader
            .run(
                &mut attempt,
                "owner",
                file,
                &FixedName::Suggested,
                &FixedChoice(choice),
            )
            .await;
        (attempt, result)
    }

    #[test]
    fn test_state_display() {
        assert_eq!(UploadState::ValidatingFile.to_string(), "VALIDATING_FILE");
        assert_eq!(UploadState::ResolvingConflict.to_string(), "RESOLVING_CONFLICT");
    }

    #[tokio::test]
    async fn test_fresh_upload_skips_conflict_state() {
        let uploader = Uploader::new(Arc::new(MemoryStore::new()), UploadConfig::default());
        let (attempt, result) = run_attempt(&uploader, &board("Game.csv"), None).await;

        assert_eq!(result.unwrap(), "game-1");
        assert_eq!(
            attempt.history,
            vec![
                UploadState::ValidatingFile,
                UploadState::CollectingName,
                UploadState::CheckingDuplicate,
                UploadState::Parsing,
                UploadState::Persisting,
            ]
        );
        assert_eq!(attempt.suggested_name.as_deref(), Some("Game"));
    }

    #[tokio::test]
    async fn test_duplicate_enters_conflict_state() {
        let store = Arc::new(MemoryStore::new());
        let uploader = Uploader::new(store, UploadConfig::default());
        run_attempt(&uploader, &board("Game.csv"), None).await.1.unwrap();

        let (attempt, result) = run_attempt(
            &uploader,
            &board("GAME.csv"),
            Some(ConflictChoice::Overwrite),
        )
        .await;
        assert_eq!(result.unwrap(), "game-2");
        assert!(attempt.history.contains(&UploadState::ResolvingConflict));
        assert_eq!(attempt.replaced_id(), Some("game-1"));
    }

    #[tokio::test]
    async fn test_cancel_choice_replaces_nothing() {
        let uploader = Uploader::new(Arc::new(MemoryStore::new()), UploadConfig::default());
        run_attempt(&uploader, &board("Game.csv"), None).await.1.unwrap();

        let (attempt, result) =
            run_attempt(&uploader, &board("game.csv"), Some(ConflictChoice::Cancel)).await;
        assert!(result.is_ok());
        assert_eq!(attempt.replaced_id(), None);
    }
}
