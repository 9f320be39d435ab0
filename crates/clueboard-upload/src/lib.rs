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

//! Upload workflow for Clueboard.
//!
//! Wraps the board pipeline from `clueboard-core` with the steps a file
//! upload needs around it: type and size checks, a display-name prompt,
//! duplicate detection with an overwrite prompt, and the final commit to a
//! [`ClueStore`].
//!
//! # Example
//!
//! ```
//! use clueboard_upload::{
//!     FixedChoice, FixedName, MemoryStore, UploadConfig, UploadFile, UploadResponse, Uploader,
//! };
//! use std::sync::Arc;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let uploader = Uploader::new(Arc::new(MemoryStore::new()), UploadConfig::default());
//! let file = UploadFile::new("Friday Night.csv", clueboard_test::valid_board_csv());
//!
//! let result = uploader
//!     .upload("alice", &file, &FixedName::Suggested, &FixedChoice(None))
//!     .await;
//! let response = UploadResponse::from(result);
//! assert_eq!(response.document_id(), Some("game-1"));
//! # });
//! ```
//!
//! # Logging
//!
//! Each attempt runs inside an `upload` tracing span carrying the owner and
//! file name. State transitions are logged at `debug`, outcomes at `info`,
//! and failed duplicate lookups at `warn`.

mod config;
mod error;
mod file;
mod orchestrator;
mod prompt;
mod response;
mod store;

pub use config::{UploadConfig, DEFAULT_MAX_UPLOAD_BYTES, MAX_UPLOAD_SIZE_ENV};
pub use error::{StoreError, StoreResult, UploadError, UploadResult};
pub use file::{suggest_name, validate_file, UploadFile, ACCEPTED_CONTENT_TYPES, DEFAULT_GAME_NAME};
pub use orchestrator::{UploadState, Uploader};
pub use prompt::{ConflictChoice, ConflictPrompt, FixedChoice, FixedName, NamePrompt};
pub use response::UploadResponse;
pub use store::{ClueStore, DocumentSummary, MemoryStore};
