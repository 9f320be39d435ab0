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

//! Error types for the upload workflow.

use crate::orchestrator::UploadState;
use clueboard_core::BoardError;
use thiserror::Error;

/// An opaque failure from a [`ClueStore`](crate::ClueStore).
///
/// The message is surfaced to the caller verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct StoreError {
    /// Human-readable error message.
    pub message: String,
}

impl StoreError {
    /// Create a store error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The document does not exist or belongs to another owner.
    pub fn not_found(id: &str) -> Self {
        Self::new(format!("Document not found: {}", id))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Why an upload attempt was aborted.
///
/// Every variant is terminal for the attempt and nothing is persisted unless
/// the failure happened while persisting. Cancellations are distinguishable
/// by message but otherwise handled like any other abort.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The file failed type or size checks.
    #[error("{0}")]
    InvalidFile(String),

    /// The user declined to supply a name or resolve a conflict.
    #[error("Upload cancelled by user")]
    Cancelled {
        /// The prompt that was declined.
        state: UploadState,
    },

    /// The user did not answer a prompt within the configured timeout.
    #[error("Upload timed out waiting for user input")]
    PromptTimedOut {
        /// The prompt that timed out.
        state: UploadState,
    },

    /// The file content is not UTF-8 text.
    #[error("File is not valid UTF-8 text")]
    InvalidEncoding,

    /// The board failed parsing or validation; the message is verbatim.
    #[error("{0}")]
    Parse(#[from] BoardError),

    /// The store rejected a delete or create; the message is verbatim.
    #[error("{source}")]
    Store {
        /// The state the store call was made from.
        state: UploadState,
        /// The underlying store error.
        source: StoreError,
    },
}

impl UploadError {
    /// The state in which the attempt aborted.
    pub fn state(&self) -> UploadState {
        match self {
            Self::InvalidFile(_) => UploadState::ValidatingFile,
            Self::Cancelled { state } | Self::PromptTimedOut { state } | Self::Store { state, .. } => {
                *state
            }
            Self::InvalidEncoding | Self::Parse(_) => UploadState::Parsing,
        }
    }

    /// Whether the user, rather than the system, stopped the upload.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

/// Result type for upload operations.
pub type UploadResult<T> = Result<T, UploadError>;
