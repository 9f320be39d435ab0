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

//! Interactive prompts the upload workflow asks the caller to answer.

use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;

/// How to handle an upload whose name matches an existing document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictChoice {
    /// Delete the existing document, then save the upload.
    Overwrite,
    /// Decline the overwrite. The upload is still saved, alongside the
    /// existing document.
    Cancel,
}

impl fmt::Display for ConflictChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overwrite => write!(f, "overwrite"),
            Self::Cancel => write!(f, "cancel"),
        }
    }
}

impl FromStr for ConflictChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overwrite" => Ok(Self::Overwrite),
            "cancel" => Ok(Self::Cancel),
            other => Err(format!(
                "unknown conflict choice '{}' (expected overwrite or cancel)",
                other
            )),
        }
    }
}

/// Asks for the display name of an upload.
#[async_trait]
pub trait NamePrompt: Send + Sync {
    /// Return the chosen name, or `None` to cancel.
    ///
    /// May suspend for as long as the user takes to answer.
    async fn request_name(&self, suggested: &str) -> Option<String>;
}

/// Asks what to do about a name clash with an existing document.
#[async_trait]
pub trait ConflictPrompt: Send + Sync {
    /// Return the user's choice, or `None` to cancel the upload.
    async fn resolve_conflict(&self, existing_name: &str) -> Option<ConflictChoice>;
}

/// A [`NamePrompt`] with a fixed answer.
///
/// `FixedName::Suggested` accepts whatever name is suggested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixedName {
    /// Accept the suggested name.
    Suggested,
    /// Always answer with this name.
    Name(String),
    /// Always cancel.
    Cancel,
}

#[async_trait]
impl NamePrompt for FixedName {
    async fn request_name(&self, suggested: &str) -> Option<String> {
        match self {
            Self::Suggested => Some(suggested.to_string()),
            Self::Name(name) => Some(name.clone()),
            Self::Cancel => None,
        }
    }
}

/// A [`ConflictPrompt`] with a fixed answer (`None` cancels the upload).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedChoice(pub Option<ConflictChoice>);

#[async_trait]
impl ConflictPrompt for FixedChoice {
    async fn resolve_conflict(&self, _existing_name: &str) -> Option<ConflictChoice> {
        self.0
    }
}
