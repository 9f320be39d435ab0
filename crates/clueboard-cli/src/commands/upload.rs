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

//! Upload command - the upload workflow against a directory store

use super::{block_on, read_bytes};
use crate::error::CliError;
use crate::store::DirectoryStore;
use async_trait::async_trait;
use clueboard_upload::{
    ConflictChoice, ConflictPrompt, FixedChoice, FixedName, NamePrompt, UploadConfig, UploadFile,
    UploadResponse, Uploader,
};
use std::path::Path;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdin};
use tokio::sync::Mutex;

/// Upload a board file on behalf of `owner`.
///
/// `name` and `on_conflict` answer the workflow's prompts up front; when
/// either is absent the question is asked on stderr and answered on stdin.
/// The outcome is printed to stdout as JSON (`{"success": ..., ...}`).
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or the upload aborts.
pub fn upload(
    file: &str,
    store: &str,
    owner: &str,
    name: Option<String>,
    on_conflict: Option<ConflictChoice>,
) -> Result<(), CliError> {
    let content = read_bytes(file)?;
    let file_name = Path::new(file)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(file);
    let upload_file = UploadFile::new(file_name, content);

    let store = DirectoryStore::open(store)?;
    let uploader = Uploader::new(Arc::new(store), UploadConfig::from_env());

    let stdin = StdinPrompt::new();
    let fixed_name = name.map(FixedName::Name);
    let fixed_choice = on_conflict.map(|choice| FixedChoice(Some(choice)));
    let names: &dyn NamePrompt = match &fixed_name {
        Some(fixed) => fixed,
        None => &stdin,
    };
    let conflicts: &dyn ConflictPrompt = match &fixed_choice {
        Some(fixed) => fixed,
        None => &stdin,
    };

    let result = block_on(uploader.upload(owner, &upload_file, names, conflicts))?;
    let failure = result.as_ref().err().map(|e| e.to_string());

    let response = UploadResponse::from(result);
    println!("{}", serde_json::to_string_pretty(&response)?);

    match failure {
        Some(message) => Err(CliError::Upload(message)),
        None => Ok(()),
    }
}

/// Answers prompts interactively. End of input cancels.
struct StdinPrompt {
    input: Mutex<BufReader<Stdin>>,
}

impl StdinPrompt {
    fn new() -> Self {
        Self {
            input: Mutex::new(BufReader::new(tokio::io::stdin())),
        }
    }

    /// Print `question` to stderr and read one line, `None` at end of input.
    async fn ask(&self, question: &str) -> Option<String> {
        let mut stderr = tokio::io::stderr();
        stderr.write_all(question.as_bytes()).await.ok()?;
        stderr.flush().await.ok()?;

        let mut line = String::new();
        let read = self.input.lock().await.read_line(&mut line).await.ok()?;
        if read == 0 {
            return None;
        }
        Some(line.trim().to_string())
    }
}

#[async_trait]
impl NamePrompt for StdinPrompt {
    async fn request_name(&self, suggested: &str) -> Option<String> {
        let answer = self.ask(&format!("Board name [{}]: ", suggested)).await?;
        if answer.is_empty() {
            Some(suggested.to_string())
        } else {
            Some(answer)
        }
    }
}

#[async_trait]
impl ConflictPrompt for StdinPrompt {
    async fn resolve_conflict(&self, existing_name: &str) -> Option<ConflictChoice> {
        let question = format!(
            "A board named '{}' already exists. Overwrite it? [overwrite/cancel]: ",
            existing_name
        );
        let answer = self.ask(&question).await?;
        parse_answer(&answer)
    }
}

/// Interpret a typed conflict answer. Anything unrecognized cancels.
fn parse_answer(answer: &str) -> Option<ConflictChoice> {
    match answer.to_ascii_lowercase().as_str() {
        "o" | "y" | "yes" => Some(ConflictChoice::Overwrite),
        "c" | "n" | "no" => Some(ConflictChoice::Cancel),
        other => other.parse().ok(),
    }
}
