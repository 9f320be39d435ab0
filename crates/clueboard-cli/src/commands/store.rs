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

//! Store commands - listing, exporting and deleting stored boards

use super::{block_on, write_output};
use crate::error::CliError;
use crate::store::DirectoryStore;
use clueboard_core::to_csv;
use clueboard_upload::ClueStore;
use colored::Colorize;

/// List the owner's stored boards, one `<id>  <name>` line each.
///
/// # Errors
///
/// Returns `Err` if the store cannot be read.
pub fn list(store: &str, owner: &str) -> Result<(), CliError> {
    let store = DirectoryStore::open(store)?;
    let documents = block_on(store.list_documents(owner))??;

    if documents.is_empty() {
        println!("No boards stored for '{}'", owner);
    }
    for summary in documents {
        println!("{}  {}", summary.id.yellow(), summary.name);
    }
    Ok(())
}

/// Render a stored board back to CSV.
///
/// # Errors
///
/// Returns `Err` if the owner has no document with this id, the store cannot
/// be read, or writing fails.
pub fn export(id: &str, store: &str, owner: &str, output: Option<&str>) -> Result<(), CliError> {
    let store = DirectoryStore::open(store)?;
    let document = block_on(store.get_document(id, owner))??
        .ok_or_else(|| CliError::NotFound(id.to_string()))?;

    write_output(&to_csv(&document)?, output)
}

/// Delete a stored board.
///
/// # Errors
///
/// Returns `Err` if the owner has no document with this id or the file
/// cannot be removed.
pub fn delete(id: &str, store: &str, owner: &str) -> Result<(), CliError> {
    let store = DirectoryStore::open(store)?;
    block_on(store.delete_document(id, owner))??;

    println!("{} Deleted {}", "✓".green().bold(), id);
    Ok(())
}
