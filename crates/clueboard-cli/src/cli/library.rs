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

//! Commands operating on a document store.

use crate::commands;
use crate::error::CliError;
use clap::{Args, Subcommand};
use clueboard_upload::ConflictChoice;

/// Location and acting owner shared by every store command.
#[derive(Args, Debug, Clone)]
pub struct StoreArgs {
    /// Store directory (created if missing)
    #[arg(long, value_name = "DIR")]
    pub store: String,

    /// Owner the command acts for
    #[arg(long, value_name = "ID")]
    pub owner: String,
}

/// Document store commands.
#[derive(Subcommand)]
pub enum LibraryCommands {
    /// Upload a board file to the store
    ///
    /// Validates the file, asks for a display name, checks for a board with
    /// the same name and asks whether to overwrite it, then saves the board.
    /// Prints the outcome as JSON.
    Upload {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        #[command(flatten)]
        store: StoreArgs,

        /// Display name (asked on stdin when omitted)
        #[arg(long)]
        name: Option<String>,

        /// What to do when a board with the same name exists (overwrite, cancel)
        #[arg(long, value_name = "CHOICE")]
        on_conflict: Option<ConflictChoice>,
    },

    /// List stored boards
    List {
        #[command(flatten)]
        store: StoreArgs,
    },

    /// Export a stored board as CSV
    Export {
        /// Document id
        #[arg(value_name = "DOCUMENT_ID")]
        id: String,

        #[command(flatten)]
        store: StoreArgs,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Delete a stored board
    Delete {
        /// Document id
        #[arg(value_name = "DOCUMENT_ID")]
        id: String,

        #[command(flatten)]
        store: StoreArgs,
    },
}

impl LibraryCommands {
    /// Execute the store command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the command execution fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            LibraryCommands::Upload {
                file,
                store,
                name,
                on_conflict,
            } => commands::upload(&file, &store.store, &store.owner, name, on_conflict),
            LibraryCommands::List { store } => commands::list(&store.store, &store.owner),
            LibraryCommands::Export { id, store, output } => {
                commands::export(&id, &store.store, &store.owner, output.as_deref())
            }
            LibraryCommands::Delete { id, store } => {
                commands::delete(&id, &store.store, &store.owner)
            }
        }
    }
}
