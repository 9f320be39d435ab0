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

//! CLI command definitions and argument parsing.
//!
//! - [`board`]: commands that work on a board file (validate, inspect, template)
//! - [`library`]: commands that work on a document store (upload, list, export, delete)

mod board;
mod library;

use crate::error::CliError;
use clap::Subcommand;

pub use board::BoardCommands;
pub use library::{LibraryCommands, StoreArgs};

/// Top-level CLI commands enum.
///
/// ```text
/// Commands
/// ├── Board (validate, inspect, template)
/// └── Library (upload, list, export, delete)
/// ```
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use clueboard_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    // Board file commands - flattened to appear at top level
    #[command(flatten)]
    Board(BoardCommands),

    // Store commands - flattened to appear at top level
    #[command(flatten)]
    Library(LibraryCommands),
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if file I/O fails, the board is invalid, the store
    /// fails, or the upload aborts.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Board(cmd) => cmd.execute(),
            Commands::Library(cmd) => cmd.execute(),
        }
    }
}
