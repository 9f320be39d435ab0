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

//! Commands operating on a single board file.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// Board file commands.
#[derive(Subcommand)]
pub enum BoardCommands {
    /// Validate a board file
    ///
    /// Parses the file and checks round, category and clue counts. Reports
    /// the first violation found.
    Validate {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// Print the category hierarchy of a board
    Inspect {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Print the built document as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a placeholder board to use as an upload template
    Template {
        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl BoardCommands {
    /// Execute the board command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the command execution fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            BoardCommands::Validate { file } => commands::validate(&file),
            BoardCommands::Inspect { file, json } => commands::inspect(&file, json),
            BoardCommands::Template { output } => commands::template(output.as_deref()),
        }
    }
}
