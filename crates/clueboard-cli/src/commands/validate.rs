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

//! Validate command - board parsing and structure checks

use super::{board_name, read_file};
use crate::error::CliError;
use clueboard_core::{parse_board, Round};
use colored::Colorize;

/// Validate a board file.
///
/// Runs the full pipeline (tokenizer, record parser, structure validator,
/// hierarchy builder) and reports the first violation, if any.
///
/// # Output
///
/// On success prints `✓ <file>` followed by per-round category and clue
/// counts. On failure prints `✗ <file>` and returns the violation.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or the board is invalid.
pub fn validate(file: &str) -> Result<(), CliError> {
    let content = read_file(file)?;

    match parse_board(&content, &board_name(file), file) {
        Ok(doc) => {
            println!("{} {}", "✓".green().bold(), file);
            for (round, categories) in doc.rounds() {
                let clues: usize = categories.iter().map(|c| c.len()).sum();
                match round {
                    Round::Final => println!("  Final: {} clue", clues),
                    _ => println!(
                        "  {}: {} categories, {} clues",
                        round_label(round),
                        categories.len(),
                        clues
                    ),
                }
            }
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗".red().bold(), file);
            Err(e.into())
        }
    }
}

pub(super) fn round_label(round: Round) -> &'static str {
    match round {
        Round::Single => "Single",
        Round::Double => "Double",
        Round::Final => "Final",
    }
}
