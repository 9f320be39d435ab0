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

//! Inspect command - board hierarchy visualization

use super::validate::round_label;
use super::{board_name, read_file};
use crate::error::CliError;
use clueboard_core::{parse_board, GameDocument, Round};
use colored::Colorize;

/// Print the category hierarchy of a board file.
///
/// With `json`, prints the built document as pretty JSON instead of a tree.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or the board is invalid.
pub fn inspect(file: &str, json: bool) -> Result<(), CliError> {
    let content = read_file(file)?;
    let doc = parse_board(&content, &board_name(file), file)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        print_tree(&doc);
    }
    Ok(())
}

fn print_tree(doc: &GameDocument) {
    println!("{}", "Clueboard Game".bold().underline());
    println!();
    println!("{}  {}", "Name:".cyan(), doc.name);
    println!("{}  {}", "Source:".cyan(), doc.source_identifier);

    for (round, categories) in doc.rounds() {
        println!();
        println!("{}", format!("{} round:", round_label(round)).cyan());
        for category in categories {
            println!("  {}", category.name.green());
            for clue in &category.clues {
                let slot = match round {
                    Round::Final => "final".to_string(),
                    _ => format!("#{} ${}", clue.position, clue.value),
                };
                println!(
                    "    {}  {} {} {}",
                    slot.yellow(),
                    clue.prompt,
                    "→".dimmed(),
                    clue.response
                );
            }
        }
    }
}
