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

//! Render boards back to tabular text.

use crate::document::{CategoryGroup, ClueEntry, GameDocument};
use crate::error::{BoardError, BoardResult};
use crate::parser::HEADER;
use crate::record::Round;
use crate::shape::BoardShape;
use crate::tokenizer::DEFAULT_DELIMITER;

/// Configuration for tabular output.
#[derive(Debug, Clone)]
pub struct ToCsvConfig {
    /// Field delimiter (default: `,`). Must be ASCII.
    pub delimiter: char,
    /// Whether to write the header row (default: `true`).
    pub include_header: bool,
    /// Quote style for fields (default: necessary)
    pub quote_style: csv::QuoteStyle,
}

impl Default for ToCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            include_header: true,
            quote_style: csv::QuoteStyle::Necessary,
        }
    }
}

/// Render a board as comma-delimited text with a header row.
///
/// Rows follow document order: single round, double round, then final.
/// Parsing the output with the same name and source yields an equal document.
///
/// # Examples
///
/// ```
/// use clueboard_core::{parse_board, template_csv, to_csv, BoardShape};
///
/// let text = template_csv(&BoardShape::default()).unwrap();
/// let doc = parse_board(&text, "Template", "template.csv").unwrap();
/// assert_eq!(to_csv(&doc).unwrap(), text);
/// ```
///
/// # Errors
///
/// Returns [`BoardError::Output`] if the CSV writer fails.
pub fn to_csv(doc: &GameDocument) -> BoardResult<String> {
    to_csv_with_config(doc, &ToCsvConfig::default())
}

/// Render a board with custom configuration.
///
/// # Errors
///
/// Returns [`BoardError::UnsupportedDelimiter`] for a non-ASCII delimiter and
/// [`BoardError::Output`] if the CSV writer fails.
pub fn to_csv_with_config(doc: &GameDocument, config: &ToCsvConfig) -> BoardResult<String> {
    let delimiter = u8::try_from(config.delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or(BoardError::UnsupportedDelimiter(config.delimiter))?;

    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .quote_style(config.quote_style)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::with_capacity(doc.clue_count() * 64));

    if config.include_header {
        wtr.write_record(HEADER)
            .map_err(|e| BoardError::Output(format!("header row: {}", e)))?;
    }

    for (round, groups) in doc.rounds() {
        for group in groups {
            for clue in &group.clues {
                let value = clue.value.to_string();
                wtr.write_record([
                    round.as_str(),
                    group.name.as_str(),
                    value.as_str(),
                    clue.prompt.as_str(),
                    clue.response.as_str(),
                ])
                .map_err(|e| {
                    BoardError::Output(format!(
                        "row for category '{}' in round '{}': {}",
                        group.name, round, e
                    ))
                })?;
            }
        }
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| BoardError::Output(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| BoardError::Output(e.to_string()))
}

/// A structurally legal board of placeholders, usable as an upload template.
///
/// # Errors
///
/// Returns [`BoardError::ContractViolation`] if `clues_per_category` does not
/// fit a clue position.
pub fn template_csv(shape: &BoardShape) -> BoardResult<String> {
    let clues_per_category = u32::try_from(shape.clues_per_category).map_err(|_| {
        BoardError::ContractViolation(format!(
            "{} clues per category exceeds the largest clue position",
            shape.clues_per_category
        ))
    })?;

    let main_round = |round: Round, label: &str| -> Vec<CategoryGroup> {
        (1..=shape.categories_per_round)
            .map(|c| {
                let clues = (1..=clues_per_category)
                    .map(|position| {
                        ClueEntry::new(
                            shape.value_for(round, position),
                            "Clue text",
                            "Correct response",
                            position,
                        )
                    })
                    .collect();
                CategoryGroup::new(format!("{} Category {}", label, c), clues)
            })
            .collect()
    };

    let doc = GameDocument {
        name: "Template".to_string(),
        source_identifier: "template.csv".to_string(),
        single_round: main_round(Round::Single, "Single"),
        double_round: main_round(Round::Double, "Double"),
        final_round: CategoryGroup::new(
            "Final Category",
            vec![ClueEntry::new(0, "Final clue text", "Correct response", 1)],
        ),
    };

    to_csv(&doc)
}
