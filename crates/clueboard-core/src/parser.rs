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

//! Record parser and pipeline entry points.

use crate::error::{BoardError, BoardResult};
use crate::hierarchy::build_document;
use crate::limits::Limits;
use crate::record::{Record, Round};
use crate::shape::BoardShape;
use crate::tokenizer::{tokenize_line, DEFAULT_DELIMITER};
use crate::validate::validate_records;
use crate::GameDocument;

/// Number of columns in a board row: round, category, value, prompt, response.
pub const FIELD_COUNT: usize = 5;

/// Column names of the header row, in order.
pub const HEADER: [&str; FIELD_COUNT] = ["round", "category", "value", "prompt", "response"];

/// Options controlling board parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Field delimiter (default: `,`).
    pub delimiter: char,
    /// Cardinality contract the board must satisfy.
    pub shape: BoardShape,
    /// Security limits.
    pub limits: Limits,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            shape: BoardShape::default(),
            limits: Limits::default(),
        }
    }
}

impl ParseOptions {
    /// Create a new builder for ParseOptions.
    ///
    /// # Examples
    ///
    /// ```
    /// use clueboard_core::ParseOptions;
    ///
    /// let opts = ParseOptions::builder()
    ///     .delimiter('\t')
    ///     .categories_per_round(3)
    ///     .build();
    /// assert_eq!(opts.shape.categories_per_round, 3);
    /// ```
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::new()
    }
}

/// Builder for ergonomic construction of ParseOptions.
#[derive(Debug, Clone, Default)]
pub struct ParseOptionsBuilder {
    options: ParseOptions,
}

impl ParseOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.options.delimiter = delimiter;
        self
    }

    /// Replace the whole board shape.
    pub fn shape(mut self, shape: BoardShape) -> Self {
        self.options.shape = shape;
        self
    }

    /// Set the number of categories per main round.
    pub fn categories_per_round(mut self, count: usize) -> Self {
        self.options.shape.categories_per_round = count;
        self
    }

    /// Set the number of clues per main-round category.
    pub fn clues_per_category(mut self, count: usize) -> Self {
        self.options.shape.clues_per_category = count;
        self
    }

    /// Set the maximum number of data rows.
    pub fn max_rows(mut self, rows: usize) -> Self {
        self.options.limits.max_rows = rows;
        self
    }

    /// Set the maximum line length in bytes.
    pub fn max_line_length(mut self, length: usize) -> Self {
        self.options.limits.max_line_length = length;
        self
    }

    /// Build the ParseOptions.
    pub fn build(self) -> ParseOptions {
        self.options
    }
}

/// Parse board text into flat records.
///
/// The first line is a header and is never inspected. Whitespace-only lines
/// are skipped. Every other line must hold exactly five fields with a known
/// round token and an integer value; the first bad row fails the whole call.
///
/// # Examples
///
/// ```
/// use clueboard_core::{parse_records, ParseOptions, Round};
///
/// let text = "round,category,value,prompt,response\n\
///             single,Rivers,200,Longest river,The Nile\n";
/// let records = parse_records(text, &ParseOptions::default()).unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].round, Round::Single);
/// assert_eq!(records[0].line, 2);
/// ```
pub fn parse_records(text: &str, options: &ParseOptions) -> BoardResult<Vec<Record>> {
    let mut records = Vec::new();

    for (index, line) in text.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }

        let line_no = index + 1;

        if line.len() > options.limits.max_line_length {
            return Err(BoardError::LineTooLong {
                line: line_no,
                length: line.len(),
                limit: options.limits.max_line_length,
            });
        }

        if records.len() >= options.limits.max_rows {
            return Err(BoardError::RowLimit {
                limit: options.limits.max_rows,
            });
        }

        records.push(parse_row(line, line_no, options.delimiter)?);
    }

    Ok(records)
}

/// Parse one data row.
fn parse_row(line: &str, line_no: usize, delimiter: char) -> BoardResult<Record> {
    let fields = tokenize_line(line, delimiter);

    let [round, category, value, prompt, response]: [String; FIELD_COUNT] =
        fields.try_into().map_err(|fields: Vec<String>| BoardError::FieldCount {
            line: line_no,
            expected: FIELD_COUNT,
            actual: fields.len(),
        })?;

    let round_token = round.trim();
    let round = Round::from_token(round_token).ok_or_else(|| BoardError::UnknownRound {
        line: line_no,
        token: round_token.to_string(),
    })?;

    let value_text = value.trim();
    let value = value_text
        .parse::<u32>()
        .map_err(|_| BoardError::InvalidValue {
            line: line_no,
            value: value_text.to_string(),
        })?;

    Ok(Record {
        line: line_no,
        round,
        category: category.trim().to_string(),
        value,
        prompt: prompt.trim().to_string(),
        response: response.trim().to_string(),
    })
}

/// Parse, validate and build a board with default options.
///
/// # Examples
///
/// ```
/// use clueboard_core::parse_board;
///
/// let result = parse_board("round,category,value,prompt,response\n", "Empty", "empty.csv");
/// assert!(result.is_err());
/// ```
pub fn parse_board(text: &str, name: &str, source: &str) -> BoardResult<GameDocument> {
    parse_board_with_options(text, name, source, &ParseOptions::default())
}

/// Parse, validate and build a board with custom options.
pub fn parse_board_with_options(
    text: &str,
    name: &str,
    source: &str,
    options: &ParseOptions,
) -> BoardResult<GameDocument> {
    let records = parse_records(text, options)?;
    validate_records(&records, &options.shape)?;
    build_document(name, source, records, &options.shape)
}
