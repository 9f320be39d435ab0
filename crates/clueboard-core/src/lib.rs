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

//! Tabular board parser, structure validator and data model for Clueboard.
//!
//! This crate turns a delimited-text description of a trivia board into a
//! [`GameDocument`]: two main rounds of categories and clues plus a
//! single-clue final round.
//!
//! # Pipeline
//!
//! ```text
//! text ─▶ tokenize_line (per line) ─▶ parse_records ─▶ validate_records ─▶ build_document
//! ```
//!
//! - [`tokenize_line`] splits one row, honoring quoted fields and `""` escapes
//! - [`parse_records`] skips the header and blank lines and types each row
//! - [`validate_records`] enforces the cardinality contract ([`BoardShape`])
//! - [`build_document`] groups records into round → category → clue
//!
//! Every stage fails fast with a [`BoardError`] describing the first problem.
//!
//! # Examples
//!
//! ```
//! use clueboard_core::{parse_board, template_csv, BoardShape, Round};
//!
//! let text = template_csv(&BoardShape::default()).unwrap();
//! let doc = parse_board(&text, "Friday Night", "friday.csv").unwrap();
//!
//! assert_eq!(doc.round(Round::Single).len(), 6);
//! assert_eq!(doc.final_round.clues.len(), 1);
//! ```
//!
//! # Input Format
//!
//! ```text
//! round,category,value,prompt,response
//! single,Rivers,200,"This river flows through Cairo",The Nile
//! double,"Cities, Towns",400,"He said ""Bonjour""",Paris
//! final,World Capitals,0,Capital of Australia,Canberra
//! ```
//!
//! Round tokens are `single`, `double` and `final`, matched case-sensitively.

mod document;
mod error;
mod hierarchy;
mod limits;
mod parser;
mod record;
mod shape;
mod tokenizer;
mod validate;
mod writer;

pub use document::{CategoryGroup, ClueEntry, GameDocument};
pub use error::{BoardError, BoardErrorKind, BoardResult};
pub use hierarchy::build_document;
pub use limits::{Limits, DEFAULT_MAX_LINE_LENGTH, DEFAULT_MAX_ROWS};
pub use parser::{
    parse_board, parse_board_with_options, parse_records, ParseOptions, ParseOptionsBuilder,
    FIELD_COUNT, HEADER,
};
pub use record::{Record, Round};
pub use shape::BoardShape;
pub use tokenizer::{tokenize_line, DEFAULT_DELIMITER, QUOTE};
pub use validate::validate_records;
pub use writer::{template_csv, to_csv, to_csv_with_config, ToCsvConfig};
