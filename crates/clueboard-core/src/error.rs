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

//! Error types for board parsing and validation.

use crate::Round;
use std::fmt;
use thiserror::Error;

/// The broad class of a [`BoardError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardErrorKind {
    /// Malformed row: wrong field count or a field of the wrong type.
    Input,
    /// Cardinality violation at round or category granularity.
    Structure,
    /// Security limit exceeded.
    Security,
    /// A caller bypassed validation and handed the builder an illegal board.
    Internal,
}

impl fmt::Display for BoardErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => write!(f, "InputError"),
            Self::Structure => write!(f, "StructureError"),
            Self::Security => write!(f, "SecurityError"),
            Self::Internal => write!(f, "InternalError"),
        }
    }
}

/// An error raised while turning tabular text into a [`GameDocument`].
///
/// Every stage fails fast, so a `BoardError` always describes the first
/// violation encountered. Row-level variants carry the 1-based line number
/// of the offending row in the source text (the header is line 1).
///
/// # Examples
///
/// ```
/// use clueboard_core::{BoardError, BoardErrorKind, Round};
///
/// let err = BoardError::RoundSize {
///     round: Round::Single,
///     expected: 30,
///     actual: 29,
/// };
/// assert_eq!(err.kind(), BoardErrorKind::Structure);
/// assert_eq!(
///     err.to_string(),
///     "Round 'single' must contain exactly 30 clues, found 29"
/// );
/// ```
///
/// [`GameDocument`]: crate::GameDocument
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Row has the wrong number of fields.
    #[error("Row {line}: expected {expected} fields, found {actual}")]
    FieldCount {
        /// Line number of the row (1-based).
        line: usize,
        /// Expected number of fields.
        expected: usize,
        /// Actual number of fields.
        actual: usize,
    },

    /// Round column holds something other than a recognized round token.
    #[error("Row {line}: unknown round '{token}' (expected one of: single, double, final)")]
    UnknownRound {
        /// Line number of the row (1-based).
        line: usize,
        /// The offending token.
        token: String,
    },

    /// Value column is not a base-10 integer in `0..=u32::MAX`.
    #[error("Row {line}: clue value '{value}' is not an integer between 0 and 4294967295")]
    InvalidValue {
        /// Line number of the row (1-based).
        line: usize,
        /// The offending text.
        value: String,
    },

    /// A round holds the wrong number of clues.
    #[error("Round '{round}' must contain exactly {expected} clues, found {actual}")]
    RoundSize {
        /// The round being checked.
        round: Round,
        /// Expected clue count.
        expected: usize,
        /// Actual clue count.
        actual: usize,
    },

    /// A round holds the wrong number of distinct categories.
    #[error("Round '{round}' must contain exactly {expected} categories, found {actual}")]
    CategoryCount {
        /// The round being checked.
        round: Round,
        /// Expected category count.
        expected: usize,
        /// Actual category count.
        actual: usize,
    },

    /// A category holds the wrong number of clues.
    #[error("Category '{category}' in round '{round}' must contain exactly {expected} clues, found {actual}")]
    CategorySize {
        /// The round containing the category.
        round: Round,
        /// The category name as written in the input.
        category: String,
        /// Expected clue count.
        expected: usize,
        /// Actual clue count.
        actual: usize,
    },

    /// Too many data rows.
    #[error("Security limit exceeded: more than {limit} data rows")]
    RowLimit {
        /// Maximum allowed data rows.
        limit: usize,
    },

    /// A single line is longer than allowed.
    #[error("Row {line}: line length {length} exceeds maximum {limit}")]
    LineTooLong {
        /// Line number of the row (1-based).
        line: usize,
        /// Length of the line in bytes.
        length: usize,
        /// Maximum allowed length in bytes.
        limit: usize,
    },

    /// The hierarchy builder received records that never passed validation.
    #[error("Internal error: {0}")]
    ContractViolation(String),

    /// Output delimiter cannot be written as a single byte.
    #[error("Delimiter '{0}' cannot be used for output (expected a single ASCII character)")]
    UnsupportedDelimiter(char),

    /// The tabular writer failed.
    #[error("Failed to write board: {0}")]
    Output(String),
}

impl BoardError {
    /// Classify this error.
    pub fn kind(&self) -> BoardErrorKind {
        match self {
            Self::FieldCount { .. }
            | Self::UnknownRound { .. }
            | Self::InvalidValue { .. }
            | Self::UnsupportedDelimiter(_) => BoardErrorKind::Input,
            Self::RoundSize { .. } | Self::CategoryCount { .. } | Self::CategorySize { .. } => {
                BoardErrorKind::Structure
            }
            Self::RowLimit { .. } | Self::LineTooLong { .. } => BoardErrorKind::Security,
            Self::ContractViolation(_) | Self::Output(_) => BoardErrorKind::Internal,
        }
    }

    /// Line number for row-level errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::FieldCount { line, .. }
            | Self::UnknownRound { line, .. }
            | Self::InvalidValue { line, .. }
            | Self::LineTooLong { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(BoardErrorKind::Input.to_string(), "InputError");
        assert_eq!(BoardErrorKind::Structure.to_string(), "StructureError");
        assert_eq!(BoardErrorKind::Security.to_string(), "SecurityError");
        assert_eq!(BoardErrorKind::Internal.to_string(), "InternalError");
    }

    #[test]
    fn test_field_count_message() {
        let err = BoardError::FieldCount {
            line: 4,
            expected: 5,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Row 4: expected 5 fields, found 3");
        assert_eq!(err.kind(), BoardErrorKind::Input);
        assert_eq!(err.line(), Some(4));
    }

    #[test]
    fn test_unknown_round_names_token() {
        let err = BoardError::UnknownRound {
            line: 2,
            token: "Single".to_string(),
        };
        assert!(err.to_string().contains("'Single'"));
        assert!(err.to_string().starts_with("Row 2:"));
    }

    #[test]
    fn test_category_size_names_category() {
        let err = BoardError::CategorySize {
            round: Round::Double,
            category: "Potent Potables".to_string(),
            expected: 5,
            actual: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("Potent Potables"));
        assert!(msg.contains("'double'"));
        assert!(msg.contains("found 4"));
        assert_eq!(err.kind(), BoardErrorKind::Structure);
        assert_eq!(err.line(), None);
    }

    #[test]
    fn test_security_and_internal_kinds() {
        assert_eq!(
            BoardError::RowLimit { limit: 10 }.kind(),
            BoardErrorKind::Security
        );
        assert_eq!(
            BoardError::ContractViolation("boom".into()).kind(),
            BoardErrorKind::Internal
        );
    }

    #[test]
    fn test_error_is_std_error() {
        fn accepts_error<E: std::error::Error>(_: E) {}
        accepts_error(BoardError::RowLimit { limit: 1 });
    }

    #[test]
    fn test_out_of_range_value_message() {
        let err = BoardError::InvalidValue {
            line: 9,
            value: "99999999999".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Row 9: clue value '99999999999' is not an integer between 0 and 4294967295"
        );
    }

    #[test]
    fn test_writer_error_kinds() {
        assert_eq!(
            BoardError::UnsupportedDelimiter('§').kind(),
            BoardErrorKind::Input
        );
        assert_eq!(
            BoardError::Output("closed".into()).kind(),
            BoardErrorKind::Internal
        );
    }
}
