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

//! Structure validation: the cardinality contract of a legal board.

use crate::error::{BoardError, BoardResult};
use crate::record::{Record, Round};
use crate::shape::BoardShape;
use std::collections::HashMap;

/// Check that records form exactly one legal board.
///
/// Rules are checked in order and the first violation is returned:
///
/// 1. the single round holds K·M clues
/// 2. the double round holds K·M clues
/// 3. the final round holds exactly one clue
/// 4. each main round has exactly K distinct categories
/// 5. each of those categories has exactly M clues
///
/// Rules 4 and 5 run for the single round before the double round, and
/// categories are visited in first-seen order. Category names are compared
/// exactly; `History` and `history` are different categories.
///
/// # Examples
///
/// ```
/// use clueboard_core::{validate_records, BoardError, BoardShape, Record, Round};
///
/// let records = vec![Record::new(2, Round::Final, "Art", 0, "q", "r")];
/// let err = validate_records(&records, &BoardShape::default()).unwrap_err();
/// assert!(matches!(err, BoardError::RoundSize { round: Round::Single, actual: 0, .. }));
/// ```
pub fn validate_records(records: &[Record], shape: &BoardShape) -> BoardResult<()> {
    for round in Round::ALL {
        let actual = records.iter().filter(|r| r.round == round).count();
        let expected = shape.expected_clues(round);
        if actual != expected {
            return Err(BoardError::RoundSize {
                round,
                expected,
                actual,
            });
        }
    }

    for round in [Round::Single, Round::Double] {
        validate_categories(records, round, shape)?;
    }

    Ok(())
}

/// Check category count and per-category clue count for one main round.
fn validate_categories(records: &[Record], round: Round, shape: &BoardShape) -> BoardResult<()> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for record in records.iter().filter(|r| r.round == round) {
        let count = counts.entry(record.category.as_str()).or_insert(0);
        if *count == 0 {
            order.push(record.category.as_str());
        }
        *count += 1;
    }

    if order.len() != shape.categories_per_round {
        return Err(BoardError::CategoryCount {
            round,
            expected: shape.categories_per_round,
            actual: order.len(),
        });
    }

    for category in order {
        let actual = counts[category];
        if actual != shape.clues_per_category {
            return Err(BoardError::CategorySize {
                round,
                category: category.to_string(),
                expected: shape.clues_per_category,
                actual,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_records(round: Round, categories: &[(&str, usize)]) -> Vec<Record> {
        let mut records = Vec::new();
        for (name, clues) in categories {
            for i in 0..*clues {
                let value = (i as u32 + 1) * 200;
                records.push(Record::new(0, round, *name, value, "q", "r"));
            }
        }
        records
    }

    fn six_by_five(round: Round) -> Vec<Record> {
        round_records(
            round,
            &[("A", 5), ("B", 5), ("C", 5), ("D", 5), ("E", 5), ("F", 5)],
        )
    }

    fn legal_board() -> Vec<Record> {
        let mut records = six_by_five(Round::Single);
        records.extend(six_by_five(Round::Double));
        records.push(Record::new(0, Round::Final, "Finale", 0, "q", "r"));
        records
    }

    #[test]
    fn test_legal_board_passes() {
        assert!(validate_records(&legal_board(), &BoardShape::default()).is_ok());
    }

    #[test]
    fn test_single_round_one_short() {
        let mut records = legal_board();
        records.remove(0);
        let err = validate_records(&records, &BoardShape::default()).unwrap_err();
        assert_eq!(
            err,
            BoardError::RoundSize {
                round: Round::Single,
                expected: 30,
                actual: 29
            }
        );
    }

    #[test]
    fn test_double_round_checked_after_single() {
        let mut records = legal_board();
        records.push(Record::new(0, Round::Double, "A", 400, "q", "r"));
        let err = validate_records(&records, &BoardShape::default()).unwrap_err();
        assert!(matches!(
            err,
            BoardError::RoundSize {
                round: Round::Double,
                actual: 31,
                ..
            }
        ));
    }

    #[test]
    fn test_missing_final() {
        let mut records = legal_board();
        records.pop();
        let err = validate_records(&records, &BoardShape::default()).unwrap_err();
        assert_eq!(
            err,
            BoardError::RoundSize {
                round: Round::Final,
                expected: 1,
                actual: 0
            }
        );
    }

    #[test]
    fn test_two_finals() {
        let mut records = legal_board();
        records.push(Record::new(0, Round::Final, "Encore", 0, "q", "r"));
        let err = validate_records(&records, &BoardShape::default()).unwrap_err();
        assert!(matches!(err, BoardError::RoundSize { round: Round::Final, actual: 2, .. }));
    }

    #[test]
    fn test_round_counts_checked_before_categories() {
        // Wrong category layout in single, wrong count in final: count wins.
        let mut records = round_records(Round::Single, &[("A", 30)]);
        records.extend(six_by_five(Round::Double));
        let err = validate_records(&records, &BoardShape::default()).unwrap_err();
        assert!(matches!(err, BoardError::RoundSize { round: Round::Final, .. }));
    }

    #[test]
    fn test_category_skew_names_category() {
        let mut records = round_records(
            Round::Single,
            &[("A", 5), ("B", 6), ("C", 4), ("D", 5), ("E", 5), ("F", 5)],
        );
        records.extend(six_by_five(Round::Double));
        records.push(Record::new(0, Round::Final, "Finale", 0, "q", "r"));

        let err = validate_records(&records, &BoardShape::default()).unwrap_err();
        assert_eq!(
            err,
            BoardError::CategorySize {
                round: Round::Single,
                category: "B".to_string(),
                expected: 5,
                actual: 6
            }
        );
    }

    #[test]
    fn test_too_few_categories() {
        let mut records = six_by_five(Round::Single);
        records.extend(round_records(
            Round::Double,
            &[("A", 10), ("B", 5), ("C", 5), ("D", 5), ("E", 5)],
        ));
        records.push(Record::new(0, Round::Final, "Finale", 0, "q", "r"));

        let err = validate_records(&records, &BoardShape::default()).unwrap_err();
        assert_eq!(
            err,
            BoardError::CategoryCount {
                round: Round::Double,
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn test_category_names_compare_exactly() {
        // Seven labels once "a" and "A" are distinct.
        let mut records = round_records(
            Round::Single,
            &[("a", 1), ("A", 4), ("B", 5), ("C", 5), ("D", 5), ("E", 5), ("F", 5)],
        );
        records.extend(six_by_five(Round::Double));
        records.push(Record::new(0, Round::Final, "Finale", 0, "q", "r"));

        let err = validate_records(&records, &BoardShape::default()).unwrap_err();
        assert!(matches!(err, BoardError::CategoryCount { actual: 7, .. }));
    }

    #[test]
    fn test_final_exempt_from_category_rules() {
        let mut records = legal_board();
        records.last_mut().unwrap().category = String::new();
        assert!(validate_records(&records, &BoardShape::default()).is_ok());
    }

    #[test]
    fn test_custom_shape() {
        let shape = BoardShape {
            categories_per_round: 2,
            clues_per_category: 3,
            ..Default::default()
        };
        let mut records = round_records(Round::Single, &[("A", 3), ("B", 3)]);
        records.extend(round_records(Round::Double, &[("C", 3), ("D", 3)]));
        records.push(Record::new(0, Round::Final, "Finale", 0, "q", "r"));
        assert!(validate_records(&records, &shape).is_ok());
    }
}
