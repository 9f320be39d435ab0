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

//! Hierarchy builder: flat records to round → category → clue.

use crate::document::{CategoryGroup, ClueEntry, GameDocument};
use crate::error::{BoardError, BoardResult};
use crate::record::{Record, Round};
use crate::shape::BoardShape;
use std::collections::HashMap;

/// Groups clues by category name, remembering first-seen order.
///
/// The order lives in its own vector so output order never depends on
/// map iteration order.
#[derive(Debug, Default)]
struct CategoryGrouper {
    order: Vec<String>,
    groups: HashMap<String, Vec<ClueEntry>>,
}

impl CategoryGrouper {
    fn push(&mut self, category: String, clue: ClueEntry) {
        match self.groups.get_mut(&category) {
            Some(clues) => clues.push(clue),
            None => {
                self.order.push(category.clone());
                self.groups.insert(category, vec![clue]);
            }
        }
    }

    fn finish(mut self) -> Vec<CategoryGroup> {
        self.order
            .into_iter()
            .map(|name| {
                let clues = self.groups.remove(&name).unwrap_or_default();
                CategoryGroup::new(name, clues)
            })
            .collect()
    }
}

/// Build a [`GameDocument`] from validated records.
///
/// Categories appear in the order they were first seen in the input. Clues
/// within a category are sorted by ascending value, and each clue's position
/// is its value divided by the round's increment (final clues are always at
/// position 1).
///
/// Callers are expected to run [`validate_records`](crate::validate_records)
/// first. The builder itself only insists that exactly one final clue is
/// present, since there is no sensible way to pick between several.
///
/// # Errors
///
/// Returns [`BoardError::ContractViolation`] when the final round does not
/// hold exactly one record.
///
/// # Examples
///
/// ```
/// use clueboard_core::{build_document, BoardShape, Record, Round};
///
/// let records = vec![
///     Record::new(2, Round::Single, "Rivers", 400, "q2", "r2"),
///     Record::new(3, Round::Single, "Rivers", 200, "q1", "r1"),
///     Record::new(4, Round::Final, "Finale", 0, "q", "r"),
/// ];
/// let doc = build_document("Demo", "demo.csv", records, &BoardShape::default()).unwrap();
/// assert_eq!(doc.single_round[0].clues[0].value, 200);
/// assert_eq!(doc.single_round[0].clues[0].position, 1);
/// assert_eq!(doc.final_round.clues[0].position, 1);
/// ```
pub fn build_document(
    name: &str,
    source: &str,
    records: Vec<Record>,
    shape: &BoardShape,
) -> BoardResult<GameDocument> {
    let mut single = CategoryGrouper::default();
    let mut double = CategoryGrouper::default();
    let mut finals: Vec<Record> = Vec::new();

    for record in records {
        let position = shape.position_for(record.round, record.value);
        match record.round {
            Round::Single => single.push(
                record.category,
                ClueEntry::new(record.value, record.prompt, record.response, position),
            ),
            Round::Double => double.push(
                record.category,
                ClueEntry::new(record.value, record.prompt, record.response, position),
            ),
            Round::Final => finals.push(record),
        }
    }

    if finals.len() != 1 {
        return Err(BoardError::ContractViolation(format!(
            "final round must contain exactly one clue, found {}",
            finals.len()
        )));
    }

    let final_record = finals.remove(0);
    let final_round = CategoryGroup::new(
        final_record.category,
        vec![ClueEntry::new(
            final_record.value,
            final_record.prompt,
            final_record.response,
            shape.position_for(Round::Final, final_record.value),
        )],
    );

    Ok(GameDocument {
        name: name.to_string(),
        source_identifier: source.to_string(),
        single_round: single.finish(),
        double_round: double.finish(),
        final_round,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn final_record() -> Record {
        Record::new(99, Round::Final, "World Capitals", 0, "q", "r")
    }

    #[test]
    fn test_first_seen_category_order() {
        let records = vec![
            Record::new(2, Round::Single, "Zebra", 200, "q", "r"),
            Record::new(3, Round::Single, "Apple", 200, "q", "r"),
            Record::new(4, Round::Single, "Zebra", 400, "q", "r"),
            Record::new(5, Round::Single, "Mango", 200, "q", "r"),
            final_record(),
        ];
        let doc = build_document("Doc", "doc.csv", records, &BoardShape::default()).unwrap();
        let names: Vec<&str> = doc.single_round.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Zebra", "Apple", "Mango"]);
        assert_eq!(doc.single_round[0].len(), 2);
    }

    #[test]
    fn test_clues_sorted_by_value_with_positions() {
        let records = vec![
            Record::new(2, Round::Double, "Science", 2000, "q5", "r"),
            Record::new(3, Round::Double, "Science", 400, "q1", "r"),
            Record::new(4, Round::Double, "Science", 1200, "q3", "r"),
            final_record(),
        ];
        let doc = build_document("Doc", "doc.csv", records, &BoardShape::default()).unwrap();
        let science = &doc.double_round[0];
        let values: Vec<u32> = science.clues.iter().map(|c| c.value).collect();
        let positions: Vec<u32> = science.clues.iter().map(|c| c.position).collect();
        assert_eq!(values, vec![400, 1200, 2000]);
        assert_eq!(positions, vec![1, 3, 5]);
    }

    #[test]
    fn test_final_round_position_is_one() {
        let records = vec![Record::new(2, Round::Final, "Finale", 3000, "q", "r")];
        let doc = build_document("Doc", "doc.csv", records, &BoardShape::default()).unwrap();
        assert_eq!(doc.final_round.name, "Finale");
        assert_eq!(doc.final_round.clues[0].position, 1);
        assert_eq!(doc.final_round.clues[0].value, 3000);
    }

    #[test]
    fn test_metadata_copied() {
        let doc =
            build_document("My Game", "my_game.csv", vec![final_record()], &BoardShape::default())
                .unwrap();
        assert_eq!(doc.name, "My Game");
        assert_eq!(doc.source_identifier, "my_game.csv");
    }

    #[test]
    fn test_missing_final_is_contract_violation() {
        let records = vec![Record::new(2, Round::Single, "A", 200, "q", "r")];
        let err = build_document("Doc", "doc.csv", records, &BoardShape::default()).unwrap_err();
        assert!(matches!(err, BoardError::ContractViolation(_)));
        assert!(err.to_string().contains("found 0"));
    }

    #[test]
    fn test_multiple_finals_is_contract_violation() {
        let records = vec![final_record(), final_record()];
        let err = build_document("Doc", "doc.csv", records, &BoardShape::default()).unwrap_err();
        assert!(err.to_string().contains("found 2"));
    }

    #[test]
    fn test_custom_increments() {
        let shape = BoardShape {
            single_increment: 100,
            double_increment: 200,
            ..Default::default()
        };
        let records = vec![
            Record::new(2, Round::Single, "A", 300, "q", "r"),
            Record::new(3, Round::Double, "B", 600, "q", "r"),
            final_record(),
        ];
        let doc = build_document("Doc", "doc.csv", records, &shape).unwrap();
        assert_eq!(doc.single_round[0].clues[0].position, 3);
        assert_eq!(doc.double_round[0].clues[0].position, 3);
    }
}
