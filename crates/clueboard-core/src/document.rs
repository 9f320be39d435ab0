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

//! Document structure for a parsed board.

use crate::Round;

/// A clue inside a category.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClueEntry {
    /// Dollar value.
    pub value: u32,
    /// The clue text shown to players.
    pub prompt: String,
    /// The correct response.
    pub response: String,
    /// Board position derived from value and round (1-based).
    pub position: u32,
}

impl ClueEntry {
    /// Create a new clue entry.
    pub fn new(
        value: u32,
        prompt: impl Into<String>,
        response: impl Into<String>,
        position: u32,
    ) -> Self {
        Self {
            value,
            prompt: prompt.into(),
            response: response.into(),
            position,
        }
    }
}

/// A named category and its clues, sorted ascending by value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryGroup {
    /// Category name.
    pub name: String,
    /// Clues ordered by ascending value.
    pub clues: Vec<ClueEntry>,
}

impl CategoryGroup {
    /// Create a category, sorting clues by value.
    ///
    /// The sort is stable, so clues of equal value keep their input order.
    pub fn new(name: impl Into<String>, mut clues: Vec<ClueEntry>) -> Self {
        clues.sort_by_key(|clue| clue.value);
        Self {
            name: name.into(),
            clues,
        }
    }

    /// Number of clues in the category.
    pub fn len(&self) -> usize {
        self.clues.len()
    }

    /// Whether the category has no clues.
    pub fn is_empty(&self) -> bool {
        self.clues.is_empty()
    }
}

/// A complete board: two main rounds and a final round.
///
/// Built once by [`build_document`](crate::build_document) and not mutated
/// afterwards. For a board that passed validation, `single_round` and
/// `double_round` each hold K categories of M clues and `final_round` holds
/// exactly one clue.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GameDocument {
    /// Display name.
    pub name: String,
    /// Where the board came from, usually the uploaded file name.
    pub source_identifier: String,
    /// Categories of the first main round, in first-seen order.
    #[cfg_attr(feature = "serde", serde(rename = "single"))]
    pub single_round: Vec<CategoryGroup>,
    /// Categories of the second main round, in first-seen order.
    #[cfg_attr(feature = "serde", serde(rename = "double"))]
    pub double_round: Vec<CategoryGroup>,
    /// The final round's single category.
    #[cfg_attr(feature = "serde", serde(rename = "final"))]
    pub final_round: CategoryGroup,
}

impl GameDocument {
    /// Categories of a round. The final round yields a one-element slice.
    pub fn round(&self, round: Round) -> &[CategoryGroup] {
        match round {
            Round::Single => &self.single_round,
            Round::Double => &self.double_round,
            Round::Final => std::slice::from_ref(&self.final_round),
        }
    }

    /// Iterate over rounds in play order with their categories.
    pub fn rounds(&self) -> impl Iterator<Item = (Round, &[CategoryGroup])> + '_ {
        Round::ALL.into_iter().map(move |round| (round, self.round(round)))
    }

    /// Find a category by exact name within a round.
    pub fn category(&self, round: Round, name: &str) -> Option<&CategoryGroup> {
        self.round(round).iter().find(|group| group.name == name)
    }

    /// Total number of clues on the board.
    pub fn clue_count(&self) -> usize {
        self.rounds()
            .flat_map(|(_, groups)| groups.iter())
            .map(CategoryGroup::len)
            .sum()
    }
}
