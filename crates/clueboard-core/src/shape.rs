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

//! The cardinality contract of a legal board.

use crate::Round;

/// Fixed counts and value increments a legal board must satisfy.
///
/// The defaults describe the reference game: two main rounds of six
/// categories with five clues each, plus a single-clue final round.
///
/// # Examples
///
/// ```
/// use clueboard_core::BoardShape;
///
/// let shape = BoardShape::default();
/// assert_eq!(shape.expected_clues_per_round(), 30);
/// assert_eq!(shape.expected_total_clues(), 61);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardShape {
    /// Categories in each main round (K, default 6).
    pub categories_per_round: usize,
    /// Clues in each main-round category (M, default 5).
    pub clues_per_category: usize,
    /// Value step between positions in the single round (default 200).
    pub single_increment: u32,
    /// Value step between positions in the double round (default 400).
    pub double_increment: u32,
}

impl Default for BoardShape {
    fn default() -> Self {
        Self {
            categories_per_round: 6,
            clues_per_category: 5,
            single_increment: 200,
            double_increment: 400,
        }
    }
}

impl BoardShape {
    /// Clues required in each main round (K·M).
    pub fn expected_clues_per_round(&self) -> usize {
        self.categories_per_round * self.clues_per_category
    }

    /// Clues required in a round, final included.
    pub fn expected_clues(&self, round: Round) -> usize {
        match round {
            Round::Single | Round::Double => self.expected_clues_per_round(),
            Round::Final => 1,
        }
    }

    /// Clues in a complete board (2·K·M + 1).
    pub fn expected_total_clues(&self) -> usize {
        2 * self.expected_clues_per_round() + 1
    }

    /// Board position of a clue: its value divided by the round's increment.
    ///
    /// Final clues always sit at position 1. A zero increment is treated as 1.
    pub fn position_for(&self, round: Round, value: u32) -> u32 {
        match round {
            Round::Single => value / self.single_increment.max(1),
            Round::Double => value / self.double_increment.max(1),
            Round::Final => 1,
        }
    }

    /// The value a clue at `position` carries in `round`.
    ///
    /// Saturates at `u32::MAX`.
    pub fn value_for(&self, round: Round, position: u32) -> u32 {
        match round {
            Round::Single => position.saturating_mul(self.single_increment),
            Round::Double => position.saturating_mul(self.double_increment),
            Round::Final => 0,
        }
    }
}
