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

//! Fluent builder for board text.

use crate::samples::BOARD_HEADER;

/// Builder for board fixtures.
///
/// Produces a legal board by default; each method bends one aspect of it.
/// Rounds are named by their input tokens (`"single"`, `"double"`).
///
/// # Examples
///
/// ```
/// use clueboard_test::BoardBuilder;
///
/// let text = BoardBuilder::new()
///     .categories(2)
///     .clues_per_category(3)
///     .rename_category("double", 1, "Potent Potables")
///     .build();
///
/// assert!(text.contains("double,Potent Potables,400,"));
/// assert_eq!(text.lines().count(), 1 + 2 * 2 * 3 + 1);
/// ```
#[derive(Debug, Clone)]
pub struct BoardBuilder {
    categories: usize,
    clues: usize,
    single_increment: u32,
    double_increment: u32,
    header: String,
    final_clues: usize,
    renames: Vec<(&'static str, usize, String)>,
    moves: Vec<(&'static str, usize, usize)>,
    drops: Vec<(&'static str, usize, usize)>,
    extra_rows: Vec<String>,
    reversed: bool,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// A legal 6×5 board with one final clue.
    pub fn new() -> Self {
        Self {
            categories: 6,
            clues: 5,
            single_increment: 200,
            double_increment: 400,
            header: BOARD_HEADER.to_string(),
            final_clues: 1,
            renames: Vec::new(),
            moves: Vec::new(),
            drops: Vec::new(),
            extra_rows: Vec::new(),
            reversed: false,
        }
    }

    /// Sets categories per main round.
    pub fn categories(mut self, count: usize) -> Self {
        self.categories = count;
        self
    }

    /// Sets clues per category.
    pub fn clues_per_category(mut self, count: usize) -> Self {
        self.clues = count;
        self
    }

    /// Replaces the header line.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// Sets how many final rows are written.
    pub fn final_clues(mut self, count: usize) -> Self {
        self.final_clues = count;
        self
    }

    /// Renames category `index` (0-based) of a round.
    pub fn rename_category(
        mut self,
        round: &'static str,
        index: usize,
        name: impl Into<String>,
    ) -> Self {
        self.renames.push((round, index, name.into()));
        self
    }

    /// Moves the last clue of category `from` into category `to`.
    ///
    /// Row count is unchanged; `from` ends one short and `to` one over.
    pub fn move_clue(mut self, round: &'static str, from: usize, to: usize) -> Self {
        self.moves.push((round, from, to));
        self
    }

    /// Omits clue `clue` of category `category` (both 0-based).
    pub fn drop_clue(mut self, round: &'static str, category: usize, clue: usize) -> Self {
        self.drops.push((round, category, clue));
        self
    }

    /// Appends a raw line after the generated rows.
    pub fn extra_row(mut self, line: impl Into<String>) -> Self {
        self.extra_rows.push(line.into());
        self
    }

    /// Writes data rows in reverse order (header stays first).
    pub fn reversed(mut self) -> Self {
        self.reversed = true;
        self
    }

    /// Name of a category after renames.
    pub fn category_name(&self, round: &str, index: usize) -> String {
        self.renames
            .iter()
            .rev()
            .find(|(r, i, _)| *r == round && *i == index)
            .map(|(_, _, name)| name.clone())
            .unwrap_or_else(|| format!("{} Category {}", title_case(round), index + 1))
    }

    /// Builds the board text.
    pub fn build(self) -> String {
        let mut rows = Vec::new();

        for (round, increment) in [
            ("single", self.single_increment),
            ("double", self.double_increment),
        ] {
            for category in 0..self.categories {
                for clue in 0..self.clues {
                    if self.drops.contains(&(round, category, clue)) {
                        continue;
                    }
                    let moved = self
                        .moves
                        .iter()
                        .find(|(r, from, _)| *r == round && *from == category)
                        .filter(|_| clue + 1 == self.clues)
                        .map(|(_, _, to)| *to);
                    let name = self.category_name(round, moved.unwrap_or(category));
                    let value = (clue as u32 + 1) * increment;
                    rows.push(format!(
                        "{},{},{},What is clue {} of {}?,Answer {}-{}",
                        round,
                        quote(&name),
                        value,
                        clue + 1,
                        quote(&name),
                        category + 1,
                        clue + 1
                    ));
                }
            }
        }

        for n in 0..self.final_clues {
            rows.push(format!(
                "final,Final Category,0,Final clue {},Final answer {}",
                n + 1,
                n + 1
            ));
        }

        if self.reversed {
            rows.reverse();
        }
        rows.extend(self.extra_rows);

        let mut out = self.header;
        out.push('\n');
        for row in rows {
            out.push_str(&row);
            out.push('\n');
        }
        out
    }
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn quote(field: &str) -> String {
    if field.contains(',') || field.contains('"') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
