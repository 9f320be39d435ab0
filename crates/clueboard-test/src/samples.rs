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

//! Canonical valid and invalid board samples.

use crate::builders::BoardBuilder;

/// The header row of a board file.
pub const BOARD_HEADER: &str = "round,category,value,prompt,response";

/// A complete, legal 6×5 board.
pub fn valid_board_csv() -> String {
    BoardBuilder::new().build()
}

/// Invalid boards for error-path testing.
///
/// Each tuple is (name, board_text). Every sample fails somewhere in the
/// pipeline; none of them is a legal board.
pub fn invalid_board_samples() -> Vec<(&'static str, String)> {
    vec![
        ("header_only", format!("{}\n", BOARD_HEADER)),
        ("empty", String::new()),
        ("single_one_short", BoardBuilder::new().drop_clue("single", 0, 0).build()),
        ("double_one_short", BoardBuilder::new().drop_clue("double", 3, 2).build()),
        ("no_final", BoardBuilder::new().final_clues(0).build()),
        ("two_finals", BoardBuilder::new().final_clues(2).build()),
        ("category_skew", BoardBuilder::new().move_clue("single", 1, 0).build()),
        (
            "merged_categories",
            BoardBuilder::new()
                .rename_category("double", 1, "Double Category 1")
                .build(),
        ),
        (
            "unknown_round",
            BoardBuilder::new().extra_row("triple,X,200,q,r").build(),
        ),
        (
            "bad_value",
            BoardBuilder::new().extra_row("single,X,two hundred,q,r").build(),
        ),
        (
            "short_row",
            BoardBuilder::new().extra_row("single,X,200,q").build(),
        ),
        (
            "unbalanced_quote",
            BoardBuilder::new().extra_row("single,\"X,200,q,r").build(),
        ),
    ]
}
