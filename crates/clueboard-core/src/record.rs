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

//! Rounds and flat clue records.

use std::fmt;

/// One of the three partitions of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Round {
    /// The first main round.
    Single,
    /// The second main round, played at higher values.
    Double,
    /// The closing single-clue round.
    Final,
}

impl Round {
    /// All rounds in play order.
    pub const ALL: [Round; 3] = [Round::Single, Round::Double, Round::Final];

    /// Match an input token. Matching is exact and case-sensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use clueboard_core::Round;
    ///
    /// assert_eq!(Round::from_token("double"), Some(Round::Double));
    /// assert_eq!(Round::from_token("Double"), None);
    /// ```
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "single" => Some(Self::Single),
            "double" => Some(Self::Double),
            "final" => Some(Self::Final),
            _ => None,
        }
    }

    /// The token used for this round in tabular input.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
            Self::Final => "final",
        }
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One clue as parsed from a row of input.
///
/// Records exist only between parsing and hierarchy building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Line the record came from (1-based, header is line 1).
    pub line: usize,
    /// The round this clue belongs to.
    pub round: Round,
    /// Category name, trimmed.
    pub category: String,
    /// Dollar value.
    pub value: u32,
    /// The clue text shown to players, trimmed.
    pub prompt: String,
    /// The correct response, trimmed.
    pub response: String,
}

impl Record {
    /// Create a new record.
    pub fn new(
        line: usize,
        round: Round,
        category: impl Into<String>,
        value: u32,
        prompt: impl Into<String>,
        response: impl Into<String>,
    ) -> Self {
        Self {
            line,
            round,
            category: category.into(),
            value,
            prompt: prompt.into(),
            response: response.into(),
        }
    }
}
