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

//! Shared board fixtures and builders for Clueboard tests.
//!
//! Fixtures are plain tabular text so they can feed every layer of the
//! pipeline, from the record parser up to the upload workflow.
//!
//! # Quick Start
//!
//! ```rust
//! use clueboard_test::{valid_board_csv, BoardBuilder};
//!
//! // A complete 6×5 board
//! let text = valid_board_csv();
//! assert_eq!(text.lines().count(), 62);
//!
//! // A board whose single round is one clue short
//! let text = BoardBuilder::new().drop_clue("single", 0, 0).build();
//! assert_eq!(text.lines().count(), 61);
//! ```

pub mod builders;
pub mod samples;

pub use builders::BoardBuilder;
pub use samples::{invalid_board_samples, valid_board_csv, BOARD_HEADER};
