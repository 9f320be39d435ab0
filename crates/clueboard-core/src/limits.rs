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

//! Security limits for board parsing.

/// Default maximum number of data rows (header excluded).
pub const DEFAULT_MAX_ROWS: usize = 10_000;

/// Default maximum line length in bytes.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 64 * 1024;

/// Configurable limits for parser security.
///
/// A legal board has 61 rows, so the defaults never trigger on real uploads.
/// They bound the work done on hostile input before cardinality checks run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of data rows (default: 10k).
    pub max_rows: usize,
    /// Maximum line length in bytes (default: 64KB).
    pub max_line_length: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_rows: usize::MAX,
            max_line_length: usize::MAX,
        }
    }
}
