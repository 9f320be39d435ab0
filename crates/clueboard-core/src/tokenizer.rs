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

//! Line tokenizer for delimited board rows.
//!
//! A single left-to-right scan with an in-quotes flag:
//! - `"` toggles quoting, except `""` inside quotes, which yields a literal `"`
//! - the delimiter ends a field only outside quotes
//! - end of line flushes the last field
//!
//! Unbalanced quotes are not an error here. They swallow the remaining
//! delimiters of the line, which the record parser reports as a field-count
//! mismatch.

/// The quote character.
pub const QUOTE: char = '"';

/// The default field delimiter.
pub const DEFAULT_DELIMITER: char = ',';

/// Split one line into its fields.
///
/// # Examples
///
/// ```
/// use clueboard_core::tokenize_line;
///
/// let fields = tokenize_line(r#"single,"Cities, Towns",200"#, ',');
/// assert_eq!(fields, vec!["single", "Cities, Towns", "200"]);
///
/// let fields = tokenize_line(r#""He said ""Hello""""#, ',');
/// assert_eq!(fields, vec![r#"He said "Hello""#]);
/// ```
pub fn tokenize_line(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == QUOTE {
            if in_quotes && chars.peek() == Some(&QUOTE) {
                current.push(QUOTE);
                chars.next();
            } else {
                in_quotes = !in_quotes;
            }
        } else if ch == delimiter && !in_quotes {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }

    fields.push(current);
    fields
}
