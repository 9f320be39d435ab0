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

//! Uploaded files: type and size checks and display-name suggestion.

use crate::error::{UploadError, UploadResult};

/// Name used when nothing usable survives from the file name.
pub const DEFAULT_GAME_NAME: &str = "Untitled Game";

/// Content types accepted for board uploads (parameters are ignored).
pub const ACCEPTED_CONTENT_TYPES: [&str; 2] = ["text/csv", "application/csv"];

/// Punctuation kept when deriving a display name from a file name.
const NAME_PUNCTUATION: &[char] = &['-', '_', '\'', '&', '(', ')', '!', '?'];

/// A file handed to the upload workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// Original file name, used as the document's source identifier.
    pub file_name: String,
    /// Declared content type, if the caller knows one.
    pub content_type: Option<String>,
    /// Raw file content.
    pub content: Vec<u8>,
}

impl UploadFile {
    /// Create an upload without a declared content type.
    pub fn new(file_name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            content: content.into(),
        }
    }

    /// Set the declared content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Size in bytes.
    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }

    /// Whether the extension or declared content type marks tabular text.
    pub fn is_tabular(&self) -> bool {
        let by_extension = self
            .file_name
            .rsplit_once('.')
            .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("csv"));

        let by_content_type = self.content_type.as_deref().is_some_and(|declared| {
            let essence = declared.split(';').next().unwrap_or("").trim();
            ACCEPTED_CONTENT_TYPES
                .iter()
                .any(|accepted| essence.eq_ignore_ascii_case(accepted))
        });

        by_extension || by_content_type
    }

    /// Content as text, without a leading byte-order mark.
    pub fn text(&self) -> UploadResult<&str> {
        let text = std::str::from_utf8(&self.content).map_err(|_| UploadError::InvalidEncoding)?;
        Ok(text.strip_prefix('\u{feff}').unwrap_or(text))
    }
}

/// Check type and size, and suggest a display name.
///
/// # Errors
///
/// Returns [`UploadError::InvalidFile`] with a user-facing reason when the
/// file is not tabular text, is empty, or exceeds `max_bytes`.
pub fn validate_file(file: &UploadFile, max_bytes: u64) -> UploadResult<String> {
    if !file.is_tabular() {
        return Err(UploadError::InvalidFile(format!(
            "Unsupported file type for '{}': please upload a .csv file",
            file.file_name
        )));
    }

    if file.size() == 0 {
        return Err(UploadError::InvalidFile(format!(
            "File '{}' is empty",
            file.file_name
        )));
    }

    if file.size() > max_bytes {
        return Err(UploadError::InvalidFile(format!(
            "File '{}' is too large ({} bytes). Maximum allowed size is {} bytes",
            file.file_name,
            file.size(),
            max_bytes
        )));
    }

    Ok(suggest_name(&file.file_name))
}

/// Derive a display name from a file name.
///
/// Drops any directory part and the final extension, removes characters
/// outside letters, digits, whitespace and `- _ ' & ( ) ! ?`, and collapses
/// whitespace runs. Falls back to [`DEFAULT_GAME_NAME`].
///
/// # Examples
///
/// ```
/// use clueboard_upload::suggest_name;
///
/// assert_eq!(suggest_name("Friday  Night <v2>.csv"), "Friday Night v2");
/// assert_eq!(suggest_name("uploads/season_3.final.csv"), "season_3final");
/// assert_eq!(suggest_name("###.csv"), "Untitled Game");
/// ```
pub fn suggest_name(file_name: &str) -> String {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);
    let stem = match base.rfind('.') {
        Some(dot) => &base[..dot],
        None => base,
    };

    let kept: String = stem
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || NAME_PUNCTUATION.contains(c))
        .collect();

    let collapsed = kept.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.is_empty() {
        DEFAULT_GAME_NAME.to_string()
    } else {
        collapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_case_insensitive() {
        assert!(UploadFile::new("board.CSV", "x").is_tabular());
        assert!(UploadFile::new("board.csv", "x").is_tabular());
        assert!(!UploadFile::new("board.txt", "x").is_tabular());
        assert!(!UploadFile::new("csv", "x").is_tabular());
    }

    #[test]
    fn test_content_type_accepted() {
        let file = UploadFile::new("upload", "x").with_content_type("text/csv; charset=utf-8");
        assert!(file.is_tabular());
        let file = UploadFile::new("upload.bin", "x").with_content_type("application/octet-stream");
        assert!(!file.is_tabular());
    }

    #[test]
    fn test_validate_rejects_wrong_type() {
        let err = validate_file(&UploadFile::new("board.xlsx", "x"), 100).unwrap_err();
        assert!(matches!(err, UploadError::InvalidFile(_)));
        assert!(err.to_string().contains(".csv"));
    }

    #[test]
    fn test_validate_rejects_empty() {
        let err = validate_file(&UploadFile::new("board.csv", ""), 100).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_validate_size_ceiling() {
        let file = UploadFile::new("board.csv", vec![b'a'; 100]);
        assert!(validate_file(&file, 100).is_ok());
        let err = validate_file(&file, 99).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_validate_returns_suggestion() {
        let file = UploadFile::new("My Game.csv", "x");
        assert_eq!(validate_file(&file, 100).unwrap(), "My Game");
    }

    #[test]
    fn test_suggest_name_rules() {
        assert_eq!(suggest_name("game.csv"), "game");
        assert_eq!(suggest_name("  Rock & Roll  (Live!) .csv"), "Rock & Roll (Live!)");
        assert_eq!(suggest_name("C:\\boards\\Trivia\tNight.csv"), "Trivia Night");
        assert_eq!(suggest_name(""), DEFAULT_GAME_NAME);
        assert_eq!(suggest_name("   .csv"), DEFAULT_GAME_NAME);
        assert_eq!(suggest_name("Café Quiz.csv"), "Café Quiz");
    }

    #[test]
    fn test_bare_extension_falls_back_to_default() {
        let file = UploadFile::new(".csv", "x");
        assert!(file.is_tabular());
        assert_eq!(validate_file(&file, 100).unwrap(), DEFAULT_GAME_NAME);
        assert_eq!(suggest_name(".csv"), DEFAULT_GAME_NAME);
        assert_eq!(suggest_name("boards/.CSV"), DEFAULT_GAME_NAME);
        assert_eq!(suggest_name(".hidden game.csv"), "hidden game");
    }

    #[test]
    fn test_text_strips_bom() {
        let file = UploadFile::new("b.csv", "\u{feff}round,category".as_bytes().to_vec());
        assert_eq!(file.text().unwrap(), "round,category");
    }

    #[test]
    fn test_text_rejects_invalid_utf8() {
        let file = UploadFile::new("b.csv", vec![0xff, 0xfe, 0x00]);
        assert!(matches!(file.text(), Err(UploadError::InvalidEncoding)));
    }
}
