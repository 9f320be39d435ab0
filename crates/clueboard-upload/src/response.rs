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

//! The serializable outcome of an upload.

use crate::error::UploadResult;
use serde::Serialize;

/// Outcome handed back to the upload's caller.
///
/// Serializes as `{"success": true, "documentId": ...}` or
/// `{"success": false, "error": ...}`. The only constructor is the
/// conversion from an upload result, so exactly one of the two payloads is
/// ever present.
///
/// # Examples
///
/// ```
/// use clueboard_upload::{UploadError, UploadResponse, UploadResult};
///
/// let ok: UploadResult<String> = Ok("game-3".to_string());
/// let response = UploadResponse::from(ok);
/// assert_eq!(
///     serde_json::to_string(&response).unwrap(),
///     r#"{"success":true,"documentId":"game-3"}"#
/// );
///
/// let failed: UploadResult<String> = Err(UploadError::InvalidEncoding);
/// let response = UploadResponse::from(failed);
/// assert!(!response.success());
/// assert_eq!(response.error(), Some("File is not valid UTF-8 text"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    document_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl UploadResponse {
    /// Whether the upload succeeded.
    pub fn success(&self) -> bool {
        self.success
    }

    /// Id of the created document, on success.
    pub fn document_id(&self) -> Option<&str> {
        self.document_id.as_deref()
    }

    /// Failure message, on failure.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl From<UploadResult<String>> for UploadResponse {
    fn from(result: UploadResult<String>) -> Self {
        match result {
            Ok(id) => Self {
                success: true,
                document_id: Some(id),
                error: None,
            },
            Err(e) => Self {
                success: false,
                document_id: None,
                error: Some(e.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UploadError;
    use crate::orchestrator::UploadState;

    #[test]
    fn test_failure_json_shape() {
        let result: UploadResult<String> = Err(UploadError::Cancelled {
            state: UploadState::CollectingName,
        });
        let json = serde_json::to_value(UploadResponse::from(result)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": false, "error": "Upload cancelled by user"})
        );
    }

    #[test]
    fn test_success_has_no_error() {
        let response = UploadResponse::from(Ok::<_, UploadError>("game-1".to_string()));
        assert!(response.success());
        assert_eq!(response.document_id(), Some("game-1"));
        assert_eq!(response.error(), None);
    }
}
