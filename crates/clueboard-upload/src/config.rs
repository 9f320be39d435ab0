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

//! Upload workflow configuration.

use clueboard_core::ParseOptions;
use std::time::Duration;

/// Default upload ceiling: 5 MiB.
///
/// Can be overridden via the `CLUEBOARD_MAX_UPLOAD_SIZE` environment variable.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_UPLOAD_BYTES`].
pub const MAX_UPLOAD_SIZE_ENV: &str = "CLUEBOARD_MAX_UPLOAD_SIZE";

/// Configuration for an [`Uploader`](crate::Uploader).
///
/// # Examples
///
/// ```
/// use clueboard_upload::UploadConfig;
/// use std::time::Duration;
///
/// let config = UploadConfig::default()
///     .with_max_upload_bytes(1024)
///     .with_prompt_timeout(Duration::from_secs(30));
/// assert_eq!(config.max_upload_bytes, 1024);
/// ```
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Largest accepted file, in bytes (inclusive).
    pub max_upload_bytes: u64,
    /// Options handed to the board parser.
    pub parse: ParseOptions,
    /// How long to wait for each prompt. `None` waits indefinitely.
    pub prompt_timeout: Option<Duration>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            parse: ParseOptions::default(),
            prompt_timeout: None,
        }
    }
}

impl UploadConfig {
    /// Default configuration with the upload ceiling read from
    /// `CLUEBOARD_MAX_UPLOAD_SIZE`, if set to a valid byte count.
    pub fn from_env() -> Self {
        let max_upload_bytes = std::env::var(MAX_UPLOAD_SIZE_ENV)
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

        Self {
            max_upload_bytes,
            ..Self::default()
        }
    }

    /// Set the upload ceiling.
    pub fn with_max_upload_bytes(mut self, bytes: u64) -> Self {
        self.max_upload_bytes = bytes;
        self
    }

    /// Set the parser options.
    pub fn with_parse_options(mut self, parse: ParseOptions) -> Self {
        self.parse = parse;
        self
    }

    /// Bound how long each prompt may take.
    pub fn with_prompt_timeout(mut self, timeout: Duration) -> Self {
        self.prompt_timeout = Some(timeout);
        self
    }
}
