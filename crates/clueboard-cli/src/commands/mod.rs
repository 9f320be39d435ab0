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

//! CLI command implementations

mod inspect;
mod store;
mod template;
mod upload;
mod validate;

pub use inspect::inspect;
pub use store::{delete, export, list};
pub use template::template;
pub use upload::upload;
pub use validate::validate;

use crate::error::CliError;
use std::fs;
use std::future::Future;
use std::io::{self, Write};

/// Default maximum file size the CLI will read (100 MB).
/// Can be overridden via the `CLUEBOARD_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

fn get_max_file_size() -> u64 {
    std::env::var("CLUEBOARD_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file as raw bytes, checking its size before reading.
///
/// # Errors
///
/// Returns `Err` if the file's metadata cannot be read, the file exceeds the
/// maximum size (configurable via `CLUEBOARD_MAX_FILE_SIZE`), or the read
/// fails.
pub fn read_bytes(path: &str) -> Result<Vec<u8>, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    fs::read(path).map_err(|e| CliError::io_error(path, e))
}

/// Read a file as text, checking its size before reading.
///
/// # Examples
///
/// ```no_run
/// use clueboard_cli::commands::read_file;
///
/// # fn main() -> Result<(), clueboard_cli::error::CliError> {
/// let content = read_file("friday.csv")?;
/// assert!(content.starts_with("round"));
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// As [`read_bytes`], and also when the content is not UTF-8.
pub fn read_file(path: &str) -> Result<String, CliError> {
    let bytes = read_bytes(path)?;
    String::from_utf8(bytes).map_err(|_| CliError::Io {
        path: path.into(),
        message: "stream did not contain valid UTF-8".to_string(),
    })
}

/// Write content to a file or stdout.
///
/// # Errors
///
/// Returns `Err` if writing fails.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}

/// Run a future to completion on a fresh single-threaded runtime.
pub(crate) fn block_on<F: Future>(future: F) -> Result<F::Output, CliError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::Runtime(e.to_string()))?;
    Ok(runtime.block_on(future))
}

/// Display name for a board read straight from disk.
pub(crate) fn board_name(path: &str) -> String {
    clueboard_upload::suggest_name(path)
}
