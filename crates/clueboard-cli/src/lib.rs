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

//! Clueboard CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! ## Boards
//!
//! - **validate**: Run the full parse and structure check on a board file
//! - **inspect**: Print the category hierarchy of a board, as a tree or JSON
//! - **template**: Write a structurally valid placeholder board
//!
//! ## Store
//!
//! - **upload**: Run the upload workflow against a directory store
//! - **list**: List an owner's stored boards
//! - **export**: Render a stored board back to CSV
//! - **delete**: Remove a stored board
//!
//! # Examples
//!
//! ```no_run
//! use clueboard_cli::commands::validate;
//!
//! # fn main() -> Result<(), clueboard_cli::error::CliError> {
//! validate("friday.csv")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Environment
//!
//! - `CLUEBOARD_MAX_FILE_SIZE`: largest file the CLI will read, in bytes
//! - `CLUEBOARD_MAX_UPLOAD_SIZE`: upload ceiling, in bytes (default 5 MiB)
//! - `RUST_LOG`: log filter; logs go to stderr

pub mod cli;
pub mod commands;
pub mod error;
pub mod store;
