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

//! Template command - placeholder board generation

use super::write_output;
use crate::error::CliError;
use clueboard_core::{template_csv, BoardShape};

/// Write a structurally valid placeholder board to `output`, or stdout.
///
/// # Errors
///
/// Returns `Err` if rendering or writing fails.
pub fn template(output: Option<&str>) -> Result<(), CliError> {
    write_output(&template_csv(&BoardShape::default())?, output)
}
