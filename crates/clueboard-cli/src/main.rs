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

//! Clueboard command line interface

use clap::Parser;
use clueboard_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Clueboard - trivia board ingestion toolkit
///
/// Validates and inspects tabular board files, generates upload templates,
/// and runs the upload workflow against a local document store.
///
/// # Examples
///
/// ```bash
/// # Check a board before uploading it
/// clueboard validate friday.csv
///
/// # Upload it, overwriting any board with the same name
/// clueboard upload friday.csv --store ./boards --owner alice --on-conflict overwrite
///
/// # Export a stored board back to CSV
/// clueboard export game-1 --store ./boards --owner alice -o friday.csv
/// ```
#[derive(Parser)]
#[command(name = "clueboard")]
#[command(author, version, about = "Clueboard - trivia board ingestion toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let filter = match "clueboard=info".parse() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
