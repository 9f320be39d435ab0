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

//! CLI integration tests

use assert_cmd::Command;
use clueboard_test::{valid_board_csv, BoardBuilder};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn clueboard_cmd() -> Command {
    Command::cargo_bin("clueboard").expect("Failed to find clueboard binary")
}

fn write_board(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write board");
    path.to_string_lossy().into_owned()
}

fn store_path(dir: &TempDir) -> String {
    dir.path().join("store").to_string_lossy().into_owned()
}

fn upload(dir: &TempDir, board: &str, extra: &[&str]) -> assert_cmd::assert::Assert {
    clueboard_cmd()
        .args(["upload", board, "--store", store_path(dir).as_str(), "--owner", "alice"])
        .args(extra)
        .assert()
}

// ===== Help =====

#[test]
fn test_help_output() {
    clueboard_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("trivia board ingestion toolkit"))
        .stdout(predicate::str::contains("upload"));
}

#[test]
fn test_no_subcommand_fails() {
    clueboard_cmd().assert().failure();
}

// ===== Validate / Inspect / Template =====

#[test]
fn test_validate_valid_board() {
    let dir = TempDir::new().unwrap();
    let board = write_board(&dir, "board.csv", &valid_board_csv());

    clueboard_cmd()
        .args(["validate", board.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"))
        .stdout(predicate::str::contains("Single: 6 categories, 30 clues"))
        .stdout(predicate::str::contains("Final: 1 clue"));
}

#[test]
fn test_validate_reports_first_violation() {
    let dir = TempDir::new().unwrap();
    let text = BoardBuilder::new().drop_clue("double", 2, 0).build();
    let board = write_board(&dir, "short.csv", &text);

    clueboard_cmd()
        .args(["validate", board.as_str()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗"))
        .stderr(predicate::str::contains(
            "Round 'double' must contain exactly 30 clues, found 29",
        ));
}

#[test]
fn test_validate_missing_file() {
    clueboard_cmd()
        .args(["validate", "/nonexistent/board.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_validate_respects_file_size_limit() {
    let dir = TempDir::new().unwrap();
    let board = write_board(&dir, "board.csv", &valid_board_csv());

    clueboard_cmd()
        .env("CLUEBOARD_MAX_FILE_SIZE", "10")
        .args(["validate", board.as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"));
}

#[test]
fn test_inspect_tree() {
    let dir = TempDir::new().unwrap();
    let text = BoardBuilder::new()
        .rename_category("single", 0, "Potent Potables")
        .build();
    let board = write_board(&dir, "board.csv", &text);

    clueboard_cmd()
        .args(["inspect", board.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Potent Potables"))
        .stdout(predicate::str::contains("Final round:"));
}

#[test]
fn test_inspect_json() {
    let dir = TempDir::new().unwrap();
    let board = write_board(&dir, "Friday Night.csv", &valid_board_csv());

    let output = clueboard_cmd()
        .args(["inspect", board.as_str(), "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["name"], "Friday Night");
    assert_eq!(json["single"].as_array().unwrap().len(), 6);
    assert_eq!(json["final"]["clues"].as_array().unwrap().len(), 1);
}

#[test]
fn test_template_validates() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("template.csv");

    clueboard_cmd()
        .args(["template", "-o", out.to_str().unwrap()])
        .assert()
        .success();

    clueboard_cmd()
        .args(["validate", out.to_str().unwrap()])
        .assert()
        .success();
}

// ===== Upload / List / Export / Delete =====

#[test]
fn test_upload_prints_document_id() {
    let dir = TempDir::new().unwrap();
    let board = write_board(&dir, "Friday Night.csv", &valid_board_csv());

    upload(&dir, &board, &["--name", "Friday Night"])
        .success()
        .stdout(predicate::str::contains(r#""success": true"#))
        .stdout(predicate::str::contains(r#""documentId": "game-1""#));

    assert!(Path::new(&store_path(&dir)).join("game-1.json").exists());
}

#[test]
fn test_upload_reads_name_from_stdin() {
    let dir = TempDir::new().unwrap();
    let board = write_board(&dir, "board.csv", &valid_board_csv());

    clueboard_cmd()
        .args(["upload", board.as_str(), "--store", store_path(&dir).as_str(), "--owner", "alice"])
        .write_stdin("Quiz Night\n")
        .assert()
        .success();

    clueboard_cmd()
        .args(["list", "--store", store_path(&dir).as_str(), "--owner", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Quiz Night"));
}

#[test]
fn test_upload_cancelled_on_closed_stdin() {
    let dir = TempDir::new().unwrap();
    let board = write_board(&dir, "board.csv", &valid_board_csv());

    upload(&dir, &board, &[])
        .failure()
        .stdout(predicate::str::contains(r#""success": false"#))
        .stdout(predicate::str::contains("Upload cancelled by user"));

    assert!(!Path::new(&store_path(&dir)).join("game-1.json").exists());
}

#[test]
fn test_upload_overwrite_replaces_existing() {
    let dir = TempDir::new().unwrap();
    let board = write_board(&dir, "Game.csv", &valid_board_csv());

    upload(&dir, &board, &["--name", "Game"]).success();
    upload(&dir, &board, &["--name", "GAME", "--on-conflict", "overwrite"])
        .success()
        .stdout(predicate::str::contains("game-2"));

    let store = Path::new(&store_path(&dir)).to_path_buf();
    assert!(!store.join("game-1.json").exists());
    assert!(store.join("game-2.json").exists());
}

#[test]
fn test_upload_cancel_choice_keeps_both() {
    let dir = TempDir::new().unwrap();
    let board = write_board(&dir, "Game.csv", &valid_board_csv());

    upload(&dir, &board, &["--name", "Game"]).success();
    upload(&dir, &board, &["--name", "Game", "--on-conflict", "cancel"]).success();

    clueboard_cmd()
        .args(["list", "--store", store_path(&dir).as_str(), "--owner", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("game-1"))
        .stdout(predicate::str::contains("game-2"));
}

#[test]
fn test_upload_rejects_bad_conflict_choice() {
    let dir = TempDir::new().unwrap();
    let board = write_board(&dir, "Game.csv", &valid_board_csv());

    upload(&dir, &board, &["--on-conflict", "merge"]).failure();
}

#[test]
fn test_upload_rejects_non_csv() {
    let dir = TempDir::new().unwrap();
    let board = write_board(&dir, "board.txt", &valid_board_csv());

    upload(&dir, &board, &["--name", "Board"])
        .failure()
        .stdout(predicate::str::contains(".csv"));
}

#[test]
fn test_upload_reports_parse_error() {
    let dir = TempDir::new().unwrap();
    let text = BoardBuilder::new().move_clue("single", 3, 0).build();
    let board = write_board(&dir, "skewed.csv", &text);

    upload(&dir, &board, &["--name", "Skewed"])
        .failure()
        .stdout(predicate::str::contains("Single Category 1"));
}

#[test]
fn test_upload_size_ceiling_from_env() {
    let dir = TempDir::new().unwrap();
    let board = write_board(&dir, "board.csv", &valid_board_csv());

    clueboard_cmd()
        .env("CLUEBOARD_MAX_UPLOAD_SIZE", "100")
        .args(["upload", board.as_str(), "--store", store_path(&dir).as_str(), "--owner", "alice"])
        .args(["--name", "Board"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("too large"));
}

#[test]
fn test_export_round_trips() {
    let dir = TempDir::new().unwrap();
    let board = write_board(&dir, "board.csv", &valid_board_csv());
    upload(&dir, &board, &["--name", "Board"]).success();

    let out = dir.path().join("exported.csv");
    clueboard_cmd()
        .args(["export", "game-1", "--store", store_path(&dir).as_str(), "--owner", "alice"])
        .args(["-o", out.to_str().unwrap()])
        .assert()
        .success();

    let exported = fs::read_to_string(&out).unwrap();
    assert!(exported.starts_with("round,category,value,prompt,response"));
    clueboard_cmd()
        .args(["validate", out.to_str().unwrap()])
        .assert()
        .success();
}

#[test]
fn test_export_is_owner_scoped() {
    let dir = TempDir::new().unwrap();
    let board = write_board(&dir, "board.csv", &valid_board_csv());
    upload(&dir, &board, &["--name", "Board"]).success();

    clueboard_cmd()
        .args(["export", "game-1", "--store", store_path(&dir).as_str(), "--owner", "bob"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Document not found: game-1"));
}

#[test]
fn test_delete_then_list() {
    let dir = TempDir::new().unwrap();
    let board = write_board(&dir, "board.csv", &valid_board_csv());
    upload(&dir, &board, &["--name", "Board"]).success();

    clueboard_cmd()
        .args(["delete", "game-1", "--store", store_path(&dir).as_str(), "--owner", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted game-1"));

    clueboard_cmd()
        .args(["list", "--store", store_path(&dir).as_str(), "--owner", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No boards stored"));
}
