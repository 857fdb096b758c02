//! Integration tests for the linkweb binary.
//!
//! These tests exercise the full command flow through the real binary:
//! stream selection, tokenization, dispatch, graph mutation, query output,
//! and the exit code.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn linkweb() -> Command {
    Command::cargo_bin("linkweb").expect("binary builds")
}

/// Write a command script to a temp file and return the file handle.
fn script_file(script: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(script.as_bytes()).expect("failed to write script");
    file
}

// =============================================================================
// Query output and exit codes
// =============================================================================

#[test]
fn chain_script_from_stdin() {
    linkweb()
        .write_stdin("@addPages X Y Z\n@addLinks X Y\n@addLinks Y Z\n@isConnected X Z\n@isConnected Z X\n")
        .assert()
        .success()
        .stdout("1\n0\n")
        .stderr("");
}

#[test]
fn self_reachability_with_no_links() {
    linkweb()
        .write_stdin("@addPages Lonely\n@isConnected Lonely Lonely\n")
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn cycle_queries_terminate_and_answer() {
    linkweb()
        .write_stdin("@addPages A B\n@addLinks A B\n@addLinks B A\n@isConnected A A\n@isConnected A B\n")
        .assert()
        .success()
        .stdout("1\n1\n");
}

#[test]
fn clean_run_exits_zero() {
    linkweb()
        .write_stdin("@addPages A B\n@addLinks A B\n@isConnected A B\n")
        .assert()
        .code(0);
}

// =============================================================================
// Command errors: reported, counted, run continues
// =============================================================================

#[test]
fn duplicate_page_reports_and_exits_nonzero() {
    linkweb()
        .write_stdin("@addPages A A\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("A added twice"));
}

#[test]
fn unknown_link_source_reports_and_exits_nonzero() {
    linkweb()
        .write_stdin("@addLinks Q R\n")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Source page Q doesn't exist"));
}

#[test]
fn unknown_link_target_reports_but_links_the_rest() {
    linkweb()
        .write_stdin("@addPages A B\n@addLinks A Ghost B\n@isConnected A B\n")
        .assert()
        .code(1)
        .stdout("1\n")
        .stderr(predicate::str::contains("Target page Ghost doesn't exist"));
}

#[test]
fn missing_query_target_prints_no_result() {
    linkweb()
        .write_stdin("@addPages OnlyOne\n@isConnected OnlyOne\n")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("No target page given"));
}

#[test]
fn unknown_query_page_is_reported() {
    linkweb()
        .write_stdin("@addPages A\n@isConnected A Ghost\n")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("No page Ghost found"));
}

#[test]
fn bad_command_is_reported_and_run_continues() {
    linkweb()
        .write_stdin("@dropPages A\n@addPages A\n@isConnected A A\n")
        .assert()
        .code(1)
        .stdout("1\n")
        .stderr(predicate::str::contains("Bad command: @dropPages"));
}

#[test]
fn partial_failure_still_runs_remaining_commands() {
    // One malformed command among valid ones: the valid queries still
    // answer, and the exit code records the one failure.
    linkweb()
        .write_stdin("@addPages A B\n@addLinks A B\n@isConnected A B C\n@isConnected A B\n")
        .assert()
        .code(1)
        .stdout("1\n");
}

// =============================================================================
// Input stream selection
// =============================================================================

#[test]
fn reads_commands_from_named_file() {
    let file = script_file("@addPages X Y\n@addLinks X Y\n@isConnected X Y\n");
    linkweb()
        .arg(file.path())
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn unopenable_file_is_fatal() {
    linkweb()
        .arg("no/such/file.txt")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("no/such/file.txt"));
}

#[test]
fn excess_arguments_fall_back_to_stdin() {
    let file = script_file("@addPages Unused\n");
    linkweb()
        .arg(file.path())
        .arg(file.path())
        .write_stdin("@addPages A\n@isConnected A A\n")
        .assert()
        .code(1)
        .stdout("1\n")
        .stderr(predicate::str::contains("Too many arguments"));
}

#[test]
fn empty_input_is_a_clean_run() {
    linkweb().write_stdin("").assert().code(0).stdout("");
}

// =============================================================================
// Modes
// =============================================================================

#[test]
fn json_mode_emits_a_run_report() {
    let assert = linkweb()
        .arg("--json")
        .write_stdin("@addPages A B\n@addLinks A B\n@isConnected A B\n@isConnected B A\n")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON report");

    assert_eq!(report["errors_seen"], false);
    assert_eq!(report["pages"][0]["name"], "A");
    assert_eq!(report["pages"][0]["links"][0], "B");
    assert_eq!(report["queries"][0]["connected"], true);
    assert_eq!(report["queries"][1]["connected"], false);
}

#[test]
fn json_mode_suppresses_bare_results() {
    let assert = linkweb()
        .arg("--json")
        .write_stdin("@addPages A\n@isConnected A A\n")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(!stdout.starts_with('1'), "bare result leaked into JSON mode");
    assert!(serde_json::from_str::<serde_json::Value>(&stdout).is_ok());
}

#[test]
fn debug_mode_dumps_the_page_list() {
    linkweb()
        .arg("--debug")
        .write_stdin("@addPages A B\n@addLinks A B\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("[debug] page A: links to [B]"));
}

#[test]
fn debug_traces_stay_off_by_default() {
    linkweb()
        .write_stdin("@addPages A B\n@addLinks A B\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("[debug]").not());
}
