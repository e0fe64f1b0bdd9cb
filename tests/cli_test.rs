//! CLI integration tests
//!
//! Uses `assert_cmd` to spawn the `descent` binary and verify exit codes,
//! stdout content, and stderr content.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn descent() -> Command {
    cargo_bin_cmd!("descent")
}

/// Write `source` to a fresh temp dir and return both.
fn program(source: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("program.txt");
    fs::write(&path, source).expect("write program");
    (dir, path)
}

#[test]
fn help_exits_0_with_description() {
    descent()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Graphviz digraph"));
}

#[test]
fn missing_input_argument_is_a_usage_error() {
    descent()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn valid_program_prints_document() {
    let (_dir, path) = program("# demo\nx := 1 + 2\n");
    descent()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("digraph ParseTree {\n"))
        .stdout(predicate::str::ends_with("}\n"))
        .stdout(predicate::str::contains("[label=\"+\", shape=oval]"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn syntax_error_exits_1_and_is_logged() {
    let (_dir, path) = program("x ::= 1\n");
    descent()
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"ERROR-"))
        .stderr(predicate::str::contains(
            "SYNTAX ERROR: 'ASSIGN' was expected but '::=' was found.",
        ));
}

#[test]
fn quiet_silences_the_log() {
    let (_dir, path) = program("write\n");
    descent()
        .arg(&path)
        .arg("-q")
        .assert()
        .code(1)
        .stderr(predicate::str::is_empty());
}

#[test]
fn trailing_tokens_are_warned_about() {
    let (_dir, path) = program("read x ) fi\n");
    descent()
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("2 token(s) after the end of the program"));
}

#[test]
fn output_flag_writes_file() {
    let (dir, path) = program("read x\n");
    let out = dir.path().join("tree.dot");
    descent()
        .arg(&path)
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let document = fs::read_to_string(&out).expect("read output");
    assert!(document.starts_with("digraph ParseTree {"));
    assert!(document.contains("[label=\"read\", shape=oval]"));
}

#[test]
fn tokens_flag_lists_classified_lexemes() {
    let (_dir, path) = program("read x\nwrite 42\n");
    descent()
        .arg(&path)
        .arg("--tokens")
        .assert()
        .success()
        .stderr(predicate::str::contains("read\tREAD\nx\tOTHER\nwrite\tWRITE\n42\tNUMBER\n"));
}

#[test]
fn link_flag_prints_url_to_stderr() {
    let (_dir, path) = program("read x\n");
    descent()
        .arg(&path)
        .arg("--link")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("}\n"))
        .stdout(predicate::str::contains("GraphvizOnline").not())
        .stderr(predicate::str::contains(
            "https://dreampuf.github.io/GraphvizOnline/#digraph%20ParseTree%20%7B",
        ));
}

#[test]
fn root_label_flag_renames_the_root() {
    let (_dir, path) = program("");
    descent()
        .arg(&path)
        .args(["--root-label", "ROOT"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ROOT-0\" [label=\"ROOT\", shape=diamond]"));
}

#[test]
fn unreadable_input_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    descent()
        .arg(dir.path().join("missing.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not read input file"));
}

#[test]
fn demo_program_parses() {
    let demo = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/sample.txt");
    descent()
        .arg(demo)
        .assert()
        .success()
        .stdout(predicate::str::contains("[label=\"limit\", shape=oval]"))
        .stdout(predicate::str::contains("\"ERROR-").not());
}
