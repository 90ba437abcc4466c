use std::fs;

use assert_cmd::Command;
use json_workload::{encode, generate, Format, Shape, DEFAULT_PATH};
use predicates::prelude::*;
use tempfile::tempdir;

fn command(name: &str) -> Command {
    Command::cargo_bin(name).unwrap()
}

#[test]
fn generate_then_validate() {
    let dir = tempdir().unwrap();

    command("generate").current_dir(dir.path()).assert().success();

    assert!(dir.path().join(DEFAULT_PATH).exists());

    command("validate").current_dir(dir.path()).assert().success();
}

#[test]
fn generate_ignores_existing_content() {
    let dir = tempdir().unwrap();

    fs::write(dir.path().join(DEFAULT_PATH), "not json").unwrap();

    command("generate").current_dir(dir.path()).assert().success();
    command("validate").current_dir(dir.path()).assert().success();
}

#[test]
fn validate_without_file_fails() {
    let dir = tempdir().unwrap();

    command("validate")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(DEFAULT_PATH));
}

#[test]
fn validate_reports_corrupted_record() {
    let dir = tempdir().unwrap();
    let mut document = generate(Shape::default());

    document.get_mut("array512").unwrap()[99].width = 11.0;

    fs::write(
        dir.path().join(DEFAULT_PATH),
        encode(&document, Format::Pretty).unwrap(),
    )
    .unwrap();

    command("validate")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("array512[99].width"));
}

#[test]
fn validate_truncated_file_fails() {
    let dir = tempdir().unwrap();
    let text = encode(&generate(Shape::default()), Format::Pretty).unwrap();

    fs::write(dir.path().join(DEFAULT_PATH), &text[..text.len() / 2]).unwrap();

    command("validate")
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse error"));
}
