use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn go_module(querier: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("go.mod"), "module example.com/shop\n").unwrap();
    let db_dir = temp.path().join("db");
    fs::create_dir_all(&db_dir).unwrap();
    let input = db_dir.join("querier.go");
    fs::write(&input, querier).unwrap();
    (temp, input)
}

fn shmock() -> Command {
    let mut cmd = Command::cargo_bin("shmock").unwrap();
    cmd.env_remove("SHMOCK_TEMPLATE").env_remove("SHMOCK_PACKAGE");
    cmd
}

#[test]
fn test_generates_mock_file() {
    let (temp, input) = go_module(
        "package db\n\nimport \"context\"\n\ntype Querier interface {\n\tGetUser(ctx context.Context, id int) (*User, error)\n}\n",
    );
    let output = temp.path().join("mocks/querier_mock.go");

    shmock()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .args(["--format", "false"])
        .assert()
        .success();

    let generated = fs::read_to_string(&output).unwrap();
    assert!(generated.contains("package mocks\n"), "{generated}");
    assert!(generated.contains("db \"example.com/shop/db\""), "{generated}");
    assert!(
        generated.contains("func (mocker *Mocker) GetUser(ctx context.Context, id int) (*db.User, error) {"),
        "{generated}"
    );
}

#[test]
fn test_package_from_environment() {
    let (temp, input) = go_module("package db\n\ntype Querier interface {\n\tPing() error\n}\n");
    let output = temp.path().join("mocks/querier_mock.go");

    shmock()
        .env("SHMOCK_PACKAGE", "fakes")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .args(["--format", "false"])
        .assert()
        .success();

    let generated = fs::read_to_string(&output).unwrap();
    assert!(generated.contains("package fakes\n"), "{generated}");
}

#[test]
fn test_missing_querier_fails_without_writing() {
    let (temp, input) = go_module("package db\n\ntype Store interface{}\n");
    let output = temp.path().join("mocks/querier_mock.go");

    shmock()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .args(["--format", "false"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no Querier found"));

    assert!(!output.exists());
}

#[test]
fn test_missing_template_fails() {
    let (temp, input) = go_module("package db\n\ntype Querier interface {\n\tPing() error\n}\n");
    let output = temp.path().join("mocks/querier_mock.go");

    shmock()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .arg("--template")
        .arg(temp.path().join("missing.tmpl"))
        .args(["--format", "false"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("template"));

    assert!(!output.exists());
}

#[test]
fn test_requires_input_and_output() {
    shmock().assert().failure().code(2);
    shmock().arg("db/querier.go").assert().failure().code(2);
}
