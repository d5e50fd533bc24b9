//! Integration tests for the `heft` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn bench_root() -> TempDir {
    let temp = TempDir::new().unwrap();
    write(
        temp.path(),
        "preact/src/app.jsx",
        "import { h } from 'preact';\nexport default function App() { return <p>Hi</p>; }\n",
    );
    write(
        temp.path(),
        "react/src/App.jsx",
        "import React from 'react';\nexport default function App() { return <p>Hi</p>; }\n",
    );
    temp
}

fn heft(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("heft").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_lists_commands() {
    Command::cargo_bin("heft")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn list_prints_default_registry() {
    let root = bench_root();
    heft(root.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("preact"))
        .stdout(predicate::str::contains("vue"))
        .stdout(predicate::str::contains("svelte/src/App.svelte (missing)"))
        .stdout(predicate::str::contains("svelte4").not());
}

#[test]
fn list_respects_config_file() {
    let root = bench_root();
    write(root.path(), "heft.toml", "frameworks = [\"svelte4\", \"react\"]\n");
    heft(root.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("svelte4"))
        .stdout(predicate::str::contains("preact").not());
}

#[test]
fn run_writes_stats_for_jsx_frameworks() {
    let root = bench_root();
    heft(root.path())
        .args(["run", "--only", "preact,react", "--no-bundle"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Size Summary"));

    let csv = fs::read_to_string(root.path().join("out/stats.csv")).unwrap();
    assert!(csv.starts_with(",preact,react\n"), "{csv}");
    assert_eq!(csv.lines().count(), 7);
    assert!(root.path().join("out/preact.min.js.brotli").is_file());
}

#[test]
fn run_reports_missing_source_and_fails() {
    let root = bench_root();
    heft(root.path())
        .args(["run", "--only", "preact,vue", "--no-bundle"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("vue (component)"))
        .stderr(predicate::str::contains("1 framework track(s) failed"));

    let csv = fs::read_to_string(root.path().join("out/stats.csv")).unwrap();
    assert!(csv.contains("component (min),"));
    assert!(csv.contains(",failed"));
}

#[test]
fn run_rejects_unknown_framework() {
    let root = bench_root();
    heft(root.path())
        .args(["run", "--only", "ember"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown framework 'ember'"));
}

#[test]
fn run_rejects_missing_root() {
    let root = bench_root();
    heft(root.path())
        .args(["run", "--root", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("benchmark root is not a directory"));
}

#[test]
fn env_overrides_output_dir() {
    let root = bench_root();
    heft(root.path())
        .env("HEFT_OUT_DIR", "results")
        .args(["run", "--only", "react", "--no-bundle", "--no-persist"])
        .assert()
        .success();

    let results = root.path().join("results");
    assert!(results.join("stats.csv").is_file());
    assert!(!results.join("react.js").exists());
}
