#![cfg(unix)]

mod common;

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

// PATH 指向空目录，保证 which 找不到真实的 es
fn run(bin: &str, es: Option<&Path>, args: &[&str], empty_path: &Path) -> Output {
    let mut cmd = Command::new(bin);
    cmd.args(args).env("PATH", empty_path).env_remove("EVERYTHING_ES_PATH");
    if let Some(es) = es {
        cmd.env("EVERYTHING_ES_PATH", es);
    }
    cmd.output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_search_three_results() {
    let _guard = common::lock();
    let dir = TempDir::new().unwrap();
    let es = common::fake_es(
        dir.path(),
        "es.exe",
        "printf '/data/a.txt\\n/data/b.txt\\n/data/c.txt\\n'",
    );
    let empty = TempDir::new().unwrap();

    let out = run(
        env!("CARGO_BIN_EXE_es-search"),
        Some(&es),
        &["*.txt", "--limit", "10"],
        empty.path(),
    );

    assert!(out.status.success());
    let md = stdout(&out);
    assert!(md.contains("**Results:** 3"));
    assert!(!md.contains("(limited to 10)"));
    assert!(md.contains("1. `/data/a.txt`"));
    assert!(md.contains("2. `/data/b.txt`"));
    assert!(md.contains("3. `/data/c.txt`"));
    assert!(!md.contains("4. "));
}

#[test]
fn test_search_no_results_exits_zero() {
    let _guard = common::lock();
    let dir = TempDir::new().unwrap();
    let es = common::fake_es(dir.path(), "es.exe", "exit 0");
    let empty = TempDir::new().unwrap();

    let out = run(env!("CARGO_BIN_EXE_es-search"), Some(&es), &["*.nothing"], empty.path());

    assert!(out.status.success());
    assert_eq!(
        stdout(&out),
        "# Everything Search: No results\n\nNo files found matching: `*.nothing`\n"
    );
}

#[test]
fn test_search_failure_prints_query_error() {
    let _guard = common::lock();
    let dir = TempDir::new().unwrap();
    let es = common::fake_es(dir.path(), "es.exe", "exit 2");
    let empty = TempDir::new().unwrap();

    let out = run(env!("CARGO_BIN_EXE_es-search"), Some(&es), &["bad("], empty.path());

    assert_eq!(out.status.code(), Some(1));
    let md = stdout(&out);
    assert!(md.starts_with("# Everything Search: Query Error"));
    assert!(md.contains("`bad(`"));
}

#[test]
fn test_search_without_es_prints_guidance() {
    let _guard = common::lock();
    let empty = TempDir::new().unwrap();
    let out = run(env!("CARGO_BIN_EXE_es-search"), None, &["x"], empty.path());

    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).starts_with("# Everything Search: es.exe Not Found"));
}

#[test]
fn test_search_rejects_zero_limit() {
    let _guard = common::lock();
    let empty = TempDir::new().unwrap();
    let out = run(env!("CARGO_BIN_EXE_es-search"), None, &["x", "--limit", "0"], empty.path());

    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
}

#[test]
fn test_verify_not_found() {
    let _guard = common::lock();
    let empty = TempDir::new().unwrap();
    let out = run(env!("CARGO_BIN_EXE_verify-es"), None, &[], empty.path());

    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).contains("STATUS: es.exe NOT FOUND"));
}

#[test]
fn test_verify_ready() {
    let _guard = common::lock();
    let dir = TempDir::new().unwrap();
    let es = common::fake_es(dir.path(), "es.exe", "echo 1.1.0.30");
    let empty = TempDir::new().unwrap();

    let out = run(env!("CARGO_BIN_EXE_verify-es"), Some(&es), &[], empty.path());

    assert_eq!(out.status.code(), Some(0));
    let report = stdout(&out);
    assert!(report.contains("STATUS: es.exe READY"));
    assert!(report.contains(&es.display().to_string()));
}

#[test]
fn test_verify_rejects_arguments() {
    let _guard = common::lock();
    let empty = TempDir::new().unwrap();
    let out = run(env!("CARGO_BIN_EXE_verify-es"), None, &["extra"], empty.path());

    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
}
