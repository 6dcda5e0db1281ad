//! End-to-end sync over real files in a temp directory.

use hdrsync::reconcile::Action;
use hdrsync::sync::{collect_c_sources, sync_file, SyncOptions};
use std::fs;
use std::path::{Path, PathBuf};

const SOURCE: &str = "/* adds two numbers */\nint add(int a, int b) {\n  return a + b;\n}\n";
const EXPECTED_HEADER: &str = "#pragma once\n\n/* adds two numbers */\nint add(int a, int b);\n";

/// Write a fixture file under `dir` and return its path.
fn write_file(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).expect("failed to write fixture");
    path
}

#[test]
fn creates_missing_header() {
    let tmp = tempfile::tempdir().expect("failed to create temp directory");
    let src = write_file(tmp.path(), "add.c", SOURCE);

    let out = sync_file(&src, SyncOptions::default()).expect("sync failed");

    assert!(!out.header_existed);
    assert_eq!(out.definitions, 1);
    assert!(out.changed);
    assert!(out.written);
    let header = fs::read_to_string(tmp.path().join("add.h")).expect("header not written");
    assert_eq!(header, EXPECTED_HEADER);
}

#[test]
fn second_run_is_idempotent() {
    let tmp = tempfile::tempdir().expect("failed to create temp directory");
    let src = write_file(tmp.path(), "add.c", SOURCE);

    sync_file(&src, SyncOptions::default()).expect("first sync failed");
    let before = fs::read_to_string(tmp.path().join("add.h")).expect("header not written");

    let out = sync_file(&src, SyncOptions::default()).expect("second sync failed");

    assert!(out.header_existed);
    assert!(!out.changed, "second run must be a no-op");
    assert!(!out.written);
    assert!(out.actions.is_empty());
    let after = fs::read_to_string(tmp.path().join("add.h")).expect("header missing");
    assert_eq!(before, after);
}

#[test]
fn check_mode_never_writes() {
    let tmp = tempfile::tempdir().expect("failed to create temp directory");
    let src = write_file(tmp.path(), "add.c", SOURCE);

    let out = sync_file(&src, SyncOptions { check: true }).expect("check failed");

    assert!(out.changed, "missing header counts as stale");
    assert!(!out.written);
    assert!(!tmp.path().join("add.h").exists());
}

#[test]
fn renamed_function_replaces_declaration() {
    let tmp = tempfile::tempdir().expect("failed to create temp directory");
    let src = write_file(
        tmp.path(),
        "add.c",
        "/* doc */\nint sum(int a, int b) {\n  return a + b;\n}\n",
    );
    write_file(
        tmp.path(),
        "add.h",
        "#pragma once\n\n/* doc */\nint add(int a, int b);\n",
    );

    let out = sync_file(&src, SyncOptions::default()).expect("sync failed");

    assert_eq!(
        out.actions,
        vec![
            Action::Removed("add".to_string()),
            Action::Added("sum".to_string())
        ]
    );
    let header = fs::read_to_string(tmp.path().join("add.h")).expect("header missing");
    assert_eq!(header, "#pragma once\n\n\n\n/* doc */\nint sum(int a, int b);\n");
}

#[test]
fn updated_doc_rewrites_in_place() {
    let tmp = tempfile::tempdir().expect("failed to create temp directory");
    let src = write_file(
        tmp.path(),
        "add.c",
        "/* new doc */\nint add(int a, int b) {\n  return a + b;\n}\n",
    );
    write_file(
        tmp.path(),
        "add.h",
        "#pragma once\n\n/* old doc */\nint add(int a, int b);\n\ntypedef int add_fn(int, int);\n",
    );

    let out = sync_file(&src, SyncOptions::default()).expect("sync failed");

    assert_eq!(out.actions, vec![Action::Updated("add".to_string())]);
    let header = fs::read_to_string(tmp.path().join("add.h")).expect("header missing");
    assert_eq!(
        header,
        "#pragma once\n\n/* new doc */\nint add(int a, int b);\n\ntypedef int add_fn(int, int);\n"
    );
}

#[test]
fn private_functions_stay_out() {
    let tmp = tempfile::tempdir().expect("failed to create temp directory");
    let src = write_file(
        tmp.path(),
        "add.c",
        concat!(
            "/* helper */\nstatic int helper(int x) {\n  return x;\n}\n\n",
            "/* hidden */\nint _secret(void) {\n  return 0;\n}\n\n",
            "/* adds two numbers */\nint add(int a, int b) {\n  return a + b;\n}\n",
        ),
    );

    let out = sync_file(&src, SyncOptions::default()).expect("sync failed");

    assert_eq!(out.definitions, 1);
    let header = fs::read_to_string(tmp.path().join("add.h")).expect("header missing");
    assert_eq!(header, EXPECTED_HEADER);
}

#[test]
fn function_made_static_loses_its_declaration() {
    let tmp = tempfile::tempdir().expect("failed to create temp directory");
    let src = write_file(
        tmp.path(),
        "add.c",
        "/* adds two numbers */\nstatic int add(int a, int b) {\n  return a + b;\n}\n",
    );
    write_file(tmp.path(), "add.h", EXPECTED_HEADER);

    let out = sync_file(&src, SyncOptions::default()).expect("sync failed");

    assert_eq!(out.definitions, 0);
    assert_eq!(out.actions, vec![Action::Removed("add".to_string())]);
    let header = fs::read_to_string(tmp.path().join("add.h")).expect("header missing");
    assert_eq!(header, "#pragma once\n\n\n");
}

#[test]
fn unbalanced_source_is_an_error() {
    let tmp = tempfile::tempdir().expect("failed to create temp directory");
    let src = write_file(
        tmp.path(),
        "broken.c",
        "/* doc */\nint f(int a) {\n  return a;\n",
    );

    let err = sync_file(&src, SyncOptions::default()).expect_err("must fail");
    assert!(err.to_string().contains("broken.c"));
    assert!(!tmp.path().join("broken.h").exists());
}

#[test]
fn directory_walk_collects_sources() {
    let tmp = tempfile::tempdir().expect("failed to create temp directory");
    write_file(tmp.path(), "a.c", SOURCE);
    write_file(tmp.path(), "b.c", SOURCE);
    write_file(tmp.path(), "note.h", "#pragma once\n");
    write_file(tmp.path(), "readme.md", "docs\n");
    fs::create_dir(tmp.path().join("nested")).expect("failed to create directory");
    write_file(&tmp.path().join("nested"), "c.c", SOURCE);

    let files = collect_c_sources(tmp.path());

    let names: Vec<_> = files
        .iter()
        .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
        .collect();
    assert_eq!(names, vec!["a.c", "b.c", "c.c"]);
}
