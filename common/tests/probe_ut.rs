#![cfg(unix)]

use std::ffi::OsString;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use dsocr_common::error::ShimError;
use dsocr_common::probe;
use tempfile::TempDir;

fn fake_tool(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn search_path(dirs: &[&Path]) -> OsString {
    std::env::join_paths(dirs.iter().copied()).unwrap()
}

#[test]
fn resolves_first_match_in_path_order() {
    let temp = TempDir::new().unwrap();
    let dir_a = temp.path().join("a");
    let dir_b = temp.path().join("b");
    fs::create_dir_all(&dir_a).unwrap();
    fs::create_dir_all(&dir_b).unwrap();
    let first = fake_tool(&dir_a, "dsocr");
    fake_tool(&dir_b, "dsocr");

    let resolved = probe::resolve_in("dsocr", Some(search_path(&[&dir_a, &dir_b])), temp.path(), None).unwrap();
    assert_eq!(resolved, first);
}

#[test]
fn missing_tool_reports_tool_missing() {
    let temp = TempDir::new().unwrap();

    let err = probe::resolve_in("dsocr", Some(search_path(&[temp.path()])), temp.path(), None).unwrap_err();
    assert!(matches!(err, ShimError::ToolMissing(tool) if tool == "dsocr"));
}

#[test]
fn non_executable_candidates_are_skipped() {
    let temp = TempDir::new().unwrap();
    let dir_a = temp.path().join("a");
    let dir_b = temp.path().join("b");
    fs::create_dir_all(&dir_a).unwrap();
    fs::create_dir_all(&dir_b).unwrap();
    let plain = dir_a.join("dsocr");
    fs::write(&plain, "not a program").unwrap();
    fs::set_permissions(&plain, fs::Permissions::from_mode(0o644)).unwrap();
    let runnable = fake_tool(&dir_b, "dsocr");

    let resolved = probe::resolve_in("dsocr", Some(search_path(&[&dir_a, &dir_b])), temp.path(), None).unwrap();
    assert_eq!(resolved, runnable);
}

#[test]
fn own_executable_is_skipped() {
    let temp = TempDir::new().unwrap();
    let own = fake_tool(temp.path(), "dsocr");

    let err = probe::resolve_in("dsocr", Some(search_path(&[temp.path()])), temp.path(), Some(own)).unwrap_err();
    assert!(matches!(err, ShimError::ToolMissing(_)));
}

#[test]
fn real_tool_wins_over_own_shadow() {
    let temp = TempDir::new().unwrap();
    let dir_shim = temp.path().join("shim");
    let dir_real = temp.path().join("real");
    fs::create_dir_all(&dir_shim).unwrap();
    fs::create_dir_all(&dir_real).unwrap();
    let own = fake_tool(&dir_shim, "dsocr");
    let real = fake_tool(&dir_real, "dsocr");

    let resolved = probe::resolve_in("dsocr", Some(search_path(&[&dir_shim, &dir_real])), temp.path(), Some(own)).unwrap();
    assert_eq!(resolved, real);
}

#[test]
fn unset_search_path_is_not_found() {
    let err = probe::resolve_in("dsocr", None::<OsString>, "/", None).unwrap_err();
    assert!(matches!(err, ShimError::ToolMissing(_)));
}
