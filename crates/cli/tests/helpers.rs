use std::fs;
use std::path::Path;

use tempfile::tempdir;
use unitcost::commands::resolve_id;
use unitcost::{canonicalize_or_current, infer_workspace_name, short_id};

#[test]
fn canonicalize_or_current_resolves_dot_and_relative_paths() {
    let original = std::env::current_dir().expect("cwd");
    let tmp = tempdir().expect("tempdir");
    let subdir = tmp.path().join("nested");
    fs::create_dir_all(&subdir).expect("create nested");
    std::env::set_current_dir(tmp.path()).expect("chdir tmp");

    let dot = canonicalize_or_current(".").expect("canonicalize").canonicalize().expect("canon");
    assert_eq!(dot, tmp.path().canonicalize().expect("canon tmp"));

    let nested = canonicalize_or_current("nested").expect("canonicalize nested");
    assert_eq!(nested, subdir.canonicalize().expect("canonicalize subdir"));

    std::env::set_current_dir(original).expect("restore cwd");
}

#[test]
fn infer_workspace_name_uses_last_path_component() {
    assert_eq!(infer_workspace_name(Path::new("/tmp/furniture")), "furniture");
    assert_eq!(infer_workspace_name(Path::new("/")), "unnamed-workspace");
}

#[test]
fn short_id_truncates_long_ids_only() {
    assert_eq!(short_id("0123456789abcdef"), "01234567");
    assert_eq!(short_id("abc"), "abc");
}

#[test]
fn resolve_id_accepts_exact_and_unique_prefix() {
    let ids = ["abc123", "abd456", "abc"];
    assert_eq!(resolve_id("product", "abd", ids).unwrap(), "abd456");
    // Exact match wins even when it is also a prefix of another id.
    assert_eq!(resolve_id("product", "abc", ids).unwrap(), "abc");
}

#[test]
fn resolve_id_reports_missing_and_ambiguous() {
    let ids = ["abc123", "abd456"];
    let err = resolve_id("product", "zz", ids).unwrap_err();
    assert!(err.to_string().contains("No product matches"), "unexpected error: {err}");
    let err = resolve_id("product", "ab", ids).unwrap_err();
    assert!(err.to_string().contains("ambiguous"), "unexpected error: {err}");
    let err = resolve_id("material", " ", ids).unwrap_err();
    assert!(err.to_string().contains("material id is required"));
}
