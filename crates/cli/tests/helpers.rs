use std::fs;

use extriage::{canonicalize_or_current, sha256_file};
use tempfile::tempdir;

#[test]
fn canonicalize_or_current_resolves_existing_absolute_path() {
    let tmp = tempdir().expect("tempdir");
    let subdir = tmp.path().join("nested");
    fs::create_dir_all(&subdir).expect("create nested");

    let result = canonicalize_or_current(subdir.to_str().expect("utf8 path"))
        .expect("canonicalize nested");
    assert_eq!(result, subdir.canonicalize().expect("canonicalize subdir"));
}

#[test]
fn canonicalize_or_current_joins_missing_path_with_cwd() {
    let cwd = std::env::current_dir().expect("cwd");
    let result = canonicalize_or_current("does-not-exist-yet").expect("canonicalize");
    assert_eq!(result, cwd.join("does-not-exist-yet"));
}

#[test]
fn canonicalize_or_current_returns_cwd_for_dot() {
    let cwd = std::env::current_dir().expect("cwd");
    let result = canonicalize_or_current(".").expect("canonicalize dot");
    assert_eq!(result, cwd);
}

#[test]
fn sha256_file_hashes_file_contents() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("cx_exceptions_1.log");
    fs::write(&path, "abc").expect("write");

    let digest = sha256_file(&path).expect("hash");
    assert_eq!(digest, "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
}

#[test]
fn sha256_file_fails_for_missing_file() {
    let tmp = tempdir().expect("tempdir");
    let err = sha256_file(&tmp.path().join("missing.log")).expect_err("missing file");
    assert!(err.to_string().contains("Failed to open log for hashing"));
}
