use std::fs;
use std::path::{Path, PathBuf};

use predicates::prelude::*;
use tempfile::tempdir;

/// Agent log with two ClassNotFoundException records (one benign, one
/// caught outside the loader) and one IOException record.
const SAMPLE_LOG: &str = concat!(
    "[i] cx native agent: callback_on_Exception - 11 - class=java/lang/ClassNotFoundException;msg=com.example.Missing - 0x1A2B\n",
    "\t- thread 11\n",
    "\t- will be caught in: Lcom/example/Loader;#loadClass : (Ljava/lang/String;)Ljava/lang/Class; 42\n",
    "java.lang.ClassNotFoundException: com.example.Missing\n",
    "\n",
    "[i] cx native agent: callback_on_Exception - 11 - class=java/lang/ClassNotFoundException;msg=com.example.Gone - 0x2B3C\n",
    "\t- thread 11\n",
    "\t- will be caught in: Lcom/example/Plugins;#activate : ()V 7\n",
    "java.lang.ClassNotFoundException: com.example.Gone\n",
    "\n",
    "[i] cx native agent: callback_on_Exception - 12 - class=java/io/IOException;msg=disk - 0x3C4D\n",
    "\t- thread 12\n",
    "\t- will be caught in: Lcom/example/Io;#read : ()V 9\n",
    "java.io.IOException: disk\n",
);

fn write_sample_log(dir: &Path) -> PathBuf {
    let path = dir.join("cx_exceptions_1234.log");
    fs::write(&path, SAMPLE_LOG).expect("write sample log");
    path
}

/// Running the CLI with no subcommand should print usage and fail.
#[test]
fn bare_invocation_fails_with_usage() {
    assert_cmd::cargo::cargo_bin_cmd!("extriage").assert().failure();
}

#[test]
fn classes_lists_counts_in_encounter_order() {
    let dir = tempdir().expect("tempdir");
    let log = write_sample_log(dir.path());

    assert_cmd::cargo::cargo_bin_cmd!("extriage")
        .arg("classes")
        .arg("--input")
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("Classes (2), 3 records:"))
        .stdout(predicate::str::contains("java.lang.ClassNotFoundException (2)"))
        .stdout(predicate::str::contains("java.io.IOException (1)"));
}

#[test]
fn classes_json_emits_parseable_counts() {
    let dir = tempdir().expect("tempdir");
    let log = write_sample_log(dir.path());

    let output = assert_cmd::cargo::cargo_bin_cmd!("extriage")
        .arg("classes")
        .arg("--input")
        .arg(&log)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let counts: serde_json::Value =
        serde_json::from_slice(&output).expect("classes --json should emit valid JSON");
    assert_eq!(counts[0]["class"], "java.lang.ClassNotFoundException");
    assert_eq!(counts[0]["records"], 2);
    assert_eq!(counts[1]["class"], "java.io.IOException");
}

#[test]
fn split_writes_one_report_per_class() {
    let dir = tempdir().expect("tempdir");
    let log = write_sample_log(dir.path());
    let out = dir.path().join("reports");
    fs::create_dir_all(&out).expect("create out dir");

    assert_cmd::cargo::cargo_bin_cmd!("extriage")
        .arg("split")
        .arg("--input")
        .arg(&log)
        .arg("--out-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 2 class report(s)"));

    let cnfe = out.join("all_exs_java.lang.ClassNotFoundException.log");
    let io = out.join("all_exs_java.io.IOException.log");
    assert!(cnfe.exists(), "CNFE report should exist at {}", cnfe.display());
    assert!(io.exists(), "IOException report should exist at {}", io.display());

    let cnfe_body = fs::read_to_string(&cnfe).expect("read CNFE report");
    assert!(cnfe_body.contains("com.example.Missing"));
    assert!(cnfe_body.contains("com.example.Gone"));
    assert!(!cnfe_body.contains("IOException"));
}

#[test]
fn split_json_emits_the_written_reports() {
    let dir = tempdir().expect("tempdir");
    let log = write_sample_log(dir.path());
    let out = dir.path().join("reports");
    fs::create_dir_all(&out).expect("create out dir");

    let output = assert_cmd::cargo::cargo_bin_cmd!("extriage")
        .arg("split")
        .arg("--input")
        .arg(&log)
        .arg("--out-dir")
        .arg(&out)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value =
        serde_json::from_slice(&output).expect("split --json should emit valid JSON");
    assert_eq!(report["reports"][0]["class"], "java.lang.ClassNotFoundException");
    assert_eq!(report["reports"][0]["records"], 2);
    assert_eq!(report["reports"][1]["class"], "java.io.IOException");
    assert!(report["out_dir"].as_str().expect("out_dir").ends_with("reports"));
}

/// A Windows-produced log (CRLF line endings) must classify and filter
/// the same as its LF twin instead of collapsing into one record.
#[test]
fn classes_handles_crlf_logs() {
    let dir = tempdir().expect("tempdir");
    let log = dir.path().join("cx_exceptions_77.log");
    fs::write(&log, SAMPLE_LOG.replace('\n', "\r\n")).expect("write CRLF log");

    assert_cmd::cargo::cargo_bin_cmd!("extriage")
        .arg("classes")
        .arg("--input")
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("Classes (2), 3 records:"));
}

#[test]
fn filter_load_errors_keeps_only_unexpected_records() {
    let dir = tempdir().expect("tempdir");
    let log = write_sample_log(dir.path());

    assert_cmd::cargo::cargo_bin_cmd!("extriage")
        .arg("filter-load-errors")
        .arg("--input")
        .arg(&log)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 2 record(s)"))
        .stdout(predicate::str::contains("com.example.Gone"))
        .stdout(predicate::str::contains("com.example.Missing").not());
}

#[test]
fn filter_load_errors_accepts_an_explicit_class() {
    let dir = tempdir().expect("tempdir");
    let log = write_sample_log(dir.path());

    // IOException records are caught in #read, which is not loader
    // machinery, so every record is kept.
    assert_cmd::cargo::cargo_bin_cmd!("extriage")
        .arg("filter-load-errors")
        .arg("--input")
        .arg(&log)
        .arg("--class")
        .arg("java.io.IOException")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 1 record(s)"));
}

#[test]
fn filter_load_errors_json_emits_record_array() {
    let dir = tempdir().expect("tempdir");
    let log = write_sample_log(dir.path());

    let output = assert_cmd::cargo::cargo_bin_cmd!("extriage")
        .arg("filter-load-errors")
        .arg("--input")
        .arg(&log)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let kept: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    let kept = kept.as_array().expect("array of records");
    assert_eq!(kept.len(), 1);
    assert!(kept[0]["text"].as_str().expect("text").contains("com.example.Gone"));
}
