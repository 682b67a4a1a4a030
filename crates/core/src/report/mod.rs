//! Per-class report files and the triage summary.
//!
//! Report writing is deliberately dumb: join a group's records back with
//! the blank-line delimiter and overwrite the target file. Running the
//! pipeline twice over the same input produces byte-identical files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::classify::ClassGroups;
use crate::loader::RECORD_DELIMITER;
use crate::model::ExceptionRecord;

/// Map a class name to a string safe to embed in a file name.
///
/// Class names normally only contain `[A-Za-z0-9.$_]`, but nothing stops
/// a hostile or corrupt log from carrying `/`, `\` or other path
/// characters in the `class=` field. Anything outside the allow-list
/// becomes `_` so the report always lands in the output directory.
pub fn safe_file_stem(class: &str) -> String {
    class
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | '$') { c } else { '_' })
        .collect()
}

/// File name for the full per-class report.
pub fn class_log_name(class: &str) -> String {
    format!("all_exs_{}.log", safe_file_stem(class))
}

/// File name for the filtered (unexpected-occurrences) report.
pub fn filtered_log_name(class: &str) -> String {
    format!("unexpected_exs_{}.log", safe_file_stem(class))
}

fn join_records<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a ExceptionRecord>,
{
    records
        .into_iter()
        .map(|r| r.text.as_str())
        .collect::<Vec<_>>()
        .join(RECORD_DELIMITER)
}

/// One report file written by [`write_class_logs`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrittenLog {
    pub class: String,
    pub path: PathBuf,
    pub records: usize,
}

/// Write one `all_exs_<class>.log` per group into `out_dir`, overwriting
/// existing files. Files are written in group (first-encounter) order.
pub fn write_class_logs(groups: &ClassGroups, out_dir: &Path) -> Result<Vec<WrittenLog>> {
    let mut written = Vec::with_capacity(groups.len());
    for group in groups.iter() {
        let path = out_dir.join(class_log_name(&group.name));
        fs::write(&path, join_records(&group.records))
            .with_context(|| format!("Failed to write class report: {}", path.display()))?;
        written.push(WrittenLog {
            class: group.name.clone(),
            path,
            records: group.records.len(),
        });
    }
    Ok(written)
}

/// Write the kept (unexpected) records of `class` into `out_dir`.
///
/// The file is written even when `records` is empty; an empty report is
/// the good-news outcome and its absence would be ambiguous.
pub fn write_filtered_log(
    class: &str,
    records: &[&ExceptionRecord],
    out_dir: &Path,
) -> Result<PathBuf> {
    let path = out_dir.join(filtered_log_name(class));
    fs::write(&path, join_records(records.iter().copied()))
        .with_context(|| format!("Failed to write filtered report: {}", path.display()))?;
    Ok(path)
}

/// Record count for one exception class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassCount {
    pub class: String,
    pub records: usize,
}

/// Outcome of the load-error filter over the target class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSummary {
    pub class: String,
    pub total: usize,
    pub kept: usize,
    pub dropped: usize,
}

/// Serializable summary of a full triage run.
///
/// `input_sha256` and `generated_at` are provided by the frontend so the
/// core stays free of hashing and clock concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageSummary {
    pub input: String,
    pub input_sha256: String,
    pub generated_at: String,
    pub total_records: usize,
    pub classes: Vec<ClassCount>,
    pub filter: FilterSummary,
}

impl TriageSummary {
    /// Per-class counts in group order.
    pub fn class_counts(groups: &ClassGroups) -> Vec<ClassCount> {
        groups
            .iter()
            .map(|g| ClassCount { class: g.name.clone(), records: g.records.len() })
            .collect()
    }
}

/// File name for the JSON summary of a triage run.
pub const SUMMARY_FILE_NAME: &str = "triage_summary.json";

/// Serialize the summary as pretty JSON into `out_dir`.
pub fn write_summary(summary: &TriageSummary, out_dir: &Path) -> Result<PathBuf> {
    let path = out_dir.join(SUMMARY_FILE_NAME);
    let json = serde_json::to_string_pretty(summary).context("Failed to serialize summary")?;
    fs::write(&path, json)
        .with_context(|| format!("Failed to write summary: {}", path.display()))?;
    Ok(path)
}
