//! Loading an agent log and splitting it into exception records.
//!
//! The agent terminates every record with a blank line, so the delimiter
//! between two records is two consecutive newlines. Splitting is kept as
//! a pure function over the file content so it can be tested without
//! touching the filesystem.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::ExceptionRecord;

/// Delimiter between two records in the agent log.
pub const RECORD_DELIMITER: &str = "\n\n";

/// Split log content into trimmed, non-empty exception records.
///
/// Logs written on Windows carry CRLF line endings, so `\r\n` is
/// normalized to `\n` first; the blank-line delimiter and downstream
/// line-index lookups then behave the same for either convention.
/// Candidates that are empty after trimming (runs of blank lines, trailing
/// whitespace at EOF) are discarded. Indices count surviving records in
/// source order.
pub fn split_records(content: &str) -> Vec<ExceptionRecord> {
    let content = content.replace("\r\n", "\n");
    content
        .split(RECORD_DELIMITER)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .enumerate()
        .map(|(index, block)| ExceptionRecord::new(index, block))
        .collect()
}

/// Read an agent log from disk and split it into records.
///
/// A missing or unreadable file is a hard error; there is nothing useful
/// to salvage from a log we cannot read.
pub fn load_records(path: &Path) -> Result<Vec<ExceptionRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read exception log: {}", path.display()))?;
    Ok(split_records(&content))
}
