//! Suppression of benign class-load failures.
//!
//! The JVM's class loaders throw `ClassNotFoundException` as part of
//! normal probing: a parent loader fails, the child catches it inside
//! `loadClass`/`findClass` and tries elsewhere. Those records are noise.
//! A `ClassNotFoundException` caught anywhere *else* means some piece of
//! application code actually hit a missing class, which is what the
//! operator is looking for.

use crate::model::{ExceptionRecord, RecordError};

/// Default class whose records get the benign-catch-site treatment.
pub const CLASS_NOT_FOUND: &str = "java.lang.ClassNotFoundException";

/// Annotation the agent puts on line 2 of every caught-exception record.
pub const CATCH_ANNOTATION: &str = "will be caught in: ";

/// Catch-site markers that identify the class-loading machinery.
///
/// The agent formats catch sites as `<class>#<method> : <signature>`, so
/// matching on `#loadClass :` / `#findClass :` pins the method name
/// exactly rather than any substring of the class or signature.
pub const BENIGN_CATCH_MARKERS: [&str; 2] = ["#loadClass :", "#findClass :"];

/// The catch-site line of a record (line index 2).
///
/// Shape violations are typed errors: a record that is too short or whose
/// third line lacks [`CATCH_ANNOTATION`] does not match the agent's
/// caught-exception format and must not be silently mis-filtered.
pub fn catch_line(record: &ExceptionRecord) -> Result<&str, RecordError> {
    let line = record.line(2).ok_or_else(|| RecordError::TooShort {
        index: record.index,
        found: record.text.lines().count(),
        snippet: record.snippet(),
    })?;

    if !line.contains(CATCH_ANNOTATION) {
        return Err(RecordError::MissingCatchAnnotation {
            index: record.index,
            snippet: record.snippet(),
        });
    }

    Ok(line)
}

/// Keep the class-load failures that are *not* caught by the class-loading
/// machinery itself, preserving input order.
pub fn filter_load_errors(
    records: &[ExceptionRecord],
) -> Result<Vec<&ExceptionRecord>, RecordError> {
    let mut kept = Vec::new();
    for record in records {
        let line = catch_line(record)?;
        if !BENIGN_CATCH_MARKERS.iter().any(|marker| line.contains(marker)) {
            kept.push(record);
        }
    }
    Ok(kept)
}
