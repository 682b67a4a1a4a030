//! Extracting exception class names and grouping records by class.

use std::collections::HashMap;

use crate::model::{ExceptionRecord, RecordError};

/// Token that introduces the class name on a record's first line.
const CLASS_TOKEN: &str = "class=";

/// Extract the fully-qualified exception class name from a record.
///
/// The name is the span between the first `class=` and the next `;`,
/// with the JVM's `/` package separators rewritten to `.`:
/// `class=java/lang/ClassNotFoundException;message=...` yields
/// `java.lang.ClassNotFoundException`.
pub fn class_name(record: &ExceptionRecord) -> Result<String, RecordError> {
    let start = record.text.find(CLASS_TOKEN).ok_or_else(|| RecordError::MissingClassToken {
        index: record.index,
        snippet: record.snippet(),
    })? + CLASS_TOKEN.len();

    let len = record.text[start..].find(';').ok_or_else(|| {
        RecordError::UnterminatedClassName { index: record.index, snippet: record.snippet() }
    })?;

    Ok(record.text[start..start + len].replace('/', "."))
}

/// Records of one exception class, in source order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ClassGroup {
    pub name: String,
    pub records: Vec<ExceptionRecord>,
}

/// Mapping from exception class to its records.
///
/// Groups are stored in first-encounter order so report output is
/// deterministic for a given input; a side index makes lookup by name
/// cheap. Built once by [`group_by_class`], never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct ClassGroups {
    groups: Vec<ClassGroup>,
    by_name: HashMap<String, usize>,
}

impl ClassGroups {
    /// Groups in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = &ClassGroup> {
        self.groups.iter()
    }

    /// Records of `name`, if any record of that class was seen.
    pub fn get(&self, name: &str) -> Option<&ClassGroup> {
        self.by_name.get(name).map(|&i| &self.groups[i])
    }

    /// Number of distinct classes.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total record count across all groups.
    pub fn total_records(&self) -> usize {
        self.groups.iter().map(|g| g.records.len()).sum()
    }

    fn push(&mut self, name: String, record: ExceptionRecord) {
        match self.by_name.get(&name) {
            Some(&i) => self.groups[i].records.push(record),
            None => {
                self.by_name.insert(name.clone(), self.groups.len());
                self.groups.push(ClassGroup { name, records: vec![record] });
            }
        }
    }
}

/// Partition records by exception class.
///
/// Every input record lands in exactly one group; a record whose class
/// name cannot be derived fails the whole grouping, since silently
/// dropping it would skew the counts the operator is triaging.
pub fn group_by_class(records: Vec<ExceptionRecord>) -> Result<ClassGroups, RecordError> {
    let mut groups = ClassGroups::default();
    for record in records {
        let name = class_name(&record)?;
        groups.push(name, record);
    }
    Ok(groups)
}
