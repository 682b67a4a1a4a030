use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};

use extriage_core::classify::{group_by_class, ClassGroup, ClassGroups};
use extriage_core::loader::load_records;

/// Load and group a log in one step; the shape every subcommand needs.
pub fn load_groups(input: &str) -> Result<ClassGroups> {
    let records = load_records(Path::new(input))?;
    let groups = group_by_class(records)
        .with_context(|| format!("Malformed record in {input}"))?;
    Ok(groups)
}

/// Group for the filter's target class.
///
/// A log with no record of the target class fails loudly rather than
/// quietly reporting zero unexpected occurrences, matching the original
/// workflow where the filter is only run on logs known to contain
/// class-load failures.
pub fn target_group<'a>(groups: &'a ClassGroups, class: &str, input: &str) -> Result<&'a ClassGroup> {
    groups
        .get(class)
        .ok_or_else(|| anyhow!("No records of class `{class}` found in {input}"))
}

/// Resolve the output directory, requiring that it already exists.
pub fn resolve_out_dir(out_dir: &str) -> Result<PathBuf> {
    let dir = extriage::canonicalize_or_current(out_dir)?;
    if !dir.is_dir() {
        return Err(anyhow!("Output directory does not exist: {}", dir.display()));
    }
    Ok(dir)
}
