use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;

use extriage_core::filter::filter_load_errors;
use extriage_core::report::{
    write_class_logs, write_filtered_log, write_summary, FilterSummary, TriageSummary,
};

use crate::commands::{load_groups, resolve_out_dir, target_group};

/// Full pipeline: per-class reports, filtered load-error report, summary.
pub fn triage_command(
    input: &str,
    out_dir: &str,
    class: &str,
    json: bool,
    no_summary: bool,
) -> Result<()> {
    let groups = load_groups(input)?;
    let dir = resolve_out_dir(out_dir)?;

    // Per-class reports first, so they exist even if the filter then
    // rejects a malformed record.
    let written = write_class_logs(&groups, &dir)?;

    let group = target_group(&groups, class, input)?;
    let kept = filter_load_errors(&group.records)
        .with_context(|| format!("Unexpected record shape in {input}"))?;
    let filtered_path = write_filtered_log(class, &kept, &dir)?;

    let summary = TriageSummary {
        input: input.to_string(),
        input_sha256: extriage::sha256_file(Path::new(input))?,
        generated_at: Utc::now().to_rfc3339(),
        total_records: groups.total_records(),
        classes: TriageSummary::class_counts(&groups),
        filter: FilterSummary {
            class: class.to_string(),
            total: group.records.len(),
            kept: kept.len(),
            dropped: group.records.len() - kept.len(),
        },
    };

    let summary_path = if no_summary { None } else { Some(write_summary(&summary, &dir)?) };

    if json {
        let serialized =
            serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
        println!("{}", serialized);
        return Ok(());
    }

    println!("Triage of {}:", input);
    println!("  Records: {}", summary.total_records);
    println!("  Classes: {}", groups.len());
    for log in &written {
        println!("  - {} ({} records) -> {}", log.class, log.records, log.path.display());
    }
    println!(
        "  Filter [{}]: kept {} / dropped {} -> {}",
        summary.filter.class,
        summary.filter.kept,
        summary.filter.dropped,
        filtered_path.display()
    );
    if let Some(path) = summary_path {
        println!("  Summary: {}", path.display());
    }

    Ok(())
}
