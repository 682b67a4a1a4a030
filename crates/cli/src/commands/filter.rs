use anyhow::{Context, Result};

use extriage_core::filter::filter_load_errors;

use crate::commands::{load_groups, target_group};

/// Show the class-load failures that escaped the class-loading machinery.
pub fn filter_load_errors_command(input: &str, class: &str, json: bool) -> Result<()> {
    let groups = load_groups(input)?;
    let group = target_group(&groups, class, input)?;

    let kept = filter_load_errors(&group.records)
        .with_context(|| format!("Unexpected record shape in {input}"))?;

    if json {
        let serialized =
            serde_json::to_string_pretty(&kept).context("Failed to serialize kept records")?;
        println!("{}", serialized);
        return Ok(());
    }

    println!(
        "{}: {} of {} record(s) caught outside the class loader",
        class,
        kept.len(),
        group.records.len()
    );
    if kept.is_empty() {
        println!("  (all occurrences were benign loader probing)");
        return Ok(());
    }
    // Blank-line separators keep the printed records re-splittable with
    // the same delimiter the loader uses.
    for record in kept {
        println!();
        println!("{}", record.text);
    }

    Ok(())
}
