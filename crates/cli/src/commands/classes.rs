use anyhow::{Context, Result};

use extriage_core::report::TriageSummary;

use crate::commands::load_groups;

/// List the exception classes found in a log, with record counts.
pub fn classes_command(input: &str, json: bool) -> Result<()> {
    let groups = load_groups(input)?;
    let counts = TriageSummary::class_counts(&groups);

    if json {
        let serialized =
            serde_json::to_string_pretty(&counts).context("Failed to serialize class counts")?;
        println!("{}", serialized);
    } else {
        println!("Classes ({}), {} records:", groups.len(), groups.total_records());
        if counts.is_empty() {
            println!("  (none)");
            return Ok(());
        }
        for count in counts {
            println!("  - {} ({})", count.class, count.records);
        }
    }

    Ok(())
}
