use anyhow::{Context, Result};
use serde::Serialize;

use extriage_core::report::{write_class_logs, WrittenLog};

use crate::commands::{load_groups, resolve_out_dir};

/// JSON payload emitted by `split --json`.
#[derive(Debug, Serialize)]
struct SplitReport {
    input: String,
    out_dir: String,
    reports: Vec<WrittenLog>,
}

/// Write one `all_exs_<class>.log` report per exception class.
pub fn split_command(input: &str, out_dir: &str, json: bool) -> Result<()> {
    let groups = load_groups(input)?;
    let dir = resolve_out_dir(out_dir)?;

    let written = write_class_logs(&groups, &dir)?;

    if json {
        let report = SplitReport {
            input: input.to_string(),
            out_dir: dir.display().to_string(),
            reports: written,
        };
        let serialized =
            serde_json::to_string_pretty(&report).context("Failed to serialize split report")?;
        println!("{}", serialized);
        return Ok(());
    }

    println!("Wrote {} class report(s) to {}:", written.len(), dir.display());
    for log in written {
        println!("  - {} ({} records) -> {}", log.class, log.records, log.path.display());
    }

    Ok(())
}
