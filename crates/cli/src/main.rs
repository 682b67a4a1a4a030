use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use extriage_core::filter::CLASS_NOT_FOUND;

/// Exception-log triage assistant CLI.
///
/// This CLI is a thin wrapper around `extriage-core` (exposed in code as
/// `extriage_core`). All substantive logic lives in the library so it can
/// be tested thoroughly and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "extriage",
    version,
    about = "Triage assistant for JVMTI native-agent exception logs",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the exception classes found in a log, with record counts.
    Classes {
        /// Path to the agent exception log (e.g., cx_exceptions_1234.log).
        #[arg(long)]
        input: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Split a log into one `all_exs_<class>.log` file per exception class.
    ///
    /// Existing report files are overwritten without prompting.
    Split {
        /// Path to the agent exception log.
        #[arg(long)]
        input: String,

        /// Directory to write report files into. Defaults to the current
        /// working directory.
        #[arg(long, default_value = ".")]
        out_dir: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show class-load failures that were NOT caught by the class-loading
    /// machinery itself.
    ///
    /// `ClassNotFoundException` records caught inside `#loadClass`/
    /// `#findClass` are normal loader probing and are dropped; everything
    /// else is a genuine missing class worth investigating.
    FilterLoadErrors {
        /// Path to the agent exception log.
        #[arg(long)]
        input: String,

        /// Exception class to filter. Defaults to the JVM's class-not-found
        /// exception.
        #[arg(long, default_value = CLASS_NOT_FOUND)]
        class: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Run the full pipeline: per-class reports, the filtered load-error
    /// report, and a JSON summary.
    Triage {
        /// Path to the agent exception log.
        #[arg(long)]
        input: String,

        /// Directory to write report files into. Defaults to the current
        /// working directory.
        #[arg(long, default_value = ".")]
        out_dir: String,

        /// Exception class to run the load-error filter on.
        #[arg(long, default_value = CLASS_NOT_FOUND)]
        class: String,

        /// Print the summary JSON to stdout as well.
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Skip writing triage_summary.json.
        #[arg(long, default_value_t = false)]
        no_summary: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Classes { input, json } => commands::classes_command(&input, json)?,
        Command::Split { input, out_dir, json } => {
            commands::split_command(&input, &out_dir, json)?
        }
        Command::FilterLoadErrors { input, class, json } => {
            commands::filter_load_errors_command(&input, &class, json)?
        }
        Command::Triage { input, out_dir, class, json, no_summary } => {
            commands::triage_command(&input, &out_dir, &class, json, no_summary)?
        }
    }

    Ok(())
}
