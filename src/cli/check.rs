//! Check command handler.
//!
//! Loads a parts database and reports what a lookup would rely on.

use anyhow::Result;
use std::fmt::Write as _;

use crate::config::CheckConfig;
use crate::database::Database;
use crate::pipeline::{exit_codes, write_output, OutputTarget};

/// Run the check command
#[allow(clippy::needless_pass_by_value)]
pub fn run_check(config: CheckConfig) -> Result<i32> {
    let database = Database::from_path(&config.database)?;
    let report = check_report(&database, &config);
    write_output(report.as_bytes(), &OutputTarget::Stdout, config.quiet)?;
    Ok(exit_codes::SUCCESS)
}

fn check_report(database: &Database, config: &CheckConfig) -> String {
    let mut report = format!(
        "{}: {} articles ({} ignored)\n",
        config.database.display(),
        database.len(),
        database.ignored_count()
    );

    let shared = database.shared_designations();
    if !shared.is_empty() && !config.quiet {
        let _ = writeln!(
            report,
            "{} designation(s) shared by several articles; the first listed wins:",
            shared.len()
        );
        for (designation, articles) in &shared {
            let labels: Vec<String> = articles.iter().map(|a| a.label()).collect();
            let _ = writeln!(report, "  '{designation}': {}", labels.join(", "));
        }
    }
    report
}
