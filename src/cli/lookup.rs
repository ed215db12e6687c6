//! Lookup command handler.
//!
//! Turns a BOM into an order sheet.

use anyhow::{bail, Context, Result};

use crate::config::{LookupConfig, Validatable};
use crate::database::Database;
use crate::error::PartsyError;
use crate::parsers::parse_bom_str;
use crate::pipeline::{build_order, exit_codes, write_output, InputSource, OutputTarget};

/// Run the lookup command
#[allow(clippy::needless_pass_by_value)]
pub fn run_lookup(config: LookupConfig) -> Result<i32> {
    let errors = config.validate();
    if !errors.is_empty() {
        let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!("Invalid configuration:\n  {}", details.join("\n  "));
    }
    let quiet = config.behavior.quiet;

    let database = Database::from_path(&config.paths.database)?;
    if !quiet {
        tracing::info!(
            "Loaded {} articles from {}",
            database.len(),
            config.paths.database.display()
        );
    }

    let source = InputSource::from_option(config.paths.input.clone());
    let content = source.read_to_string()?;
    let table = parse_bom_str(&content, config.input.delimiter_byte())
        .context("Failed to read BOM rows")?;

    let order = match build_order(
        &database,
        &table,
        config.input.format,
        config.output.format,
        config.behavior.quantity,
    ) {
        Ok(order) => order,
        Err(err @ PartsyError::Unmatched(_)) => {
            tracing::error!("{err}");
            return Ok(err.exit_code());
        }
        Err(err) => return Err(err.into()),
    };

    let target = OutputTarget::from_option(config.paths.output.clone());
    write_output(&order.sheet, &target, quiet)?;

    if !quiet {
        tracing::info!(
            "{} of {} items ordered as {} ({} ignored, {} ambiguous)",
            order.lines,
            order.items,
            order.output_format,
            order.ignored,
            order.ambiguous.len()
        );
    }
    Ok(exit_codes::SUCCESS)
}
