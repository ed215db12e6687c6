//! Schema command handler.

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::path::PathBuf;

use crate::config::{generate_database_schema, generate_json_schema};

/// Which file format to describe
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SchemaKind {
    /// The YAML parts database
    #[default]
    Database,
    /// The `.partsy.yaml` config file
    Config,
}

/// Print (or write) the JSON schema of a file format
#[allow(clippy::needless_pass_by_value)]
pub fn run_schema(kind: SchemaKind, output: Option<PathBuf>) -> Result<()> {
    let schema = match kind {
        SchemaKind::Database => generate_database_schema(),
        SchemaKind::Config => generate_json_schema(),
    }
    .context("failed to serialize schema")?;

    match output {
        Some(path) => {
            std::fs::write(&path, &schema)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Schema written to {}", path.display());
        }
        None => println!("{schema}"),
    }
    Ok(())
}
