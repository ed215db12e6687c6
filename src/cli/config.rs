//! Config command handlers.

use anyhow::{bail, Context, Result};
use std::path::Path;

use crate::config::{discover_config_file, generate_example_config, load_or_default};

/// Print the effective configuration (defaults merged with the config file)
pub fn run_config_show(explicit: Option<&Path>) -> Result<()> {
    let (config, loaded_from) = load_or_default(explicit)?;
    match &loaded_from {
        Some(path) => eprintln!("# Loaded from: {}", path.display()),
        None => eprintln!("# No config file found; showing defaults"),
    }
    let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
    print!("{yaml}");
    Ok(())
}

/// Print the config search locations and the active file
pub fn run_config_path(explicit: Option<&Path>) -> Result<()> {
    if let Some(path) = explicit {
        eprintln!("Config file given on the command line: {}", path.display());
        return Ok(());
    }

    eprintln!("Config file search paths (in order):");
    let search_paths = [
        std::env::current_dir().ok(),
        dirs::config_dir().map(|p| p.join("partsy")),
    ];
    for path in search_paths.into_iter().flatten() {
        eprintln!("  {}", path.display());
    }
    eprintln!();
    match discover_config_file() {
        Some(path) => eprintln!("Active config file: {}", path.display()),
        None => eprintln!("No config file found."),
    }
    Ok(())
}

/// Write an example `.partsy.yaml` into `dir`
pub fn run_config_init(dir: &Path) -> Result<()> {
    let target = dir.join(".partsy.yaml");
    if target.exists() {
        bail!(
            "{} already exists. Remove it first to re-initialize.",
            target.display()
        );
    }
    std::fs::write(&target, generate_example_config())
        .with_context(|| format!("failed to write {}", target.display()))?;
    eprintln!("Created {}", target.display());
    Ok(())
}
