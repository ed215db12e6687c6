//! Input and output endpoints of a lookup run.

use anyhow::{Context, Result};
use std::io::{Read, Write};
use std::path::PathBuf;

/// Where the BOM comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Read from stdin
    Stdin,
    /// Read from a file
    File(PathBuf),
}

impl InputSource {
    /// Create input source from optional path; `-` means stdin
    pub fn from_option(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) if p.as_os_str() != "-" => Self::File(p),
            _ => Self::Stdin,
        }
    }

    /// Read the whole input
    pub fn read_to_string(&self) -> Result<String> {
        match self {
            Self::Stdin => {
                let mut content = String::new();
                std::io::stdin()
                    .read_to_string(&mut content)
                    .context("Failed to read BOM from stdin")?;
                Ok(content)
            }
            Self::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read BOM file: {}", path.display())),
        }
    }
}

/// Target for output - either stdout or a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write to stdout
    Stdout,
    /// Write to a file
    File(PathBuf),
}

impl OutputTarget {
    /// Create output target from optional path; `-` means stdout
    pub fn from_option(path: Option<PathBuf>) -> Self {
        match path {
            Some(p) if p.as_os_str() != "-" => Self::File(p),
            _ => Self::Stdout,
        }
    }
}

/// Write a finished order sheet to the target (stdout or file)
pub fn write_output(content: &[u8], target: &OutputTarget, quiet: bool) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(content)
                .and_then(|()| stdout.flush())
                .context("Failed to write order sheet to stdout")
        }
        OutputTarget::File(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            if !quiet {
                tracing::info!("Order sheet written to {}", path.display());
            }
            Ok(())
        }
    }
}
