//! Configuration types for partsy operations.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::{DEFAULT_DATABASE_FILE, DEFAULT_QUANTITY};
use crate::parsers::InputFormat;
use crate::writers::OutputFormat;

// ============================================================================
// Application configuration (config file)
// ============================================================================

/// Settings that can be loaded from a config file. Command-line flags
/// override them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Parts database location
    pub database: DatabaseConfig,
    /// BOM input settings
    pub input: InputConfig,
    /// Order sheet settings
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the parts database file.
    pub fn database(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.database.path = path.into();
        self
    }

    /// Set the input format.
    pub const fn input_format(mut self, format: InputFormat) -> Self {
        self.config.input.format = format;
        self
    }

    /// Set the CSV delimiter of the BOM.
    pub const fn delimiter(mut self, delimiter: Option<char>) -> Self {
        self.config.input.delimiter = delimiter;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: OutputFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the quantity multiplier.
    pub const fn quantity(mut self, quantity: u32) -> Self {
        self.config.behavior.quantity = quantity;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

/// Parts database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Path of the YAML parts database
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATABASE_FILE),
        }
    }
}

/// BOM input settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Input format (auto detects from the header row)
    pub format: InputFormat,
    /// Field delimiter; sniffed from the header line when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<char>,
}

impl InputConfig {
    /// Delimiter as the byte the CSV reader expects. Only meaningful once
    /// validated.
    #[must_use]
    pub fn delimiter_byte(&self) -> Option<u8> {
        self.delimiter.and_then(|c| u8::try_from(c).ok())
    }
}

/// Order sheet settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Output format
    pub format: OutputFormat,
}

/// Behavior flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct BehaviorConfig {
    /// Number of boards to order for; multiplies every quantity
    pub quantity: u32,
    /// Suppress informational output
    pub quiet: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            quantity: DEFAULT_QUANTITY,
            quiet: false,
        }
    }
}

// ============================================================================
// Per-command configuration
// ============================================================================

/// Configuration for a lookup run
#[derive(Debug, Clone, PartialEq)]
pub struct LookupConfig {
    /// Input and output locations
    pub paths: LookupPaths,
    pub input: InputConfig,
    pub output: OutputConfig,
    pub behavior: BehaviorConfig,
}

/// Paths for a lookup run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupPaths {
    /// BOM file; stdin when unset
    pub input: Option<PathBuf>,
    /// Order sheet file; stdout when unset
    pub output: Option<PathBuf>,
    /// Parts database file
    pub database: PathBuf,
}

impl LookupConfig {
    /// Lookup settings from an application config and the run's I/O paths.
    #[must_use]
    pub fn from_app(app: &AppConfig, input: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        Self {
            paths: LookupPaths {
                input,
                output,
                database: app.database.path.clone(),
            },
            input: app.input.clone(),
            output: app.output.clone(),
            behavior: app.behavior.clone(),
        }
    }
}

/// Configuration for a database check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    /// Parts database file
    pub database: PathBuf,
    pub quiet: bool,
}
