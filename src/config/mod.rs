//! Configuration for partsy.
//!
//! Settings come from a YAML config file (discovered or given with
//! `--config`) and are overridden by command-line flags.
//!
//! # Configuration File
//!
//! Place a `.partsy.yaml` file in your project root or `~/.config/partsy/`:
//!
//! ```yaml
//! database:
//!   path: hardware/partsy.yaml
//! input:
//!   delimiter: ";"
//! output:
//!   format: csv
//! behavior:
//!   quantity: 10
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{DEFAULT_DATABASE_FILE, DEFAULT_QUANTITY};
pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError,
};
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, CheckConfig, DatabaseConfig, InputConfig,
    LookupConfig, LookupPaths, OutputConfig,
};
pub use validation::{ConfigError, Validatable};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.partsy.yaml` config files.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}

/// Generate a JSON Schema for the parts database file.
pub fn generate_database_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(crate::database::DatabaseDocument);
    serde_json::to_string_pretty(&schema)
}
