//! CLI command handlers.
//!
//! Testable handlers invoked by main.rs, one per subcommand. Handlers
//! return the process exit code; errors bubble up as `anyhow` errors.

mod check;
mod config;
mod lookup;
mod schema;

pub use check::run_check;
pub use config::{run_config_init, run_config_path, run_config_show};
pub use lookup::run_lookup;
pub use schema::{run_schema, SchemaKind};

// Re-export config types used by handlers
pub use crate::config::{CheckConfig, LookupConfig};
