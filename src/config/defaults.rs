//! Default values for partsy settings.

/// Parts database looked up in the working directory when none is given.
pub const DEFAULT_DATABASE_FILE: &str = "partsy.yaml";

/// Quantity multiplier: one board.
pub const DEFAULT_QUANTITY: u32 = 1;

/// Config file names, in lookup order.
pub const CONFIG_FILE_NAMES: &[&str] = &[".partsy.yaml", ".partsy.yml", "partsy.config.yaml"];

/// Directory under the user config dir holding the global config file.
pub const CONFIG_DIR_NAME: &str = "partsy";
