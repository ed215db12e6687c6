//! Configuration validation for partsy.

use super::types::{AppConfig, DatabaseConfig, InputConfig, LookupConfig};

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.database.validate());
        errors.extend(self.input.validate());
        errors
    }
}

impl Validatable for LookupConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.paths.database.as_os_str().is_empty() {
            errors.push(ConfigError::new("database.path", "must not be empty"));
        }
        errors.extend(self.input.validate());
        errors
    }
}

impl Validatable for DatabaseConfig {
    fn validate(&self) -> Vec<ConfigError> {
        if self.path.as_os_str().is_empty() {
            vec![ConfigError::new("database.path", "must not be empty")]
        } else {
            Vec::new()
        }
    }
}

impl Validatable for InputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(delimiter) = self.delimiter {
            if !delimiter.is_ascii() {
                errors.push(ConfigError::new(
                    "input.delimiter",
                    format!("'{delimiter}' is not a single-byte ASCII character"),
                ));
            } else if matches!(delimiter, '"' | '\n' | '\r') {
                errors.push(ConfigError::new(
                    "input.delimiter",
                    format!("{delimiter:?} cannot separate fields"),
                ));
            }
        }
        errors
    }
}
