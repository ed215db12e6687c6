//! Unified error types for partsy.
//!
//! Every failure in a lookup run is deterministic: it follows from the
//! database, the BOM or the requested formats, never from a transient
//! condition. Nothing here is retried.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::pipeline::exit_codes;

/// Main error type for partsy operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PartsyError {
    /// The parts database is structurally invalid
    #[error("Invalid parts database{}: {source}", describe_path(.path.as_deref()))]
    DatabaseFormat {
        path: Option<PathBuf>,
        #[source]
        source: DatabaseFormatError,
    },

    /// A BOM row could not be turned into an item
    #[error(transparent)]
    RowFormat(#[from] RowFormatError),

    /// One or more items had no article in the database
    #[error(transparent)]
    Unmatched(#[from] UnmatchedItemError),

    /// An input or output format tag is not supported
    #[error(transparent)]
    UnknownFormat(#[from] UnknownFormatError),

    /// The BOM header matches no known input format
    #[error("Cannot determine input format from header [{}]", .header.join(", "))]
    UndetectedFormat { header: Vec<String> },

    /// Scaling a quantity by the run multiplier overflowed
    #[error("Quantity overflow on row {row}: {quantity} x {factor} does not fit in 32 bits")]
    QuantityOverflow { row: usize, quantity: u32, factor: u32 },

    /// Malformed CSV on input, or a CSV encoding failure on output
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The order sheet sink rejected a write
    #[error("Failed to write order sheet: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),
}

fn describe_path(path: Option<&Path>) -> String {
    path.map(|p| format!(" {}", p.display())).unwrap_or_default()
}

/// Structural problems found while loading the parts database.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DatabaseFormatError {
    #[error("YAML syntax error: {0}")]
    Syntax(String),

    #[error("article {article}: missing required field '{field}'")]
    MissingField { article: String, field: &'static str },

    #[error("article {article}: empty value in '{field}'")]
    EmptyValue { article: String, field: &'static str },

    #[error("article {article}: no match key (needs suppliers, keys, designations or pattern)")]
    NoMatchKey { article: String },

    #[error("article {article}: invalid designation pattern '{pattern}': {message}")]
    InvalidPattern {
        article: String,
        pattern: String,
        message: String,
    },

    #[error("key '{key}' is claimed by both article {first} and article {second}")]
    DuplicateKey {
        key: String,
        first: String,
        second: String,
    },
}

/// A BOM row that the selected reader could not parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Row {row} {fields:?}: {kind}")]
pub struct RowFormatError {
    /// 1-based record number in the input, header included
    pub row: usize,
    /// The offending row as read
    pub fields: Vec<String>,
    pub kind: RowErrorKind,
}

impl RowFormatError {
    pub fn new(row: usize, fields: &[String], kind: RowErrorKind) -> Self {
        Self {
            row,
            fields: fields.to_vec(),
            kind,
        }
    }
}

/// Specific row error kinds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RowErrorKind {
    #[error("expected {expected} fields, found {found}")]
    Arity { expected: usize, found: usize },

    #[error("invalid quantity '{0}'")]
    InvalidQuantity(String),

    #[error("empty designator list")]
    EmptyDesignators,

    #[error("invalid supplier reference '{0}' (expected supplier:code)")]
    InvalidSupplierRef(String),

    #[error("supplier '{0}' listed more than once")]
    DuplicateSupplier(String),
}

/// Whether a format tag selects a reader or a writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    Input,
    Output,
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input => write!(f, "input"),
            Self::Output => write!(f, "output"),
        }
    }
}

/// A format tag outside the closed set of supported formats.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} format '{tag}' (valid: {valid})")]
pub struct UnknownFormatError {
    pub kind: FormatKind,
    pub tag: String,
    pub valid: &'static str,
}

/// One BOM item that no article matched, as reported to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmatchedItem {
    pub row: usize,
    pub id: String,
    pub designators: String,
    pub package: String,
    pub designation: String,
    pub supplier_refs: Vec<String>,
}

impl fmt::Display for UnmatchedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {} (id {}): {} '{}' [{}]",
            self.row, self.id, self.designators, self.designation, self.package
        )?;
        if self.supplier_refs.is_empty() {
            write!(f, " no supplier references")
        } else {
            write!(f, " refs {}", self.supplier_refs.join(", "))
        }
    }
}

/// Every item of a run that failed to resolve.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct UnmatchedItemError {
    pub items: Vec<UnmatchedItem>,
}

impl fmt::Display for UnmatchedItemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} item(s) not found in the parts database:",
            self.items.len()
        )?;
        for item in &self.items {
            write!(f, "\n  {item}")?;
        }
        Ok(())
    }
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for partsy operations
pub type Result<T> = std::result::Result<T, PartsyError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl PartsyError {
    /// Create a database error, optionally tied to the file it came from
    pub fn database(path: Option<&Path>, source: DatabaseFormatError) -> Self {
        Self::DatabaseFormat {
            path: path.map(Path::to_path_buf),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Unmatched(_) => exit_codes::UNMATCHED_ITEMS,
            _ => exit_codes::ERROR,
        }
    }
}

impl From<std::io::Error> for PartsyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<DatabaseFormatError> for PartsyError {
    fn from(err: DatabaseFormatError) -> Self {
        Self::database(None, err)
    }
}
