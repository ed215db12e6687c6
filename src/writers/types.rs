//! Output format tags.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{FormatKind, UnknownFormatError};

/// Supported order sheet formats
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Same as farnell
    #[default]
    Auto,
    /// Farnell bulk-order upload (headerless CSV)
    Farnell,
    /// Spreadsheet CSV with header, description and prices
    Csv,
}

impl OutputFormat {
    /// Tags accepted by [`FromStr`]
    pub const VALID: &'static str = "auto, farnell, csv";

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Farnell => "farnell",
            Self::Csv => "csv",
        }
    }

    /// The concrete format `auto` stands for.
    #[must_use]
    pub const fn resolve(self) -> Self {
        match self {
            Self::Auto => Self::Farnell,
            other => other,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = UnknownFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "farnell" => Ok(Self::Farnell),
            "csv" => Ok(Self::Csv),
            _ => Err(UnknownFormatError {
                kind: FormatKind::Output,
                tag: s.to_string(),
                valid: Self::VALID,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("Farnell".parse::<OutputFormat>(), Ok(OutputFormat::Farnell));
        assert_eq!(" csv ".parse::<OutputFormat>(), Ok(OutputFormat::Csv));
        let err = "mouser".parse::<OutputFormat>().unwrap_err();
        assert_eq!(err.kind, FormatKind::Output);
        assert_eq!(err.valid, OutputFormat::VALID);
    }

    #[test]
    fn test_auto_resolves_to_farnell() {
        assert_eq!(OutputFormat::Auto.resolve(), OutputFormat::Farnell);
        assert_eq!(OutputFormat::Csv.resolve(), OutputFormat::Csv);
    }

    #[test]
    fn test_display_matches_tag() {
        for format in [OutputFormat::Auto, OutputFormat::Farnell, OutputFormat::Csv] {
            assert_eq!(format.to_string().parse::<OutputFormat>(), Ok(format));
        }
    }
}
