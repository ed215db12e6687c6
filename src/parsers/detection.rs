//! Input format tags and header-signature detection.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{FormatKind, UnknownFormatError};

use super::kicad::KICAD_HEADER;

/// Supported BOM input formats
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Detect from the header row
    #[default]
    Auto,
    /// KiCad pcbnew BOM export
    #[value(name = "kicad")]
    KiCad,
}

impl InputFormat {
    /// Tags accepted by [`FromStr`]
    pub const VALID: &'static str = "auto, kicad";

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::KiCad => "kicad",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InputFormat {
    type Err = UnknownFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "kicad" => Ok(Self::KiCad),
            _ => Err(UnknownFormatError {
                kind: FormatKind::Input,
                tag: s.to_string(),
                valid: Self::VALID,
            }),
        }
    }
}

/// Identify the input format from a header row.
///
/// Cells are compared trimmed and case-insensitively against each format's
/// header signature; extra trailing cells are allowed.
#[must_use]
pub fn detect_input_format(header: &[String]) -> Option<InputFormat> {
    let detected = header_matches(header, KICAD_HEADER).then_some(InputFormat::KiCad);
    tracing::debug!("Header {:?} detected as {:?}", header, detected);
    detected
}

fn header_matches(header: &[String], signature: &[&str]) -> bool {
    header.len() >= signature.len()
        && header
            .iter()
            .zip(signature)
            .all(|(cell, expected)| cell.trim().eq_ignore_ascii_case(expected))
}

/// Pick the CSV delimiter from the header line: `;` when it has more
/// semicolons than commas, `,` otherwise.
#[must_use]
pub fn sniff_delimiter(header_line: &str) -> u8 {
    let semicolons = header_line.matches(';').count();
    let commas = header_line.matches(',').count();
    if semicolons > commas {
        b';'
    } else {
        b','
    }
}
