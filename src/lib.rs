//! **Turn a KiCad bill of materials into a supplier order sheet.**
//!
//! `partsy` matches every line of a BOM export against a local YAML parts
//! database and writes the order code of each matched article, with the
//! scaled quantity, in a format a supplier's bulk-order form accepts.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`Item`] (one BOM line) and [`Article`] (one database
//!   record).
//! - **[`parsers`]**: splits delimited input into rows and turns rows into
//!   items through a [`BomReader`] per input format.
//! - **[`database`]**: loads and validates the parts database and implements
//!   [`ArticleMatcher`]: supplier references first, then designation.
//! - **[`writers`]**: one [`OrderWriter`] per output format.
//! - **[`pipeline`]**: Ingest, Resolve, Emit. Ignored articles are dropped,
//!   unmatched items abort the run before anything is written.
//!
//! ## Example
//!
//! ```
//! use partsy::database::Database;
//! use partsy::parsers::{parse_bom_str, InputFormat};
//! use partsy::pipeline::build_order;
//! use partsy::writers::OutputFormat;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let database = Database::from_yaml(
//!         "articles:\n  - order_code: ORD-1\n    suppliers:\n      Farnell: \"123-456\"\n",
//!     )?;
//!     let bom = parse_bom_str(
//!         "Id;Designator;Package;Quantity;Designation;Supplier and ref\n\
//!          1;R1,R2;0805;2;10k resistor;Farnell:123-456\n",
//!         None,
//!     )?;
//!
//!     let order = build_order(&database, &bom, InputFormat::Auto, OutputFormat::Farnell, 3)?;
//!     assert_eq!(String::from_utf8(order.sheet)?, "ORD-1,6,\"R1,R2\",10k resistor\n");
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod matching;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod writers;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError, LookupConfig, Validatable};
pub use database::Database;
pub use error::{
    DatabaseFormatError, PartsyError, Result, RowFormatError, UnknownFormatError,
    UnmatchedItemError,
};
pub use matching::{ArticleMatcher, MatchResult, MatchTier};
pub use model::{Article, Item};
pub use parsers::{BomReader, InputFormat};
pub use pipeline::{build_order, Order};
pub use writers::{OrderWriter, OutputFormat};
