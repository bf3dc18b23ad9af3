//! Parser for .OnixExp instrument export archives.
//!
//! An .OnixExp file is a zip container with a single `RunData.txt` entry: a
//! tab-separated log of time-series sensor and actuator readings from an
//! eight-well pressure-control experiment, wrapped in a free-form header
//! and footer. This crate locates the section boundaries, validates the
//! column-name line against an expected schema, decodes every data line
//! into typed values, and derives two secondary views: the well-only subset
//! and the pressure-substituted table.
//!
//! ```no_run
//! use onixexp::{parse_file, substitute_pressure, well_subset};
//!
//! let table = parse_file("experiment.OnixExp")?;
//! let wells = well_subset(&table)?;
//! let pressures = substitute_pressure(&table)?;
//! # Ok::<(), onixexp::ParseError>(())
//! ```

pub mod error;
pub mod parse;
pub mod schema;
pub mod table;

pub use error::ParseError;
pub use parse::{parse_file, parse_file_with_schema, parse_lines, RUN_DATA_ENTRY};
pub use schema::{Column, ColumnType, Schema};
pub use table::views::{
    substitute_pressure, well_subset, PRESSURE_COLUMN, PRESSURE_MARK, WELL_COLUMNS,
};
pub use table::{Record, Table, Value};
