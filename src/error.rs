//! The crate-wide error taxonomy.
//!
//! One typed enum covers every failure the parser can report: archive and
//! entry I/O, text encoding, the missing header terminator or tail marker,
//! sections out of order, schema mismatch, field-count and value-conversion
//! failures, and duplicate or missing columns. Variants carry the line
//! numbers, offending text, or expected-vs-found lists needed to explain the
//! failure. Parsing is fail-fast: the first error aborts the run.

use std::path::PathBuf;

use thiserror::Error;

use crate::schema::ColumnType;

/// Any failure raised while locating, validating, or decoding run data.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The archive file could not be opened.
    #[error("failed to open archive {path}")]
    OpenArchive {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The archive could not be read as a zip, or the run-data entry was
    /// absent.
    #[error("failed to read archive {path}")]
    ReadArchive {
        path: PathBuf,
        source: zip::result::ZipError,
    },

    /// The run-data entry could not be read out of the archive.
    #[error("failed to read entry {entry}")]
    ReadEntry {
        entry: String,
        source: std::io::Error,
    },

    /// The run-data entry was not valid UTF-8.
    #[error("entry {entry} is not valid UTF-8")]
    Encoding { entry: String },

    /// No header terminator (column-name line) was found.
    #[error("no header terminator starting with {prompt:?} was found")]
    MissingHeader { prompt: String },

    /// No tail marker was found; the stream is presumed truncated.
    #[error("no tail marker starting with {prompt:?} was found")]
    MissingTail { prompt: String },

    /// The tail marker sits at or before the column-name line.
    #[error("tail marker at line {tail} is not after the header at line {header}")]
    TailBeforeHeader { header: usize, tail: usize },

    /// The column-name line did not match the expected schema.
    #[error("schema mismatch: expected {expected:?}, found {found:?}")]
    SchemaMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// A body line had the wrong number of tab-separated fields.
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A field could not be converted to its declared column type.
    #[error("line {line}: column {column} expected {ty}, found {value:?}")]
    BadValue {
        line: usize,
        column: String,
        ty: ColumnType,
        value: String,
    },

    /// Two columns shared a name.
    #[error("duplicate column name {name:?}")]
    DuplicateColumn { name: String },

    /// A requested column was not present in the table.
    #[error("no such column {name:?}")]
    MissingColumn { name: String },
}
