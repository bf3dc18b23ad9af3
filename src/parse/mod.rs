//! End-to-end parsing of .OnixExp archives.
//!
//! An .OnixExp file is a zip container holding a single text entry,
//! `RunData.txt`: a free-form preamble ending in a tab-separated
//! column-name line, one sample per line, then an acquisition-end marker
//! followed by a free-form footer. The whole entry is read into memory
//! before any parsing starts; there is no streaming.

pub mod decode;
pub mod sections;

pub use decode::{build_table, decode_row, verify_header};
pub use sections::{
    find_header_end, find_tail_start, split_sections, Sections, HEADER_PROMPT, TAIL_PROMPT,
};

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::info;
use zip::ZipArchive;

use crate::error::ParseError;
use crate::schema::{self, Schema};
use crate::table::Table;

/// Name of the one entry inside the archive worth reading.
pub const RUN_DATA_ENTRY: &str = "RunData.txt";

/// Parse the archive at `path` against the built-in run-data schema.
#[tracing::instrument(level = "info", skip(path), fields(path = %path.as_ref().display()))]
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Table, ParseError> {
    parse_file_with_schema(path, schema::run_data())
}

/// Parse the archive at `path` against a caller-provided schema.
pub fn parse_file_with_schema<P: AsRef<Path>>(
    path: P,
    schema: &Schema,
) -> Result<Table, ParseError> {
    let text = read_run_data(path.as_ref())?;
    let lines: Vec<&str> = text.lines().collect();
    parse_lines(&lines, schema)
}

/// Parse an already-read line stream.
///
/// This is the whole pipeline minus the archive I/O: locate the section
/// boundaries, check the column-name line against `schema`, decode the
/// body. Any failure aborts the parse; no partial table is returned.
pub fn parse_lines(lines: &[&str], schema: &Schema) -> Result<Table, ParseError> {
    let sections = sections::split_sections(lines)?;
    decode::verify_header(sections.header, schema)?;
    let table = decode::build_table(sections.body, schema, sections.header.len() + 1)?;
    info!(
        rows = table.num_rows(),
        columns = table.num_columns(),
        "decoded run data"
    );
    Ok(table)
}

/// Pull the text of `RunData.txt` out of the archive, scoped so the file
/// and entry handles are closed before parsing starts.
fn read_run_data(path: &Path) -> Result<String, ParseError> {
    let file = File::open(path).map_err(|source| ParseError::OpenArchive {
        path: path.to_path_buf(),
        source,
    })?;
    let mut archive = ZipArchive::new(file).map_err(|source| ParseError::ReadArchive {
        path: path.to_path_buf(),
        source,
    })?;
    let mut entry = archive
        .by_name(RUN_DATA_ENTRY)
        .map_err(|source| ParseError::ReadArchive {
            path: path.to_path_buf(),
            source,
        })?;
    let mut raw = Vec::with_capacity(entry.size() as usize);
    entry
        .read_to_end(&mut raw)
        .map_err(|source| ParseError::ReadEntry {
            entry: RUN_DATA_ENTRY.into(),
            source,
        })?;
    String::from_utf8(raw).map_err(|_| ParseError::Encoding {
        entry: RUN_DATA_ENTRY.into(),
    })
}
