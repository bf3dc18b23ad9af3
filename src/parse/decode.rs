//! Header validation and schema-driven row decoding.

use crate::error::ParseError;
use crate::schema::{ColumnType, Schema};
use crate::table::{Record, Table, Value};

/// Check the column-name line (the last header line) against `schema`.
///
/// The line is stripped of trailing whitespace and split on tabs; the
/// resulting names must equal the schema's names in order and count.
/// Decoding assumes a verified header and does not re-check names per row.
pub fn verify_header(header: &[&str], schema: &Schema) -> Result<(), ParseError> {
    let found: Vec<&str> = header
        .last()
        .map(|line| line.trim_end().split('\t').collect())
        .unwrap_or_default();
    if found != schema.names() {
        return Err(ParseError::SchemaMismatch {
            expected: schema.names().iter().map(|s| s.to_string()).collect(),
            found: found.iter().map(|s| s.to_string()).collect(),
        });
    }
    Ok(())
}

/// Decode one body line into a typed record.
///
/// `line_no` is the 1-based position of the line in the file, carried into
/// errors only.
pub fn decode_row(line: &str, schema: &Schema, line_no: usize) -> Result<Record, ParseError> {
    let fields: Vec<&str> = line.trim_end().split('\t').collect();
    if fields.len() != schema.len() {
        return Err(ParseError::FieldCount {
            line: line_no,
            expected: schema.len(),
            found: fields.len(),
        });
    }

    fields
        .iter()
        .zip(schema.columns())
        .map(|(field, column)| {
            let bad = || ParseError::BadValue {
                line: line_no,
                column: column.name.clone(),
                ty: column.ty,
                value: field.to_string(),
            };
            Ok(match column.ty {
                ColumnType::Integer => Value::Int(field.parse().map_err(|_| bad())?),
                ColumnType::Float => Value::Float(field.parse().map_err(|_| bad())?),
                ColumnType::Text => Value::Text(field.to_string()),
            })
        })
        .collect()
}

/// Decode every body line, in order, into a table.
///
/// `first_line_no` is the 1-based file position of the first body line.
/// Decoding is fail-fast: the first bad line aborts with no table.
pub fn build_table(
    body: &[&str],
    schema: &Schema,
    first_line_no: usize,
) -> Result<Table, ParseError> {
    let mut rows = Vec::with_capacity(body.len());
    for (i, line) in body.iter().enumerate() {
        rows.push(decode_row(line, schema, first_line_no + i)?);
    }
    Ok(Table::new(schema.columns().to_vec(), rows))
}
