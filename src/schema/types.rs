// src/schema/types.rs

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Scalar type a column's fields decode to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Integer,
    Float,
    Text,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Integer => write!(f, "integer"),
            ColumnType::Float => write!(f, "float"),
            ColumnType::Text => write!(f, "text"),
        }
    }
}

/// A single column definition: the name as it appears in the file's
/// column-name line, plus the type its fields decode to.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Column {
    pub name: String,
    pub ty: ColumnType,
}

impl Column {
    pub fn new(name: impl Into<String>, ty: ColumnType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Ordered column schema for one run-data table.
///
/// Order is significant and must match the file's column-name line exactly;
/// names are unique, enforced by the constructor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    /// Build a schema, rejecting duplicate column names.
    pub fn new(columns: Vec<Column>) -> Result<Self, ParseError> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(ParseError::DuplicateColumn {
                    name: column.name.clone(),
                });
            }
        }
        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column names in schema order.
    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_rejects_duplicate_names() {
        let err = Schema::new(vec![
            Column::new("TimeStamp", ColumnType::Integer),
            Column::new("TimeStamp", ColumnType::Float),
        ])
        .unwrap_err();
        assert!(matches!(err, ParseError::DuplicateColumn { name } if name == "TimeStamp"));
    }

    #[test]
    fn names_preserve_order() {
        let schema = Schema::new(vec![
            Column::new("a", ColumnType::Integer),
            Column::new("b", ColumnType::Text),
        ])
        .unwrap();
        assert_eq!(schema.names(), vec!["a", "b"]);
    }
}
