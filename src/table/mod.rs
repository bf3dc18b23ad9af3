pub mod views;

use serde::Serialize;

use crate::error::ParseError;
use crate::schema::Column;

/// One decoded scalar field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric view of the value; integers widen to f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            Value::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }
}

/// One decoded data row, positionally aligned with the table's columns.
pub type Record = Vec<Value>;

/// Decoded run data: ordered columns plus one record per body line, in file
/// order.
///
/// A table is built once and never mutated; every transformation returns a
/// new table that owns its own storage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Record>,
}

impl Table {
    pub(crate) fn new(columns: Vec<Column>, rows: Vec<Record>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Position of `name` among the columns.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    fn require_column(&self, name: &str) -> Result<usize, ParseError> {
        self.column_index(name)
            .ok_or_else(|| ParseError::MissingColumn { name: name.into() })
    }

    /// All values of one column, top to bottom.
    pub fn column(&self, name: &str) -> Option<Vec<&Value>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|row| &row[idx]).collect())
    }

    /// New table holding only `names`, in the order given.
    pub fn project(&self, names: &[&str]) -> Result<Table, ParseError> {
        let indices = names
            .iter()
            .map(|name| self.require_column(name))
            .collect::<Result<Vec<_>, _>>()?;
        let columns = indices.iter().map(|&i| self.columns[i].clone()).collect();
        let rows = self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
            .collect();
        Ok(Table::new(columns, rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ColumnType;

    fn two_column_table() -> Table {
        Table::new(
            vec![
                Column::new("a", ColumnType::Integer),
                Column::new("b", ColumnType::Text),
            ],
            vec![
                vec![Value::Int(1), Value::Text("x".into())],
                vec![Value::Int(2), Value::Text("y".into())],
            ],
        )
    }

    #[test]
    fn column_lookup_and_values() {
        let table = two_column_table();
        assert_eq!(table.column_index("b"), Some(1));
        assert_eq!(table.column_index("c"), None);
        let b = table.column("b").unwrap();
        assert_eq!(b, vec![&Value::Text("x".into()), &Value::Text("y".into())]);
    }

    #[test]
    fn project_preserves_rows_and_errors_on_unknown() {
        let table = two_column_table();
        let projected = table.project(&["b"]).unwrap();
        assert_eq!(projected.num_columns(), 1);
        assert_eq!(projected.num_rows(), 2);
        assert_eq!(projected.rows()[0], vec![Value::Text("x".into())]);

        let err = table.project(&["nope"]).unwrap_err();
        assert!(matches!(err, ParseError::MissingColumn { name } if name == "nope"));
    }

    #[test]
    fn values_serialize_untagged() {
        let row = vec![Value::Int(3), Value::Float(12.5), Value::Text("N2".into())];
        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            r#"[3,12.5,"N2"]"#
        );
    }

    #[test]
    fn numeric_accessors_widen() {
        assert_eq!(Value::Int(3).as_f64(), Some(3.0));
        assert_eq!(Value::Float(2.5).as_f64(), Some(2.5));
        assert_eq!(Value::Text("X".into()).as_f64(), None);
        assert_eq!(Value::Text("X".into()).as_str(), Some("X"));
    }
}
