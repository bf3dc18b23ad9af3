pub mod types;

pub use types::{Column, ColumnType, Schema};

use once_cell::sync::Lazy;

/// Columns of a `RunData.txt` entry, in file order.
static RUN_DATA: Lazy<Schema> = Lazy::new(|| {
    use ColumnType::{Float, Integer, Text};
    Schema::new(vec![
        Column::new("TimeStamp", Integer), // seconds since run start
        Column::new("Step", Integer),
        Column::new("Repetition", Integer),
        Column::new("V1", Text), // well 1
        Column::new("V2", Text), // well 2
        Column::new("V3", Text),
        Column::new("V4", Text),
        Column::new("V5", Text),
        Column::new("V6", Text),
        Column::new("V7", Text),
        Column::new("V8", Text),
        Column::new("X", Float), // pressure
        Column::new("Y", Float),
        Column::new("Temperature", Float),
        Column::new("Gas", Text),
        Column::new("Flags0", Text),
        Column::new("Flags1", Text),
        Column::new("Flags2", Text),
        Column::new("Discrete_Input", Integer),
        Column::new("StatusRegister", Integer),
        Column::new("RunState", Integer),
    ])
    .expect("built-in run-data columns should have unique names")
});

/// The built-in schema a `RunData.txt` entry is decoded against.
pub fn run_data() -> &'static Schema {
    &RUN_DATA
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_data_schema_shape() {
        let schema = run_data();
        assert_eq!(schema.len(), 21);
        assert_eq!(schema.columns()[0].name, "TimeStamp");
        assert_eq!(schema.columns()[0].ty, ColumnType::Integer);
        assert_eq!(schema.columns()[11].name, "X");
        assert_eq!(schema.columns()[11].ty, ColumnType::Float);
        assert_eq!(schema.columns()[20].name, "RunState");
    }
}
