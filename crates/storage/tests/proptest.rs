//! Property-based tests for strata-storage using proptest.

use proptest::prelude::*;
use strata_core::schema::ColumnSchema;
use strata_core::{ColumnType, Error, Mixed, Result};
use strata_storage::Table;

fn scalar_mixed() -> impl Strategy<Value = Mixed> {
    prop_oneof![
        any::<i64>().prop_map(Mixed::Integer),
        any::<bool>().prop_map(Mixed::Boolean),
        ".{0,16}".prop_map(Mixed::String),
        prop::collection::vec(any::<u8>(), 0..32).prop_map(Mixed::Binary),
        any::<i64>().prop_map(Mixed::DateTime),
        any::<f64>().prop_map(Mixed::Double),
        any::<f32>().prop_map(Mixed::Float),
    ]
}

fn scalar_type() -> impl Strategy<Value = ColumnType> {
    prop::sample::select(ColumnType::SCALARS.to_vec())
}

/// Writes `value` through the typed setter matching its tag.
fn set_typed(table: &mut Table, column: usize, row: usize, value: &Mixed) -> Result<()> {
    match value {
        Mixed::Integer(v) => table.set_integer(column, row, *v),
        Mixed::Boolean(v) => table.set_boolean(column, row, *v),
        Mixed::String(v) => table.set_string(column, row, v.as_str()),
        Mixed::Binary(v) => table.set_binary(column, row, v.clone()),
        Mixed::DateTime(v) => table.set_datetime(column, row, *v),
        Mixed::Double(v) => table.set_double(column, row, *v),
        Mixed::Float(v) => table.set_float(column, row, *v),
        Mixed::Table => unreachable!("no typed setter for tables"),
    }
}

/// Default value of a freshly added row.
fn default_of(kind: ColumnType) -> Mixed {
    match kind {
        ColumnType::Integer => Mixed::Integer(0),
        ColumnType::Boolean => Mixed::Boolean(false),
        ColumnType::String => Mixed::from(""),
        ColumnType::Binary => Mixed::Binary(Vec::new()),
        ColumnType::DateTime => Mixed::DateTime(0),
        ColumnType::Double => Mixed::Double(0.0),
        ColumnType::Float => Mixed::Float(0.0),
        ColumnType::Mixed => Mixed::Integer(0),
        ColumnType::Table => Mixed::Table,
    }
}

/// Reads a cell through the typed getter for `kind`.
fn get_typed(table: &Table, column: usize, row: usize, kind: ColumnType) -> Result<Mixed> {
    Ok(match kind {
        ColumnType::Integer => Mixed::Integer(table.get_integer(column, row)?),
        ColumnType::Boolean => Mixed::Boolean(table.get_boolean(column, row)?),
        ColumnType::String => Mixed::from(table.get_string(column, row)?),
        ColumnType::Binary => Mixed::from(table.get_binary(column, row)?),
        ColumnType::DateTime => Mixed::DateTime(table.get_datetime(column, row)?),
        ColumnType::Double => Mixed::Double(table.get_double(column, row)?),
        ColumnType::Float => Mixed::Float(table.get_float(column, row)?),
        ColumnType::Mixed | ColumnType::Table => unreachable!("not a scalar kind"),
    })
}

proptest! {
    /// Test that a Mixed cell returns exactly the value stored into it.
    #[test]
    fn mixed_set_get_roundtrip(values in prop::collection::vec(scalar_mixed(), 1..50)) {
        let mut table = Table::new();
        table.add_column(ColumnType::Mixed, "mix").unwrap();
        table.add_empty_rows(values.len());
        for (row, value) in values.iter().enumerate() {
            table.set_mixed(0, row, value.clone()).unwrap();
        }
        for (row, value) in values.iter().enumerate() {
            prop_assert_eq!(&table.get_mixed(0, row).unwrap(), value);
            prop_assert_eq!(table.get_mixed_type(0, row).unwrap(), value.column_type());
        }
    }

    /// Test that no scalar held by a Mixed cell can be read as a subtable.
    #[test]
    fn mixed_scalar_never_yields_subtable(value in scalar_mixed()) {
        let mut table = Table::new();
        table.add_column(ColumnType::Mixed, "mix").unwrap();
        table.add_empty_row();
        table.set_mixed(0, 0, value.clone()).unwrap();
        prop_assert_eq!(
            table.get_subtable(0, 0).unwrap_err(),
            Error::type_mismatch(ColumnType::Table, value.column_type())
        );
    }

    /// Test that scalar columns reject subtable access whatever they contain.
    #[test]
    fn scalar_column_never_yields_subtable(kind in scalar_type(), rows in 1usize..20) {
        let mut table = Table::new();
        table.add_column(kind, "col").unwrap();
        table.add_empty_rows(rows);
        for row in 0..rows {
            prop_assert_eq!(
                table.get_subtable(0, row).unwrap_err(),
                Error::type_mismatch(ColumnType::Table, kind)
            );
        }
    }

    /// Test that any row past the end is out of range for subtable access.
    #[test]
    fn subtable_row_bounds(rows in 0usize..10, extra in 0usize..10, column in 0usize..3) {
        let mut table = Table::new();
        table.add_column(ColumnType::Integer, "num").unwrap();
        table.add_column(ColumnType::Mixed, "mix").unwrap();
        table.add_subtable_column("sub", ColumnSchema::new()).unwrap();
        table.add_empty_rows(rows);
        prop_assert!(table.get_subtable(column, rows + extra).unwrap_err().is_out_of_range());
        prop_assert!(table.get_subtable_size(column, rows + extra).unwrap_err().is_out_of_range());
    }

    /// Test that add_column indices increase from the existing column count.
    #[test]
    fn add_column_indices_increase(
        existing in prop::collection::vec(scalar_type(), 0..8),
        added in prop::collection::vec(scalar_type(), 1..8)
    ) {
        let mut schema = ColumnSchema::new();
        for kind in &existing {
            schema.add_column(*kind, "c");
        }
        let mut table = Table::with_schema(schema);
        for (i, kind) in added.iter().enumerate() {
            prop_assert_eq!(table.add_column(*kind, "n").unwrap(), existing.len() + i);
        }
    }

    /// Test that row count tracks add_empty_row and remove_last.
    #[test]
    fn row_count_tracks_adds_and_removes(ops in prop::collection::vec(any::<bool>(), 0..100)) {
        let mut table = Table::new();
        table.add_column(ColumnType::Mixed, "mix").unwrap();
        table.add_subtable_column("sub", ColumnSchema::new()).unwrap();
        let mut expected = 0usize;
        for add in ops {
            if add {
                prop_assert_eq!(table.add_empty_row(), expected);
                expected += 1;
            } else if expected == 0 {
                prop_assert_eq!(table.remove_last(), Err(Error::EmptyTable));
            } else {
                table.remove_last().unwrap();
                expected -= 1;
            }
            prop_assert_eq!(table.len(), expected);
        }
    }

    /// Test that every typed setter writes a value its getter reads back.
    #[test]
    fn typed_set_get_roundtrip(values in prop::collection::vec(scalar_mixed(), 1..20)) {
        let mut table = Table::new();
        for value in &values {
            table.add_column(value.column_type(), "col").unwrap();
        }
        table.add_empty_rows(2);
        for (column, value) in values.iter().enumerate() {
            set_typed(&mut table, column, 1, value).unwrap();
        }
        for (column, value) in values.iter().enumerate() {
            let kind = value.column_type();
            prop_assert_eq!(&get_typed(&table, column, 1, kind).unwrap(), value);
            prop_assert_eq!(
                get_typed(&table, column, 0, kind).unwrap(),
                default_of(kind)
            );
        }
    }

    /// Test that a setter of the wrong kind fails and leaves the cell as it was.
    #[test]
    fn typed_set_wrong_kind_leaves_cell(stored in scalar_mixed(), attempted in scalar_mixed()) {
        prop_assume!(stored.column_type() != attempted.column_type());
        let kind = stored.column_type();
        let mut table = Table::new();
        table.add_column(kind, "col").unwrap();
        table.add_empty_row();
        set_typed(&mut table, 0, 0, &stored).unwrap();

        prop_assert_eq!(
            set_typed(&mut table, 0, 0, &attempted).unwrap_err(),
            Error::type_mismatch(attempted.column_type(), kind)
        );
        prop_assert!(set_typed(&mut table, 0, 1, &stored).unwrap_err().is_out_of_range());
        prop_assert_eq!(get_typed(&table, 0, 0, kind).unwrap(), stored);
    }
}
